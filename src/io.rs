use crate::model::{EmployeeName, PreferenceFile, PreferenceRecord, RawPreference, Slot};
use crate::schedule::Schedule;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Format de fichier, déduit de l'extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
    Csv,
}

impl Format {
    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml" | "yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            Some("csv") => Ok(Format::Csv),
            _ => bail!("unsupported file extension: {}", path.display()),
        }
    }
}

/// Import des préférences (YAML, JSON ou CSV selon l'extension).
pub fn import_preferences<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<PreferenceRecord>> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    decode_preferences(format, &data).with_context(|| format!("parsing {}", path.display()))
}

pub fn decode_preferences(format: Format, data: &str) -> anyhow::Result<Vec<PreferenceRecord>> {
    match format {
        Format::Yaml => Ok(serde_yaml::from_str::<PreferenceFile>(data)?.employees),
        Format::Json => Ok(serde_json::from_str::<PreferenceFile>(data)?.employees),
        Format::Csv => decode_preferences_csv(data),
    }
}

/// CSV: header `name,day,time`, une préférence par ligne.
///
/// Les lignes d'un même employé sont regroupées ; un nom vide est transmis
/// tel quel pour être signalé au chargement du store, comme en YAML/JSON.
fn decode_preferences_csv(data: &str) -> anyhow::Result<Vec<PreferenceRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());
    let mut out: Vec<PreferenceRecord> = Vec::new();
    let mut index: HashMap<EmployeeName, usize> = HashMap::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?;
        let day = rec.get(1).context("missing day")?;
        let time = rec.get(2).context("missing time")?;
        let pref = RawPreference::new(day, time);

        let key = EmployeeName::new(name).ok();
        let existing = key.as_ref().and_then(|k| index.get(k)).copied();
        match existing {
            Some(pos) => out[pos].preferences.push(pref),
            None => {
                if let Some(key) = key {
                    index.insert(key, out.len());
                }
                out.push(PreferenceRecord {
                    name: name.to_string(),
                    preferences: vec![pref],
                });
            }
        }
    }
    Ok(out)
}

/// Sérialise un planning dans le format demandé.
pub fn encode_schedule(format: Format, schedule: &Schedule) -> anyhow::Result<String> {
    match format {
        Format::Yaml => Ok(serde_yaml::to_string(schedule)?),
        Format::Json => Ok(serde_json::to_string_pretty(schedule)?),
        Format::Csv => encode_schedule_csv(schedule),
    }
}

/// CSV: header `name,day,shift`
fn encode_schedule_csv(schedule: &Schedule) -> anyhow::Result<String> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
    w.write_record(["name", "day", "shift"])?;
    for (name, slots) in schedule.iter() {
        for slot in slots {
            w.write_record([name.as_str(), slot.day.short(), slot.shift.name()])?;
        }
    }
    let bytes = w.into_inner().context("flushing csv writer")?;
    Ok(String::from_utf8(bytes)?)
}

pub fn decode_schedule(format: Format, data: &str) -> anyhow::Result<Schedule> {
    match format {
        Format::Yaml => Ok(serde_yaml::from_str(data)?),
        Format::Json => Ok(serde_json::from_str(data)?),
        Format::Csv => {
            let mut rdr = ReaderBuilder::new()
                .has_headers(true)
                .trim(csv::Trim::All)
                .from_reader(data.as_bytes());
            let mut rows = Vec::new();
            for rec in rdr.records() {
                let rec = rec?;
                let name = EmployeeName::new(rec.get(0).context("missing name")?)?;
                let slot = Slot::parse(
                    rec.get(1).context("missing day")?,
                    rec.get(2).context("missing shift")?,
                )?;
                rows.push((name, slot));
            }
            Ok(rows.into_iter().collect())
        }
    }
}
