use crate::io::{self, Format};
use crate::schedule::Schedule;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait Storage {
    /// Charge un planning depuis un support.
    fn load(&self) -> anyhow::Result<Schedule>;
    /// Sauvegarde de manière atomique.
    fn save(&self, schedule: &Schedule) -> anyhow::Result<()>;
}

/// Fichier de planning ; le format suit l'extension (YAML, JSON, CSV).
pub struct FileStorage {
    path: PathBuf,
    format: Format,
}

impl FileStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let format = Format::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn load(&self) -> anyhow::Result<Schedule> {
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        io::decode_schedule(self.format, &data)
            .with_context(|| format!("parsing {}", self.path.display()))
    }

    fn save(&self, schedule: &Schedule) -> anyhow::Result<()> {
        let body = io::encode_schedule(self.format, schedule)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(body.as_bytes())?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }
}
