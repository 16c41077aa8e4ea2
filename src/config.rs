use crate::calendar::{Day, Shift};
use crate::scheduler::{AssignOptions, StaffingLimits};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration d'un run, lue depuis un fichier TOML.
///
/// ```toml
/// seed = 42
/// backfill = true
///
/// [limits]
/// max_work_days = 5
/// slot_cap = 2
/// min_staffing = 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub limits: StaffingLimits,
    pub backfill: bool,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        let opts = AssignOptions::default();
        Self {
            limits: opts.limits,
            backfill: opts.backfill,
            seed: opts.seed,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        let week = (Day::ALL.len() * Shift::ALL.len()) as u32;
        if self.limits.max_work_days == 0 {
            bail!("max_work_days must be > 0");
        }
        if self.limits.max_work_days > week {
            bail!("max_work_days cannot exceed {week} shifts per week");
        }
        if self.limits.slot_cap == 0 {
            bail!("slot_cap must be > 0");
        }
        Ok(())
    }

    pub fn options(&self) -> AssignOptions {
        AssignOptions {
            limits: self.limits,
            backfill: self.backfill,
            seed: self.seed,
        }
    }
}

pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: Config =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}
