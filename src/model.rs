use crate::calendar::{Day, Shift};
use crate::scheduler::SchedError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nom d'employé normalisé : insensible à la casse et aux espaces superflus.
///
/// `"  bob "`, `"BOB"` et `"Bob"` désignent le même employé, stocké sous la
/// forme `Bob` (chaque mot en capitale initiale).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmployeeName(String);

impl EmployeeName {
    pub fn new<S: AsRef<str>>(raw: S) -> Result<Self, SchedError> {
        let words: Vec<String> = raw.as_ref().split_whitespace().map(title_case).collect();
        if words.is_empty() {
            return Err(SchedError::EmptyName);
        }
        Ok(Self(words.join(" ")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

impl TryFrom<String> for EmployeeName {
    type Error = SchedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmployeeName> for String {
    fn from(name: EmployeeName) -> Self {
        name.0
    }
}

impl fmt::Display for EmployeeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Créneau : un poste un jour donné.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    pub day: Day,
    pub shift: Shift,
}

impl Slot {
    pub fn new(day: Day, shift: Shift) -> Self {
        Self { day, shift }
    }

    /// Construit un créneau à partir de libellés bruts (`"Mon"`, `"morning"`).
    pub fn parse(day: &str, shift: &str) -> Result<Self, SchedError> {
        Ok(Self::new(day.parse()?, shift.parse()?))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.shift)
    }
}

/// Préférence brute telle que lue dans un fichier ; jour et poste restent
/// des chaînes pour que chaque entrée invalide soit signalée à part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPreference {
    pub day: String,
    #[serde(alias = "shift")]
    pub time: String,
}

impl RawPreference {
    pub fn new<D: Into<String>, T: Into<String>>(day: D, time: T) -> Self {
        Self {
            day: day.into(),
            time: time.into(),
        }
    }
}

/// Préférences d'un employé, dans l'ordre fourni.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    pub name: String,
    #[serde(default)]
    pub preferences: Vec<RawPreference>,
}

/// Fichier de préférences complet (YAML ou JSON).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceFile {
    #[serde(default)]
    pub employees: Vec<PreferenceRecord>,
}
