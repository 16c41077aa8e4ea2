use crate::scheduler::SchedError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Jour de la semaine (lundi en premier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// Ordre calendaire.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// Forme courte canonique (`MON`..`SUN`), utilisée en sortie.
    pub fn short(self) -> &'static str {
        match self {
            Day::Monday => "MON",
            Day::Tuesday => "TUE",
            Day::Wednesday => "WED",
            Day::Thursday => "THU",
            Day::Friday => "FRI",
            Day::Saturday => "SAT",
            Day::Sunday => "SUN",
        }
    }

    /// Les 6 autres jours, à partir du lendemain, en repassant par lundi
    /// après dimanche.
    pub fn rotation(self) -> impl Iterator<Item = Day> {
        let start = self.index();
        (1..Day::ALL.len()).map(move |offset| Day::ALL[(start + offset) % Day::ALL.len()])
    }
}

impl FromStr for Day {
    type Err = SchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Day::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(wanted) || d.short().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SchedError::InvalidDay(s.to_string()))
    }
}

impl TryFrom<String> for Day {
    type Error = SchedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Day> for String {
    fn from(day: Day) -> Self {
        day.short().to_string()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short())
    }
}

/// Poste de la journée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
}

impl Shift {
    /// Ordre de priorité quand plusieurs postes sont essayés à la suite.
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Afternoon, Shift::Evening];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Shift::Morning => "morning",
            Shift::Afternoon => "afternoon",
            Shift::Evening => "evening",
        }
    }
}

impl FromStr for Shift {
    type Err = SchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Shift::ALL
            .into_iter()
            .find(|shift| shift.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SchedError::InvalidShift(s.to_string()))
    }
}

impl TryFrom<String> for Shift {
    type Error = SchedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Shift> for String {
    fn from(shift: Shift) -> Self {
        shift.name().to_string()
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
