use crate::calendar::{Day, Shift};
use crate::model::{EmployeeName, PreferenceRecord, Slot};
use crate::scheduler::SchedError;
use std::collections::HashMap;
use tracing::warn;

/// Demande brute d'un employé, telle que vue par la validation : le jour de
/// chaque entrée lisible et le nombre total d'entrées, y compris celles
/// qui ne seront pas assignées.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub days: Vec<Day>,
    pub entries: usize,
}

#[derive(Debug, Clone)]
struct Entry {
    name: EmployeeName,
    slots: Vec<Slot>,
    request: Request,
}

/// Préférences de tous les employés, chargées une fois puis lues seulement.
///
/// L'ordre d'insertion est conservé : c'est l'ordre dans lequel le moteur
/// traite les employés.
#[derive(Debug, Clone, Default)]
pub struct PreferenceStore {
    entries: Vec<Entry>,
    index: HashMap<EmployeeName, usize>,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construit le store depuis les enregistrements de l'adaptateur d'entrée.
    ///
    /// Retourne aussi les erreurs rencontrées : un nom vide écarte
    /// l'enregistrement ; à partir d'un jour ou d'un poste invalide, les
    /// préférences de l'employé ne sont plus assignables, mais toutes les
    /// entrées restent comptées pour la validation.
    pub fn from_records<I>(records: I) -> (Self, Vec<SchedError>)
    where
        I: IntoIterator<Item = PreferenceRecord>,
    {
        let mut store = Self::new();
        let mut issues = Vec::new();

        for record in records {
            let name = match EmployeeName::new(&record.name) {
                Ok(name) => name,
                Err(err) => {
                    warn!(raw = %record.name, "{err}");
                    issues.push(err);
                    continue;
                }
            };

            let mut slots = Vec::with_capacity(record.preferences.len());
            let mut days = Vec::with_capacity(record.preferences.len());
            let mut abandoned = false;
            for raw in &record.preferences {
                let day = match raw.day.parse::<Day>() {
                    Ok(day) => day,
                    Err(err) => {
                        warn!(employee = %name, "{err}; remaining preferences abandoned");
                        issues.push(err);
                        abandoned = true;
                        continue;
                    }
                };
                days.push(day);
                match raw.time.parse::<Shift>() {
                    Ok(shift) if !abandoned => slots.push(Slot::new(day, shift)),
                    Ok(_) => {}
                    Err(err) => {
                        warn!(employee = %name, "{err}; remaining preferences abandoned");
                        issues.push(err);
                        abandoned = true;
                    }
                }
            }

            let request = Request {
                days,
                entries: record.preferences.len(),
            };
            store.insert_request(name, slots, request);
        }

        (store, issues)
    }

    /// Ajoute un employé ; un nom déjà présent voit ses préférences
    /// remplacées sans changer de position.
    pub fn insert(&mut self, name: EmployeeName, slots: Vec<Slot>) {
        let request = Request {
            days: slots.iter().map(|slot| slot.day).collect(),
            entries: slots.len(),
        };
        self.insert_request(name, slots, request);
    }

    fn insert_request(&mut self, name: EmployeeName, slots: Vec<Slot>, request: Request) {
        if let Some(&pos) = self.index.get(&name) {
            warn!(employee = %name, "duplicate employee, preferences replaced");
            let entry = &mut self.entries[pos];
            entry.slots = slots;
            entry.request = request;
        } else {
            self.index.insert(name.clone(), self.entries.len());
            self.entries.push(Entry {
                name,
                slots,
                request,
            });
        }
    }

    pub fn employees(&self) -> impl Iterator<Item = &EmployeeName> {
        self.entries.iter().map(|entry| &entry.name)
    }

    /// Préférences assignables, dans l'ordre fourni.
    pub fn iter(&self) -> impl Iterator<Item = (&EmployeeName, &[Slot])> {
        self.entries
            .iter()
            .map(|entry| (&entry.name, entry.slots.as_slice()))
    }

    /// Demandes complètes, pour la validation.
    pub fn requests(&self) -> impl Iterator<Item = (&EmployeeName, &Request)> {
        self.entries.iter().map(|entry| (&entry.name, &entry.request))
    }

    fn entry(&self, name: &EmployeeName) -> Option<&Entry> {
        self.index.get(name).map(|&pos| &self.entries[pos])
    }

    pub fn preferences(&self, name: &EmployeeName) -> Option<&[Slot]> {
        self.entry(name).map(|entry| entry.slots.as_slice())
    }

    pub fn request(&self, name: &EmployeeName) -> Option<&Request> {
        self.entry(name).map(|entry| &entry.request)
    }

    /// Nombre de jours demandés (= nombre d'entrées fournies).
    pub fn requested_days(&self, name: &EmployeeName) -> usize {
        self.request(name).map_or(0, |request| request.entries)
    }

    pub fn contains(&self, name: &EmployeeName) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
