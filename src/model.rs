use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Membre d'équipe validé (snapshot en lecture seule pour une génération)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_center: Option<String>,
}

impl Employee {
    pub fn new<N: Into<String>, R: Into<String>>(name: N, role: R) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            project: None,
            cost_center: None,
        }
    }

    pub fn with_project<P: Into<String>>(mut self, project: P) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_cost_center<C: Into<String>>(mut self, cost_center: C) -> Self {
        self.cost_center = Some(cost_center.into());
        self
    }
}

/// Enregistrement brut tel que fourni par l'annuaire (non validé).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default, alias = "cost_center")]
    pub cost_center: Option<String>,
}

impl From<Employee> for EmployeeRecord {
    fn from(e: Employee) -> Self {
        Self {
            name: Some(e.name),
            role: Some(e.role),
            project: e.project,
            cost_center: e.cost_center,
        }
    }
}

/// Créneau de la rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShiftSlot {
    Morning,
    Afternoon,
    Evening,
    Night,
    Off,
}

impl ShiftSlot {
    /// Ordre canonique (et cycle par défaut).
    pub const ALL: [ShiftSlot; 5] = [
        ShiftSlot::Morning,
        ShiftSlot::Afternoon,
        ShiftSlot::Evening,
        ShiftSlot::Night,
        ShiftSlot::Off,
    ];

    pub const WORKING: [ShiftSlot; 4] = [
        ShiftSlot::Morning,
        ShiftSlot::Afternoon,
        ShiftSlot::Evening,
        ShiftSlot::Night,
    ];

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftSlot::Morning => "Morning",
            ShiftSlot::Afternoon => "Afternoon",
            ShiftSlot::Evening => "Evening",
            ShiftSlot::Night => "Night",
            ShiftSlot::Off => "Off",
        }
    }

    pub fn is_working(&self) -> bool {
        !matches!(self, ShiftSlot::Off)
    }
}

impl fmt::Display for ShiftSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(ShiftSlot::Morning),
            "afternoon" => Ok(ShiftSlot::Afternoon),
            "evening" => Ok(ShiftSlot::Evening),
            "night" => Ok(ShiftSlot::Night),
            "off" => Ok(ShiftSlot::Off),
            other => Err(format!("unknown shift slot: {other}")),
        }
    }
}

/// Jour visé par une contrainte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstraintDay {
    Weekday(Weekday),
    Date(NaiveDate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Requirement {
    DayOff,
    MustWork(ShiftSlot),
}

/// Directive structurée extraite du texte libre
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraint {
    pub employee_name: String,
    pub day: ConstraintDay,
    pub requirement: Requirement,
}

impl Constraint {
    pub fn day_off<N: Into<String>>(name: N, day: ConstraintDay) -> Self {
        Self {
            employee_name: name.into(),
            day,
            requirement: Requirement::DayOff,
        }
    }

    pub fn must_work<N: Into<String>>(name: N, day: ConstraintDay, slot: ShiftSlot) -> Self {
        Self {
            employee_name: name.into(),
            day,
            requirement: Requirement::MustWork(slot),
        }
    }

    /// Le jour `(date?, weekday)` du roster est-il concerné ?
    pub fn applies_to(&self, date: Option<NaiveDate>, weekday: Weekday) -> bool {
        match self.day {
            ConstraintDay::Weekday(w) => w == weekday,
            ConstraintDay::Date(d) => date == Some(d),
        }
    }

    pub fn targets(&self, employee: &Employee) -> bool {
        employee.name.eq_ignore_ascii_case(&self.employee_name)
    }
}

/// Affectations d'une journée, dans l'ordre d'entrée des employés
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAssignment {
    #[serde(rename = "Morning", default)]
    pub morning: Vec<Employee>,
    #[serde(rename = "Afternoon", default)]
    pub afternoon: Vec<Employee>,
    #[serde(rename = "Evening", default)]
    pub evening: Vec<Employee>,
    #[serde(rename = "Night", default)]
    pub night: Vec<Employee>,
    #[serde(rename = "Off", default)]
    pub off: Vec<Employee>,
}

impl DayAssignment {
    pub fn slot(&self, slot: ShiftSlot) -> &[Employee] {
        match slot {
            ShiftSlot::Morning => &self.morning,
            ShiftSlot::Afternoon => &self.afternoon,
            ShiftSlot::Evening => &self.evening,
            ShiftSlot::Night => &self.night,
            ShiftSlot::Off => &self.off,
        }
    }

    pub fn slot_mut(&mut self, slot: ShiftSlot) -> &mut Vec<Employee> {
        match slot {
            ShiftSlot::Morning => &mut self.morning,
            ShiftSlot::Afternoon => &mut self.afternoon,
            ShiftSlot::Evening => &mut self.evening,
            ShiftSlot::Night => &mut self.night,
            ShiftSlot::Off => &mut self.off,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShiftSlot, &[Employee])> + '_ {
        ShiftSlot::ALL.into_iter().map(move |s| (s, self.slot(s)))
    }

    /// Premier créneau contenant `name` (comparaison exacte).
    pub fn find(&self, name: &str) -> Option<ShiftSlot> {
        self.iter()
            .find(|(_, people)| people.iter().any(|e| e.name == name))
            .map(|(slot, _)| slot)
    }

    pub fn headcount(&self) -> usize {
        self.iter().map(|(_, people)| people.len()).sum()
    }
}

/// Une journée du roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterDay {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub weekday: Weekday,
    pub shifts: DayAssignment,
}

/// Roster complet : journées ordonnées (Day 1..Day N)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub days: Vec<RosterDay>,
}

impl Roster {
    pub fn day(&self, label: &str) -> Option<&RosterDay> {
        self.days.iter().find(|d| d.label == label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.days.iter().map(|d| d.label.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|d| d.shifts.headcount() == 0)
    }

    /// Créneaux `(jour, créneau)` de `name`, Off compris.
    pub fn shifts_for(&self, name: &str) -> Vec<(String, ShiftSlot)> {
        self.days
            .iter()
            .filter_map(|d| d.shifts.find(name).map(|slot| (d.label.clone(), slot)))
            .collect()
    }
}
