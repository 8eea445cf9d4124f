//! Mise en forme : grille interne → contrat `jour → créneau → [employés]`.

use crate::config::GeneratorConfig;
use crate::model::{DayAssignment, Employee, Roster, RosterDay};
use crate::scheduler::SlotGrid;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Construit le roster : ordre des jours de la grille, ordre d'entrée dans chaque créneau.
pub fn format_roster(employees: &[Employee], grid: &SlotGrid, config: &GeneratorConfig) -> Roster {
    let days = grid
        .days
        .iter()
        .map(|plan| {
            let mut shifts = DayAssignment::default();
            for (employee, slot) in employees.iter().zip(plan.slots.iter()) {
                shifts.slot_mut(*slot).push(employee.clone());
            }
            RosterDay {
                label: config.day_label(plan.day),
                date: plan.date,
                weekday: plan.weekday,
                shifts,
            }
        })
        .collect();
    Roster { days }
}

/// Vue sérialisable du contrat externe (objet JSON ordonné par jour).
#[derive(Debug, Clone, Copy)]
pub struct ContractView<'a>(&'a Roster);

impl Roster {
    pub fn contract(&self) -> ContractView<'_> {
        ContractView(self)
    }
}

impl Serialize for ContractView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.days.len()))?;
        for day in &self.0.days {
            map.serialize_entry(&day.label, &day.shifts)?;
        }
        map.end()
    }
}
