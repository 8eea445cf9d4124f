use super::RosterError;
use crate::model::{Roster, ShiftSlot};
use chrono::{Datelike, NaiveDate, Weekday};

/// Effectif par créneau travaillé pour une journée.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCoverage {
    pub label: String,
    pub counts: [(ShiftSlot, usize); 4],
    pub off: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coverage {
    pub days: Vec<DayCoverage>,
}

impl Coverage {
    /// Créneaux `(jour, créneau)` dont l'effectif est sous `min`.
    pub fn understaffed(&self, min: usize) -> Vec<(String, ShiftSlot)> {
        self.days
            .iter()
            .flat_map(|d| {
                d.counts
                    .iter()
                    .filter(move |(_, n)| *n < min)
                    .map(move |(slot, _)| (d.label.clone(), *slot))
            })
            .collect()
    }
}

impl Roster {
    pub fn coverage(&self) -> Coverage {
        let days = self
            .days
            .iter()
            .map(|day| DayCoverage {
                label: day.label.clone(),
                counts: ShiftSlot::WORKING.map(|slot| (slot, day.shifts.slot(slot).len())),
                off: day.shifts.off.len(),
            })
            .collect();
        Coverage { days }
    }
}

/// Jours de `[start, end]` où `name` est affecté à un créneau travaillé.
///
/// Roster daté : comparaison par date. Sinon, par jour de semaine.
pub fn leave_conflicts(
    roster: &Roster,
    name: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<String>, RosterError> {
    if end < start {
        return Err(RosterError::InvalidLeaveWindow);
    }

    // au-delà d'une semaine, tous les jours de semaine sont couverts
    let span = (end - start).num_days().min(6) as usize;
    let weekdays: Vec<Weekday> = start.iter_days().take(span + 1).map(|d| d.weekday()).collect();

    let conflicts = roster
        .days
        .iter()
        .filter(|day| match day.date {
            Some(date) => start <= date && date <= end,
            None => weekdays.contains(&day.weekday),
        })
        .filter(|day| day.shifts.find(name).is_some_and(|slot| slot.is_working()))
        .map(|day| day.label.clone())
        .collect::<Vec<_>>();

    if !conflicts.is_empty() {
        tracing::warn!(name, ?conflicts, "leave overlaps rostered shifts");
    }
    Ok(conflicts)
}
