use super::RosterError;
use crate::model::{DayAssignment, Roster, ShiftSlot};

impl Roster {
    /// Échange les créneaux de `a` et `b` sur la journée `label`.
    ///
    /// Renvoie un nouveau roster ; `self` reste intact.
    pub fn with_swap(&self, label: &str, a: &str, b: &str) -> Result<Roster, RosterError> {
        if a == b {
            return Err(RosterError::SwapInvalid("cannot swap an employee with themselves"));
        }
        let pos = self
            .days
            .iter()
            .position(|d| d.label == label)
            .ok_or_else(|| RosterError::UnknownDay(label.to_string()))?;

        let shifts = &self.days[pos].shifts;
        let slot_a = shifts
            .find(a)
            .ok_or_else(|| RosterError::UnknownEmployee(a.to_string()))?;
        let slot_b = shifts
            .find(b)
            .ok_or_else(|| RosterError::UnknownEmployee(b.to_string()))?;
        if slot_a == slot_b {
            return Err(RosterError::SwapInvalid("both employees share the same slot"));
        }

        let mut next = self.clone();
        let day = &mut next.days[pos].shifts;
        move_employee(day, a, slot_a, slot_b);
        move_employee(day, b, slot_b, slot_a);

        tracing::info!(day = label, a, b, from = %slot_a, to = %slot_b, "shift swap applied");
        Ok(next)
    }
}

fn move_employee(day: &mut DayAssignment, name: &str, from: ShiftSlot, to: ShiftSlot) {
    let source = day.slot_mut(from);
    if let Some(idx) = source.iter().position(|e| e.name == name) {
        let employee = source.remove(idx);
        day.slot_mut(to).push(employee);
    }
}
