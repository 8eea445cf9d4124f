use super::{types::DayPlan, RosterError, RosterStrategy, SlotGrid};
use crate::config::GeneratorConfig;
use crate::model::{Constraint, Employee, Requirement, ShiftSlot};

/// Rotation de référence : `(jour + position) % len(cycle)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RotationStrategy;

impl RosterStrategy for RotationStrategy {
    fn name(&self) -> &'static str {
        "rotation"
    }

    fn plan(
        &self,
        employees: &[Employee],
        constraints: &[Constraint],
        config: &GeneratorConfig,
    ) -> Result<SlotGrid, RosterError> {
        config.validate()?;
        let horizon = config.horizon_days as usize;

        let mut grid = SlotGrid {
            days: Vec::with_capacity(horizon),
        };
        for day in 1..=horizon {
            let (date, weekday) = config.day_anchor(day);
            let slots = (0..employees.len())
                .map(|position| rotation_slot(&config.cycle, day, position))
                .collect();
            grid.days.push(DayPlan {
                day,
                date,
                weekday,
                slots,
            });
        }

        apply_constraints(&mut grid, employees, constraints);
        Ok(grid)
    }
}

/// Créneau de la position `position` au jour `day` (1-indexé).
pub fn rotation_slot(cycle: &[ShiftSlot], day: usize, position: usize) -> ShiftSlot {
    if cycle.is_empty() {
        return ShiftSlot::Off;
    }
    cycle[(day + position) % cycle.len()]
}

/// Passe de surcharge : `MustWork` d'abord, puis `DayOff` (prioritaire).
/// Pas de réaffectation pour compenser un trou de couverture.
pub(super) fn apply_constraints(
    grid: &mut SlotGrid,
    employees: &[Employee],
    constraints: &[Constraint],
) {
    if constraints.is_empty() {
        return;
    }

    let must_work = constraints
        .iter()
        .filter(|c| matches!(c.requirement, Requirement::MustWork(_)));
    let day_off = constraints
        .iter()
        .filter(|c| c.requirement == Requirement::DayOff);

    for constraint in must_work.chain(day_off) {
        let forced = match constraint.requirement {
            Requirement::DayOff => ShiftSlot::Off,
            Requirement::MustWork(slot) => slot,
        };
        let mut hits = 0usize;
        for plan in grid
            .days
            .iter_mut()
            .filter(|p| constraint.applies_to(p.date, p.weekday))
        {
            for (position, employee) in employees.iter().enumerate() {
                if constraint.targets(employee) {
                    plan.slots[position] = forced;
                    hits += 1;
                }
            }
        }
        if hits == 0 {
            tracing::debug!(?constraint, "constraint matched no scheduled day");
        }
    }
}
