mod assignment;
mod conflicts;
mod mutate;
mod types;

pub use assignment::{rotation_slot, RotationStrategy};
pub use conflicts::{leave_conflicts, Coverage, DayCoverage};
pub use types::{DayPlan, ErrorKind, RecordError, RosterError, SlotGrid};

use crate::config::GeneratorConfig;
use crate::constraint::parse_constraints;
use crate::format::format_roster;
use crate::model::{Constraint, Employee, EmployeeRecord, Roster};

/// Stratégie d'affectation : produit une grille de créneaux, sans état.
pub trait RosterStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn plan(
        &self,
        employees: &[Employee],
        constraints: &[Constraint],
        config: &GeneratorConfig,
    ) -> Result<SlotGrid, RosterError>;
}

/// Scheduler : configuration + stratégie. Chaque appel est indépendant.
pub struct Scheduler {
    config: GeneratorConfig,
    strategy: Box<dyn RosterStrategy>,
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("config", &self.config)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl Scheduler {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            strategy: Box::new(RotationStrategy),
        }
    }

    pub fn with_strategy<S: RosterStrategy + 'static>(mut self, strategy: S) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Génère un roster neuf à partir d'un snapshot d'employés et du texte de contraintes.
    pub fn generate(&self, employees: &[Employee], constraints: &str) -> Result<Roster, RosterError> {
        let parsed = parse_constraints(constraints, employees);
        self.generate_with(employees, &parsed)
    }

    /// Variante avec contraintes déjà structurées.
    pub fn generate_with(
        &self,
        employees: &[Employee],
        constraints: &[Constraint],
    ) -> Result<Roster, RosterError> {
        self.config.validate()?;
        let grid = self.strategy.plan(employees, constraints, &self.config)?;
        check_grid(&grid, employees.len(), &self.config, self.strategy.name())?;
        tracing::info!(
            strategy = self.strategy.name(),
            employees = employees.len(),
            constraints = constraints.len(),
            days = grid.days.len(),
            "roster generated"
        );
        Ok(format_roster(employees, &grid, &self.config))
    }

    /// Valide les enregistrements bruts (rejet du lot si l'un est invalide), puis génère.
    pub fn generate_from_records(
        &self,
        records: &[EmployeeRecord],
        constraints: &str,
    ) -> Result<Roster, RosterError> {
        let employees = validate_records(records)?;
        self.generate(&employees, constraints)
    }
}

/// Une grille doit couvrir tout l'horizon avec un créneau par employé et par jour.
fn check_grid(
    grid: &SlotGrid,
    employees: usize,
    config: &GeneratorConfig,
    strategy: &str,
) -> Result<(), RosterError> {
    let horizon = config.horizon_days as usize;
    if grid.days.len() != horizon {
        return Err(RosterError::Configuration(format!(
            "strategy `{strategy}` planned {} day(s), expected {horizon}",
            grid.days.len()
        )));
    }
    for (idx, plan) in grid.days.iter().enumerate() {
        if plan.day != idx + 1 {
            return Err(RosterError::Configuration(format!(
                "strategy `{strategy}` returned day {} at position {}",
                plan.day,
                idx + 1
            )));
        }
        if plan.slots.len() != employees {
            return Err(RosterError::Configuration(format!(
                "strategy `{strategy}` assigned {} slot(s) on day {}, expected {employees}",
                plan.slots.len(),
                plan.day
            )));
        }
    }
    Ok(())
}

/// Génération avec la configuration par défaut (7 jours, rotation à 5 créneaux).
pub fn generate_roster(employees: &[Employee], constraints: &str) -> Result<Roster, RosterError> {
    Scheduler::default().generate(employees, constraints)
}

/// Sépare les enregistrements valides des enregistrements fautifs.
pub fn partition_records(records: &[EmployeeRecord]) -> (Vec<Employee>, Vec<RecordError>) {
    let mut valid = Vec::with_capacity(records.len());
    let mut errors = Vec::new();

    for (index, rec) in records.iter().enumerate() {
        let name = required(rec.name.as_deref());
        let role = required(rec.role.as_deref());
        match (name, role) {
            (Some(name), Some(role)) => valid.push(Employee {
                name: name.to_string(),
                role: role.to_string(),
                project: optional(rec.project.as_deref()),
                cost_center: optional(rec.cost_center.as_deref()),
            }),
            (name, role) => {
                if name.is_none() {
                    errors.push(RecordError { index, field: "name" });
                }
                if role.is_none() {
                    errors.push(RecordError { index, field: "role" });
                }
            }
        }
    }

    (valid, errors)
}

pub fn validate_records(records: &[EmployeeRecord]) -> Result<Vec<Employee>, RosterError> {
    let (valid, errors) = partition_records(records);
    if errors.is_empty() {
        Ok(valid)
    } else {
        Err(RosterError::Validation(errors))
    }
}

fn required(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn optional(value: Option<&str>) -> Option<String> {
    required(value).map(str::to_string)
}
