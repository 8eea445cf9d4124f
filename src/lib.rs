#![forbid(unsafe_code)]
//! Rota — génération de plannings d'équipe par rotation (sans BD).
//!
//! - Rotation déterministe `(jour + position) % 5` sur Morning/Afternoon/Evening/Night/Off.
//! - Contraintes en texte libre (« Alice needs Monday off »), appliquées en surcharge.
//! - Calcul pur : aucune I/O dans le moteur ; fichiers JSON/CSV en périphérie.

pub mod config;
pub mod constraint;
pub mod format;
pub mod io;
pub mod model;
pub mod notification;
pub mod scheduler;
pub mod storage;

pub use config::{export_config_json, load_config_from_file, GeneratorConfig};
pub use constraint::parse_constraints;
pub use format::{format_roster, ContractView};
pub use model::{
    Constraint, ConstraintDay, DayAssignment, Employee, EmployeeRecord, Requirement, Roster,
    RosterDay, ShiftSlot,
};
pub use notification::{prepare_schedule_notice, Notice, NoticeRenderer, TextNotice};
pub use scheduler::{
    generate_roster, leave_conflicts, partition_records, validate_records, ErrorKind,
    RecordError, RosterError, RosterStrategy, RotationStrategy, Scheduler,
};
pub use storage::{JsonStorage, SavedRoster, Storage};
