use crate::model::ShiftSlot;
use chrono::{NaiveDate, Weekday};
use std::fmt;
use thiserror::Error;

/// Catégorie d'erreur lisible par machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Configuration,
    Swap,
    Leave,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Configuration => "configuration",
            ErrorKind::Swap => "swap",
            ErrorKind::Leave => "leave",
        }
    }
}

/// Champ obligatoire manquant sur un enregistrement d'entrée.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordError {
    pub index: usize,
    pub field: &'static str,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record #{} is missing `{}`", self.index, self.field)
    }
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("invalid employee records: {}", join(.0))]
    Validation(Vec<RecordError>),
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("unknown day: {0}")]
    UnknownDay(String),
    #[error("unknown employee: {0}")]
    UnknownEmployee(String),
    #[error("swap invalid: {0}")]
    SwapInvalid(&'static str),
    #[error("invalid leave window: end must not be before start")]
    InvalidLeaveWindow,
}

impl RosterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RosterError::Validation(_) => ErrorKind::Validation,
            RosterError::Configuration(_) => ErrorKind::Configuration,
            RosterError::UnknownDay(_)
            | RosterError::UnknownEmployee(_)
            | RosterError::SwapInvalid(_) => ErrorKind::Swap,
            RosterError::InvalidLeaveWindow => ErrorKind::Leave,
        }
    }
}

fn join(errors: &[RecordError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Journée planifiée, avant mise en forme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan {
    /// 1-indexé
    pub day: usize,
    pub date: Option<NaiveDate>,
    pub weekday: Weekday,
    /// Un créneau par employé, indexé par position d'entrée.
    pub slots: Vec<ShiftSlot>,
}

/// Sortie interne d'une stratégie : une ligne par jour de l'horizon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotGrid {
    pub days: Vec<DayPlan>,
}
