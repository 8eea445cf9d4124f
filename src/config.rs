use crate::model::ShiftSlot;
use crate::scheduler::RosterError;
use anyhow::{Context, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Horizon maximal accepté (une année bissextile).
pub const MAX_HORIZON_DAYS: i64 = 366;

/// Paramètres d'une génération de roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Nombre de jours couverts (7 par défaut).
    pub horizon_days: i64,
    /// Cycle de rotation ; l'indice `(jour + position) % len` y est lu.
    pub cycle: Vec<ShiftSlot>,
    /// Ancre calendaire : les libellés deviennent des dates `YYYY-MM-DD`.
    pub start_date: Option<NaiveDate>,
    /// Jour de semaine du « Day 1 » quand aucune date n'est fournie.
    pub first_weekday: Weekday,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            horizon_days: 7,
            cycle: ShiftSlot::ALL.to_vec(),
            start_date: None,
            first_weekday: Weekday::Mon,
        }
    }
}

impl GeneratorConfig {
    pub fn starting_on(date: NaiveDate) -> Self {
        Self {
            start_date: Some(date),
            first_weekday: date.weekday(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), RosterError> {
        if self.horizon_days <= 0 {
            return Err(RosterError::Configuration(format!(
                "horizon_days must be > 0 (got {})",
                self.horizon_days
            )));
        }
        if self.horizon_days > MAX_HORIZON_DAYS {
            return Err(RosterError::Configuration(format!(
                "horizon_days must be <= {MAX_HORIZON_DAYS} (got {})",
                self.horizon_days
            )));
        }
        if self.cycle.is_empty() {
            return Err(RosterError::Configuration(
                "cycle must contain at least one slot".to_string(),
            ));
        }
        if let Some(start) = self.start_date {
            // la dernière date doit rester représentable
            start
                .checked_add_signed(Duration::days(self.horizon_days - 1))
                .ok_or_else(|| RosterError::Configuration("date overflow".to_string()))?;
        }
        Ok(())
    }

    /// Date et jour de semaine du jour `day` (1-indexé ; `0` est lu comme `1`).
    pub fn day_anchor(&self, day: usize) -> (Option<NaiveDate>, Weekday) {
        let offset = day.saturating_sub(1) as i64;
        match self.start_date {
            Some(start) => {
                let date = start + Duration::days(offset);
                (Some(date), date.weekday())
            }
            None => {
                let mut weekday = self.first_weekday;
                for _ in 0..offset.rem_euclid(7) {
                    weekday = weekday.succ();
                }
                (None, weekday)
            }
        }
    }

    pub fn day_label(&self, day: usize) -> String {
        match self.day_anchor(day).0 {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => format!("Day {day}"),
        }
    }
}

pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<GeneratorConfig> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let config: GeneratorConfig = serde_json::from_slice(&data)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

pub fn export_config_json<P: AsRef<Path>>(path: P, config: &GeneratorConfig) -> Result<()> {
    config.validate()?;
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
