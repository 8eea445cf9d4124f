use crate::model::{EmployeeRecord, Roster};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import d'employés depuis CSV: header `name,role[,project][,cost_center]`
///
/// Les champs vides deviennent `None` ; la validation se fait au moment de générer.
pub fn import_employees_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<EmployeeRecord>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading employee row {}", line + 1))?;
        out.push(EmployeeRecord {
            name: field(&rec, 0),
            role: field(&rec, 1),
            project: field(&rec, 2),
            cost_center: field(&rec, 3),
        });
    }
    Ok(out)
}

fn field(rec: &csv::StringRecord, idx: usize) -> Option<String> {
    rec.get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Import d'employés depuis un tableau JSON (`[{"name":…,"role":…}]`).
pub fn import_employees_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<EmployeeRecord>> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let records: Vec<EmployeeRecord> = serde_json::from_slice(&data)
        .with_context(|| format!("parsing employees {}", path.display()))?;
    Ok(records)
}

/// Choisit l'import selon l'extension (`.csv` ou `.json`).
pub fn import_employees<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<EmployeeRecord>> {
    let path = path.as_ref();
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => import_employees_csv(path),
        Some(ext) if ext.eq_ignore_ascii_case("json") => import_employees_json(path),
        _ => bail!("unsupported employee file (expected .csv or .json): {}", path.display()),
    }
}

/// Export JSON du contrat `jour → créneau → [employés]` (jolie mise en forme)
pub fn export_roster_json<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(&roster.contract())?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV à plat: header `day,shift,name,role`
pub fn export_roster_csv<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["day", "shift", "name", "role"])?;
    for day in &roster.days {
        for (slot, people) in day.shifts.iter() {
            for e in people {
                w.write_record([day.label.as_str(), slot.as_str(), e.name.as_str(), e.role.as_str()])?;
            }
        }
    }
    w.flush()?;
    Ok(())
}
