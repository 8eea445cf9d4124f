use crate::model::{Roster, ShiftSlot};
use anyhow::{bail, Result};

/// Avis de planning généré pour un employé.
#[derive(Debug, Clone)]
pub struct Notice {
    pub employee: String,
    pub working_days: usize,
    pub content: String,
}

/// Permet de customiser le rendu du message (texte, mail, etc.).
pub trait NoticeRenderer {
    fn render(&self, name: &str, shifts: &[(String, ShiftSlot)]) -> String;
}

/// Gabarit texte simple, une ligne par jour.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNotice;

impl NoticeRenderer for TextNotice {
    fn render(&self, name: &str, shifts: &[(String, ShiftSlot)]) -> String {
        let mut out = format!("Hello {name},\n\nHere is your schedule:\n");
        for (label, slot) in shifts {
            out.push_str(&format!("- {label}: {slot}\n"));
        }
        out
    }
}

/// Prépare l'avis de planning de `name` à partir d'un roster généré.
pub fn prepare_schedule_notice(
    roster: &Roster,
    name: &str,
    renderer: &dyn NoticeRenderer,
) -> Result<Notice> {
    let shifts = roster.shifts_for(name);
    if shifts.is_empty() {
        bail!("employee not found in roster: {name}");
    }
    let working_days = shifts.iter().filter(|(_, s)| s.is_working()).count();
    let content = renderer.render(name, &shifts);
    Ok(Notice {
        employee: name.to_string(),
        working_days,
        content,
    })
}
