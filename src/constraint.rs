//! Interprétation des contraintes en texte libre.
//!
//! Le texte est découpé en lignes (`\n`, `;`), puis en fragments (`,`, `.`).
//! Un fragment sans nom ou sans jour est rattaché au fragment précédent
//! (« Rohit needs Saturday, Sunday off »). Chaque clause est examinée seule :
//! - noms d'employés : mots entiers (suite de mots pour un nom composé), insensible à la casse ;
//! - jours complets : sous-chaîne ; abréviations (`mon`, `tue`, …) : mot entier ;
//! - dates ISO `YYYY-MM-DD`.
//!
//! Une clause non reconnue est ignorée ; l'interprète ne renvoie jamais d'erreur.

use crate::model::{Constraint, ConstraintDay, Employee, Requirement, ShiftSlot};
use chrono::{NaiveDate, Weekday};

const FULL_DAYS: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

const SHORT_DAYS: [(&str, Weekday); 10] = [
    ("mon", Weekday::Mon),
    ("tue", Weekday::Tue),
    ("tues", Weekday::Tue),
    ("wed", Weekday::Wed),
    ("thu", Weekday::Thu),
    ("thur", Weekday::Thu),
    ("thurs", Weekday::Thu),
    ("fri", Weekday::Fri),
    ("sat", Weekday::Sat),
    ("sun", Weekday::Sun),
];

const OFF_CUES: [&str; 5] = ["off", "leave", "unavailable", "vacation", "holiday"];
const WORK_CUES: [&str; 6] = ["work", "works", "working", "on", "cover", "take"];

/// Extrait les contraintes reconnues de `text`.
pub fn parse_constraints(text: &str, employees: &[Employee]) -> Vec<Constraint> {
    let mut out: Vec<Constraint> = Vec::new();
    for clause in clauses(text, employees) {
        let parsed = parse_clause(&clause, employees);
        if parsed.is_empty() {
            tracing::debug!(clause, "constraint clause not recognised, ignored");
        }
        for c in parsed {
            if !out.contains(&c) {
                out.push(c);
            }
        }
    }
    out
}

/// Regroupe les fragments d'une ligne en clauses autonomes (au moins un nom et un jour).
fn clauses(text: &str, employees: &[Employee]) -> Vec<String> {
    let mut out = Vec::new();
    for line in text.split(['\n', ';']) {
        let mut current = String::new();
        for fragment in line.split([',', '.']) {
            let fragment = fragment.trim();
            if fragment.is_empty() {
                continue;
            }
            if is_complete(fragment, employees) && is_complete(&current, employees) {
                out.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push_str(", ");
            }
            current.push_str(fragment);
        }
        if !current.is_empty() {
            out.push(current);
        }
    }
    out
}

fn is_complete(fragment: &str, employees: &[Employee]) -> bool {
    let lower = fragment.to_lowercase();
    let words = alpha_words(&lower);
    !matched_names(&lower, employees).is_empty() && !matched_days(&lower, &words).is_empty()
}

fn alpha_words(lower: &str) -> Vec<&str> {
    lower
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|w| !w.is_empty())
        .collect()
}

fn tokens(lower: &str) -> Vec<&str> {
    lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect()
}

fn parse_clause(clause: &str, employees: &[Employee]) -> Vec<Constraint> {
    let lower = clause.to_lowercase();
    let words = alpha_words(&lower);

    let names = matched_names(&lower, employees);
    let days = matched_days(&lower, &words);
    if names.is_empty() || days.is_empty() {
        return Vec::new();
    }

    let has_word = |cues: &[&str]| words.iter().any(|w| cues.contains(w));

    let requirement = if has_word(&OFF_CUES[..]) {
        Requirement::DayOff
    } else if let Some(slot) = matched_slot(&words).filter(|_| has_word(&WORK_CUES[..])) {
        Requirement::MustWork(slot)
    } else {
        return Vec::new();
    };

    names
        .iter()
        .flat_map(|name| {
            days.iter().map(move |day| Constraint {
                employee_name: (*name).to_string(),
                day: *day,
                requirement,
            })
        })
        .collect()
}

fn matched_names<'a>(lower: &str, employees: &'a [Employee]) -> Vec<&'a str> {
    let haystack = tokens(lower);
    let mut names: Vec<&str> = Vec::new();
    for e in employees {
        let name = e.name.to_lowercase();
        let needle = tokens(&name);
        if needle.is_empty() || !haystack.windows(needle.len()).any(|w| w == needle.as_slice()) {
            continue;
        }
        if !names.iter().any(|n| n.eq_ignore_ascii_case(&e.name)) {
            names.push(&e.name);
        }
    }
    names
}

fn matched_days(lower: &str, words: &[&str]) -> Vec<ConstraintDay> {
    let mut days: Vec<ConstraintDay> = Vec::new();
    let mut push = |d: ConstraintDay| {
        if !days.contains(&d) {
            days.push(d);
        }
    };

    for (full, weekday) in FULL_DAYS {
        if lower.contains(full) {
            push(ConstraintDay::Weekday(weekday));
        }
    }
    for word in words {
        if let Some((_, weekday)) = SHORT_DAYS.iter().find(|(short, _)| short == word) {
            push(ConstraintDay::Weekday(*weekday));
        }
    }
    let tokens = lower.split(|c: char| !(c.is_ascii_digit() || c == '-'));
    for token in tokens.filter(|t| t.len() == 10) {
        if let Ok(date) = NaiveDate::parse_from_str(token, "%Y-%m-%d") {
            push(ConstraintDay::Date(date));
        }
    }
    days
}

fn matched_slot(words: &[&str]) -> Option<ShiftSlot> {
    words
        .iter()
        .filter_map(|w| w.parse::<ShiftSlot>().ok())
        .find(ShiftSlot::is_working)
}
