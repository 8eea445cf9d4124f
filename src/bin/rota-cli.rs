#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rota::{
    config::{export_config_json, load_config_from_file, GeneratorConfig},
    io,
    model::{Roster, ShiftSlot},
    notification::{prepare_schedule_notice, TextNotice},
    scheduler::{leave_conflicts, partition_records, validate_records, Scheduler},
    storage::{JsonStorage, SavedRoster, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de génération de plannings par rotation
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du dernier roster généré
    #[arg(long, global = true, default_value = "roster.json")]
    store: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer un roster à partir d'une liste d'employés
    Generate {
        /// Fichier `.csv` (name,role[,project][,cost_center]) ou `.json`
        #[arg(long)]
        employees: String,
        /// Contraintes en texte libre, ex. "Keerthi needs Saturday off"
        #[arg(long)]
        constraints: Option<String>,
        #[arg(long)]
        constraints_file: Option<String>,
        /// Configuration JSON (horizon, cycle, ancre)
        #[arg(long)]
        config: Option<String>,
        /// YYYY-MM-DD ; les jours sont alors libellés par date
        #[arg(long)]
        start_date: Option<NaiveDate>,
        #[arg(long)]
        days: Option<i64>,
        /// Ignore les enregistrements invalides au lieu de rejeter le lot
        #[arg(long)]
        skip_invalid: bool,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Afficher le roster enregistré
    Show,

    /// Lister les créneaux d'un employé
    Shifts {
        #[arg(long)]
        name: String,
    },

    /// Échanger les créneaux de deux employés sur une journée
    Swap {
        #[arg(long)]
        day: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        with: String,
    },

    /// Vérifier un congé contre le roster enregistré
    LeaveCheck {
        #[arg(long)]
        name: String,
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
    },

    /// Vérifier la couverture minimale par créneau
    Check {
        #[arg(long, default_value_t = 1)]
        min_per_shift: usize,
    },

    /// Générer un avis de planning texte pour un employé
    Notify {
        #[arg(long)]
        name: String,
        /// Fichier de sortie (texte brut)
        #[arg(long)]
        out: String,
    },

    /// Écrire la configuration par défaut
    InitConfig {
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }

    let storage = JsonStorage::open(&cli.store)?;

    let code = match cli.cmd {
        Commands::Generate {
            employees,
            constraints,
            constraints_file,
            config,
            start_date,
            days,
            skip_invalid,
            out_json,
            out_csv,
        } => {
            let mut cfg = match config {
                Some(path) => load_config_from_file(path)?,
                None => GeneratorConfig::default(),
            };
            if let Some(date) = start_date {
                cfg = GeneratorConfig {
                    horizon_days: cfg.horizon_days,
                    cycle: cfg.cycle,
                    ..GeneratorConfig::starting_on(date)
                };
            }
            if let Some(n) = days {
                cfg.horizon_days = n;
            }

            let records = io::import_employees(&employees)?;
            let staff = if skip_invalid {
                let (valid, errors) = partition_records(&records);
                for err in &errors {
                    eprintln!("Warning: skipped {err}");
                }
                valid
            } else {
                validate_records(&records)?
            };

            let mut text = constraints.unwrap_or_default();
            if let Some(path) = constraints_file {
                let extra = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading constraints {path}"))?;
                text.push('\n');
                text.push_str(&extra);
            }

            let roster = Scheduler::new(cfg).generate(&staff, &text)?;
            storage.save(&SavedRoster::new(roster.clone()))?;
            if let Some(path) = out_json {
                io::export_roster_json(path, &roster)?;
            }
            if let Some(path) = out_csv {
                io::export_roster_csv(path, &roster)?;
            }
            print_roster(&roster);
            0
        }
        Commands::Show => {
            let saved = storage.load()?;
            println!(
                "roster {} (generated {})",
                saved.id,
                saved.generated_at.to_rfc3339()
            );
            print_roster(&saved.roster);
            0
        }
        Commands::Shifts { name } => {
            let saved = storage.load()?;
            let shifts = saved.roster.shifts_for(&name);
            if shifts.is_empty() {
                anyhow::bail!("unknown employee: {name}");
            }
            for (label, slot) in shifts {
                println!("{label} | {slot}");
            }
            0
        }
        Commands::Swap { day, name, with } => {
            let saved = storage.load()?;
            let next = saved.roster.with_swap(&day, &name, &with)?;
            storage.save(&SavedRoster::new(next))?;
            println!("Swapped {name} and {with} on {day}");
            0
        }
        Commands::LeaveCheck { name, start, end } => {
            let saved = storage.load()?;
            let conflicts = leave_conflicts(&saved.roster, &name, start, end)?;
            if conflicts.is_empty() {
                println!("OK: no conflicts");
                0
            } else {
                println!(
                    "Warning: this leave conflicts with the roster on {}",
                    conflicts.join(", ")
                );
                // Code 2 = WARNING
                2
            }
        }
        Commands::Check { min_per_shift } => {
            let saved = storage.load()?;
            let gaps = saved.roster.coverage().understaffed(min_per_shift);
            if gaps.is_empty() {
                println!("OK: every shift has at least {min_per_shift} employee(s)");
                0
            } else {
                eprintln!("Found {} understaffed shift(s)", gaps.len());
                for (label, slot) in &gaps {
                    eprintln!("{label} | {slot}");
                }
                2
            }
        }
        Commands::Notify { name, out } => {
            let saved = storage.load()?;
            let notice = prepare_schedule_notice(&saved.roster, &name, &TextNotice)?;
            std::fs::write(&out, &notice.content)?;
            println!(
                "Notice generated for {} ({} working day(s))",
                notice.employee, notice.working_days
            );
            0
        }
        Commands::InitConfig { out } => {
            export_config_json(&out, &GeneratorConfig::default())?;
            println!("Default configuration written to {out}");
            0
        }
    };

    std::process::exit(code);
}

fn print_roster(roster: &Roster) {
    for day in &roster.days {
        let cells: Vec<String> = ShiftSlot::ALL
            .iter()
            .map(|slot| {
                let names: Vec<&str> = day
                    .shifts
                    .slot(*slot)
                    .iter()
                    .map(|e| e.name.as_str())
                    .collect();
                format!("{slot}: {}", if names.is_empty() { "-".to_string() } else { names.join(", ") })
            })
            .collect();
        println!("{} ({}) | {}", day.label, day.weekday, cells.join(" | "));
    }
}
