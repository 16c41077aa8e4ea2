#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use roulement::{
    config::{load_config_from_file, Config},
    io,
    preferences::PreferenceStore,
    scheduler::{Event, Scheduler},
    storage::{FileStorage, Storage},
    summary::{ScheduleRenderer, TextSummary},
    CapacityTable,
};
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de répartition des postes de la semaine
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Attribuer les postes à partir d'un fichier de préférences
    Assign {
        /// Préférences (.yaml, .yml, .json, .csv)
        #[arg(long)]
        input: String,
        /// Planning produit (.yaml, .yml, .json, .csv)
        #[arg(long)]
        output: Option<String>,
        /// Configuration TOML (limites, graine)
        #[arg(long)]
        config: Option<String>,
        #[command(flatten)]
        limits: LimitArgs,
        /// Graine du tirage des compléments
        #[arg(long)]
        seed: Option<u64>,
        /// Ne pas compléter les créneaux sous-dotés
        #[arg(long)]
        no_backfill: bool,
    },

    /// Valider les préférences sans rien attribuer
    Check {
        #[arg(long)]
        input: String,
        #[arg(long)]
        config: Option<String>,
        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Afficher un planning déjà produit
    Show {
        #[arg(long)]
        schedule: String,
        #[arg(long, default_value_t = 2)]
        min_staffing: u32,
    },
}

#[derive(Args, Debug)]
struct LimitArgs {
    /// Postes maximum par employé et par semaine
    #[arg(long)]
    max_work_days: Option<u32>,
    /// Employés maximum par créneau
    #[arg(long)]
    slot_cap: Option<u32>,
    /// Effectif visé par créneau
    #[arg(long)]
    min_staffing: Option<u32>,
}

fn build_config(path: Option<&str>, limits: &LimitArgs) -> Result<Config> {
    let mut config = match path {
        Some(path) => load_config_from_file(path)?,
        None => Config::default(),
    };
    if let Some(v) = limits.max_work_days {
        config.limits.max_work_days = v;
    }
    if let Some(v) = limits.slot_cap {
        config.limits.slot_cap = v;
    }
    if let Some(v) = limits.min_staffing {
        config.limits.min_staffing = v;
    }
    config.validate()?;
    Ok(config)
}

fn load_store(input: &str) -> Result<(PreferenceStore, usize)> {
    let records = io::import_preferences(input)?;
    let (store, issues) = PreferenceStore::from_records(records);
    for issue in &issues {
        eprintln!("Warning: {issue}");
    }
    Ok((store, issues.len()))
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

    let code = match cli.cmd {
        Commands::Assign {
            input,
            output,
            config,
            limits,
            seed,
            no_backfill,
        } => {
            let mut config = build_config(config.as_deref(), &limits)?;
            if seed.is_some() {
                config.seed = seed;
            }
            if no_backfill {
                config.backfill = false;
            }

            let (store, load_issues) = load_store(&input)?;
            let outcome = Scheduler::new(&store, config.options()).run();

            for (employee, reason) in outcome.rejections() {
                eprintln!("Rejected {employee}: {reason}");
            }
            for event in &outcome.events {
                if let Event::ValidationHalted { unchecked } = event {
                    eprintln!("Validation halted, {unchecked} employee(s) not checked");
                }
            }
            for (employee, slot) in outcome.dropped() {
                eprintln!("Dropped preference {slot} of {employee}");
            }

            let renderer = TextSummary {
                min_staffing: config.limits.min_staffing,
            };
            print!("{}", renderer.render(&outcome.schedule, &outcome.capacity));

            if let Some(path) = output {
                let storage = FileStorage::open(&path)?;
                storage
                    .save(&outcome.schedule)
                    .with_context(|| format!("saving schedule to {path}"))?;
                println!("Schedule written to {path}");
            }

            // Code 2 = WARNING/INCOMPLETE
            if load_issues > 0 || outcome.rejections().next().is_some() {
                2
            } else {
                0
            }
        }
        Commands::Check {
            input,
            config,
            limits,
        } => {
            let config = build_config(config.as_deref(), &limits)?;
            let (store, load_issues) = load_store(&input)?;
            let mut scheduler = Scheduler::new(&store, config.options());
            match scheduler.validate() {
                Ok(()) if load_issues == 0 => {
                    println!("OK: {} employee(s) valid", store.len());
                    0
                }
                Ok(()) => 2,
                Err(err) => {
                    eprintln!("Rejected: {err}");
                    2
                }
            }
        }
        Commands::Show {
            schedule,
            min_staffing,
        } => {
            let storage = FileStorage::open(&schedule)?;
            let loaded = storage.load()?;
            let capacity = CapacityTable::from_schedule(&loaded);
            let renderer = TextSummary { min_staffing };
            print!("{}", renderer.render(&loaded, &capacity));
            0
        }
    };

    std::process::exit(code);
}
