use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use wardwatch_core::roster::{find_patient, parse_records, search_patients, PatientSummary};
use wardwatch_core::{Mode, Patient};
use wardwatch_scoring::{
    assess_patient, compute_diagnoses, compute_news2, compute_risks, ScoringError,
};

mod config;

use config::{Config, LogFormat};

/// Rule-based deterioration risk scoring for ward patient records.
#[derive(Parser, Debug)]
#[command(name = "wardwatch", version)]
struct Cli {
    /// Rule set for AKI and sepsis: "guideline" or "demo".
    #[arg(long, global = true)]
    mode: Option<String>,

    /// Log output: "pretty" or "json".
    #[arg(long, global = true)]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summaries of every patient in the records file.
    List { records: PathBuf },
    /// Patients whose name or presenting complaint matches a query.
    Search { records: PathBuf, query: String },
    /// NEWS2, risks, diagnoses and warnings for one patient.
    Assess { records: PathBuf, id: String },
    /// The twelve risk results for one patient.
    Risks { records: PathBuf, id: String },
    /// Differential diagnosis scores for one patient.
    Diagnoses { records: PathBuf, id: String },
    /// NEWS2 for one patient's observations.
    News2 { records: PathBuf, id: String },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config =
        Config::from_env()?.with_overrides(cli.mode.as_deref(), cli.log_format.as_deref())?;

    init_tracing(config.log_format);

    run(cli.command, config.mode)
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Logs go to stderr; stdout carries the JSON output.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn run(command: Command, mode: Mode) -> Result<()> {
    match command {
        Command::List { records } => {
            let patients = load_records(&records)?;
            let summaries: Vec<PatientSummary> =
                patients.iter().map(PatientSummary::from).collect();
            tracing::info!(count = summaries.len(), "listed patients");
            print_json(&summaries)
        }
        Command::Search { records, query } => {
            let patients = load_records(&records)?;
            let matches = search_patients(&patients, &query);
            tracing::info!(query = %query, count = matches.len(), "searched patients");
            print_json(&matches)
        }
        Command::Assess { records, id } => {
            let patients = load_records(&records)?;
            print_json(&assess_patient(lookup(&patients, &id)?, mode))
        }
        Command::Risks { records, id } => {
            let patients = load_records(&records)?;
            print_json(&compute_risks(lookup(&patients, &id)?, mode))
        }
        Command::Diagnoses { records, id } => {
            let patients = load_records(&records)?;
            print_json(&compute_diagnoses(lookup(&patients, &id)?))
        }
        Command::News2 { records, id } => {
            let patients = load_records(&records)?;
            let patient = lookup(&patients, &id)?;
            let vitals = patient
                .vitals
                .as_ref()
                .ok_or_else(|| eyre::eyre!("patient {id} has no vital signs recorded"))?;
            print_json(&compute_news2(vitals))
        }
    }
}

fn load_records(path: &Path) -> Result<Vec<Patient>> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read records at {}", path.display()))?;
    let patients = parse_records(&contents)
        .wrap_err_with(|| format!("failed to parse records at {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = patients.len(), "loaded records");
    Ok(patients)
}

fn lookup<'a>(patients: &'a [Patient], id: &str) -> Result<&'a Patient> {
    find_patient(patients, id).ok_or_else(|| ScoringError::UnknownPatient(id.to_string()).into())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
