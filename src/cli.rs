use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use admissions::allocation::Allocator;
use admissions::config::{self, AppConfig};
use admissions::error::AppError;
use admissions::intake::{read_capacity, ApplicantImporter, InputFormat, MalformedLinePolicy};
use admissions::report::{render_text, RosterReport};
use admissions::telemetry;
use clap::{Parser, ValueEnum};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "admissions",
    about = "Allocate applicants to departments by ranked preference and GPA",
    version
)]
struct Cli {
    /// Applicant records to read (defaults to ADMISSIONS_APPLICANTS_FILE or applicants.txt)
    #[arg(long)]
    applicants: Option<PathBuf>,
    /// Seats per department; read from stdin when omitted
    #[arg(long)]
    capacity: Option<usize>,
    /// Record format; inferred from the file extension when omitted
    #[arg(long, value_enum)]
    input_format: Option<InputFormatArg>,
    /// Report format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
    /// Ranked departments per applicant
    #[arg(long, value_parser = parse_preferences)]
    preferences: Option<usize>,
    /// Drop malformed records with a warning instead of aborting
    #[arg(long)]
    skip_malformed: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputFormatArg {
    Text,
    Csv,
}

impl From<InputFormatArg> for InputFormat {
    fn from(value: InputFormatArg) -> Self {
        match value {
            InputFormatArg::Text => InputFormat::Text,
            InputFormatArg::Csv => InputFormat::Csv,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_preferences(raw: &str) -> Result<usize, String> {
    config::parse_preferences(raw).map_err(|err| err.to_string())
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(path) = cli.applicants {
        config.intake.applicants_path = path;
    }
    if let Some(preferences) = cli.preferences {
        config.intake.preferences_per_applicant = preferences;
    }
    if cli.skip_malformed {
        config.intake.malformed_lines = MalformedLinePolicy::Skip;
    }

    telemetry::init(&config.telemetry)?;

    let path = &config.intake.applicants_path;
    let format = cli
        .input_format
        .map(InputFormat::from)
        .unwrap_or_else(|| InputFormat::detect(path));
    let applicants = ApplicantImporter::from_path(path, format, &config.intake.options())?;

    let capacity = match cli.capacity {
        Some(capacity) => capacity,
        None => read_capacity(io::stdin().lock())?,
    };
    info!(
        capacity,
        preferences = config.intake.preferences_per_applicant,
        "allocating seats"
    );

    let outcome = Allocator::new(capacity)
        .with_preferences(config.intake.preferences_per_applicant)
        .run(&applicants);

    let mut stdout = BufWriter::new(io::stdout().lock());
    match cli.output {
        OutputFormat::Text => render_text(&outcome.roster, &mut stdout)?,
        OutputFormat::Json => {
            RosterReport::new(&outcome, capacity).write_json(&mut stdout)?;
            writeln!(stdout)?;
        }
    }
    stdout.flush()?;

    Ok(())
}
