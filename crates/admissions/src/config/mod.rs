use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::allocation::DEFAULT_PREFERENCES_PER_APPLICANT;
use crate::intake::{IntakeOptions, MalformedLinePolicy};

const APPLICANTS_FILE_VAR: &str = "ADMISSIONS_APPLICANTS_FILE";
const PREFERENCES_VAR: &str = "ADMISSIONS_PREFERENCES";
const MALFORMED_LINES_VAR: &str = "ADMISSIONS_MALFORMED_LINES";
const LOG_LEVEL_VAR: &str = "ADMISSIONS_LOG_LEVEL";

/// Top-level configuration for an allocation run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub intake: IntakeConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let applicants_path = env::var(APPLICANTS_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(IntakeConfig::DEFAULT_APPLICANTS_FILE));

        let preferences_per_applicant = match env::var(PREFERENCES_VAR) {
            Ok(raw) => parse_preferences(&raw)?,
            Err(_) => DEFAULT_PREFERENCES_PER_APPLICANT,
        };

        let malformed_lines = match env::var(MALFORMED_LINES_VAR) {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidMalformedLinePolicy { value: raw })?,
            Err(_) => MalformedLinePolicy::default(),
        };

        let log_level = env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            intake: IntakeConfig {
                applicants_path,
                preferences_per_applicant,
                malformed_lines,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where applicant records come from and how strictly they are read.
#[derive(Debug, Clone)]
pub struct IntakeConfig {
    pub applicants_path: PathBuf,
    pub preferences_per_applicant: usize,
    pub malformed_lines: MalformedLinePolicy,
}

impl IntakeConfig {
    pub const DEFAULT_APPLICANTS_FILE: &'static str = "applicants.txt";

    pub fn options(&self) -> IntakeOptions {
        IntakeOptions {
            preferences_per_applicant: self.preferences_per_applicant,
            malformed_lines: self.malformed_lines,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Parses a preference count, which must be at least one.
pub fn parse_preferences(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(ConfigError::InvalidPreferences {
            value: raw.to_string(),
        }),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPreferences { value: String },
    InvalidMalformedLinePolicy { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPreferences { value } => write!(
                f,
                "{PREFERENCES_VAR} must be a positive integer (got '{value}')"
            ),
            ConfigError::InvalidMalformedLinePolicy { value } => write!(
                f,
                "{MALFORMED_LINES_VAR} must be 'reject' or 'skip' (got '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
