use std::path::PathBuf;

use thiserror::Error;

/// Classification of failures, used for exit codes and user-facing reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Source unreadable or destination unwritable.
    Io,
    /// A value or record in the source could not be parsed.
    Parse,
    /// A required column is absent from the source header.
    MissingColumn,
    /// Row data parsed but is semantically invalid.
    InvalidValue,
    /// No rows to render.
    EmptyInput,
    /// Invalid configuration or CLI usage.
    Config,
    /// The drawing backend failed.
    Render,
}

impl ErrorKind {
    /// Whether this failure is caused by the benchmark data itself.
    #[must_use]
    pub const fn is_data_error(self) -> bool {
        matches!(
            self,
            Self::Parse | Self::MissingColumn | Self::InvalidValue | Self::EmptyInput
        )
    }
}

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write image: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("Row {row}: cannot parse {column} value '{value}' as a number")]
    Parse {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Row {row}: {reason}")]
    InvalidValue { row: usize, reason: String },

    #[error("No result rows to render")]
    EmptyInput,

    #[error("Rendering failed: {0}")]
    Render(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl ChartError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) | Self::TomlParse(_) | Self::JsonSerialize(_) => ErrorKind::Config,
            Self::FileRead { .. } | Self::FileWrite { .. } | Self::Io(_) => ErrorKind::Io,
            Self::MissingColumn { .. } => ErrorKind::MissingColumn,
            Self::Parse { .. } | Self::Csv(_) => ErrorKind::Parse,
            Self::InvalidValue { .. } => ErrorKind::InvalidValue,
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::Render(_) => ErrorKind::Render,
        }
    }

    /// Short label shown as the error heading.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::FileWrite { .. } => "FileWrite",
            Self::MissingColumn { .. } => "MissingColumn",
            Self::Parse { .. } => "Parse",
            Self::InvalidValue { .. } => "InvalidValue",
            Self::EmptyInput => "EmptyInput",
            Self::Render(_) => "Render",
            Self::Csv(_) => "CSV",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TOML",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// The primary message without the heading prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) | Self::Render(msg) => msg.clone(),
            Self::FileRead { path, .. } | Self::FileWrite { path, .. } => {
                path.display().to_string()
            }
            Self::MissingColumn { column } => format!("column '{column}' not found in header"),
            Self::Parse { row, column, value } => {
                format!("row {row}: '{value}' in column '{column}' is not a number")
            }
            Self::InvalidValue { row, reason } => format!("row {row}: {reason}"),
            Self::EmptyInput => "no result rows to render".to_string(),
            Self::Csv(e) => e.to_string(),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Underlying cause, if any.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } | Self::FileWrite { source, .. } => {
                Some(source.to_string())
            }
            Self::Csv(e) => e.position().map(|pos| {
                format!("at line {}, byte {}", pos.line(), pos.byte())
            }),
            Self::TomlParse(e) => e.span().map(|span| format!("at bytes {span:?}")),
            _ => None,
        }
    }

    /// Actionable hint for the user.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) => Some("Check the config file format and the command-line flags"),
            Self::FileRead { source, .. } | Self::Io(source) => {
                Self::io_suggestion(source.kind())
            }
            Self::FileWrite { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    Some("Create the output directory before rendering")
                }
                kind => Self::io_suggestion(kind),
            },
            Self::MissingColumn { .. } => {
                Some("The header row must contain both 'method' and 'ms' columns")
            }
            Self::Parse { .. } => Some("Every 'ms' value must be a plain number such as 12.5"),
            Self::InvalidValue { .. } => {
                Some("Timings must be finite and non-negative, and method names non-empty")
            }
            Self::EmptyInput => Some("Add at least one data row below the header"),
            Self::Csv(_) => Some("Check that every row has the same number of fields as the header"),
            Self::TomlParse(_) => Some("Check TOML syntax: strings need quotes, arrays use []"),
            Self::Render(_) | Self::JsonSerialize(_) => None,
        }
    }

    const fn io_suggestion(kind: std::io::ErrorKind) -> Option<&'static str> {
        match kind {
            std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
            std::io::ErrorKind::PermissionDenied => Some("Check file permissions"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
