use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Cannot read table {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("User table {} has no '{column}' column", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Sample size {sample_size} exceeds population of {population} users")]
    SampleTooLarge {
        sample_size: usize,
        population: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl SeedError {
    /// True for errors caused by a bad or missing input table
    pub fn is_input(&self) -> bool {
        matches!(self, SeedError::Input { .. } | SeedError::MissingColumn { .. })
    }

    /// True for errors caused by the run parameters rather than the filesystem
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            SeedError::SampleTooLarge { .. } | SeedError::InvalidConfig(_) | SeedError::Config(_)
        )
    }

    /// Attach the output path to a bare CSV write failure
    pub fn writing(self, path: &Path) -> Self {
        match self {
            SeedError::Csv(err) => SeedError::Io {
                path: path.to_path_buf(),
                source: err.into(),
            },
            other => other,
        }
    }
}

pub type SeedResult<T> = Result<T, SeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_too_large_message() {
        let err = SeedError::SampleTooLarge {
            sample_size: 200,
            population: 3,
        };
        assert_eq!(
            err.to_string(),
            "Sample size 200 exceeds population of 3 users"
        );
        assert!(err.is_config());
        assert!(!err.is_input());
    }

    #[test]
    fn test_write_failure_names_output_path() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "No space left on device");
        let err = SeedError::Csv(csv::Error::from(io)).writing(Path::new("db/csv/out.csv"));

        assert!(matches!(err, SeedError::Io { .. }));
        assert_eq!(
            err.to_string(),
            "I/O error on db/csv/out.csv: No space left on device"
        );
    }

    #[test]
    fn test_writing_keeps_other_errors() {
        let err = SeedError::InvalidConfig("bad".to_string()).writing(Path::new("out.csv"));
        assert!(matches!(err, SeedError::InvalidConfig(_)));
    }

    #[test]
    fn test_missing_column_is_input_error() {
        let err = SeedError::MissingColumn {
            path: PathBuf::from("users.csv"),
            column: "id".to_string(),
        };
        assert!(err.is_input());
        assert_eq!(err.to_string(), "User table users.csv has no 'id' column");
    }
}
