//! Baseline assumptions file handling.
//!
//! The model ships with synthetic defaults; an institution can supply its own
//! numbers as a YAML file via `--assumptions`. Missing fields fall back to
//! the defaults, and a file that fails to parse or validate is rejected in
//! favor of the built-in baseline with a logged warning.

use std::path::Path;

use gmesim_core::BaselineAssumptions;

/// Why a supplied assumptions file was not usable.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_saphyr::Error),
    Invalid(gmesim_core::AssumptionsError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read assumptions file: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse assumptions file: {e}"),
            ConfigError::Invalid(e) => write!(f, "invalid assumptions: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(e) => Some(e),
        }
    }
}

/// Load and validate an assumptions file.
pub fn load_assumptions(path: &Path) -> Result<BaselineAssumptions, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
    let assumptions: BaselineAssumptions =
        serde_saphyr::from_str(&content).map_err(ConfigError::Parse)?;
    assumptions.validate().map_err(ConfigError::Invalid)?;
    Ok(assumptions)
}

/// Load assumptions from `path` if given, falling back to the built-in
/// synthetic baseline when no file is supplied or the file is unusable.
pub fn load_or_default(path: Option<&Path>) -> BaselineAssumptions {
    let Some(path) = path else {
        return BaselineAssumptions::default();
    };

    match load_assumptions(path) {
        Ok(assumptions) => {
            tracing::info!("Loaded baseline assumptions from {}", path.display());
            assumptions
        }
        Err(e) => {
            tracing::warn!(
                "Ignoring assumptions file {}: {e}. Using built-in baseline.",
                path.display()
            );
            BaselineAssumptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_yaml_fills_missing_fields_from_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "residents: 500").unwrap();
        writeln!(file, "ime_per_fte: 120000.0").unwrap();

        let assumptions = load_assumptions(file.path()).unwrap();
        assert_eq!(assumptions.residents, 500);
        assert_eq!(assumptions.ime_per_fte, 120_000.0);
        assert_eq!(assumptions.fellows, BaselineAssumptions::default().fellows);
    }

    #[test]
    fn invalid_assumptions_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "benefits_rate: 2.5").unwrap();

        assert!(matches!(
            load_assumptions(file.path()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn unusable_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "residents: [not a number]").unwrap();

        let assumptions = load_or_default(Some(file.path()));
        assert_eq!(assumptions, BaselineAssumptions::default());
    }

    #[test]
    fn missing_path_uses_defaults() {
        assert_eq!(load_or_default(None), BaselineAssumptions::default());
    }
}
