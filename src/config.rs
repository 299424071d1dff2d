// Demo configuration loaded from TOML.
// Every field has a default, so a missing or empty file is a valid config.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::bank::Bank;

pub const CONFIG_ENV_VAR: &str = "DESIGN_PATTERNS_CONFIG";

// =============================================================================
// Errors
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown bank '{0}' (expected 'danske-bank' or 'credit-bank')")]
    UnknownBank(String),

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct FactorySection {
    pub bank: Bank,
}

// Bank names go through `Bank::from_str`, so config input and `parse`
// accept and reject the same spellings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFactorySection {
    bank: Option<String>,
}

impl TryFrom<RawFactorySection> for FactorySection {
    type Error = ConfigError;

    fn try_from(raw: RawFactorySection) -> Result<Self, Self::Error> {
        match raw.bank {
            Some(name) => Ok(Self { bank: name.parse()? }),
            None => Ok(Self::default()),
        }
    }
}

impl Default for FactorySection {
    fn default() -> Self {
        Self {
            bank: Bank::DanskeBank,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PrototypeSection {
    pub customer: String,
    pub danske_name: String,
    pub credit_name: String,
}

impl Default for PrototypeSection {
    fn default() -> Self {
        Self {
            customer: "ACME CO.".to_string(),
            danske_name: "Danske Bank Corporate Account".to_string(),
            credit_name: "Credit Bank Corporate Account".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SingletonSection {
    pub iterations: usize,
    pub threads: usize,
}

impl Default for SingletonSection {
    fn default() -> Self {
        Self {
            iterations: 10,
            threads: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdapterSection {
    pub corporate_name: String,
    pub corporate_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub individual_number: Option<String>,
}

impl Default for AdapterSection {
    fn default() -> Self {
        Self {
            corporate_name: "ACME CO".to_string(),
            corporate_number: None,
            first_name: "Jan".to_string(),
            last_name: "Dzban".to_string(),
            individual_number: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogConfig {
    pub factory: FactorySection,
    pub prototype: PrototypeSection,
    pub singleton: SingletonSection,
    pub adapter: AdapterSection,
}

// On-disk shape; sections that need checking beyond serde are resolved
// into `CatalogConfig` afterwards.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogFile {
    factory: RawFactorySection,
    prototype: PrototypeSection,
    singleton: SingletonSection,
    adapter: AdapterSection,
}

// =============================================================================
// Loading
// =============================================================================

impl CatalogConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: CatalogFile = toml::from_str(content)?;
        let config = CatalogConfig {
            factory: file.factory.try_into()?,
            prototype: file.prototype,
            singleton: file.singleton,
            adapter: file.adapter,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads the file named by `DESIGN_PATTERNS_CONFIG`, or the defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.singleton.iterations == 0 {
            return Err(ConfigError::invalid_value(
                "singleton.iterations",
                "must be at least 1",
            ));
        }
        if self.singleton.threads == 0 {
            return Err(ConfigError::invalid_value(
                "singleton.threads",
                "must be at least 1",
            ));
        }

        let names = [
            ("prototype.customer", &self.prototype.customer),
            ("prototype.danske_name", &self.prototype.danske_name),
            ("prototype.credit_name", &self.prototype.credit_name),
            ("adapter.corporate_name", &self.adapter.corporate_name),
            ("adapter.first_name", &self.adapter.first_name),
            ("adapter.last_name", &self.adapter.last_name),
        ];
        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(ConfigError::invalid_value(field, "must not be empty"));
            }
        }

        Ok(())
    }
}
