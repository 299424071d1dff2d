// Vendor families shared by the account examples.

use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// A closed set of banks. Every factory, builder and creator belongs to
/// exactly one of them, and every product it makes carries the same tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bank {
    DanskeBank,
    CreditBank,
}

impl Bank {
    pub const ALL: [Bank; 2] = [Bank::DanskeBank, Bank::CreditBank];

    pub fn display_name(self) -> &'static str {
        match self {
            Bank::DanskeBank => "Danske Bank",
            Bank::CreditBank => "Credit Bank",
        }
    }

    /// Prefix used when composing concrete type names, e.g. `DanskeBankIndividualAccount`.
    pub fn type_prefix(self) -> &'static str {
        match self {
            Bank::DanskeBank => "DanskeBank",
            Bank::CreditBank => "CreditBank",
        }
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Bank {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "danske-bank" => Ok(Bank::DanskeBank),
            "credit-bank" => Ok(Bank::CreditBank),
            _ => Err(ConfigError::UnknownBank(s.to_string())),
        }
    }
}
