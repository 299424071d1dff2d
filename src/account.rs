// Shallow account products shared by the creational and structural examples.
// They hold nothing but the tag of the bank that produced them.

use std::fmt;

use crate::bank::Bank;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Corporate,
    Individual,
}

impl AccountKind {
    fn type_suffix(self) -> &'static str {
        match self {
            AccountKind::Corporate => "CorporateAccount",
            AccountKind::Individual => "IndividualAccount",
        }
    }
}

/// Minimal capability every account exposes, independent of who made it.
pub trait Account {
    fn bank(&self) -> Bank;

    fn kind(&self) -> AccountKind;

    /// Name of the resolved concrete variant, e.g. `CreditBankCorporateAccount`.
    fn type_name(&self) -> String {
        format!("{}{}", self.bank().type_prefix(), self.kind().type_suffix())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorporateAccount {
    bank: Bank,
}

impl CorporateAccount {
    pub(crate) fn new(bank: Bank) -> Self {
        Self { bank }
    }
}

impl Account for CorporateAccount {
    fn bank(&self) -> Bank {
        self.bank
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Corporate
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndividualAccount {
    bank: Bank,
}

impl IndividualAccount {
    pub(crate) fn new(bank: Bank) -> Self {
        Self { bank }
    }
}

impl Account for IndividualAccount {
    fn bank(&self) -> Bank {
        self.bank
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Individual
    }
}

impl fmt::Display for CorporateAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name())
    }
}

impl fmt::Display for IndividualAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(
            CorporateAccount::new(Bank::DanskeBank).type_name(),
            "DanskeBankCorporateAccount"
        );
        assert_eq!(
            IndividualAccount::new(Bank::CreditBank).to_string(),
            "CreditBankIndividualAccount"
        );
    }
}
