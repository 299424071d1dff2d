// Pattern: Adapter
// Two external account shapes with unrelated fields, each wrapped so they
// both answer `details()` with the same normalized value.

use std::fmt;

use tracing::info;
use uuid::Uuid;

use crate::config::CatalogConfig;

// ============================================================================
// Target shape
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDetails {
    pub name: String,
    pub number: String,
}

impl fmt::Display for AccountDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.number)
    }
}

pub trait DetailsProvider {
    fn details(&self) -> AccountDetails;
}

// ============================================================================
// External shapes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanskeBankCorporateAccount {
    pub corporate_customer_name: String,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanskeBankIndividualAccount {
    pub first_name: String,
    pub last_name: String,
    pub number: String,
}

// ============================================================================
// Adapters
// ============================================================================

#[derive(Debug, Clone)]
pub struct CorporateAccountAdapter {
    account: DanskeBankCorporateAccount,
}

impl CorporateAccountAdapter {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self::wrap(DanskeBankCorporateAccount {
            corporate_customer_name: name.into(),
            number: number.into(),
        })
    }

    pub fn wrap(account: DanskeBankCorporateAccount) -> Self {
        Self { account }
    }

    pub fn adaptee(&self) -> &DanskeBankCorporateAccount {
        &self.account
    }
}

impl DetailsProvider for CorporateAccountAdapter {
    fn details(&self) -> AccountDetails {
        AccountDetails {
            name: self.account.corporate_customer_name.clone(),
            number: self.account.number.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IndividualAccountAdapter {
    account: DanskeBankIndividualAccount,
}

impl IndividualAccountAdapter {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        number: impl Into<String>,
    ) -> Self {
        Self::wrap(DanskeBankIndividualAccount {
            first_name: first_name.into(),
            last_name: last_name.into(),
            number: number.into(),
        })
    }

    pub fn wrap(account: DanskeBankIndividualAccount) -> Self {
        Self { account }
    }

    pub fn adaptee(&self) -> &DanskeBankIndividualAccount {
        &self.account
    }
}

impl DetailsProvider for IndividualAccountAdapter {
    fn details(&self) -> AccountDetails {
        AccountDetails {
            name: format!("{} {}", self.account.first_name, self.account.last_name),
            number: self.account.number.clone(),
        }
    }
}

// ============================================================================
// Usage
// ============================================================================

pub fn demo(config: &CatalogConfig) -> Vec<AccountDetails> {
    let adapter = &config.adapter;
    let corporate_number = adapter
        .corporate_number
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let individual_number = adapter
        .individual_number
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let providers: [Box<dyn DetailsProvider>; 2] = [
        Box::new(CorporateAccountAdapter::new(
            &adapter.corporate_name,
            corporate_number,
        )),
        Box::new(IndividualAccountAdapter::new(
            &adapter.first_name,
            &adapter.last_name,
            individual_number,
        )),
    ];

    let details: Vec<AccountDetails> = providers.iter().map(|p| p.details()).collect();
    for account_details in &details {
        info!("{account_details}");
    }
    details
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_corporate_details() {
        let adapter = CorporateAccountAdapter::new("ACME CO", "123");
        assert_eq!(
            adapter.details(),
            AccountDetails {
                name: "ACME CO".to_string(),
                number: "123".to_string(),
            }
        );
    }

    #[test]
    fn test_individual_details() {
        let adapter = IndividualAccountAdapter::new("Jan", "Dzban", "456");
        let details = adapter.details();
        assert_eq!(details.name, "Jan Dzban");
        assert_eq!(details.number, "456");
        assert_eq!(details.to_string(), "Jan Dzban 456");
    }

    #[test]
    fn test_adapter_leaves_adaptee_untouched() {
        let adaptee = DanskeBankIndividualAccount {
            first_name: "Jan".to_string(),
            last_name: "Dzban".to_string(),
            number: "456".to_string(),
        };
        let adapter = IndividualAccountAdapter::wrap(adaptee.clone());

        let _ = adapter.details();
        let _ = adapter.details();
        assert_eq!(adapter.adaptee(), &adaptee);
    }

    #[test]
    fn test_demo_with_configured_numbers() {
        let mut config = CatalogConfig::default();
        config.adapter.corporate_number = Some("123".to_string());
        config.adapter.individual_number = Some("456".to_string());

        let lines: Vec<String> = demo(&config).iter().map(|d| d.to_string()).collect();
        assert_eq!(lines, vec!["ACME CO 123", "Jan Dzban 456"]);
    }

    #[test]
    fn test_demo_generates_numbers() {
        let details = demo(&CatalogConfig::default());
        assert!(Uuid::parse_str(&details[0].number).is_ok());
        assert_ne!(details[0].number, details[1].number);
    }

    proptest! {
        #[test]
        fn prop_corporate_mapping_is_lossless(name in ".*", number in ".*") {
            let details = CorporateAccountAdapter::new(name.clone(), number.clone()).details();
            prop_assert_eq!(details.name, name);
            prop_assert_eq!(details.number, number);
        }

        #[test]
        fn prop_individual_name_is_joined(first in "[^ ]*", last in ".*", number in ".*") {
            let details = IndividualAccountAdapter::new(first.clone(), last.clone(), number.clone())
                .details();
            prop_assert_eq!(details.name, format!("{first} {last}"));
            prop_assert_eq!(details.number, number);
        }
    }
}
