// Pattern: Prototype
// Accounts copy themselves. The copy is an explicit field-by-field clone,
// so the fields that get duplicated are spelled out per variant.
//
// `assign_customer` only gives the clone a fresh number. The customer name
// is accepted and then ignored, matching the stubbed behavior of the
// original example.

use tracing::info;
use uuid::Uuid;

use crate::bank::Bank;
use crate::config::CatalogConfig;

pub trait CorporateAccount {
    fn name(&self) -> &str;
    fn number(&self) -> Uuid;
    fn bank(&self) -> Bank;

    fn assign_customer(&mut self, customer_name: &str);

    fn clone_account(&self) -> Box<dyn CorporateAccount>;
}

// ============================================================================
// Danske Bank
// ============================================================================

#[derive(Debug, PartialEq, Eq)]
pub struct DanskeBankCorporateAccount {
    name: String,
    number: Uuid,
}

impl DanskeBankCorporateAccount {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: Uuid::nil(),
        }
    }
}

impl Clone for DanskeBankCorporateAccount {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            number: self.number,
        }
    }
}

impl CorporateAccount for DanskeBankCorporateAccount {
    fn name(&self) -> &str {
        &self.name
    }

    fn number(&self) -> Uuid {
        self.number
    }

    fn bank(&self) -> Bank {
        Bank::DanskeBank
    }

    fn assign_customer(&mut self, _customer_name: &str) {
        self.number = Uuid::new_v4();
    }

    fn clone_account(&self) -> Box<dyn CorporateAccount> {
        Box::new(self.clone())
    }
}

// ============================================================================
// Credit Bank
// ============================================================================

#[derive(Debug, PartialEq, Eq)]
pub struct CreditBankCorporateAccount {
    name: String,
    number: Uuid,
}

impl CreditBankCorporateAccount {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: Uuid::nil(),
        }
    }
}

impl Clone for CreditBankCorporateAccount {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            number: self.number,
        }
    }
}

impl CorporateAccount for CreditBankCorporateAccount {
    fn name(&self) -> &str {
        &self.name
    }

    fn number(&self) -> Uuid {
        self.number
    }

    fn bank(&self) -> Bank {
        Bank::CreditBank
    }

    fn assign_customer(&mut self, _customer_name: &str) {
        self.number = Uuid::new_v4();
    }

    fn clone_account(&self) -> Box<dyn CorporateAccount> {
        Box::new(self.clone())
    }
}

// ============================================================================
// Usage
// ============================================================================

/// A prototype and the clone that was assigned a customer.
pub type ClonedPair = (Box<dyn CorporateAccount>, Box<dyn CorporateAccount>);

/// Clones each prototype and assigns the configured customer to the copy.
pub fn demo(config: &CatalogConfig) -> Vec<ClonedPair> {
    let prototypes: Vec<Box<dyn CorporateAccount>> = vec![
        Box::new(DanskeBankCorporateAccount::new(&config.prototype.danske_name)),
        Box::new(CreditBankCorporateAccount::new(&config.prototype.credit_name)),
    ];

    prototypes
        .into_iter()
        .map(|prototype| {
            let mut account = prototype.clone_account();
            account.assign_customer(&config.prototype.customer);
            info!(
                bank = %account.bank(),
                name = account.name(),
                number = %account.number(),
                "cloned prototype"
            );
            (prototype, account)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_same_fields(a: &dyn CorporateAccount, b: &dyn CorporateAccount) {
        assert_eq!(a.name(), b.name());
        assert_eq!(a.number(), b.number());
        assert_eq!(a.bank(), b.bank());
    }

    #[test]
    fn test_new_account_has_nil_number() {
        let account = DanskeBankCorporateAccount::new("Danske");
        assert_eq!(account.number(), Uuid::nil());
        assert_eq!(
            account.number().to_string(),
            "00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_clone_copies_every_field() {
        let mut source = CreditBankCorporateAccount::new("Credit");
        source.assign_customer("ignored");

        let copy = source.clone_account();
        assert_same_fields(&source, copy.as_ref());
    }

    #[test]
    fn test_assign_customer_changes_only_the_clone() {
        let source = DanskeBankCorporateAccount::new("Danske");
        let mut copy = source.clone_account();

        copy.assign_customer("ACME CO.");

        assert_ne!(copy.number(), source.number());
        assert_eq!(source.number(), Uuid::nil());
        assert_eq!(copy.name(), "Danske");
    }

    #[test]
    fn test_assign_customer_does_not_store_name() {
        let mut account = CreditBankCorporateAccount::new("Credit Bank Corporate Account");
        account.assign_customer("ACME CO.");
        assert_eq!(account.name(), "Credit Bank Corporate Account");
    }

    #[test]
    fn test_demo_pairs() {
        let pairs = demo(&CatalogConfig::default());
        assert_eq!(pairs.len(), 2);
        for (prototype, account) in &pairs {
            assert_eq!(prototype.bank(), account.bank());
            assert_eq!(prototype.name(), account.name());
            assert_eq!(prototype.number(), Uuid::nil());
            assert_ne!(account.number(), Uuid::nil());
        }
    }

    proptest! {
        #[test]
        fn prop_clone_of_clone_matches_original(name in ".*", assign in any::<bool>()) {
            let mut source = DanskeBankCorporateAccount::new(name);
            if assign {
                source.assign_customer("customer");
            }

            let first = source.clone_account();
            let second = first.clone_account();

            prop_assert_eq!(second.name(), source.name());
            prop_assert_eq!(second.number(), source.number());
            prop_assert_eq!(second.bank(), source.bank());
        }

        #[test]
        fn prop_mutating_clone_leaves_source(name in "[a-zA-Z ]{1,32}", customer in ".*") {
            let source = CreditBankCorporateAccount::new(name);
            let before = source.clone();

            let mut copy = source.clone_account();
            copy.assign_customer(&customer);

            prop_assert_eq!(&source, &before);
            prop_assert_ne!(copy.number(), source.number());
        }
    }
}
