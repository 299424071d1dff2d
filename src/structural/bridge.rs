// Pattern: Bridge
// The service abstraction and the account creators vary independently:
// the service holds whichever creator it was built with and delegates to it.

use tracing::info;

use crate::account::{Account, IndividualAccount};
use crate::bank::Bank;

// ============================================================================
// Implementor
// ============================================================================

pub trait AccountCreator {
    fn create_account(&self) -> IndividualAccount;
}

pub struct DanskeBankAccountCreator;

impl AccountCreator for DanskeBankAccountCreator {
    fn create_account(&self) -> IndividualAccount {
        IndividualAccount::new(Bank::DanskeBank)
    }
}

pub struct CreditBankAccountCreator;

impl AccountCreator for CreditBankAccountCreator {
    fn create_account(&self) -> IndividualAccount {
        IndividualAccount::new(Bank::CreditBank)
    }
}

// ============================================================================
// Abstraction
// ============================================================================

pub trait AccountServiceApi {
    fn creator(&self) -> &dyn AccountCreator;

    fn create_account(&self) -> IndividualAccount {
        self.creator().create_account()
    }
}

/// Refined abstraction.
pub struct AccountService {
    creator: Box<dyn AccountCreator>,
}

impl AccountService {
    pub fn new(creator: Box<dyn AccountCreator>) -> Self {
        Self { creator }
    }
}

impl AccountServiceApi for AccountService {
    fn creator(&self) -> &dyn AccountCreator {
        self.creator.as_ref()
    }
}

// ============================================================================
// Usage
// ============================================================================

pub fn demo() -> Vec<String> {
    let mut names = Vec::new();

    let mut service = AccountService::new(Box::new(DanskeBankAccountCreator));
    names.push(service.create_account().type_name());

    service = AccountService::new(Box::new(CreditBankAccountCreator));
    names.push(service.create_account().type_name());

    for name in &names {
        info!("{name}");
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_delegates_to_creator() {
        let service = AccountService::new(Box::new(DanskeBankAccountCreator));
        assert_eq!(service.create_account().bank(), Bank::DanskeBank);
    }

    #[test]
    fn test_swapping_creator_keeps_service_type() {
        let services: Vec<AccountService> = vec![
            AccountService::new(Box::new(DanskeBankAccountCreator)),
            AccountService::new(Box::new(CreditBankAccountCreator)),
        ];

        let banks: Vec<Bank> = services.iter().map(|s| s.create_account().bank()).collect();
        assert_eq!(banks, vec![Bank::DanskeBank, Bank::CreditBank]);
    }

    // A creator defined outside the module plugs in without touching the service.
    struct FixedCreator(Bank);

    impl AccountCreator for FixedCreator {
        fn create_account(&self) -> IndividualAccount {
            IndividualAccount::new(self.0)
        }
    }

    #[test]
    fn test_new_creator_needs_no_service_change() {
        let service = AccountService::new(Box::new(FixedCreator(Bank::CreditBank)));
        assert_eq!(
            service.create_account().type_name(),
            "CreditBankIndividualAccount"
        );
    }

    #[test]
    fn test_demo() {
        assert_eq!(
            demo(),
            vec!["DanskeBankIndividualAccount", "CreditBankIndividualAccount"]
        );
    }
}
