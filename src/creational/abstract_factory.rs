// Pattern: Abstract Factory
// One factory per bank builds the whole product family, so swapping the
// factory swaps every product at once. Callers only hold `dyn AccountFactory`.

use tracing::info;

use crate::account::{Account, CorporateAccount, IndividualAccount};
use crate::bank::Bank;
use crate::config::CatalogConfig;

// ============================================================================
// Abstractions
// ============================================================================

pub trait AccountFactory {
    fn create_corporate_account(&self) -> CorporateAccount;
    fn create_individual_account(&self) -> IndividualAccount;
}

// ============================================================================
// Implementation
// ============================================================================

pub struct DanskeBankAccountFactory;

impl AccountFactory for DanskeBankAccountFactory {
    fn create_corporate_account(&self) -> CorporateAccount {
        CorporateAccount::new(Bank::DanskeBank)
    }

    fn create_individual_account(&self) -> IndividualAccount {
        IndividualAccount::new(Bank::DanskeBank)
    }
}

pub struct CreditBankAccountFactory;

impl AccountFactory for CreditBankAccountFactory {
    fn create_corporate_account(&self) -> CorporateAccount {
        CorporateAccount::new(Bank::CreditBank)
    }

    fn create_individual_account(&self) -> IndividualAccount {
        IndividualAccount::new(Bank::CreditBank)
    }
}

/// The only place that names a concrete factory.
pub fn factory_for(bank: Bank) -> Box<dyn AccountFactory> {
    match bank {
        Bank::DanskeBank => Box::new(DanskeBankAccountFactory),
        Bank::CreditBank => Box::new(CreditBankAccountFactory),
    }
}

// ============================================================================
// Usage
// ============================================================================

pub fn demo(config: &CatalogConfig) -> (CorporateAccount, IndividualAccount) {
    let factory = factory_for(config.factory.bank);
    let corporate = factory.create_corporate_account();
    let individual = factory.create_individual_account();

    info!(
        corporate = %corporate.type_name(),
        individual = %individual.type_name(),
        "created account family"
    );
    (corporate, individual)
}
