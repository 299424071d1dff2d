// Pattern: Builder
// Same shape as the abstract factory, reached through a service that
// accepts any builder and forwards the build call to it.

use tracing::info;

use crate::account::{Account, CorporateAccount, IndividualAccount};
use crate::bank::Bank;

pub trait AccountBuilder {
    fn build_corporate_account(&self) -> CorporateAccount;
    fn build_individual_account(&self) -> IndividualAccount;
}

pub struct DanskeBankAccountBuilder;

impl AccountBuilder for DanskeBankAccountBuilder {
    fn build_corporate_account(&self) -> CorporateAccount {
        CorporateAccount::new(Bank::DanskeBank)
    }

    fn build_individual_account(&self) -> IndividualAccount {
        IndividualAccount::new(Bank::DanskeBank)
    }
}

pub struct CreditBankAccountBuilder;

impl AccountBuilder for CreditBankAccountBuilder {
    fn build_corporate_account(&self) -> CorporateAccount {
        CorporateAccount::new(Bank::CreditBank)
    }

    fn build_individual_account(&self) -> IndividualAccount {
        IndividualAccount::new(Bank::CreditBank)
    }
}

#[derive(Debug, Default)]
pub struct BankingService;

impl BankingService {
    pub fn create_corporate_account(&self, builder: &impl AccountBuilder) -> CorporateAccount {
        builder.build_corporate_account()
    }

    pub fn create_individual_account(&self, builder: &impl AccountBuilder) -> IndividualAccount {
        builder.build_individual_account()
    }
}

pub fn demo() -> (IndividualAccount, CorporateAccount) {
    let service = BankingService;
    let individual = service.create_individual_account(&DanskeBankAccountBuilder);
    let corporate = service.create_corporate_account(&CreditBankAccountBuilder);

    info!(account = %individual.type_name(), "built");
    info!(account = %corporate.type_name(), "built");
    (individual, corporate)
}
