// Pattern: Factory Method
// Each creator overrides a single creation method and always yields the
// one product variant it is specialized for.

use tracing::info;

use crate::account::{Account, IndividualAccount};
use crate::bank::Bank;

pub trait IndividualAccountFactory {
    fn build_individual_account(&self) -> IndividualAccount;
}

pub struct DanskeBankAccountFactory;

impl IndividualAccountFactory for DanskeBankAccountFactory {
    fn build_individual_account(&self) -> IndividualAccount {
        IndividualAccount::new(Bank::DanskeBank)
    }
}

pub struct CreditBankAccountFactory;

impl IndividualAccountFactory for CreditBankAccountFactory {
    fn build_individual_account(&self) -> IndividualAccount {
        IndividualAccount::new(Bank::CreditBank)
    }
}

/// One product per creator, in creator order.
pub fn build_all(factories: &[Box<dyn IndividualAccountFactory>]) -> Vec<IndividualAccount> {
    factories
        .iter()
        .map(|factory| factory.build_individual_account())
        .collect()
}

pub fn demo() -> Vec<IndividualAccount> {
    let factories: Vec<Box<dyn IndividualAccountFactory>> = vec![
        Box::new(DanskeBankAccountFactory),
        Box::new(CreditBankAccountFactory),
    ];

    let accounts = build_all(&factories);
    for account in &accounts {
        info!("Created {}", account.type_name());
    }
    accounts
}
