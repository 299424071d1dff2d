// Pattern: Decorator
// Wraps an account so it can be bought, while still being an `Account`
// itself. Because the wrapper is generic over any `Account`, wrappers stack.

use tracing::info;

use crate::account::{Account, AccountKind, IndividualAccount};
use crate::bank::Bank;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub bank: Bank,
    pub account: String,
}

/// Abstract decorator: an account that can also be bought.
pub trait OrderableAccount: Account {
    fn buy(&self) -> Purchase;
}

// Concrete decorator
#[derive(Debug, Clone)]
pub struct DanskeBankOrderableAccount<A: Account> {
    account: A,
}

impl<A: Account> DanskeBankOrderableAccount<A> {
    pub fn new(account: A) -> Self {
        Self { account }
    }

    pub fn inner(&self) -> &A {
        &self.account
    }

    pub fn into_inner(self) -> A {
        self.account
    }

    fn log(&self) {
        info!("Someone is buying {} account", Bank::DanskeBank);
    }
}

impl<A: Account> Account for DanskeBankOrderableAccount<A> {
    fn bank(&self) -> Bank {
        self.account.bank()
    }

    fn kind(&self) -> AccountKind {
        self.account.kind()
    }
}

impl<A: Account> OrderableAccount for DanskeBankOrderableAccount<A> {
    fn buy(&self) -> Purchase {
        self.log();
        Purchase {
            bank: self.bank(),
            account: self.type_name(),
        }
    }
}

impl<A: OrderableAccount> DanskeBankOrderableAccount<A> {
    /// Buys through the wrapped decorator first, then through this one.
    pub fn buy_through(&self) -> Vec<Purchase> {
        vec![self.account.buy(), self.buy()]
    }
}

pub fn demo() -> Purchase {
    let account = IndividualAccount::new(Bank::DanskeBank);
    let orderable = DanskeBankOrderableAccount::new(account);
    orderable.buy()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(account: &dyn Account) -> String {
        account.type_name()
    }

    #[test]
    fn test_buy_leaves_component_unchanged() {
        let account = IndividualAccount::new(Bank::DanskeBank);
        let orderable = DanskeBankOrderableAccount::new(account.clone());

        let purchase = orderable.buy();

        assert_eq!(purchase.account, "DanskeBankIndividualAccount");
        assert_eq!(orderable.inner(), &account);
        assert_eq!(orderable.into_inner(), account);
    }

    #[test]
    fn test_decorator_is_still_an_account() {
        let orderable = DanskeBankOrderableAccount::new(IndividualAccount::new(Bank::CreditBank));
        assert_eq!(describe(&orderable), "CreditBankIndividualAccount");
        assert_eq!(orderable.kind(), AccountKind::Individual);
    }

    #[test]
    fn test_decorators_stack() {
        let inner = DanskeBankOrderableAccount::new(IndividualAccount::new(Bank::DanskeBank));
        let outer = DanskeBankOrderableAccount::new(inner);

        let purchases = outer.buy_through();

        assert_eq!(purchases.len(), 2);
        assert_eq!(purchases[0], purchases[1]);
        assert_eq!(outer.inner().inner().bank(), Bank::DanskeBank);
    }

    #[test]
    fn test_demo() {
        assert_eq!(
            demo(),
            Purchase {
                bank: Bank::DanskeBank,
                account: "DanskeBankIndividualAccount".to_string(),
            }
        );
    }
}
