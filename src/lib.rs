// Design Patterns Catalog
// Classic object-oriented patterns expressed with traits, enums and generics.

pub mod account;
pub mod bank;
pub mod behavioral;
pub mod config;
pub mod creational;
pub mod logging;
pub mod structural;

pub use account::{Account, AccountKind, CorporateAccount, IndividualAccount};
pub use bank::Bank;
pub use config::{CatalogConfig, ConfigError};

pub mod examples {
    //! # Design Patterns Quick Reference
    //!
    //! Every pattern lives in its own module and exposes a `demo` function
    //! that runs the pattern in isolation and returns what it observed.
    //!
    //! ## Behavioral
    //! - Command (execute-only invoker)
    //! - Mediator (registry routed by request variant)
    //!
    //! ## Creational
    //! - Abstract Factory (product families behind a trait object)
    //! - Builder (builder forwarded through a service)
    //! - Factory Method (one product per creator)
    //! - Prototype (explicit field-by-field clone)
    //! - Singleton (OnceLock)
    //!
    //! ## Structural
    //! - Adapter (external shapes normalized to `AccountDetails`)
    //! - Bridge (service abstraction over swappable creators)
    //! - Decorator (stackable orderable wrapper)
    //!
    //! Run individual examples with:
    //! ```bash
    //! cargo run --bin command
    //! cargo run --bin singleton
    //! cargo run --bin catalog
    //! ```
    //!
    //! Point `DESIGN_PATTERNS_CONFIG` at a TOML file to change the demo inputs.
}
