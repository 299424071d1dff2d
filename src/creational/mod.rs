// Creational patterns: who decides which concrete type gets built.

pub mod abstract_factory;
pub mod builder;
pub mod factory_method;
pub mod prototype;
pub mod singleton;
