//! Creational patterns over the toy aircraft domain.
//!
//! Each module ends in a `client_code` function that exercises the pattern
//! through its traits and returns the transcript instead of printing it.

pub mod abstract_factory;
pub mod builder;
pub mod factory_method;
pub mod prototype;
