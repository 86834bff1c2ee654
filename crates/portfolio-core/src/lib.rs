//! Portfolio Core Library
//!
//! Domain logic for the contact backend: error taxonomy, configuration,
//! port traits for persistence and admin authorization, and the services
//! shared by every transport shape.

pub mod config;
pub mod error;
pub mod ports;
pub mod services;

pub use config::{Config, StoreConfig};
pub use error::{Error, Result};
