//! Portfolio Types - Pure type definitions for the contact backend
//!
//! This crate contains only plain data types with no async runtime
//! dependencies, shared by the server, the one-shot functions, and the
//! storage backends.

pub mod message;
pub mod response;

pub use message::*;
pub use response::*;
