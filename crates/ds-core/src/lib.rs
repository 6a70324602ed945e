//! Core types for DiceStat
//!
//! This crate holds the pieces shared by every DiceStat crate: the error
//! enum and the `Result` alias. It deliberately has no domain logic.

pub mod error;

pub use error::{Error, Result};
