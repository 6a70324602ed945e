//! Probability building blocks for DiceStat.
//!
//! This crate hosts the layered numeric core:
//! - exact big-integer combinatorics (`factorial`, `choose`)
//! - the binomial probability mass function (`binomial`)
//! - the "at least K successes out of N dice" calculator (`chance`)
//!
//! Every operation is a pure function; data flows strictly upward from
//! `factorial` through `chance` with no shared state.

pub mod binomial;
pub mod chance;
pub mod choose;
pub mod factorial;

pub use chance::{at_least_probability, chance_of_at_least, DicePool};
