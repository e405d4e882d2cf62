//! Odds conversion module
//!
//! The core engine plus the bounded-denominator rational approximation it
//! builds on.

pub mod engine;
pub mod rational;

pub use engine::{convert, from_decimal, to_decimal, DecimalOdds};
pub use rational::{limit_denominator, MAX_DENOMINATOR};
