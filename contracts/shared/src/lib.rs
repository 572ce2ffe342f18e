#![no_std]
//! # Shared Flood Registry Library
//!
//! Constants shared by the authorization registry, the risk assessment
//! engine and the insurance verification engine.
//!
//! ```rust,ignore
//! use shared::constants::HIGH_RISK_THRESHOLD;
//! ```

pub mod constants;

pub use constants::{HIGH_RISK_THRESHOLD, LOW_RISK_THRESHOLD, MAX_RISK_SCORE, MEDIUM_RISK_THRESHOLD};
