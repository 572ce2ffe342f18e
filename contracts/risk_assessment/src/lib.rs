#![no_std]

mod contract;
mod errors;
mod scoring;
mod storage;
mod types;

pub use contract::{RiskAssessmentContract, RiskAssessmentContractClient};
pub use errors::RiskError;
pub use scoring::{classify, compute_risk_score, elevation_factor};
pub use types::{RiskAssessment, RiskLevel};
