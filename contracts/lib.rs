#![no_std]
//! Flood Registry
//!
//! Tamper-evident flood risk records for registered properties and
//! verification that the insurance held against each property meets a
//! risk-derived minimum.
//!
//! Two engines, each deployed as its own contract with its own registry:
//!
//! - [`risk`]: scores properties from elevation and flood history
//! - [`insurance`]: stores policies and verifies them against required coverage
//!
//! The insurance engine never reads the risk engine's storage. The score
//! crosses over as a plain argument to `verify_insurance_policy`, so the
//! dependency is visible at the call site.

use soroban_sdk::{Address, Env};

/// Re-export authorization module for easy access
pub mod authorization {
    pub use authorization::{
        add_authorized, get_owner, has_owner, initialize_owner, is_authorized,
        remove_authorized, require_authorized, require_owner, verify_and_require_authorized,
        AuthError, AuthKey,
    };
}

pub mod risk {
    pub use risk_assessment_contract::{
        classify, compute_risk_score, elevation_factor, RiskAssessment,
        RiskAssessmentContract, RiskAssessmentContractClient, RiskError, RiskLevel,
    };
}

pub mod insurance {
    pub use insurance_verification_contract::{
        required_coverage, InsurancePolicy, InsuranceError, InsuranceVerificationContract,
        InsuranceVerificationContractClient,
    };
}

pub use shared::constants;

/// Outcome of assessing a property and verifying its policy in one pass
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CoverageCheck {
    pub risk_score: u32,
    pub high_risk: bool,
    pub adequate_coverage: bool,
}

/// Coordinating error: whichever engine rejected the call
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CoverageCheckError {
    Risk(risk::RiskError),
    Insurance(insurance::InsuranceError),
    /// The host failed the invocation or returned an undecodable value
    Host,
}

impl From<risk::RiskError> for CoverageCheckError {
    fn from(err: risk::RiskError) -> Self {
        CoverageCheckError::Risk(err)
    }
}

impl From<insurance::InsuranceError> for CoverageCheckError {
    fn from(err: insurance::InsuranceError) -> Self {
        CoverageCheckError::Insurance(err)
    }
}

/// Reassess a property, then verify its policy with the fresh score.
///
/// `caller` must be authorized on both engines. The risk record is
/// committed before verification runs, so a verification failure leaves the
/// new assessment in place.
pub fn assess_and_verify(
    env: &Env,
    risk_engine: &Address,
    insurance_engine: &Address,
    caller: &Address,
    property_id: u64,
    elevation: u32,
    flood_history_count: u32,
    property_value: u128,
) -> Result<CoverageCheck, CoverageCheckError> {
    let risk = risk::RiskAssessmentContractClient::new(env, risk_engine);
    let insurance = insurance::InsuranceVerificationContractClient::new(env, insurance_engine);

    let risk_score = match risk.try_assess_risk(
        caller,
        &property_id,
        &elevation,
        &flood_history_count,
    ) {
        Ok(Ok(score)) => score,
        Ok(Err(_)) | Err(Err(_)) => return Err(CoverageCheckError::Host),
        Err(Ok(err)) => return Err(err.into()),
    };
    let high_risk = risk.is_high_risk(&property_id);

    let adequate_coverage = match insurance.try_verify_insurance_policy(
        caller,
        &property_id,
        &risk_score,
        &property_value,
    ) {
        Ok(Ok(adequate)) => adequate,
        Ok(Err(_)) | Err(Err(_)) => return Err(CoverageCheckError::Host),
        Err(Ok(err)) => return Err(err.into()),
    };

    Ok(CoverageCheck {
        risk_score,
        high_risk,
        adequate_coverage,
    })
}
