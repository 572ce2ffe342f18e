use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env};

use crate::{
    errors::RiskError,
    scoring, storage,
    types::{RiskAssessment, RiskLevel},
};

#[contract]
pub struct RiskAssessmentContract;

#[contractimpl]
impl RiskAssessmentContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Initialize the engine. The owner is authorized and administers the registry.
    /// Can only be called once.
    pub fn initialize(env: Env, owner: Address) -> Result<(), RiskError> {
        if authorization::has_owner(&env) {
            return Err(RiskError::AlreadyInitialized);
        }
        owner.require_auth();
        authorization::initialize_owner(&env, &owner)?;

        env.events().publish((symbol_short!("init"),), owner);

        Ok(())
    }

    pub fn get_owner(env: Env) -> Result<Address, RiskError> {
        Ok(authorization::get_owner(&env)?)
    }

    // ── Access Control ───────────────────────────────────────────────────────

    pub fn add_authorized(env: Env, caller: Address, principal: Address) -> Result<bool, RiskError> {
        caller.require_auth();
        authorization::add_authorized(&env, &caller, &principal)?;
        Ok(true)
    }

    pub fn remove_authorized(
        env: Env,
        caller: Address,
        principal: Address,
    ) -> Result<bool, RiskError> {
        caller.require_auth();
        authorization::remove_authorized(&env, &caller, &principal)?;
        Ok(true)
    }

    pub fn is_authorized(env: Env, principal: Address) -> bool {
        authorization::is_authorized(&env, &principal)
    }

    // ── Assessment ───────────────────────────────────────────────────────────

    /// Compute and store the risk score for a property.
    ///
    /// `flood_history_count` replaces any stored count. The record is
    /// stamped with the current ledger sequence. Returns the score.
    pub fn assess_risk(
        env: Env,
        caller: Address,
        property_id: u64,
        elevation: u32,
        flood_history_count: u32,
    ) -> Result<u32, RiskError> {
        authorization::verify_and_require_authorized(&env, &caller)?;

        let risk_score = scoring::compute_risk_score(elevation, flood_history_count)?;
        let high_risk = scoring::is_high_risk_score(risk_score);

        let assessment = RiskAssessment {
            property_id,
            risk_score,
            flood_history_count,
            last_assessment_date: env.ledger().sequence(),
            high_risk,
        };
        storage::save_assessment(&env, &assessment);

        env.events().publish(
            (symbol_short!("risk"), symbol_short!("assessed")),
            (property_id, risk_score, high_risk),
        );

        Ok(risk_score)
    }

    /// Add one flood event to a property's history and return the new count.
    ///
    /// Score, flag and assessment date are left as they are; they stay stale
    /// until the next `assess_risk`.
    pub fn record_flood_event(env: Env, caller: Address, property_id: u64) -> Result<u32, RiskError> {
        authorization::verify_and_require_authorized(&env, &caller)?;

        let mut assessment = storage::get_assessment(&env, property_id)
            .unwrap_or_else(|| RiskAssessment::unassessed(property_id));
        assessment.flood_history_count = assessment
            .flood_history_count
            .checked_add(1)
            .ok_or(RiskError::ArithmeticOverflow)?;
        storage::save_assessment(&env, &assessment);

        env.events().publish(
            (symbol_short!("flood"), symbol_short!("recorded")),
            (property_id, assessment.flood_history_count),
        );

        Ok(assessment.flood_history_count)
    }

    // ── Query Functions ──────────────────────────────────────────────────────

    pub fn get_risk_assessment(env: Env, property_id: u64) -> Option<RiskAssessment> {
        storage::get_assessment(&env, property_id)
    }

    pub fn is_high_risk(env: Env, property_id: u64) -> bool {
        storage::get_assessment(&env, property_id)
            .map(|a| a.high_risk)
            .unwrap_or(false)
    }

    pub fn get_flood_history_count(env: Env, property_id: u64) -> u32 {
        storage::get_assessment(&env, property_id)
            .map(|a| a.flood_history_count)
            .unwrap_or(0)
    }

    /// Tier of the stored score. Derived on read, never stored.
    pub fn get_risk_level(env: Env, property_id: u64) -> Option<RiskLevel> {
        storage::get_assessment(&env, property_id).map(|a| scoring::classify(a.risk_score))
    }

    /// Score without storing anything
    pub fn calculate_risk_score(
        _env: Env,
        elevation: u32,
        flood_history_count: u32,
    ) -> Result<u32, RiskError> {
        scoring::compute_risk_score(elevation, flood_history_count)
    }
}
