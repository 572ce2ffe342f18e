use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String};

use crate::{coverage, errors::InsuranceError, storage, types::InsurancePolicy};

#[contract]
pub struct InsuranceVerificationContract;

#[contractimpl]
impl InsuranceVerificationContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Initialize the engine. The owner is authorized and administers the registry.
    /// Can only be called once.
    pub fn initialize(env: Env, owner: Address) -> Result<(), InsuranceError> {
        if authorization::has_owner(&env) {
            return Err(InsuranceError::AlreadyInitialized);
        }
        owner.require_auth();
        authorization::initialize_owner(&env, &owner)?;

        env.events().publish((symbol_short!("init"),), owner);

        Ok(())
    }

    pub fn get_owner(env: Env) -> Result<Address, InsuranceError> {
        Ok(authorization::get_owner(&env)?)
    }

    // ── Access Control ───────────────────────────────────────────────────────

    pub fn add_authorized(
        env: Env,
        caller: Address,
        principal: Address,
    ) -> Result<bool, InsuranceError> {
        caller.require_auth();
        authorization::add_authorized(&env, &caller, &principal)?;
        Ok(true)
    }

    pub fn remove_authorized(
        env: Env,
        caller: Address,
        principal: Address,
    ) -> Result<bool, InsuranceError> {
        caller.require_auth();
        authorization::remove_authorized(&env, &caller, &principal)?;
        Ok(true)
    }

    pub fn is_authorized(env: Env, principal: Address) -> bool {
        authorization::is_authorized(&env, &principal)
    }

    // ── Policies ─────────────────────────────────────────────────────────────

    /// Register the policy held against a property.
    ///
    /// Open to any caller. Replaces any existing record for the property,
    /// resetting `verified` and `adequate_coverage` to `false`.
    pub fn register_insurance_policy(
        env: Env,
        property_id: u64,
        policy_number: String,
        provider: String,
        coverage_amount: u128,
        expiration_date: u32,
    ) -> Result<bool, InsuranceError> {
        let policy = InsurancePolicy {
            property_id,
            policy_number: policy_number.clone(),
            provider,
            coverage_amount,
            expiration_date,
            verified: false,
            adequate_coverage: false,
        };
        storage::save_policy(&env, &policy);

        env.events().publish(
            (symbol_short!("policy"), symbol_short!("register")),
            (property_id, policy_number, coverage_amount, expiration_date),
        );

        Ok(true)
    }

    /// Verify a policy against the coverage required for `risk_score` and
    /// `property_value`.
    ///
    /// Checks, in order: caller authorized, policy exists, policy not expired.
    /// On success marks the policy verified and returns whether its coverage
    /// is adequate; an inadequate policy is still a successful verification.
    pub fn verify_insurance_policy(
        env: Env,
        caller: Address,
        property_id: u64,
        risk_score: u32,
        property_value: u128,
    ) -> Result<bool, InsuranceError> {
        authorization::verify_and_require_authorized(&env, &caller)?;

        let mut policy =
            storage::get_policy(&env, property_id).ok_or(InsuranceError::PolicyNotFound)?;

        if env.ledger().sequence() >= policy.expiration_date {
            return Err(InsuranceError::ExpiredPolicy);
        }

        let required = coverage::required_coverage(risk_score, property_value)?;
        policy.adequate_coverage = policy.coverage_amount >= required;
        policy.verified = true;
        storage::save_policy(&env, &policy);

        env.events().publish(
            (symbol_short!("policy"), symbol_short!("verified")),
            (property_id, required, policy.adequate_coverage),
        );

        Ok(policy.adequate_coverage)
    }

    // ── Query Functions ──────────────────────────────────────────────────────

    pub fn get_insurance_policy(env: Env, property_id: u64) -> Option<InsurancePolicy> {
        storage::get_policy(&env, property_id)
    }

    pub fn has_adequate_coverage(env: Env, property_id: u64) -> bool {
        storage::get_policy(&env, property_id)
            .map(|p| p.adequate_coverage)
            .unwrap_or(false)
    }

    pub fn is_insurance_verified(env: Env, property_id: u64) -> bool {
        storage::get_policy(&env, property_id)
            .map(|p| p.verified)
            .unwrap_or(false)
    }

    /// True once the current ledger sequence reaches the expiration date
    pub fn is_policy_expired(env: Env, property_id: u64) -> bool {
        let now = env.ledger().sequence();
        storage::get_policy(&env, property_id)
            .map(|p| now >= p.expiration_date)
            .unwrap_or(false)
    }

    pub fn calculate_required_coverage(
        _env: Env,
        risk_score: u32,
        property_value: u128,
    ) -> Result<u128, InsuranceError> {
        coverage::required_coverage(risk_score, property_value)
    }

    /// Amount by which the stored coverage falls short of the requirement (0 when adequate)
    pub fn get_coverage_gap(
        env: Env,
        property_id: u64,
        risk_score: u32,
        property_value: u128,
    ) -> Result<u128, InsuranceError> {
        let policy =
            storage::get_policy(&env, property_id).ok_or(InsuranceError::PolicyNotFound)?;
        let required = coverage::required_coverage(risk_score, property_value)?;
        Ok(required.saturating_sub(policy.coverage_amount))
    }
}
