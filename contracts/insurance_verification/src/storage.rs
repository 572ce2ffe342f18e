use shared::constants::RECORD_TTL_LEDGERS;
use soroban_sdk::Env;

use crate::types::{DataKey, InsurancePolicy};

pub fn save_policy(env: &Env, policy: &InsurancePolicy) {
    let key = DataKey::Policy(policy.property_id);
    env.storage().persistent().set(&key, policy);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_TTL_LEDGERS, RECORD_TTL_LEDGERS);
}

pub fn get_policy(env: &Env, property_id: u64) -> Option<InsurancePolicy> {
    env.storage()
        .persistent()
        .get(&DataKey::Policy(property_id))
}
