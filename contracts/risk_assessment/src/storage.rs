use shared::constants::RECORD_TTL_LEDGERS;
use soroban_sdk::Env;

use crate::types::{DataKey, RiskAssessment};

pub fn save_assessment(env: &Env, assessment: &RiskAssessment) {
    let key = DataKey::Assessment(assessment.property_id);
    env.storage().persistent().set(&key, assessment);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_TTL_LEDGERS, RECORD_TTL_LEDGERS);
}

pub fn get_assessment(env: &Env, property_id: u64) -> Option<RiskAssessment> {
    env.storage()
        .persistent()
        .get(&DataKey::Assessment(property_id))
}
