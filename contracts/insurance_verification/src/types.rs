use soroban_sdk::{contracttype, String};

/// Insurance policy held against a property
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InsurancePolicy {
    pub property_id: u64,
    pub policy_number: String,
    pub provider: String,
    pub coverage_amount: u128,
    /// Ledger sequence at which the policy stops verifying
    pub expiration_date: u32,
    /// Set only by a successful verification
    pub verified: bool,
    /// Result of the last successful verification
    pub adequate_coverage: bool,
}

/// Storage keys
#[contracttype]
pub enum DataKey {
    Policy(u64),
}
