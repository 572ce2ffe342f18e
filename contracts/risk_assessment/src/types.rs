use soroban_sdk::contracttype;

/// Stored assessment for one property
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RiskAssessment {
    pub property_id: u64,
    /// Always within 0..=100
    pub risk_score: u32,
    pub flood_history_count: u32,
    /// Ledger sequence of the last full assessment
    pub last_assessment_date: u32,
    /// `risk_score > HIGH_RISK_THRESHOLD` as of the last full assessment
    pub high_risk: bool,
}

impl RiskAssessment {
    /// Zero-valued record used when a flood is recorded before any assessment
    pub fn unassessed(property_id: u64) -> Self {
        Self {
            property_id,
            risk_score: 0,
            flood_history_count: 0,
            last_assessment_date: 0,
            high_risk: false,
        }
    }
}

/// Read-only tiering of a stored score
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Medium,
    Elevated,
    High,
}

/// Storage keys
#[contracttype]
pub enum DataKey {
    Assessment(u64),
}
