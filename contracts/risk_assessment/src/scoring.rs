//! Deterministic flood risk scoring.
//!
//! ```text
//! score = elevation_factor(elevation) + flood_history_count * 10
//! ```
//!
//! Elevation is bucketed into three bands; scores above 100 are rejected
//! rather than clamped.

use shared::constants::{
    FLOOD_HISTORY_WEIGHT, HIGH_ELEVATION_FACTOR, HIGH_ELEVATION_LIMIT, HIGH_RISK_THRESHOLD,
    LOW_ELEVATION_FACTOR, LOW_ELEVATION_LIMIT, LOW_RISK_THRESHOLD, MAX_RISK_SCORE,
    MEDIUM_RISK_THRESHOLD, MID_ELEVATION_FACTOR,
};

use crate::{errors::RiskError, types::RiskLevel};

pub fn elevation_factor(elevation: u32) -> u32 {
    if elevation < LOW_ELEVATION_LIMIT {
        LOW_ELEVATION_FACTOR
    } else if elevation < HIGH_ELEVATION_LIMIT {
        MID_ELEVATION_FACTOR
    } else {
        HIGH_ELEVATION_FACTOR
    }
}

/// Score a property. Fails with `InvalidScore` when the sum exceeds 100.
pub fn compute_risk_score(elevation: u32, flood_history_count: u32) -> Result<u32, RiskError> {
    // Saturating keeps absurd counts on the InvalidScore path
    let history_factor = flood_history_count.saturating_mul(FLOOD_HISTORY_WEIGHT);
    let score = elevation_factor(elevation).saturating_add(history_factor);

    if score > MAX_RISK_SCORE {
        return Err(RiskError::InvalidScore);
    }
    Ok(score)
}

pub fn is_high_risk_score(score: u32) -> bool {
    score > HIGH_RISK_THRESHOLD
}

pub fn classify(score: u32) -> RiskLevel {
    if score <= LOW_RISK_THRESHOLD {
        RiskLevel::Low
    } else if score <= MEDIUM_RISK_THRESHOLD {
        RiskLevel::Medium
    } else if score <= HIGH_RISK_THRESHOLD {
        RiskLevel::Elevated
    } else {
        RiskLevel::High
    }
}
