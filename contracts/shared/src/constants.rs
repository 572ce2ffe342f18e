//! Common constants used across the flood registry contracts
//!
//! Scoring bands, coverage scaling and storage lifetimes live here so both
//! engines agree on them.

// ===== Risk Classification =====

/// Upper bound of any stored risk score
pub const MAX_RISK_SCORE: u32 = 100;

/// Scores strictly above this value are flagged high risk
pub const HIGH_RISK_THRESHOLD: u32 = 90;

/// Upper bound of the medium band (tiering only, never stored)
pub const MEDIUM_RISK_THRESHOLD: u32 = 60;

/// Upper bound of the low band (tiering only, never stored)
pub const LOW_RISK_THRESHOLD: u32 = 30;

// ===== Elevation Buckets =====

/// Elevations below this are low-lying
pub const LOW_ELEVATION_LIMIT: u32 = 10;

/// Elevations at or above this are elevated
pub const HIGH_ELEVATION_LIMIT: u32 = 30;

pub const LOW_ELEVATION_FACTOR: u32 = 50;
pub const MID_ELEVATION_FACTOR: u32 = 30;
pub const HIGH_ELEVATION_FACTOR: u32 = 10;

/// Points added per recorded flood event
pub const FLOOD_HISTORY_WEIGHT: u32 = 10;

// ===== Coverage =====

/// Risk score is scaled by this before dividing
pub const RISK_FACTOR_MULTIPLIER: u128 = 100;

/// Denominator applied to `property_value * risk_score * RISK_FACTOR_MULTIPLIER`
pub const RISK_FACTOR_DIVISOR: u128 = 100_000;

/// Flat floor is `property_value / COVERAGE_FLOOR_DIVISOR` (50%)
pub const COVERAGE_FLOOR_DIVISOR: u128 = 2;

// ===== Storage Lifetimes (in ledgers) =====
// Bumped on every write. At ~5s per ledger: 30 days ≈ 518,400 ledgers.

pub const RECORD_TTL_LEDGERS: u32 = 518_400;
pub const REGISTRY_TTL_LEDGERS: u32 = 518_400;
