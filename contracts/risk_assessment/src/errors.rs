use authorization::AuthError;
use soroban_sdk::contracterror;

/// Error codes are stable and shared with existing callers.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum RiskError {
    /// Caller is not in the registry (or not the owner for admin calls)
    NotAuthorized = 100,
    /// Computed score exceeds 100
    InvalidScore = 101,
    /// Flood history count cannot be incremented further
    ArithmeticOverflow = 103,
    AlreadyInitialized = 110,
    NotInitialized = 111,
}

impl From<AuthError> for RiskError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::NotAuthorized => RiskError::NotAuthorized,
            AuthError::NotInitialized => RiskError::NotInitialized,
            AuthError::AlreadyInitialized => RiskError::AlreadyInitialized,
        }
    }
}
