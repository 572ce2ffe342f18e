use authorization::AuthError;
use soroban_sdk::contracterror;

/// Error codes 100-102 are stable and shared with existing callers.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum InsuranceError {
    /// Caller is not in the registry (or not the owner for admin calls)
    NotAuthorized = 100,
    /// No policy registered for the property
    PolicyNotFound = 101,
    /// Current ledger sequence is at or past the policy's expiration
    ExpiredPolicy = 102,
    /// Required coverage does not fit in u128
    ArithmeticOverflow = 103,
    AlreadyInitialized = 110,
    NotInitialized = 111,
}

impl From<AuthError> for InsuranceError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::NotAuthorized => InsuranceError::NotAuthorized,
            AuthError::NotInitialized => InsuranceError::NotInitialized,
            AuthError::AlreadyInitialized => InsuranceError::AlreadyInitialized,
        }
    }
}
