//! Authorization Registry for the Flood Registry contracts
//!
//! Every engine links this module and keeps its own registry in its own
//! contract storage:
//!
//! - one owner, fixed when the engine is initialized
//! - a flat `principal -> authorized` flag map
//! - owner-only administration of that map
//!
//! Entries are never deleted, only flipped between `true` and `false`.

#![no_std]

use shared::constants::REGISTRY_TTL_LEDGERS;
use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// Storage keys for the registry
#[contracttype]
#[derive(Clone)]
pub enum AuthKey {
    /// Principal that initialized the engine
    Owner,
    /// Maps Address -> bool
    Authorized(Address),
}

/// Authorization errors
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AuthError {
    NotAuthorized,
    NotInitialized,
    AlreadyInitialized,
}

fn set_flag(env: &Env, principal: &Address, authorized: bool) {
    let key = AuthKey::Authorized(principal.clone());
    env.storage().persistent().set(&key, &authorized);
    env.storage()
        .persistent()
        .extend_ttl(&key, REGISTRY_TTL_LEDGERS, REGISTRY_TTL_LEDGERS);
}

/// Store the owner and authorize it (call once during initialization)
pub fn initialize_owner(env: &Env, owner: &Address) -> Result<(), AuthError> {
    if has_owner(env) {
        return Err(AuthError::AlreadyInitialized);
    }

    env.storage().persistent().set(&AuthKey::Owner, owner);
    env.storage()
        .persistent()
        .extend_ttl(&AuthKey::Owner, REGISTRY_TTL_LEDGERS, REGISTRY_TTL_LEDGERS);
    set_flag(env, owner, true);

    Ok(())
}

pub fn has_owner(env: &Env) -> bool {
    env.storage().persistent().has(&AuthKey::Owner)
}

/// Get the owner address
pub fn get_owner(env: &Env) -> Result<Address, AuthError> {
    env.storage()
        .persistent()
        .get(&AuthKey::Owner)
        .ok_or(AuthError::NotInitialized)
}

/// Check whether `principal` is flagged as authorized.
/// Absent entries read as `false`.
pub fn is_authorized(env: &Env, principal: &Address) -> bool {
    env.storage()
        .persistent()
        .get::<AuthKey, bool>(&AuthKey::Authorized(principal.clone()))
        .unwrap_or(false)
}

/// Require that `caller` is the owner
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), AuthError> {
    let owner = get_owner(env)?;
    if owner == *caller {
        Ok(())
    } else {
        Err(AuthError::NotAuthorized)
    }
}

/// Require that `caller` holds the authorized flag
pub fn require_authorized(env: &Env, caller: &Address) -> Result<(), AuthError> {
    if is_authorized(env, caller) {
        Ok(())
    } else {
        Err(AuthError::NotAuthorized)
    }
}

/// Authorize `principal` (owner only)
pub fn add_authorized(env: &Env, caller: &Address, principal: &Address) -> Result<(), AuthError> {
    require_owner(env, caller)?;

    set_flag(env, principal, true);

    env.events()
        .publish((symbol_short!("auth"), symbol_short!("added")), principal.clone());

    Ok(())
}

/// De-authorize `principal` (owner only).
///
/// Succeeds for principals that were never added; the entry is written as `false`.
/// The owner may remove itself and can always add itself back.
pub fn remove_authorized(
    env: &Env,
    caller: &Address,
    principal: &Address,
) -> Result<(), AuthError> {
    require_owner(env, caller)?;

    set_flag(env, principal, false);

    env.events()
        .publish((symbol_short!("auth"), symbol_short!("removed")), principal.clone());

    Ok(())
}

/// Utility: verify the caller's signature, then check the registry.
/// This is the pattern every gated engine operation goes through.
pub fn verify_and_require_authorized(env: &Env, caller: &Address) -> Result<(), AuthError> {
    caller.require_auth();
    require_authorized(env, caller)
}
