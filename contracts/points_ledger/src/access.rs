//! # Access Control
//!
//! Two classes of caller:
//!
//! - **Administrator**: a single stored [`Address`] set by `init` and moved
//!   only by [`transfer_admin`]. Every mutating entry point calls
//!   [`require_admin`], which demands the administrator's signature.
//! - **Readers**: every view takes an explicit `caller` who must sign and
//!   must be the administrator or an active founder. Under
//!   [`ReadPolicy::OwnerOnly`] the check narrows further, see [`ReadAccess`].

use soroban_sdk::{panic_with_error, Address, Env};

use crate::storage;
use crate::types::ReadPolicy;
use crate::{events, Error};

/// Set the first administrator. Panics with `AlreadyInitialized` on a second call.
pub fn init_admin(env: &Env, admin: &Address) {
    if storage::get_admin(env).is_some() {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
    storage::set_admin(env, admin);
    storage::set_paused(env, true);
    storage::set_read_policy(env, ReadPolicy::Peer);
}

/// Return the administrator or panic with `NotInitialized`.
pub fn admin(env: &Env) -> Address {
    match storage::get_admin(env) {
        Some(admin) => admin,
        None => panic_with_error!(env, Error::NotInitialized),
    }
}

/// Require the administrator's authorization and return its address.
pub fn require_admin(env: &Env) -> Address {
    let admin = admin(env);
    admin.require_auth();
    admin
}

/// Move the administrator capability to `new_admin`.
///
/// Both the outgoing and incoming administrator must authorize, so the
/// capability cannot be handed to an address nobody controls.
pub fn transfer_admin(env: &Env, new_admin: &Address) {
    let previous = require_admin(env);
    new_admin.require_auth();
    if previous == *new_admin {
        panic_with_error!(env, Error::InvalidArgument);
    }
    storage::set_admin(env, new_admin);
    events::admin_transferred(env, &previous, new_admin);
}

pub fn set_read_policy(env: &Env, policy: ReadPolicy) {
    let admin = require_admin(env);
    storage::set_read_policy(env, policy);
    events::read_policy_set(env, &admin, policy);
}

fn is_active_founder(env: &Env, address: &Address) -> bool {
    storage::load_founder(env, address)
        .map(|f| f.active)
        .unwrap_or(false)
}

/// Outcome of the base read gate, used to apply the narrower
/// per-subject checks of [`ReadPolicy::OwnerOnly`].
pub struct ReadAccess {
    caller: Address,
    is_admin: bool,
    policy: ReadPolicy,
}

impl ReadAccess {
    /// Base gate: `caller` signs and is the administrator or an active founder.
    pub fn check(env: &Env, caller: &Address) -> Self {
        let admin = admin(env);
        caller.require_auth();

        let is_admin = *caller == admin;
        if !is_admin && !is_active_founder(env, caller) {
            panic_with_error!(env, Error::NotAuthorized);
        }

        ReadAccess {
            caller: caller.clone(),
            is_admin,
            policy: storage::get_read_policy(env),
        }
    }

    /// Data belonging to `founder` may be read.
    pub fn require_subject(&self, env: &Env, founder: &Address) {
        if self.is_admin || self.policy == ReadPolicy::Peer {
            return;
        }
        if self.caller != *founder {
            panic_with_error!(env, Error::NotAuthorized);
        }
    }

    /// Registry-wide aggregates may be read.
    pub fn require_aggregate(&self, env: &Env) {
        if self.is_admin || self.policy == ReadPolicy::Peer {
            return;
        }
        panic_with_error!(env, Error::NotAuthorized);
    }
}
