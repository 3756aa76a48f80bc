//! # Lifecycle Switch
//!
//! The global pause gate and the per-call reentrancy guard. The contract
//! starts paused; the administrator must `resume` before any registry or
//! pipeline mutation is accepted. Views ignore the switch.

use soroban_sdk::{panic_with_error, Address, Env};

use crate::{access, events, storage, Error};

pub fn pause(env: &Env) {
    let admin = access::require_admin(env);
    if !storage::is_paused(env) {
        storage::set_paused(env, true);
        events::paused(env, &admin);
    }
}

pub fn resume(env: &Env) {
    let admin = access::require_admin(env);
    if storage::is_paused(env) {
        storage::set_paused(env, false);
        events::resumed(env, &admin);
    }
}

/// Admin authorization followed by the pause gate. Every registry and
/// pipeline mutation starts here.
pub fn begin_mutation(env: &Env) -> Address {
    let admin = access::require_admin(env);
    if storage::is_paused(env) {
        panic_with_error!(env, Error::Paused);
    }
    admin
}

/// Run `f` with the reentrancy flag held.
///
/// A failing call panics and the host rolls back every write of the
/// invocation, the flag included, so it only needs clearing on success.
pub fn guarded<T>(env: &Env, f: impl FnOnce() -> T) -> T {
    if storage::is_locked(env) {
        panic_with_error!(env, Error::Reentrant);
    }
    storage::set_locked(env, true);
    let out = f();
    storage::set_locked(env, false);
    out
}
