//! # Points Ledger Contract
//!
//! A permissioned points-and-rewards ledger. An administrator registers
//! founders and their products, allocates points to founders, moves them onto
//! products, converts them into pending rewards and finally claims those into
//! the founder's permanent earnings.
//!
//! | Phase        | Entry Point(s)                                                   |
//! |--------------|------------------------------------------------------------------|
//! | Bootstrap    | [`PointsLedger::init`]                                           |
//! | Admin        | `transfer_admin`, `set_read_policy`, `pause`, `resume`           |
//! | Registration | `register_founder`, `register_product`, `update_founder_status`, `verify_product` |
//! | API keys     | `issue_api_key`, `rotate_api_key`, `update_api_key`              |
//! | Pipeline     | `allocate`, `distribute`, `convert`, `claim`                     |
//! | Views        | `founder_status`, `product_status`, `founder_products`, `total_stats`, `founder_by_api_key`, `active_founders`, `products_by_category` |
//!
//! ## Architecture
//!
//! Authorization lives in [`access`], the pause gate and reentrancy guard in
//! [`lifecycle`], state changes in [`registry`] and [`pipeline`], reads in
//! [`views`] and storage layout in [`storage`]. This file contains only the
//! public entry points.
//!
//! The contract starts **paused**: after `init` the administrator must call
//! `resume` before any registration or pipeline call succeeds.

#![no_std]

#[cfg(test)]
extern crate std;

use soroban_sdk::{contract, contracterror, contractimpl, Address, BytesN, Env, String, Vec};

mod access;
pub mod events;
mod lifecycle;
mod pipeline;
mod registry;
mod storage;
mod types;
mod views;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_access;
#[cfg(test)]
mod test_events;

pub use types::{
    ActiveFounders, Founder, FounderProducts, FounderStatus, Product, ProductStatus, ReadPolicy,
    TotalStats, CONVERSION_RATE, MAX_PRODUCTS_PER_FOUNDER,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized      = 1,
    AlreadyInitialized  = 2,
    NotAuthorized       = 3,
    Paused              = 4,
    FounderNotFound     = 5,
    ProductNotFound     = 6,
    FounderNotActive    = 7,
    AlreadyRegistered   = 8,
    CapacityExceeded    = 9,
    InsufficientBalance = 10,
    NothingToClaim      = 11,
    InvalidArgument     = 12,
    UnknownApiKey       = 13,
    ProductNotOwned     = 14,
    Overflow            = 15,
    Reentrant           = 16,
}

#[contract]
pub struct PointsLedger;

#[contractimpl]
impl PointsLedger {
    // ─────────────────────────────────────────────────────────
    // Bootstrap and administration
    // ─────────────────────────────────────────────────────────

    /// Initialise the contract with its administrator.
    ///
    /// Must be called exactly once. The ledger starts paused with the
    /// [`ReadPolicy::Peer`] read policy.
    pub fn init(env: Env, admin: Address) {
        admin.require_auth();
        access::init_admin(&env, &admin);
    }

    /// Hand the administrator capability to `new_admin`.
    pub fn transfer_admin(env: Env, new_admin: Address) {
        access::transfer_admin(&env, &new_admin);
    }

    pub fn set_read_policy(env: Env, policy: ReadPolicy) {
        access::set_read_policy(&env, policy);
    }

    pub fn pause(env: Env) {
        lifecycle::pause(&env);
    }

    pub fn resume(env: Env) {
        lifecycle::resume(&env);
    }

    pub fn admin(env: Env) -> Address {
        access::admin(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    pub fn read_policy(env: Env) -> ReadPolicy {
        storage::get_read_policy(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Registry
    // ─────────────────────────────────────────────────────────

    /// Register `founder` as an active participant with zero balances.
    pub fn register_founder(env: Env, founder: Address, name: String) -> Founder {
        lifecycle::begin_mutation(&env);
        lifecycle::guarded(&env, || registry::register_founder(&env, &founder, &name))
    }

    /// Register `product` under `founder`.
    ///
    /// Product addresses are unique across all founders and each founder may
    /// own at most [`MAX_PRODUCTS_PER_FOUNDER`] products.
    pub fn register_product(
        env: Env,
        founder: Address,
        name: String,
        product: Address,
        abi_hash: BytesN<32>,
        category: String,
    ) -> Product {
        lifecycle::begin_mutation(&env);
        lifecycle::guarded(&env, || {
            registry::register_product(&env, &founder, &name, &product, &abi_hash, &category)
        })
    }

    pub fn issue_api_key(env: Env, founder: Address, key: BytesN<32>) {
        lifecycle::begin_mutation(&env);
        lifecycle::guarded(&env, || registry::issue_api_key(&env, &founder, &key));
    }

    pub fn rotate_api_key(env: Env, founder: Address, old_key: BytesN<32>, new_key: BytesN<32>) {
        lifecycle::begin_mutation(&env);
        lifecycle::guarded(&env, || {
            registry::rotate_api_key(&env, &founder, &old_key, &new_key)
        });
    }

    /// Issue or rotate in one call. On first issuance `old_key` is installed
    /// (or `new_key` when `old_key` is all zeroes).
    pub fn update_api_key(env: Env, founder: Address, old_key: BytesN<32>, new_key: BytesN<32>) {
        lifecycle::begin_mutation(&env);
        lifecycle::guarded(&env, || {
            registry::update_api_key(&env, &founder, &old_key, &new_key)
        });
    }

    pub fn update_founder_status(env: Env, founder: Address, active: bool) {
        lifecycle::begin_mutation(&env);
        lifecycle::guarded(&env, || {
            registry::update_founder_status(&env, &founder, active)
        });
    }

    pub fn verify_product(env: Env, product: Address, verified: bool) {
        lifecycle::begin_mutation(&env);
        lifecycle::guarded(&env, || registry::verify_product(&env, &product, verified));
    }

    // ─────────────────────────────────────────────────────────
    // Points pipeline
    // ─────────────────────────────────────────────────────────

    /// Grant `amount` points to `founder`. Zero is a no-op.
    pub fn allocate(env: Env, founder: Address, amount: u128) {
        lifecycle::begin_mutation(&env);
        lifecycle::guarded(&env, || pipeline::allocate(&env, &founder, amount));
    }

    /// Move `amount` of the founder's undistributed allocation onto `product`.
    pub fn distribute(env: Env, founder: Address, product: Address, amount: u128) {
        lifecycle::begin_mutation(&env);
        lifecycle::guarded(&env, || {
            pipeline::distribute(&env, &founder, &product, amount)
        });
    }

    /// Convert `amount` of the product's points into pending rewards at
    /// [`CONVERSION_RATE`] points per reward. The remainder is discarded.
    pub fn convert(env: Env, founder: Address, product: Address, amount: u128) {
        lifecycle::begin_mutation(&env);
        lifecycle::guarded(&env, || pipeline::convert(&env, &founder, &product, amount));
    }

    /// Claim all pending rewards of `product`. Returns the amount claimed.
    pub fn claim(env: Env, founder: Address, product: Address) -> u128 {
        lifecycle::begin_mutation(&env);
        lifecycle::guarded(&env, || pipeline::claim(&env, &founder, &product))
    }

    // ─────────────────────────────────────────────────────────
    // Views
    // ─────────────────────────────────────────────────────────

    pub fn founder_status(env: Env, caller: Address, founder: Address) -> FounderStatus {
        views::founder_status(&env, &caller, &founder)
    }

    pub fn product_status(env: Env, caller: Address, product: Address) -> ProductStatus {
        views::product_status(&env, &caller, &product)
    }

    pub fn founder_products(env: Env, caller: Address, founder: Address) -> FounderProducts {
        views::founder_products(&env, &caller, &founder)
    }

    pub fn total_stats(env: Env, caller: Address) -> TotalStats {
        views::total_stats(&env, &caller)
    }

    pub fn founder_by_api_key(env: Env, caller: Address, key: BytesN<32>) -> Address {
        views::founder_by_api_key(&env, &caller, &key)
    }

    pub fn active_founders(env: Env, caller: Address) -> ActiveFounders {
        views::active_founders(&env, &caller)
    }

    pub fn products_by_category(env: Env, caller: Address, category: String) -> Vec<Address> {
        views::products_by_category(&env, &caller, &category)
    }
}
