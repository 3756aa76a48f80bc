//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the ledger.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key              | Type           | Description                          |
//! |------------------|----------------|--------------------------------------|
//! | `Admin`          | `Address`      | Holder of the administrator capability |
//! | `Paused`         | `bool`         | Lifecycle switch, `true` after init  |
//! | `Policy`         | `ReadPolicy`   | Who may call the views               |
//! | `Locked`         | `bool`         | Reentrancy flag, set while mutating  |
//! | `ActiveFounders` | `Vec<Address>` | Active founder index                 |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                | Type           | Description                         |
//! |--------------------|----------------|-------------------------------------|
//! | `Founder(addr)`    | `Founder`      | Founder record                      |
//! | `Product(addr)`    | `Product`      | Product record, doubles as the product→owner index |
//! | `ApiKey(key)`      | `Address`      | Reverse map of live API keys        |
//! | `Category(name)`   | `Vec<Address>` | Products registered under a category |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.

use soroban_sdk::{contracttype, Address, BytesN, Env, String, Vec};

use crate::types::{Founder, Product, ReadPolicy};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Administrator address (Instance).
    Admin,
    /// Lifecycle switch (Instance).
    Paused,
    /// Read policy for views (Instance).
    Policy,
    /// Reentrancy flag (Instance).
    Locked,
    /// Active founder index (Instance).
    ActiveFounders,
    /// Founder record (Persistent).
    Founder(Address),
    /// Product record (Persistent).
    Product(Address),
    /// API key → founder (Persistent).
    ApiKey(BytesN<32>),
    /// Category → product addresses (Persistent).
    Category(String),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    bump_instance(env);
}

/// Reads the lifecycle switch. An uninitialised contract reads as paused.
pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(true)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
    bump_instance(env);
}

pub fn get_read_policy(env: &Env) -> ReadPolicy {
    env.storage()
        .instance()
        .get(&DataKey::Policy)
        .unwrap_or(ReadPolicy::Peer)
}

pub fn set_read_policy(env: &Env, policy: ReadPolicy) {
    env.storage().instance().set(&DataKey::Policy, &policy);
    bump_instance(env);
}

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(false)
}

pub fn set_locked(env: &Env, locked: bool) {
    if locked {
        env.storage().instance().set(&DataKey::Locked, &true);
    } else {
        env.storage().instance().remove(&DataKey::Locked);
    }
}

pub fn load_active_founders(env: &Env) -> Vec<Address> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::ActiveFounders)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn save_active_founders(env: &Env, founders: &Vec<Address>) {
    env.storage()
        .instance()
        .set(&DataKey::ActiveFounders, founders);
    bump_instance(env);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn load_persistent<T>(env: &Env, key: DataKey) -> Option<T>
where
    T: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let value = env.storage().persistent().get(&key);
    if value.is_some() {
        bump_persistent(env, &key);
    }
    value
}

pub fn load_founder(env: &Env, founder: &Address) -> Option<Founder> {
    load_persistent(env, DataKey::Founder(founder.clone()))
}

pub fn save_founder(env: &Env, address: &Address, founder: &Founder) {
    let key = DataKey::Founder(address.clone());
    env.storage().persistent().set(&key, founder);
    bump_persistent(env, &key);
}

pub fn load_product(env: &Env, product: &Address) -> Option<Product> {
    load_persistent(env, DataKey::Product(product.clone()))
}

pub fn has_product(env: &Env, product: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Product(product.clone()))
}

pub fn save_product(env: &Env, address: &Address, product: &Product) {
    let key = DataKey::Product(address.clone());
    env.storage().persistent().set(&key, product);
    bump_persistent(env, &key);
}

/// Founder currently holding `key`, if it is live.
pub fn api_key_owner(env: &Env, key: &BytesN<32>) -> Option<Address> {
    load_persistent(env, DataKey::ApiKey(key.clone()))
}

pub fn set_api_key_owner(env: &Env, key: &BytesN<32>, founder: &Address) {
    let key = DataKey::ApiKey(key.clone());
    env.storage().persistent().set(&key, founder);
    bump_persistent(env, &key);
}

pub fn remove_api_key(env: &Env, key: &BytesN<32>) {
    env.storage()
        .persistent()
        .remove(&DataKey::ApiKey(key.clone()));
}

pub fn load_category(env: &Env, category: &String) -> Vec<Address> {
    load_persistent(env, DataKey::Category(category.clone())).unwrap_or_else(|| Vec::new(env))
}

pub fn save_category(env: &Env, category: &String, products: &Vec<Address>) {
    let key = DataKey::Category(category.clone());
    env.storage().persistent().set(&key, products);
    bump_persistent(env, &key);
}
