//! # Registry
//!
//! Founder and product registration, API keys, and the administrator's
//! status flags.
//!
//! Product addresses are globally unique: the `Product(addr)` record stores
//! its owner and is never removed, so a single lookup decides whether an
//! address is already taken under any founder.

use soroban_sdk::{panic_with_error, Address, BytesN, Env, String, Vec};

use crate::types::{Founder, Product, MAX_PRODUCTS_PER_FOUNDER};
use crate::{events, storage, Error};

pub fn is_zero_key(key: &BytesN<32>) -> bool {
    key.to_array() == [0u8; 32]
}

/// Load a founder or panic with `FounderNotFound`.
pub fn load_founder(env: &Env, founder: &Address) -> Founder {
    match storage::load_founder(env, founder) {
        Some(f) => f,
        None => panic_with_error!(env, Error::FounderNotFound),
    }
}

/// Load a founder that must be active.
pub fn load_active_founder(env: &Env, founder: &Address) -> Founder {
    let record = load_founder(env, founder);
    if !record.active {
        panic_with_error!(env, Error::FounderNotActive);
    }
    record
}

/// Load a product or panic with `ProductNotFound`.
pub fn load_product(env: &Env, product: &Address) -> Product {
    match storage::load_product(env, product) {
        Some(p) => p,
        None => panic_with_error!(env, Error::ProductNotFound),
    }
}

pub fn register_founder(env: &Env, founder: &Address, name: &String) -> Founder {
    if name.len() == 0 {
        panic_with_error!(env, Error::InvalidArgument);
    }
    // Inactive founders keep their record; they are reactivated, not re-registered.
    if storage::load_founder(env, founder).is_some() {
        panic_with_error!(env, Error::AlreadyRegistered);
    }

    let record = Founder {
        name: name.clone(),
        active: true,
        api_key: None,
        allocated_points: 0,
        distributed_points: 0,
        earned_rewards: 0,
        products: Vec::new(env),
    };
    storage::save_founder(env, founder, &record);

    let mut active = storage::load_active_founders(env);
    active.push_back(founder.clone());
    storage::save_active_founders(env, &active);

    events::founder_registered(env, founder, name);
    record
}

pub fn register_product(
    env: &Env,
    founder: &Address,
    name: &String,
    product: &Address,
    abi_hash: &BytesN<32>,
    category: &String,
) -> Product {
    if storage::has_product(env, product) {
        panic_with_error!(env, Error::AlreadyRegistered);
    }
    if name.len() == 0 || is_zero_key(abi_hash) {
        panic_with_error!(env, Error::InvalidArgument);
    }

    let mut owner = load_active_founder(env, founder);
    if owner.products.len() >= MAX_PRODUCTS_PER_FOUNDER {
        panic_with_error!(env, Error::CapacityExceeded);
    }

    let record = Product {
        owner: founder.clone(),
        name: name.clone(),
        category: category.clone(),
        abi_hash: abi_hash.clone(),
        current_points: 0,
        pending_rewards: 0,
        claimed_rewards: 0,
        verified: false,
    };
    storage::save_product(env, product, &record);

    owner.products.push_back(product.clone());
    storage::save_founder(env, founder, &owner);

    if category.len() > 0 {
        let mut listed = storage::load_category(env, category);
        listed.push_back(product.clone());
        storage::save_category(env, category, &listed);
    }

    events::product_registered(env, founder, product, category);
    record
}

/// First issuance of a founder's API key.
pub fn issue_api_key(env: &Env, founder: &Address, key: &BytesN<32>) {
    let mut record = load_active_founder(env, founder);
    if record.api_key.is_some() || is_zero_key(key) {
        panic_with_error!(env, Error::InvalidArgument);
    }
    if storage::api_key_owner(env, key).is_some() {
        panic_with_error!(env, Error::AlreadyRegistered);
    }

    storage::set_api_key_owner(env, key, founder);
    record.api_key = Some(key.clone());
    storage::save_founder(env, founder, &record);

    events::api_key_issued(env, founder, key);
}

/// Replace the founder's live key `old_key` with `new_key`.
pub fn rotate_api_key(env: &Env, founder: &Address, old_key: &BytesN<32>, new_key: &BytesN<32>) {
    let mut record = load_active_founder(env, founder);
    if record.api_key.as_ref() != Some(old_key) || is_zero_key(new_key) || old_key == new_key {
        panic_with_error!(env, Error::InvalidArgument);
    }
    if storage::api_key_owner(env, new_key).is_some() {
        panic_with_error!(env, Error::AlreadyRegistered);
    }

    storage::remove_api_key(env, old_key);
    storage::set_api_key_owner(env, new_key, founder);
    record.api_key = Some(new_key.clone());
    storage::save_founder(env, founder, &record);

    events::api_key_rotated(env, founder, old_key, new_key);
}

/// Single-call key update. With no live key the first non-zero argument is
/// issued, `old_key` taking precedence; otherwise this is a rotation.
pub fn update_api_key(env: &Env, founder: &Address, old_key: &BytesN<32>, new_key: &BytesN<32>) {
    let record = load_active_founder(env, founder);
    if is_zero_key(old_key) && is_zero_key(new_key) {
        panic_with_error!(env, Error::InvalidArgument);
    }
    match record.api_key {
        None if !is_zero_key(old_key) => issue_api_key(env, founder, old_key),
        None => issue_api_key(env, founder, new_key),
        Some(_) => rotate_api_key(env, founder, old_key, new_key),
    }
}

pub fn update_founder_status(env: &Env, founder: &Address, active: bool) {
    let mut record = load_founder(env, founder);
    let mut index = storage::load_active_founders(env);
    let position = index.first_index_of(founder.clone());

    match (active, position) {
        (true, None) => index.push_back(founder.clone()),
        (false, Some(i)) => {
            index.remove(i);
        }
        _ => {}
    }
    storage::save_active_founders(env, &index);

    record.active = active;
    storage::save_founder(env, founder, &record);

    events::founder_status_changed(env, founder, active);
}

pub fn verify_product(env: &Env, product: &Address, verified: bool) {
    let mut record = load_product(env, product);
    record.verified = verified;
    storage::save_product(env, product, &record);

    events::product_verified(env, product, verified);
}
