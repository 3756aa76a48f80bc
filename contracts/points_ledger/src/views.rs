//! # Views
//!
//! Read-only lookups and aggregates. Each one passes the [`ReadAccess`] gate
//! first; none consults the lifecycle switch.

use soroban_sdk::{panic_with_error, Address, BytesN, Env, String, Vec};

use crate::access::ReadAccess;
use crate::registry::{load_founder, load_product};
use crate::types::{ActiveFounders, FounderProducts, FounderStatus, ProductStatus, TotalStats};
use crate::{storage, Error};

pub fn founder_status(env: &Env, caller: &Address, founder: &Address) -> FounderStatus {
    let access = ReadAccess::check(env, caller);
    access.require_subject(env, founder);

    let record = load_founder(env, founder);
    FounderStatus {
        available_to_distribute: record.available_to_distribute(),
        name: record.name,
        allocated_points: record.allocated_points,
        distributed_points: record.distributed_points,
        earned_rewards: record.earned_rewards,
        product_count: record.products.len(),
        active: record.active,
    }
}

pub fn product_status(env: &Env, caller: &Address, product: &Address) -> ProductStatus {
    let access = ReadAccess::check(env, caller);
    let record = load_product(env, product);
    access.require_subject(env, &record.owner);

    ProductStatus {
        owner: record.owner,
        name: record.name,
        category: record.category,
        current_points: record.current_points,
        pending_rewards: record.pending_rewards,
        claimed_rewards: record.claimed_rewards,
        verified: record.verified,
    }
}

pub fn founder_products(env: &Env, caller: &Address, founder: &Address) -> FounderProducts {
    let access = ReadAccess::check(env, caller);
    access.require_subject(env, founder);

    let record = load_founder(env, founder);
    let mut out = FounderProducts {
        addresses: Vec::new(env),
        names: Vec::new(env),
        current_points: Vec::new(env),
        pending_rewards: Vec::new(env),
        verified: Vec::new(env),
    };
    for address in record.products.iter() {
        let product = load_product(env, &address);
        out.addresses.push_back(address);
        out.names.push_back(product.name);
        out.current_points.push_back(product.current_points);
        out.pending_rewards.push_back(product.pending_rewards);
        out.verified.push_back(product.verified);
    }
    out
}

pub fn total_stats(env: &Env, caller: &Address) -> TotalStats {
    let access = ReadAccess::check(env, caller);
    access.require_aggregate(env);

    let active = storage::load_active_founders(env);
    let mut stats = TotalStats {
        active_founders: active.len(),
        total_products: 0,
        verified_products: 0,
    };
    for address in active.iter() {
        let founder = load_founder(env, &address);
        stats.total_products += founder.products.len();
        for product in founder.products.iter() {
            if load_product(env, &product).verified {
                stats.verified_products += 1;
            }
        }
    }
    stats
}

pub fn founder_by_api_key(env: &Env, caller: &Address, key: &BytesN<32>) -> Address {
    let access = ReadAccess::check(env, caller);
    let founder = match storage::api_key_owner(env, key) {
        Some(founder) => founder,
        None => panic_with_error!(env, Error::UnknownApiKey),
    };
    access.require_subject(env, &founder);
    founder
}

pub fn active_founders(env: &Env, caller: &Address) -> ActiveFounders {
    let access = ReadAccess::check(env, caller);
    access.require_aggregate(env);

    let mut out = ActiveFounders {
        addresses: Vec::new(env),
        names: Vec::new(env),
        allocated_points: Vec::new(env),
        earned_rewards: Vec::new(env),
    };
    for address in storage::load_active_founders(env).iter() {
        let founder = load_founder(env, &address);
        out.addresses.push_back(address);
        out.names.push_back(founder.name);
        out.allocated_points.push_back(founder.allocated_points);
        out.earned_rewards.push_back(founder.earned_rewards);
    }
    out
}

pub fn products_by_category(env: &Env, caller: &Address, category: &String) -> Vec<Address> {
    let access = ReadAccess::check(env, caller);
    access.require_aggregate(env);
    storage::load_category(env, category)
}
