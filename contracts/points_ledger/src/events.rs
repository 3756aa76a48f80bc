//! # Events
//!
//! Every successful mutation publishes one event for external audit logs.
//! Topics are `(symbol, subject)` where `subject` is the founder, product or
//! administrator the event is about; the payload is one of the
//! `#[contracttype]` structs below. Zero-amount no-ops publish nothing.

use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, String};

use crate::types::ReadPolicy;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FounderRegistered {
    pub founder: Address,
    pub name: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductRegistered {
    pub founder: Address,
    pub product: Address,
    pub category: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApiKeyIssued {
    pub founder: Address,
    pub key: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApiKeyRotated {
    pub founder: Address,
    pub old_key: BytesN<32>,
    pub new_key: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FounderStatusChanged {
    pub founder: Address,
    pub active: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductVerified {
    pub product: Address,
    pub verified: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PointsAllocated {
    pub founder: Address,
    pub amount: u128,
    pub allocated_total: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PointsDistributed {
    pub founder: Address,
    pub product: Address,
    pub amount: u128,
    pub distributed_total: u128,
    pub product_points: u128,
}

/// `discarded` is the `points % CONVERSION_RATE` remainder removed from the
/// product without producing rewards.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PointsConverted {
    pub founder: Address,
    pub product: Address,
    pub points: u128,
    pub rewards: u128,
    pub discarded: u128,
    pub pending_rewards: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsClaimed {
    pub founder: Address,
    pub product: Address,
    pub amount: u128,
    pub earned_total: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferred {
    pub previous: Address,
    pub new_admin: Address,
}

pub fn founder_registered(env: &Env, founder: &Address, name: &String) {
    env.events().publish(
        (symbol_short!("fnd_reg"), founder.clone()),
        FounderRegistered {
            founder: founder.clone(),
            name: name.clone(),
        },
    );
}

pub fn product_registered(env: &Env, founder: &Address, product: &Address, category: &String) {
    env.events().publish(
        (symbol_short!("prd_reg"), product.clone()),
        ProductRegistered {
            founder: founder.clone(),
            product: product.clone(),
            category: category.clone(),
        },
    );
}

pub fn api_key_issued(env: &Env, founder: &Address, key: &BytesN<32>) {
    env.events().publish(
        (symbol_short!("key_set"), founder.clone()),
        ApiKeyIssued {
            founder: founder.clone(),
            key: key.clone(),
        },
    );
}

pub fn api_key_rotated(env: &Env, founder: &Address, old_key: &BytesN<32>, new_key: &BytesN<32>) {
    env.events().publish(
        (symbol_short!("key_rot"), founder.clone()),
        ApiKeyRotated {
            founder: founder.clone(),
            old_key: old_key.clone(),
            new_key: new_key.clone(),
        },
    );
}

pub fn founder_status_changed(env: &Env, founder: &Address, active: bool) {
    env.events().publish(
        (symbol_short!("fnd_stat"), founder.clone()),
        FounderStatusChanged {
            founder: founder.clone(),
            active,
        },
    );
}

pub fn product_verified(env: &Env, product: &Address, verified: bool) {
    env.events().publish(
        (symbol_short!("prd_ver"), product.clone()),
        ProductVerified {
            product: product.clone(),
            verified,
        },
    );
}

pub fn points_allocated(env: &Env, founder: &Address, amount: u128, allocated_total: u128) {
    env.events().publish(
        (symbol_short!("alloc"), founder.clone()),
        PointsAllocated {
            founder: founder.clone(),
            amount,
            allocated_total,
        },
    );
}

pub fn points_distributed(env: &Env, payload: PointsDistributed) {
    env.events()
        .publish((symbol_short!("distrib"), payload.product.clone()), payload);
}

pub fn points_converted(env: &Env, payload: PointsConverted) {
    env.events()
        .publish((symbol_short!("convert"), payload.product.clone()), payload);
}

pub fn rewards_claimed(env: &Env, payload: RewardsClaimed) {
    env.events()
        .publish((symbol_short!("claim"), payload.product.clone()), payload);
}

pub fn paused(env: &Env, admin: &Address) {
    env.events()
        .publish((symbol_short!("paused"), admin.clone()), admin.clone());
}

pub fn resumed(env: &Env, admin: &Address) {
    env.events()
        .publish((symbol_short!("resumed"), admin.clone()), admin.clone());
}

pub fn admin_transferred(env: &Env, previous: &Address, new_admin: &Address) {
    env.events().publish(
        (symbol_short!("adm_xfer"), new_admin.clone()),
        AdminTransferred {
            previous: previous.clone(),
            new_admin: new_admin.clone(),
        },
    );
}

pub fn read_policy_set(env: &Env, admin: &Address, policy: ReadPolicy) {
    env.events()
        .publish((symbol_short!("policy"), admin.clone()), policy);
}
