//! # Points Pipeline
//!
//! `allocate` → `distribute` → `convert` → `claim`. Each stage moves value
//! forward and none can be undone.
//!
//! Conversion uses floor division by [`CONVERSION_RATE`]: the remainder of
//! each call is taken off the product and produces no rewards. The amount
//! lost is published as `discarded` in the conversion event.

use soroban_sdk::{panic_with_error, Address, Env};

use crate::events::{self, PointsConverted, PointsDistributed, RewardsClaimed};
use crate::registry::{load_active_founder, load_product};
use crate::types::{Product, CONVERSION_RATE};
use crate::{storage, Error};

fn checked_add(env: &Env, a: u128, b: u128) -> u128 {
    match a.checked_add(b) {
        Some(v) => v,
        None => panic_with_error!(env, Error::Overflow),
    }
}

/// Load `product` and require that `founder` owns it.
fn load_owned_product(env: &Env, founder: &Address, product: &Address) -> Product {
    let record = load_product(env, product);
    if record.owner != *founder {
        panic_with_error!(env, Error::ProductNotOwned);
    }
    record
}

pub fn allocate(env: &Env, founder: &Address, amount: u128) {
    if amount == 0 {
        return;
    }
    let mut record = load_active_founder(env, founder);
    record.allocated_points = checked_add(env, record.allocated_points, amount);
    storage::save_founder(env, founder, &record);

    events::points_allocated(env, founder, amount, record.allocated_points);
}

/// Move `amount` of the founder's undistributed allocation onto `product`.
///
/// Like `convert` and `claim`, the product must belong to `founder`;
/// points never land on another founder's product.
pub fn distribute(env: &Env, founder: &Address, product: &Address, amount: u128) {
    if amount == 0 {
        return;
    }
    let mut owner = load_active_founder(env, founder);
    let mut target = load_owned_product(env, founder, product);

    if amount > owner.available_to_distribute() {
        panic_with_error!(env, Error::InsufficientBalance);
    }

    owner.distributed_points += amount;
    target.current_points = checked_add(env, target.current_points, amount);
    storage::save_founder(env, founder, &owner);
    storage::save_product(env, product, &target);

    events::points_distributed(
        env,
        PointsDistributed {
            founder: founder.clone(),
            product: product.clone(),
            amount,
            distributed_total: owner.distributed_points,
            product_points: target.current_points,
        },
    );
}

pub fn convert(env: &Env, founder: &Address, product: &Address, amount: u128) {
    if amount == 0 {
        return;
    }
    load_active_founder(env, founder);
    let mut target = load_owned_product(env, founder, product);

    if amount > target.current_points {
        panic_with_error!(env, Error::InsufficientBalance);
    }

    let rewards = amount / CONVERSION_RATE;
    target.current_points -= amount;
    target.pending_rewards = checked_add(env, target.pending_rewards, rewards);
    storage::save_product(env, product, &target);

    events::points_converted(
        env,
        PointsConverted {
            founder: founder.clone(),
            product: product.clone(),
            points: amount,
            rewards,
            discarded: amount % CONVERSION_RATE,
            pending_rewards: target.pending_rewards,
        },
    );
}

/// Move all pending rewards of `product` into its claimed total and the
/// founder's earnings. Returns the amount claimed.
pub fn claim(env: &Env, founder: &Address, product: &Address) -> u128 {
    let mut owner = load_active_founder(env, founder);
    let mut target = load_owned_product(env, founder, product);

    let amount = target.pending_rewards;
    if amount == 0 {
        panic_with_error!(env, Error::NothingToClaim);
    }

    target.claimed_rewards = checked_add(env, target.claimed_rewards, amount);
    target.pending_rewards = 0;
    owner.earned_rewards = checked_add(env, owner.earned_rewards, amount);
    storage::save_product(env, product, &target);
    storage::save_founder(env, founder, &owner);

    events::rewards_claimed(
        env,
        RewardsClaimed {
            founder: founder.clone(),
            product: product.clone(),
            amount,
            earned_total: owner.earned_rewards,
        },
    );
    amount
}
