//! # Types
//!
//! Records stored by the ledger and the view structs returned to callers.
//!
//! ## Points pipeline
//!
//! Every point moves forward through four stages and never back:
//!
//! ```text
//! Allocated ──► Distributed ──► Converted ──► Claimed
//! (founder)     (product          (product        (product claimed_rewards
//!                current_points)   pending_rewards) + founder earned_rewards)
//! ```
//!
//! `Founder::distributed_points` records lifetime distribution. Conversion
//! consumes `Product::current_points` but never lowers the founder counter, so
//! [`FounderStatus::available_to_distribute`] is a high-water figure and not
//! the sum of points still sitting on products.

use soroban_sdk::{contracttype, Address, BytesN, String, Vec};

/// Maximum number of products a single founder may own.
pub const MAX_PRODUCTS_PER_FOUNDER: u32 = 10;

/// Points consumed per reward unit on conversion (floor division).
pub const CONVERSION_RATE: u128 = 100;

/// Who may call the view entry points besides the administrator.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReadPolicy {
    /// Any active founder may read any founder's or product's data.
    Peer,
    /// Founders may read only their own records; aggregates are admin-only.
    OwnerOnly,
}

/// A registered participant.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Founder {
    pub name: String,
    /// Inactive founders keep their balances but cannot be mutated.
    pub active: bool,
    /// Live API key, if one has been issued.
    pub api_key: Option<BytesN<32>>,
    pub allocated_points: u128,
    /// Lifetime total moved onto products. Never decreases.
    pub distributed_points: u128,
    pub earned_rewards: u128,
    /// Owned products in registration order.
    pub products: Vec<Address>,
}

impl Founder {
    /// Allocation not yet moved onto any product.
    pub fn available_to_distribute(&self) -> u128 {
        self.allocated_points - self.distributed_points
    }
}

/// A registered product, owned by exactly one founder for its lifetime.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Product {
    pub owner: Address,
    pub name: String,
    pub category: String,
    /// Fingerprint of the external artifact this product represents.
    pub abi_hash: BytesN<32>,
    pub current_points: u128,
    pub pending_rewards: u128,
    pub claimed_rewards: u128,
    pub verified: bool,
}

/// Returned by `founder_status`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FounderStatus {
    pub name: String,
    pub allocated_points: u128,
    pub distributed_points: u128,
    /// `allocated_points - distributed_points`. Conversion does not raise it.
    pub available_to_distribute: u128,
    pub earned_rewards: u128,
    pub product_count: u32,
    pub active: bool,
}

/// Returned by `product_status`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductStatus {
    pub owner: Address,
    pub name: String,
    pub category: String,
    pub current_points: u128,
    pub pending_rewards: u128,
    pub claimed_rewards: u128,
    pub verified: bool,
}

/// Parallel vectors, one entry per product owned by a founder.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FounderProducts {
    pub addresses: Vec<Address>,
    pub names: Vec<String>,
    pub current_points: Vec<u128>,
    pub pending_rewards: Vec<u128>,
    pub verified: Vec<bool>,
}

/// Registry-wide counters over active founders.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TotalStats {
    pub active_founders: u32,
    pub total_products: u32,
    pub verified_products: u32,
}

/// Parallel vectors, one entry per active founder.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActiveFounders {
    pub addresses: Vec<Address>,
    pub names: Vec<String>,
    pub allocated_points: Vec<u128>,
    pub earned_rewards: Vec<u128>,
}
