#![allow(dead_code)]

extern crate std;

use crate::types::{FounderStatus, ProductStatus};

/// INV-1: a founder never distributes more than was allocated, and the
/// reported availability is exactly the difference.
pub fn assert_conservation(status: &FounderStatus) {
    assert!(
        status.distributed_points <= status.allocated_points,
        "INV-1 violated: distributed {} exceeds allocated {}",
        status.distributed_points,
        status.allocated_points
    );
    assert_eq!(
        status.available_to_distribute,
        status.allocated_points - status.distributed_points,
        "INV-1 violated: available_to_distribute out of sync"
    );
}

/// INV-2: founders own at most `MAX_PRODUCTS_PER_FOUNDER` products.
pub fn assert_capacity(status: &FounderStatus) {
    assert!(
        status.product_count <= crate::MAX_PRODUCTS_PER_FOUNDER,
        "INV-2 violated: founder owns {} products",
        status.product_count
    );
}

/// INV-3: founder counters never decrease.
pub fn assert_founder_monotonic(before: &FounderStatus, after: &FounderStatus) {
    assert!(
        after.allocated_points >= before.allocated_points,
        "INV-3 violated: allocated_points decreased from {} to {}",
        before.allocated_points,
        after.allocated_points
    );
    assert!(
        after.distributed_points >= before.distributed_points,
        "INV-3 violated: distributed_points decreased from {} to {}",
        before.distributed_points,
        after.distributed_points
    );
    assert!(
        after.earned_rewards >= before.earned_rewards,
        "INV-3 violated: earned_rewards decreased from {} to {}",
        before.earned_rewards,
        after.earned_rewards
    );
}

/// INV-4: claimed rewards never decrease and the owner never changes.
pub fn assert_product_monotonic(before: &ProductStatus, after: &ProductStatus) {
    assert!(
        after.claimed_rewards >= before.claimed_rewards,
        "INV-4 violated: claimed_rewards decreased from {} to {}",
        before.claimed_rewards,
        after.claimed_rewards
    );
    assert_eq!(before.owner, after.owner, "INV-4 violated: owner changed");
}

/// INV-5: a claim moves the whole pending balance into the claimed total.
pub fn assert_claim_zeroes_pending(before: &ProductStatus, after: &ProductStatus) {
    assert_eq!(after.pending_rewards, 0, "INV-5 violated: pending not zeroed");
    assert_eq!(
        after.claimed_rewards,
        before.claimed_rewards + before.pending_rewards,
        "INV-5 violated: claimed {} != {} + {}",
        after.claimed_rewards,
        before.claimed_rewards,
        before.pending_rewards
    );
}

/// Run all stateless founder invariants.
pub fn assert_all_founder_invariants(status: &FounderStatus) {
    assert_conservation(status);
    assert_capacity(status);
}
