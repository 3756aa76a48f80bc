extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, IntoVal, Symbol, TryIntoVal, Val, Vec,
};

use crate::events::{
    AdminTransferred, ApiKeyIssued, ApiKeyRotated, FounderRegistered, FounderStatusChanged,
    PointsAllocated, PointsConverted, PointsDistributed, ProductRegistered, ProductVerified,
    RewardsClaimed,
};
use crate::test::{add_founder, add_product, hash, setup, setup_paused, text, Fixture};

/// The last published event as `(topics, data)`, asserting it came from the ledger.
fn last_event(fx: &Fixture) -> (Vec<Val>, Val) {
    let all_events = fx.env.events().all();
    let last = all_events.last().expect("No events found");
    assert_eq!(last.0, fx.client.address);
    (last.1, last.2)
}

fn topics(fx: &Fixture, symbol: Symbol, subject: &Address) -> Vec<Val> {
    vec![&fx.env, symbol.into_val(&fx.env), subject.into_val(&fx.env)]
}

fn has_topic(fx: &Fixture, symbol: Symbol) -> bool {
    let wanted: Val = symbol.into_val(&fx.env);
    fx.env.events().all().iter().any(|(_, topics, _)| {
        topics
            .get(0)
            .map(|t| t.shallow_eq(&wanted))
            .unwrap_or(false)
    })
}

#[test]
fn test_founder_registered_event() {
    let fx = setup();
    let founder = add_founder(&fx, "Ada");

    let (event_topics, data) = last_event(&fx);
    assert_eq!(event_topics, topics(&fx, symbol_short!("fnd_reg"), &founder));
    let payload: FounderRegistered = data.try_into_val(&fx.env).unwrap();
    assert_eq!(
        payload,
        FounderRegistered {
            founder,
            name: text(&fx.env, "Ada"),
        }
    );
}

#[test]
fn test_product_registered_event() {
    let fx = setup();
    let founder = add_founder(&fx, "Ada");
    let product = add_product(&fx, &founder, "defi");

    let (event_topics, data) = last_event(&fx);
    assert_eq!(event_topics, topics(&fx, symbol_short!("prd_reg"), &product));
    let payload: ProductRegistered = data.try_into_val(&fx.env).unwrap();
    assert_eq!(
        payload,
        ProductRegistered {
            founder,
            product,
            category: text(&fx.env, "defi"),
        }
    );
}

#[test]
fn test_api_key_events() {
    let fx = setup();
    let founder = add_founder(&fx, "Ada");
    let first = hash(&fx.env, 0x11);
    let second = hash(&fx.env, 0x22);

    fx.client.issue_api_key(&founder, &first);
    let (event_topics, data) = last_event(&fx);
    assert_eq!(event_topics, topics(&fx, symbol_short!("key_set"), &founder));
    let issued: ApiKeyIssued = data.try_into_val(&fx.env).unwrap();
    assert_eq!(
        issued,
        ApiKeyIssued {
            founder: founder.clone(),
            key: first.clone(),
        }
    );

    fx.client.rotate_api_key(&founder, &first, &second);
    let (event_topics, data) = last_event(&fx);
    assert_eq!(event_topics, topics(&fx, symbol_short!("key_rot"), &founder));
    let rotated: ApiKeyRotated = data.try_into_val(&fx.env).unwrap();
    assert_eq!(
        rotated,
        ApiKeyRotated {
            founder,
            old_key: first,
            new_key: second,
        }
    );
}

#[test]
fn test_status_and_verification_events() {
    let fx = setup();
    let founder = add_founder(&fx, "Ada");
    let product = add_product(&fx, &founder, "");

    fx.client.update_founder_status(&founder, &false);
    let (event_topics, data) = last_event(&fx);
    assert_eq!(event_topics, topics(&fx, symbol_short!("fnd_stat"), &founder));
    let changed: FounderStatusChanged = data.try_into_val(&fx.env).unwrap();
    assert_eq!(
        changed,
        FounderStatusChanged {
            founder,
            active: false,
        }
    );

    fx.client.verify_product(&product, &true);
    let (event_topics, data) = last_event(&fx);
    assert_eq!(event_topics, topics(&fx, symbol_short!("prd_ver"), &product));
    let verified: ProductVerified = data.try_into_val(&fx.env).unwrap();
    assert_eq!(
        verified,
        ProductVerified {
            product,
            verified: true,
        }
    );
}

#[test]
fn test_pipeline_events() {
    let fx = setup();
    let founder = add_founder(&fx, "Ada");
    let product = add_product(&fx, &founder, "");

    fx.client.allocate(&founder, &1000);
    let (event_topics, data) = last_event(&fx);
    assert_eq!(event_topics, topics(&fx, symbol_short!("alloc"), &founder));
    let allocated: PointsAllocated = data.try_into_val(&fx.env).unwrap();
    assert_eq!(
        allocated,
        PointsAllocated {
            founder: founder.clone(),
            amount: 1000,
            allocated_total: 1000,
        }
    );

    fx.client.distribute(&founder, &product, &400);
    let (event_topics, data) = last_event(&fx);
    assert_eq!(event_topics, topics(&fx, symbol_short!("distrib"), &product));
    let distributed: PointsDistributed = data.try_into_val(&fx.env).unwrap();
    assert_eq!(
        distributed,
        PointsDistributed {
            founder: founder.clone(),
            product: product.clone(),
            amount: 400,
            distributed_total: 400,
            product_points: 400,
        }
    );

    fx.client.convert(&founder, &product, &250);
    let (event_topics, data) = last_event(&fx);
    assert_eq!(event_topics, topics(&fx, symbol_short!("convert"), &product));
    let converted: PointsConverted = data.try_into_val(&fx.env).unwrap();
    assert_eq!(
        converted,
        PointsConverted {
            founder: founder.clone(),
            product: product.clone(),
            points: 250,
            rewards: 2,
            discarded: 50,
            pending_rewards: 2,
        }
    );

    fx.client.claim(&founder, &product);
    let (event_topics, data) = last_event(&fx);
    assert_eq!(event_topics, topics(&fx, symbol_short!("claim"), &product));
    let claimed: RewardsClaimed = data.try_into_val(&fx.env).unwrap();
    assert_eq!(
        claimed,
        RewardsClaimed {
            founder,
            product,
            amount: 2,
            earned_total: 2,
        }
    );
}

#[test]
fn test_zero_amount_publishes_nothing() {
    let fx = setup();
    let founder = add_founder(&fx, "Ada");
    let product = add_product(&fx, &founder, "");

    fx.client.allocate(&founder, &0);
    assert!(!has_topic(&fx, symbol_short!("alloc")));
    fx.client.distribute(&founder, &product, &0);
    assert!(!has_topic(&fx, symbol_short!("distrib")));
    fx.client.convert(&founder, &product, &0);
    assert!(!has_topic(&fx, symbol_short!("convert")));
}

#[test]
fn test_lifecycle_events() {
    let fx = setup_paused();

    fx.client.resume();
    let (event_topics, data) = last_event(&fx);
    assert_eq!(event_topics, topics(&fx, symbol_short!("resumed"), &fx.admin));
    let by: Address = data.try_into_val(&fx.env).unwrap();
    assert_eq!(by, fx.admin);

    fx.client.pause();
    let (event_topics, _) = last_event(&fx);
    assert_eq!(event_topics, topics(&fx, symbol_short!("paused"), &fx.admin));
}

#[test]
fn test_admin_transferred_event() {
    let fx = setup();
    let successor = Address::generate(&fx.env);
    fx.client.transfer_admin(&successor);

    let (event_topics, data) = last_event(&fx);
    assert_eq!(event_topics, topics(&fx, symbol_short!("adm_xfer"), &successor));
    let payload: AdminTransferred = data.try_into_val(&fx.env).unwrap();
    assert_eq!(
        payload,
        AdminTransferred {
            previous: fx.admin.clone(),
            new_admin: successor,
        }
    );
}
