extern crate std;

use soroban_sdk::testutils::{Address as _, AuthorizedFunction};
use soroban_sdk::{Address, IntoVal, Symbol};

use crate::test::{add_founder, add_product, hash, setup, text};
use crate::{Error, ReadPolicy};

#[test]
fn test_mutations_require_admin_signature() {
    let fx = setup();
    let founder = add_founder(&fx, "Ada");
    fx.client.allocate(&founder, &10);

    let auths = fx.env.auths();
    assert_eq!(auths.len(), 1);
    let (signer, invocation) = &auths[0];
    assert_eq!(*signer, fx.admin);
    assert_eq!(
        invocation.function,
        AuthorizedFunction::Contract((
            fx.client.address.clone(),
            Symbol::new(&fx.env, "allocate"),
            (founder.clone(), 10u128).into_val(&fx.env),
        ))
    );
}

#[test]
fn test_views_require_caller_signature() {
    let fx = setup();
    let founder = add_founder(&fx, "Ada");
    fx.client.founder_status(&founder, &founder);

    let auths = fx.env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, founder);
}

#[test]
fn test_any_active_founder_can_read_peers() {
    let fx = setup();
    let a = add_founder(&fx, "Ada");
    let b = add_founder(&fx, "Bo");
    let product = add_product(&fx, &b, "defi");
    let key = hash(&fx.env, 0x42);
    fx.client.issue_api_key(&b, &key);

    assert_eq!(fx.client.founder_status(&a, &b).name, text(&fx.env, "Bo"));
    assert_eq!(fx.client.product_status(&a, &product).owner, b);
    assert_eq!(fx.client.founder_products(&a, &b).addresses.len(), 1);
    assert_eq!(fx.client.founder_by_api_key(&a, &key), b);
    assert_eq!(fx.client.total_stats(&a).active_founders, 2);
    assert_eq!(fx.client.active_founders(&a).addresses.len(), 2);
}

#[test]
fn test_strangers_cannot_read() {
    let fx = setup();
    let founder = add_founder(&fx, "Ada");
    let product = add_product(&fx, &founder, "defi");
    let stranger = Address::generate(&fx.env);

    let denied = Err(Ok(Error::NotAuthorized.into()));
    assert_eq!(fx.client.try_founder_status(&stranger, &founder).map(|_| ()), denied);
    assert_eq!(fx.client.try_product_status(&stranger, &product).map(|_| ()), denied);
    assert_eq!(fx.client.try_founder_products(&stranger, &founder).map(|_| ()), denied);
    assert_eq!(fx.client.try_total_stats(&stranger).map(|_| ()), denied);
    assert_eq!(fx.client.try_active_founders(&stranger).map(|_| ()), denied);
    assert_eq!(
        fx.client
            .try_founder_by_api_key(&stranger, &hash(&fx.env, 0x01))
            .map(|_| ()),
        denied
    );
    assert_eq!(
        fx.client
            .try_products_by_category(&stranger, &text(&fx.env, "defi"))
            .map(|_| ()),
        denied
    );
}

#[test]
fn test_deactivated_founder_loses_read_access() {
    let fx = setup();
    let a = add_founder(&fx, "Ada");
    let b = add_founder(&fx, "Bo");

    fx.client.update_founder_status(&a, &false);
    assert_eq!(
        fx.client.try_founder_status(&a, &b).map(|_| ()),
        Err(Ok(Error::NotAuthorized.into()))
    );
    // The administrator can still read the deactivated record.
    assert!(!fx.client.founder_status(&fx.admin, &a).active);
}

#[test]
fn test_owner_only_policy_narrows_reads() {
    let fx = setup();
    let a = add_founder(&fx, "Ada");
    let b = add_founder(&fx, "Bo");
    let product_b = add_product(&fx, &b, "defi");
    let key_b = hash(&fx.env, 0x42);
    fx.client.issue_api_key(&b, &key_b);

    fx.client.set_read_policy(&ReadPolicy::OwnerOnly);
    assert_eq!(fx.client.read_policy(), ReadPolicy::OwnerOnly);

    let denied = Err(Ok(Error::NotAuthorized.into()));
    assert_eq!(fx.client.try_founder_status(&a, &b).map(|_| ()), denied);
    assert_eq!(fx.client.try_product_status(&a, &product_b).map(|_| ()), denied);
    assert_eq!(fx.client.try_founder_products(&a, &b).map(|_| ()), denied);
    assert_eq!(fx.client.try_founder_by_api_key(&a, &key_b).map(|_| ()), denied);
    assert_eq!(fx.client.try_total_stats(&a).map(|_| ()), denied);
    assert_eq!(fx.client.try_active_founders(&a).map(|_| ()), denied);

    // Own records and the administrator remain readable.
    assert_eq!(fx.client.founder_status(&b, &b).product_count, 1);
    assert_eq!(fx.client.product_status(&b, &product_b).owner, b);
    assert_eq!(fx.client.founder_by_api_key(&b, &key_b), b);
    assert_eq!(fx.client.total_stats(&fx.admin).active_founders, 2);

    fx.client.set_read_policy(&ReadPolicy::Peer);
    assert_eq!(fx.client.founder_status(&a, &b).product_count, 1);
}

#[test]
fn test_unknown_api_key() {
    let fx = setup();
    let founder = add_founder(&fx, "Ada");
    assert_eq!(
        fx.client.try_founder_by_api_key(&founder, &hash(&fx.env, 0x77)),
        Err(Ok(Error::UnknownApiKey.into()))
    );
}

#[test]
fn test_transfer_admin() {
    let fx = setup();
    let founder = add_founder(&fx, "Ada");
    let successor = Address::generate(&fx.env);

    fx.client.transfer_admin(&successor);
    assert_eq!(fx.client.admin(), successor);

    // The previous administrator is now a stranger to the read gate.
    assert_eq!(
        fx.client.try_founder_status(&fx.admin, &founder).map(|_| ()),
        Err(Ok(Error::NotAuthorized.into()))
    );
    assert!(fx.client.founder_status(&successor, &founder).active);

    fx.client.allocate(&founder, &5);
    let auths = fx.env.auths();
    assert_eq!(auths[0].0, successor);
}

#[test]
fn test_transfer_admin_to_self_fails() {
    let fx = setup();
    assert_eq!(
        fx.client.try_transfer_admin(&fx.admin),
        Err(Ok(Error::InvalidArgument.into()))
    );
}

#[test]
fn test_admin_operations_ignore_pause() {
    let fx = setup();
    fx.client.pause();
    let successor = Address::generate(&fx.env);
    fx.client.set_read_policy(&ReadPolicy::OwnerOnly);
    fx.client.transfer_admin(&successor);
    assert_eq!(fx.client.admin(), successor);
    assert!(fx.client.is_paused());
}
