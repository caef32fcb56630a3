use crate::tests::test_utils::*;
use crate::*;

#[test]
fn set_giveaway_replaces_address_and_quota() {
    let mut contract = seeded_contract(10, 5);
    set_caller_one_yocto(owner());
    contract.set_giveaway(requester(), 4).unwrap();
    assert_eq!(contract.get_giveaway_address(), Some(&requester()));
    assert_eq!(contract.get_giveaway_remaining(), 4);

    set_caller_one_yocto(owner());
    contract.set_giveaway(stranger(), 2).unwrap();
    assert_eq!(contract.get_giveaway_address(), Some(&stranger()));
    assert_eq!(contract.get_giveaway_remaining(), 2);
}

#[test]
fn set_giveaway_requires_owner() {
    let mut contract = seeded_contract(10, 5);
    set_caller_one_yocto(stranger());
    let err = contract.set_giveaway(stranger(), 1).unwrap_err();
    assert!(matches!(err, MintError::Unauthorized(_)));
}

#[test]
fn set_giveaway_quota_beyond_pool_rejected() {
    let mut contract = seeded_contract(10, 5);
    set_caller_one_yocto(owner());
    let err = contract.set_giveaway(requester(), 11).unwrap_err();
    assert!(matches!(err, MintError::InvalidInput(_)));
}

#[test]
fn giveaway_enqueue_charges_quota() {
    let mut contract = seeded_contract(10, 5);
    set_caller_one_yocto(owner());
    contract.set_giveaway(requester(), 4).unwrap();

    enqueue(&mut contract, requester(), 3);
    assert_eq!(contract.get_giveaway_remaining(), 1);
}

#[test]
fn giveaway_enqueue_over_quota_rejected() {
    let mut contract = seeded_contract(10, 5);
    set_caller_one_yocto(owner());
    contract.set_giveaway(requester(), 4).unwrap();

    set_caller(requester());
    let err = contract.enqueue_mint(5, None).unwrap_err();
    assert!(matches!(err, MintError::QuotaExceeded(_)));
    assert_eq!(contract.get_giveaway_remaining(), 4);
    assert_eq!(contract.pending_count(), 0);
}

#[test]
fn public_enqueue_cannot_eat_reserved_quota() {
    let mut contract = seeded_contract(10, 5);
    set_caller_one_yocto(owner());
    contract.set_giveaway(requester(), 4).unwrap();

    // 10 pooled - 4 reserved leaves 6 for the public
    set_caller(stranger());
    let err = contract.enqueue_mint(7, None).unwrap_err();
    assert!(matches!(err, MintError::InsufficientSupply(_)));
    contract.enqueue_mint(6, None).unwrap();

    // the giveaway actor can still consume the full quota
    enqueue(&mut contract, requester(), 4);
    assert_eq!(contract.get_giveaway_remaining(), 0);
    assert_eq!(contract.pending_count(), 10);
}

#[test]
fn public_enqueue_leaves_quota_untouched() {
    let mut contract = seeded_contract(10, 5);
    set_caller_one_yocto(owner());
    contract.set_giveaway(requester(), 4).unwrap();

    enqueue(&mut contract, stranger(), 2);
    assert_eq!(contract.get_giveaway_remaining(), 4);
}

#[test]
fn quota_only_restored_by_explicit_reset() {
    let mut contract = oracle_contract(10, 5);
    set_caller_one_yocto(owner());
    contract.set_giveaway(requester(), 4).unwrap();

    enqueue(&mut contract, requester(), 4);
    fulfill(&mut contract, vec![0, 0, 0, 0]);
    assert_eq!(contract.get_giveaway_remaining(), 0);

    set_caller_one_yocto(owner());
    contract.set_giveaway(requester(), 2).unwrap();
    assert_eq!(contract.get_giveaway_remaining(), 2);
}
