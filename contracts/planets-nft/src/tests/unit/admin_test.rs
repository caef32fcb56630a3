use crate::tests::test_utils::*;
use crate::*;

// --- initialization ---

#[test]
fn new_sets_defaults() {
    let contract = new_contract(10_000, 100);
    assert_eq!(contract.get_owner(), &owner());
    assert_eq!(contract.get_max_supply().0, 10_000);
    assert_eq!(contract.get_max_batch_size(), 100);
    assert!(!contract.is_paused());
    assert_eq!(contract.get_oracle(), None);
    assert_eq!(contract.pool_size(), 0);
    assert_eq!(contract.pending_count(), 0);

    let metadata = contract.get_contract_metadata();
    assert_eq!(metadata.name, "PLANET");
    assert_eq!(metadata.symbol, "PLN");

    let policy = contract.get_mint_policy();
    assert!(!policy.recycle_burned);
    assert!(policy.royalty_self_service);
}

#[test]
#[should_panic(expected = "max_batch_size must be at least 1")]
fn new_rejects_zero_batch_size() {
    new_contract(10, 0);
}

// --- ownership ---

#[test]
fn transfer_ownership_hands_over_control() {
    let mut contract = new_contract(10, 5);
    set_caller_one_yocto(owner());
    contract.transfer_ownership(requester()).unwrap();
    assert_eq!(contract.get_owner(), &requester());

    // old owner lost admin rights
    set_caller_one_yocto(owner());
    let err = contract.pause().unwrap_err();
    assert!(matches!(err, MintError::Unauthorized(_)));
}

#[test]
fn transfer_to_self_rejected() {
    let mut contract = new_contract(10, 5);
    set_caller_one_yocto(owner());
    let err = contract.transfer_ownership(owner()).unwrap_err();
    assert!(matches!(err, MintError::InvalidInput(_)));
}

#[test]
fn transfer_requires_owner() {
    let mut contract = new_contract(10, 5);
    set_caller_one_yocto(stranger());
    let err = contract.transfer_ownership(stranger()).unwrap_err();
    assert!(matches!(err, MintError::Unauthorized(_)));
}

// --- pausing ---

#[test]
fn pause_and_unpause_toggle_state() {
    let mut contract = new_contract(10, 5);
    set_caller_one_yocto(owner());
    contract.pause().unwrap();
    assert!(contract.is_paused());

    set_caller_one_yocto(owner());
    contract.unpause().unwrap();
    assert!(!contract.is_paused());
}

#[test]
fn double_pause_rejected() {
    let mut contract = new_contract(10, 5);
    set_caller_one_yocto(owner());
    contract.pause().unwrap();
    set_caller_one_yocto(owner());
    let err = contract.pause().unwrap_err();
    assert!(matches!(err, MintError::InvalidState(_)));
}

#[test]
fn unpause_without_pause_rejected() {
    let mut contract = new_contract(10, 5);
    set_caller_one_yocto(owner());
    let err = contract.unpause().unwrap_err();
    assert!(matches!(err, MintError::InvalidState(_)));
}

#[test]
fn only_owner_pauses() {
    let mut contract = new_contract(10, 5);
    set_caller_one_yocto(stranger());
    let err = contract.pause().unwrap_err();
    assert!(matches!(err, MintError::Unauthorized(_)));
}

// --- supply config ---

#[test]
fn supply_config_mutable_before_allocation() {
    let mut contract = new_contract(10, 5);
    set_caller_one_yocto(owner());
    contract.set_supply_config(200, 20).unwrap();
    let config = contract.get_supply_config();
    assert_eq!(config.max_supply.0, 200);
    assert_eq!(config.max_batch_size, 20);
}

#[test]
fn supply_config_frozen_after_seeding() {
    let mut contract = seeded_contract(10, 5);
    set_caller_one_yocto(owner());
    let err = contract.set_supply_config(200, 20).unwrap_err();
    assert!(matches!(err, MintError::InvalidState(_)));
}

#[test]
fn supply_config_rejects_zero_batch() {
    let mut contract = new_contract(10, 5);
    set_caller_one_yocto(owner());
    let err = contract.set_supply_config(200, 0).unwrap_err();
    assert!(matches!(err, MintError::InvalidInput(_)));
}

// --- randomness and processing policy ---

#[test]
fn set_and_clear_oracle() {
    let mut contract = new_contract(10, 5);
    set_caller_one_yocto(owner());
    contract.set_oracle(Some(oracle())).unwrap();
    assert_eq!(contract.get_oracle(), Some(&oracle()));

    set_caller_one_yocto(owner());
    contract.set_oracle(None).unwrap();
    assert_eq!(contract.get_oracle(), None);
}

#[test]
fn set_and_clear_processor() {
    let mut contract = new_contract(10, 5);
    set_caller_one_yocto(owner());
    contract.set_processor(Some(stranger())).unwrap();
    assert_eq!(contract.get_processor(), Some(&stranger()));

    set_caller_one_yocto(owner());
    contract.set_processor(None).unwrap();
    assert_eq!(contract.get_processor(), None);
}

#[test]
fn mint_policy_patches_only_named_fields() {
    let mut contract = new_contract(10, 5);
    set_caller_one_yocto(owner());
    contract.set_mint_policy(Some(true), None).unwrap();
    let policy = contract.get_mint_policy();
    assert!(policy.recycle_burned);
    assert!(policy.royalty_self_service);

    set_caller_one_yocto(owner());
    contract.set_mint_policy(None, Some(false)).unwrap();
    let policy = contract.get_mint_policy();
    assert!(policy.recycle_burned);
    assert!(!policy.royalty_self_service);
}

// --- metadata ---

#[test]
fn contract_metadata_patches() {
    let mut contract = new_contract(10, 5);
    set_caller_one_yocto(owner());
    contract
        .set_contract_metadata(
            Some("EXOWORLDS".into()),
            None,
            Some(Some("https://meta.example".into())),
        )
        .unwrap();

    let metadata = contract.get_contract_metadata();
    assert_eq!(metadata.name, "EXOWORLDS");
    assert_eq!(metadata.symbol, "PLN");
    assert_eq!(metadata.base_uri.as_deref(), Some("https://meta.example"));
}

#[test]
fn admin_ops_require_one_yocto() {
    let mut contract = new_contract(10, 5);
    set_caller(owner());
    let err = contract.pause().unwrap_err();
    assert!(matches!(err, MintError::InvalidInput(_)));
    let err = contract.set_oracle(Some(oracle())).unwrap_err();
    assert!(matches!(err, MintError::InvalidInput(_)));
}
