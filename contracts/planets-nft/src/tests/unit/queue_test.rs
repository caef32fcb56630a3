use crate::tests::test_utils::*;
use crate::*;

#[test]
fn enqueue_assigns_sequential_request_ids() {
    let mut contract = seeded_contract(10, 5);
    let first = enqueue(&mut contract, requester(), 3);
    assert_eq!(first, vec![0, 1, 2]);
    let second = enqueue(&mut contract, stranger(), 2);
    assert_eq!(second, vec![3, 4]);
    assert_eq!(contract.pending_count(), 5);
}

#[test]
fn enqueue_zero_count_rejected() {
    let mut contract = seeded_contract(10, 5);
    set_caller(requester());
    let err = contract.enqueue_mint(0, None).unwrap_err();
    assert!(matches!(err, MintError::InvalidInput(_)));
}

#[test]
fn enqueue_over_batch_cap_rejected() {
    let mut contract = seeded_contract(100, 5);
    set_caller(requester());
    let err = contract.enqueue_mint(MAX_ENQUEUE_BATCH + 1, None).unwrap_err();
    assert!(matches!(err, MintError::InvalidInput(_)));
}

#[test]
fn enqueue_beyond_pool_rejected() {
    let mut contract = seeded_contract(5, 5);
    enqueue(&mut contract, requester(), 5);
    set_caller(stranger());
    let err = contract.enqueue_mint(1, None).unwrap_err();
    assert!(matches!(err, MintError::InsufficientSupply(_)));
    // the failed call queued nothing
    assert_eq!(contract.pending_count(), 5);
}

#[test]
fn enqueue_on_unseeded_pool_rejected() {
    let mut contract = new_contract(10, 5);
    set_caller(requester());
    let err = contract.enqueue_mint(1, None).unwrap_err();
    assert!(matches!(err, MintError::InsufficientSupply(_)));
}

#[test]
fn enqueue_while_paused_rejected() {
    let mut contract = seeded_contract(10, 5);
    set_caller_one_yocto(owner());
    contract.pause().unwrap();
    set_caller(requester());
    let err = contract.enqueue_mint(1, None).unwrap_err();
    assert!(matches!(err, MintError::Paused(_)));
}

// --- preferred identifiers ---

#[test]
fn preferred_count_mismatch_rejected() {
    let mut contract = seeded_contract(10, 5);
    set_caller(requester());
    let err = contract.enqueue_mint(2, Some(vec![1])).unwrap_err();
    assert!(matches!(err, MintError::InvalidInput(_)));
}

#[test]
fn preferred_already_assigned_rejected() {
    let mut contract = oracle_contract(10, 5);
    set_caller(requester());
    contract.enqueue_mint(1, Some(vec![4])).unwrap();
    fulfill(&mut contract, vec![]);

    set_caller(stranger());
    let err = contract.enqueue_mint(1, Some(vec![4])).unwrap_err();
    assert!(matches!(err, MintError::InvalidInput(_)));
}

#[test]
fn preferred_recorded_on_request() {
    let mut contract = seeded_contract(10, 5);
    set_caller(requester());
    contract.enqueue_mint(2, Some(vec![8, 3])).unwrap();
    let pending = contract.get_pending(None, None);
    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0].preferred_id, Some(8));
    assert_eq!(pending[1].preferred_id, Some(3));
}

// --- peeking ---

#[test]
fn get_pending_is_oldest_first_window() {
    let mut contract = seeded_contract(10, 5);
    enqueue(&mut contract, requester(), 4);

    let window = contract.get_pending(None, Some(2));
    assert_eq!(window.len(), 2);
    assert_eq!(window[0].request_id.0, 0);
    assert_eq!(window[1].request_id.0, 1);

    let rest = contract.get_pending(Some(U64(2)), None);
    assert_eq!(rest.len(), 2);
    assert_eq!(rest[0].request_id.0, 2);

    // peeking removed nothing
    assert_eq!(contract.pending_count(), 4);
}

#[test]
fn get_pending_clamps_to_unresolved_head() {
    let mut contract = oracle_contract(10, 5);
    enqueue(&mut contract, requester(), 3);
    fulfill(&mut contract, vec![0, 0]);

    // only the two supplied words resolved, so request 2 remains and the
    // window clamps past the resolved head
    let window = contract.get_pending(Some(U64(0)), None);
    assert_eq!(window.len(), 1);
    assert_eq!(window[0].request_id.0, 2);
}
