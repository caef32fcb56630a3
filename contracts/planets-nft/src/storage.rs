use near_sdk::BorshStorageKey;
use near_sdk::near;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Pool,
    PoolIndex,
    Assigned,
    Burned,
    Pending,
    Assignments,
    OwnerById,
    Balances,
    TokenRoyalty,
}
