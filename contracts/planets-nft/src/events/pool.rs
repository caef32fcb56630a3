use near_sdk::AccountId;

use super::POOL;
use super::builder::EventBuilder;

pub fn emit_pool_seeded(owner_id: &AccountId, from_id: u64, to_id: u64, pool_size: u32) {
    EventBuilder::new(POOL, "pool_seeded", owner_id)
        .field("from_id", from_id)
        .field("to_id", to_id)
        .field("pool_size", pool_size)
        .emit();
}

pub fn emit_pool_replenished(owner_id: &AccountId, token_ids: &[String], pool_size: u32) {
    EventBuilder::new(POOL, "pool_replenished", owner_id)
        .field("token_ids", token_ids)
        .field("pool_size", pool_size)
        .emit();
}
