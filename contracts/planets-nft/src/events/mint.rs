use near_sdk::AccountId;

use super::MINT;
use super::builder::EventBuilder;

pub fn emit_mint_enqueued(requester: &AccountId, request_ids: &[String], giveaway: bool) {
    EventBuilder::new(MINT, "mint_enqueued", requester)
        .field("request_ids", request_ids)
        .field("giveaway", giveaway)
        .emit();
}

pub fn emit_mint_assigned(requester: &AccountId, request_id: u64, token_id: u64) {
    EventBuilder::new(MINT, "mint_assigned", requester)
        .field("request_id", request_id)
        .field("token_id", token_id)
        .emit();
}

pub fn emit_batch_processed(
    processor: &AccountId,
    assigned: u32,
    remaining_pending: u64,
    halted: Option<&str>,
) {
    EventBuilder::new(MINT, "batch_processed", processor)
        .field("assigned", assigned)
        .field("remaining_pending", remaining_pending)
        .field_opt("halted", halted)
        .emit();
}
