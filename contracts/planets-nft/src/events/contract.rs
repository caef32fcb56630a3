use near_sdk::AccountId;

use super::CONTRACT;
use super::builder::EventBuilder;

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_paused(owner_id: &AccountId) {
    EventBuilder::new(CONTRACT, "paused", owner_id).emit();
}

pub fn emit_unpaused(owner_id: &AccountId) {
    EventBuilder::new(CONTRACT, "unpaused", owner_id).emit();
}

pub fn emit_supply_config_set(owner_id: &AccountId, max_supply: u64, max_batch_size: u32) {
    EventBuilder::new(CONTRACT, "supply_config_set", owner_id)
        .field("max_supply", max_supply)
        .field("max_batch_size", max_batch_size)
        .emit();
}

pub fn emit_giveaway_set(owner_id: &AccountId, giveaway_id: &AccountId, quota: u32) {
    EventBuilder::new(CONTRACT, "giveaway_set", owner_id)
        .field("giveaway_id", giveaway_id)
        .field("quota", quota)
        .emit();
}

pub fn emit_oracle_set(owner_id: &AccountId, oracle_id: Option<&AccountId>) {
    EventBuilder::new(CONTRACT, "oracle_set", owner_id)
        .field_opt("oracle_id", oracle_id)
        .emit();
}

pub fn emit_processor_set(owner_id: &AccountId, processor_id: Option<&AccountId>) {
    EventBuilder::new(CONTRACT, "processor_set", owner_id)
        .field_opt("processor_id", processor_id)
        .emit();
}

pub fn emit_mint_policy_set(
    owner_id: &AccountId,
    recycle_burned: bool,
    royalty_self_service: bool,
) {
    EventBuilder::new(CONTRACT, "mint_policy_set", owner_id)
        .field("recycle_burned", recycle_burned)
        .field("royalty_self_service", royalty_self_service)
        .emit();
}

pub fn emit_contract_metadata_updated(owner_id: &AccountId, name: &str, symbol: &str) {
    EventBuilder::new(CONTRACT, "contract_metadata_updated", owner_id)
        .field("name", name)
        .field("symbol", symbol)
        .emit();
}

pub fn emit_default_royalty_set(owner_id: &AccountId, receiver: &AccountId, fraction_bps: u16) {
    EventBuilder::new(CONTRACT, "default_royalty_set", owner_id)
        .field("receiver", receiver)
        .field("fraction_bps", fraction_bps)
        .emit();
}

pub fn emit_token_royalty_set(
    actor_id: &AccountId,
    token_id: u64,
    receiver: &AccountId,
    fraction_bps: u16,
) {
    EventBuilder::new(CONTRACT, "token_royalty_set", actor_id)
        .field("token_id", token_id)
        .field("receiver", receiver)
        .field("fraction_bps", fraction_bps)
        .emit();
}
