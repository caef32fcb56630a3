use near_sdk::json_types::{U64, U128};
use near_sdk::store::{IterableMap, LookupMap, LookupSet, Vector};
use near_sdk::{AccountId, PanicOnDefault, env, near};

pub mod constants;
mod errors;
mod guards;
mod storage;

mod events;

mod engine;
mod pool;
mod queue;
mod quota;
mod randomness;

mod registry;
mod royalties;

mod admin;
mod views;


pub use admin::NftContractMetadata;
pub use constants::*;
pub use engine::{Assignment, BatchOutcome, HaltReason};
pub use errors::MintError;
pub use queue::{PendingMint, PendingMintView};
pub use randomness::{RandomnessSource, ScriptedWords, SeedRandomness};
pub use royalties::{RoyaltyEntry, RoyaltyInfoView};
pub use storage::StorageKey;
pub use views::{MintPolicyView, SupplyConfigView};

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/planets-nft/planets-nft",
        standard(standard = "nep171", version = "1.2.0"),
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,
    pub paused: bool,

    pub max_supply: u64,
    pub max_batch_size: u32,

    // Randomness policy: when set, only the oracle may feed words via
    // `fulfill_random_words` and the seed-based `process_batch` path is closed.
    pub oracle_id: Option<AccountId>,
    // Processing policy: when set, only this account may trigger resolution.
    pub processor_id: Option<AccountId>,

    pub giveaway_id: Option<AccountId>,
    pub giveaway_remaining: u32,

    // Dense pool of unassigned identifiers plus reverse lookup for O(1)
    // removal by index or by value (swap-with-last-and-pop).
    pub(crate) pool: Vector<u64>,
    pub(crate) pool_index: LookupMap<u64, u32>,
    // Seeding watermark: identifiers 0..next_seed_id have entered the pool.
    pub next_seed_id: u64,

    pub(crate) assigned: LookupSet<u64>,
    pub(crate) burned: LookupSet<u64>,

    // FIFO queue: monotonic tail/head counters over a request map. A request
    // is removed exactly once, at resolution.
    pub next_request_id: u64,
    pub next_unresolved: u64,
    pub(crate) pending: LookupMap<u64, PendingMint>,

    pub(crate) assignments: LookupMap<u64, Assignment>,

    pub(crate) owner_by_id: IterableMap<u64, AccountId>,
    pub(crate) balances: LookupMap<AccountId, u64>,
    pub total_minted: u64,
    pub total_burned: u64,

    pub default_royalty: Option<RoyaltyEntry>,
    pub(crate) token_royalty: LookupMap<u64, RoyaltyEntry>,

    pub recycle_burned: bool,
    pub royalty_self_service: bool,

    // Persisted so seed-derived draws differ across calls within one block.
    pub random_nonce: u64,

    pub contract_metadata: NftContractMetadata,
}
