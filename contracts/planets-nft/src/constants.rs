use near_sdk::NearToken;

pub const BASIS_POINTS: u16 = 10_000; // 100%
pub const MAX_ROYALTY_BPS: u16 = BASIS_POINTS;

pub const DEFAULT_MAX_SUPPLY: u64 = 10_000;
pub const DEFAULT_MAX_BATCH_SIZE: u32 = 100;

// Bounded-work limits: enqueue and pool seeding are chunked the same way
// resolution is bounded by max_batch_size.
pub const MAX_ENQUEUE_BATCH: u32 = 50;
pub const DEFAULT_SEED_CHUNK: u32 = 1_000;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);
