mod builder;
mod types;

mod contract;
mod mint;
pub mod nep171;
mod pool;

pub use contract::*;
pub use mint::*;
pub use pool::*;

pub(crate) const STANDARD: &str = "planets";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const MINT: &str = "MINT_UPDATE";
pub(crate) const POOL: &str = "POOL_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
