use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum MintError {
    Unauthorized(String),
    Paused(String),
    PoolExhausted(String),
    InsufficientSupply(String),
    QuotaExceeded(String),
    RandomnessUnavailable(String),
    NothingPending(String),
    InvalidInput(String),
    InvalidState(String),
    NotFound(String),
    InternalError(String),
}

impl std::fmt::Display for MintError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::Paused(msg) => write!(f, "Paused: {}", msg),
            Self::PoolExhausted(msg) => write!(f, "Pool exhausted: {}", msg),
            Self::InsufficientSupply(msg) => write!(f, "Insufficient supply: {}", msg),
            Self::QuotaExceeded(msg) => write!(f, "Quota exceeded: {}", msg),
            Self::RandomnessUnavailable(msg) => write!(f, "Randomness unavailable: {}", msg),
            Self::NothingPending(msg) => write!(f, "Nothing pending: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl MintError {
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
    pub fn paused() -> Self {
        Self::Paused("Contract is paused".into())
    }
    pub fn pool_exhausted() -> Self {
        Self::PoolExhausted("No unassigned identifiers remain in the pool".into())
    }
    pub fn nothing_pending() -> Self {
        Self::NothingPending("No mint requests are queued".into())
    }
    pub fn token_not_found() -> Self {
        Self::NotFound("Token not found".into())
    }
    pub fn request_not_found() -> Self {
        Self::NotFound("Pending request not found".into())
    }
}
