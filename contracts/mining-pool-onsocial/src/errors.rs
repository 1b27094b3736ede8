use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum MiningPoolError {
    Unauthorized(String),
    NotFound(String),
    InvalidState(String),
    InvalidInput(String),
    LimitExceeded(String),
    ShapeMismatch(String),
    InternalError(String),
}

impl std::fmt::Display for MiningPoolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::LimitExceeded(msg) => write!(f, "Limit exceeded: {}", msg),
            Self::ShapeMismatch(msg) => write!(f, "Shape mismatch: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl MiningPoolError {
    pub fn pool_not_found(pool_id: u64) -> Self {
        Self::NotFound(format!("Pool not found: {}", pool_id))
    }
    pub fn pool_stopped(pool_id: u64) -> Self {
        Self::InvalidState(format!("Pool {} is stopped", pool_id))
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
    pub fn zero_amount(what: &str) -> Self {
        Self::InvalidInput(format!("{} must be positive", what))
    }
    pub fn overflow() -> Self {
        Self::InternalError("Arithmetic overflow".into())
    }
}
