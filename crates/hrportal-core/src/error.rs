use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown department: {0}")]
    UnknownDepartment(String),

    #[error("unknown policy region: {0}")]
    UnknownPolicyRegion(String),
}
