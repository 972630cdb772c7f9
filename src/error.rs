use std::fmt;

use thiserror::Error;

/// Which programmable stage a shader belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Everything that can stop a LaserFlow instance from starting.
///
/// None of these are retried: a failed instance stays failed and the page
/// keeps working without the background.
#[derive(Debug, Error)]
pub enum LaserFlowError {
    #[error("WebGL not supported")]
    ContextUnavailable,

    #[error("failed to compile {stage} shader: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("failed to link program: {0}")]
    ProgramLink(String),

    #[error("failed to create {0}")]
    ResourceAllocation(&'static str),

    #[error("invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LaserFlowError>;
