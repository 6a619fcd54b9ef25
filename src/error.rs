//! Error types for the stochastic rotor crate

use thiserror::Error;

use crate::stochastic::ElementCategory;

/// Main error type for rotor operations
#[derive(Error, Debug)]
pub enum RotorError {
    #[error("not all random {} lists have same length.", .0.list_label())]
    InconsistentCategory(ElementCategory),

    #[error("not all the random elements lists have the same length.")]
    InconsistentSamples,

    #[error("Object does not have parameter: {0}.")]
    UnknownParameter(String),

    #[error("Sample index {index} out of range for {size} samples")]
    SampleOutOfRange { index: usize, size: usize },

    #[error("Parameter '{key}' has {found} samples, expected {expected}")]
    ParameterLength {
        key: String,
        expected: usize,
        found: usize,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Node {node} out of range (model has {n_nodes} nodes)")]
    NodeOutOfRange { node: usize, n_nodes: usize },

    #[error("Degree of freedom {dof} out of range (model has {ndof} DOFs)")]
    DofOutOfRange { dof: usize, ndof: usize },

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Singular matrix - {0}")]
    SingularMatrix(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for rotor operations
pub type RotorResult<T> = Result<T, RotorError>;
