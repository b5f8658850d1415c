//! Operation contracts and their delegates, kept separate from the axum
//! handlers so alternate delegate implementations can satisfy the same
//! contract.

pub mod contract;
pub mod query_parameters;

use once_cell::sync::Lazy;

use contract::OperationSpec;

/// Every operation this API exposes, in declaration order. Built once at
/// startup and alive for the process lifetime.
pub static OPERATIONS: Lazy<Vec<&'static OperationSpec>> =
    Lazy::new(|| vec![&query_parameters::QUERY_PARAMETERS]);
