use axum::http::{Method, StatusCode};

/// Where a declared parameter rides on the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Path,
    Query,
}

/// Semantic type a parameter must be coerced to before dispatch.
///
/// Coercion itself is the dispatcher's job; operations only declare the
/// post-coercion type they expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Integer,
}

/// One declared parameter of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub location: ParamLocation,
    pub param_type: ParamType,
    pub required: bool,
}

/// Immutable description of one HTTP operation: method, path and the
/// declared inputs and outputs. Built from `const` data and alive for the
/// process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSpec {
    pub method: Method,
    pub path: &'static str,
    pub params: &'static [ParamSpec],
    /// Closed set of status codes this operation may answer with.
    pub responses: &'static [StatusCode],
}

impl OperationSpec {
    /// Declared parameters, in declaration order.
    pub fn parameters(&self) -> &'static [ParamSpec] {
        self.params
    }

    pub fn declares_status(&self, status: StatusCode) -> bool {
        self.responses.contains(&status)
    }
}
