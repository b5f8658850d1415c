pub mod secret_auth_middleware;

/// Per-request context handed to API delegates.
///
/// Inserted into request extensions by whichever auth layer the server is
/// configured with; routes outside an auth layer see the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    pub authenticated: bool,
}
