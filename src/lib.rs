pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::{middleware::from_fn_with_state, routing::get, Extension, Router};
use tracing::info;

use crate::api::query_parameters::{QueryParametersApi, QUERY_PARAMETERS};
use crate::auth::secret_auth_middleware::{secret_middleware, SecretAuth};
use crate::auth::AuthContext;
use crate::config::{AuthMethod, Config};
use crate::routes::query_parameters::QueryParametersController;
use crate::routes::{health, query_parameters};

pub fn create_app(config: Config) -> Router {
    let delegate: Arc<dyn QueryParametersApi<AuthContext>> = Arc::new(QueryParametersController);

    let operations = Router::new().route(QUERY_PARAMETERS.path, get(query_parameters::handler));

    let operations = match config.auth_method {
        AuthMethod::Open => operations,
        AuthMethod::Secret => {
            let auth = SecretAuth::new(
                config
                    .secret
                    .expect("SECRET must be set when AUTH_METHOD=SECRET"),
            );
            operations.route_layer(from_fn_with_state(auth, secret_middleware))
        }
    };

    info!(operations = api::OPERATIONS.len(), "router configured");

    Router::new()
        .merge(operations)
        .route("/health", get(health::handler))
        .layer(Extension(delegate))
}
