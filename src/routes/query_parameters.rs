use std::sync::Arc;

use async_trait::async_trait;
use axum::{extract::Query, Extension};
use serde::Deserialize;
use tracing::debug;

use crate::api::query_parameters::{QueryParametersApi, QueryParametersResponse};
use crate::auth::AuthContext;
use crate::models::query_parameters::QueryParameters;

/// Wire shape of the query string. The extractor performs presence checking
/// and integer coercion before the delegate is ever invoked; a request that
/// fails either gets the framework's 400.
#[derive(Debug, Deserialize)]
pub struct QueryParametersQuery {
    pub param1: String,
    pub param2: Option<i64>,
}

/// Production delegate: echoes the received parameters back.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParametersController;

#[async_trait]
impl QueryParametersApi<AuthContext> for QueryParametersController {
    async fn query_parameters(
        &self,
        _ctx: &AuthContext,
        param1: String,
        param2: Option<i64>,
    ) -> QueryParametersResponse {
        QueryParametersResponse::Http200(QueryParameters { param1, param2 })
    }
}

pub async fn handler(
    Extension(api): Extension<Arc<dyn QueryParametersApi<AuthContext>>>,
    context: Option<Extension<AuthContext>>,
    Query(query): Query<QueryParametersQuery>,
) -> QueryParametersResponse {
    debug!("Query parameters handler is run");
    let ctx = context.map(|Extension(ctx)| ctx).unwrap_or_default();
    api.query_parameters(&ctx, query.param1, query.param2).await
}
