//! Query parameter test operation: `GET /query/parameter`.

use async_trait::async_trait;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::contract::{OperationSpec, ParamLocation, ParamSpec, ParamType};
use crate::models::query_parameters::QueryParameters;

/// Operation description used for routing and request validation.
pub const QUERY_PARAMETERS: OperationSpec = OperationSpec {
    method: Method::GET,
    path: "/query/parameter",
    params: &[
        ParamSpec {
            name: "param1",
            location: ParamLocation::Query,
            param_type: ParamType::String,
            required: true,
        },
        ParamSpec {
            name: "param2",
            location: ParamLocation::Query,
            param_type: ParamType::Integer,
            required: false,
        },
    ],
    responses: &[StatusCode::OK],
};

/// Closed set of responses the operation may produce. Each variant carries
/// the payload declared for its status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParametersResponse {
    Http200(QueryParameters),
}

impl QueryParametersResponse {
    pub fn status(&self) -> StatusCode {
        match self {
            QueryParametersResponse::Http200(_) => StatusCode::OK,
        }
    }
}

impl IntoResponse for QueryParametersResponse {
    fn into_response(self) -> Response {
        match self {
            QueryParametersResponse::Http200(body) => (StatusCode::OK, Json(body)).into_response(),
        }
    }
}

/// Delegate for the query parameter test operation.
///
/// `Ctx` is whatever per-request context the hosting server provides.
/// Inputs arrive already validated and coerced per [`QUERY_PARAMETERS`];
/// the only output channel is the declared response set.
#[async_trait]
pub trait QueryParametersApi<Ctx>: Send + Sync {
    /// GET /query/parameter
    /// Query parameter test
    async fn query_parameters(
        &self,
        ctx: &Ctx,
        param1: String,
        param2: Option<i64>,
    ) -> QueryParametersResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::contract::{ParamLocation, ParamType};

    #[test]
    fn operation_shape_matches_the_wire_contract() {
        assert_eq!(QUERY_PARAMETERS.method, Method::GET);
        assert_eq!(QUERY_PARAMETERS.path, "/query/parameter");

        let params = QUERY_PARAMETERS.parameters();
        assert_eq!(params.len(), 2);

        assert_eq!(params[0].name, "param1");
        assert_eq!(params[0].location, ParamLocation::Query);
        assert_eq!(params[0].param_type, ParamType::String);
        assert!(params[0].required);

        assert_eq!(params[1].name, "param2");
        assert_eq!(params[1].location, ParamLocation::Query);
        assert_eq!(params[1].param_type, ParamType::Integer);
        assert!(!params[1].required);
    }

    #[test]
    fn response_set_is_exactly_200() {
        assert_eq!(QUERY_PARAMETERS.responses, &[StatusCode::OK]);
        assert!(QUERY_PARAMETERS.declares_status(StatusCode::OK));
        assert!(!QUERY_PARAMETERS.declares_status(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn variant_status_matches_declaration() {
        let response = QueryParametersResponse::Http200(QueryParameters {
            param1: "foo".to_string(),
            param2: Some(42),
        });
        assert_eq!(response.status(), StatusCode::OK);
        assert!(QUERY_PARAMETERS.declares_status(response.status()));
    }

    #[tokio::test]
    async fn http200_encodes_payload_as_json() {
        let response = QueryParametersResponse::Http200(QueryParameters {
            param1: "foo".to_string(),
            param2: Some(42),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, serde_json::json!({ "param1": "foo", "param2": 42 }));
    }
}
