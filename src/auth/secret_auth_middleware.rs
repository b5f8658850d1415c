use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::auth::AuthContext;
use crate::error::AppError;

#[derive(Clone)]
pub struct SecretAuth {
    pub secret: String,
}

impl SecretAuth {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }
}

/// Strict bearer gate: the request must carry `Authorization: Bearer <secret>`.
/// On success the verified [`AuthContext`] is inserted for downstream handlers.
pub async fn secret_middleware(
    State(state): State<SecretAuth>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match auth_header {
        Some(token) if token == state.secret => {
            request
                .extensions_mut()
                .insert(AuthContext { authenticated: true });
            next.run(request).await
        }
        Some(_) => AppError::InvalidToken.into_response(),
        None => AppError::MissingToken.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::middleware::from_fn_with_state;
    use axum::routing::get;
    use axum::{Extension, Router};
    use tower::ServiceExt;

    async fn probe(context: Option<Extension<AuthContext>>) -> String {
        match context {
            Some(Extension(ctx)) if ctx.authenticated => "authenticated".to_string(),
            _ => "anonymous".to_string(),
        }
    }

    fn gated_app() -> Router {
        let auth = SecretAuth::new("s3cr3t".to_string());
        Router::new()
            .route("/probe", get(probe))
            .route_layer(from_fn_with_state(auth, secret_middleware))
    }

    #[tokio::test]
    async fn matching_secret_passes_and_sets_the_context() {
        let response = gated_app()
            .oneshot(
                Request::builder()
                    .uri("/probe")
                    .header("Authorization", "Bearer s3cr3t")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"authenticated");
    }

    #[tokio::test]
    async fn wrong_secret_is_rejected() {
        let response = gated_app()
            .oneshot(
                Request::builder()
                    .uri("/probe")
                    .header("Authorization", "Bearer nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn missing_header_is_rejected() {
        let response = gated_app()
            .oneshot(Request::builder().uri("/probe").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
