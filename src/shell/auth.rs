// Request authentication.
//
// Resolves the `Authorization` header into an `Identity` before any handler
// logic runs. Accepted schemes:
// - `Token <key>` / `Bearer <key>`: an issued API token.
// - `Basic <base64(username:password)>`: checked against the bcrypt hash.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{
        StatusCode,
        header::{AUTHORIZATION, WWW_AUTHENTICATE},
        request::Parts,
    },
    response::{IntoResponse, Response},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use thiserror::Error;

use crate::shared::core::identity::Identity;
use crate::shared::infrastructure::identity::{IdentityError, TokenStore, UserDirectory};
use crate::shell::state::AppState;

#[derive(Debug, Error)]
pub enum AuthRejection {
    #[error("authentication credentials were not provided")]
    Missing,

    #[error("malformed authorization header")]
    Malformed,

    #[error("invalid token")]
    InvalidToken,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Identity(_) | AuthRejection::Unexpected(_) => {
                tracing::error!(error = %self, "authentication failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "detail": "internal server error" })),
                )
                    .into_response()
            }
            rejection => (
                StatusCode::UNAUTHORIZED,
                [(WWW_AUTHENTICATE, "Token")],
                Json(serde_json::json!({ "detail": rejection.to_string() })),
            )
                .into_response(),
        }
    }
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthRejection::Missing)?
            .to_str()
            .map_err(|_| AuthRejection::Malformed)?;
        let (scheme, credentials) = header.split_once(' ').ok_or(AuthRejection::Malformed)?;
        let credentials = credentials.trim().to_string();

        match scheme.to_ascii_lowercase().as_str() {
            "token" | "bearer" => authenticate_token(&*state.identity, &credentials).await,
            "basic" => authenticate_basic(&*state.identity, &credentials).await,
            _ => Err(AuthRejection::Malformed),
        }
    }
}

async fn authenticate_token<TIdentity>(
    identity: &TIdentity,
    key: &str,
) -> Result<Identity, AuthRejection>
where
    TIdentity: UserDirectory + TokenStore,
{
    let token = identity
        .resolve(key)
        .await?
        .ok_or(AuthRejection::InvalidToken)?;
    let user = identity
        .find_by_id(&token.user_id)
        .await?
        .ok_or(AuthRejection::InvalidToken)?;
    Ok(Identity::from(&user))
}

async fn authenticate_basic<TIdentity>(
    identity: &TIdentity,
    credentials: &str,
) -> Result<Identity, AuthRejection>
where
    TIdentity: UserDirectory + TokenStore,
{
    let decoded = STANDARD
        .decode(credentials)
        .map_err(|_| AuthRejection::Malformed)?;
    let decoded = String::from_utf8(decoded).map_err(|_| AuthRejection::Malformed)?;
    let (username, password) = decoded.split_once(':').ok_or(AuthRejection::Malformed)?;

    let user = identity
        .find_by_username(username)
        .await?
        .ok_or(AuthRejection::InvalidCredentials)?;

    // bcrypt verification is CPU bound
    let password = password.to_string();
    let hash = user.password_hash.clone();
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AuthRejection::Unexpected(e.to_string()))?
        .unwrap_or(false);
    if !matches {
        return Err(AuthRejection::InvalidCredentials);
    }
    Ok(Identity::from(&user))
}

#[cfg(test)]
mod auth_tests {
    use axum::{Router, body::Body, http::Request, routing::get};
    use base64::{Engine, engine::general_purpose::STANDARD};
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    use crate::shared::core::identity::Identity;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::state::{ALICE_TOKEN, TestApp};
    use crate::tests::fixtures::users::ALICE_PASSWORD;

    use super::*;

    async fn whoami(identity: Identity) -> String {
        identity.username
    }

    fn app(state: AppState) -> Router {
        Router::new().route("/whoami", get(whoami)).with_state(state)
    }

    async fn call(state: AppState, authorization: Option<String>) -> (StatusCode, String) {
        let mut request = Request::get("/whoami");
        if let Some(value) = authorization {
            request = request.header("authorization", value);
        }
        let response = app(state)
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[rstest]
    #[case(format!("Token {ALICE_TOKEN}"))]
    #[case(format!("Bearer {ALICE_TOKEN}"))]
    #[case(format!("token   {ALICE_TOKEN}"))]
    #[case(format!("Basic {}", STANDARD.encode(format!("alice:{ALICE_PASSWORD}"))))]
    #[tokio::test]
    async fn it_should_authenticate_supported_schemes(#[case] authorization: String) {
        let (status, body) = call(TestApp::new().state, Some(authorization)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "alice");
    }

    #[rstest]
    #[case(None)]
    #[case(Some("Token".to_string()))]
    #[case(Some("Digest abc".to_string()))]
    #[case(Some("Token unknown-key".to_string()))]
    #[case(Some("Basic not-base64!".to_string()))]
    #[case(Some(format!("Basic {}", STANDARD.encode("alice:wrong"))))]
    #[case(Some(format!("Basic {}", STANDARD.encode("nobody:secret"))))]
    #[tokio::test]
    async fn it_should_return_401_for_missing_or_bad_credentials(
        #[case] authorization: Option<String>,
    ) {
        let (status, _) = call(TestApp::new().state, authorization).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_500_when_the_identity_provider_is_offline() {
        let (status, _) = call(
            TestApp::with_offline_identity().state,
            Some(format!("Token {ALICE_TOKEN}")),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
