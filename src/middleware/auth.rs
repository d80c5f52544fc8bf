use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth;
use crate::database::manager::DatabaseManager;
use crate::database::models::User;
use crate::error::ApiError;

/// Authenticated identity attached to the request context. There is no
/// role or permission granularity; the username is the whole identity.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub username: String,
}

/// Passive authentication gate, run once per request before any route
/// handler. A missing or invalid bearer credential never rejects the
/// request; it only leaves the identity unset. Enforcement happens
/// per-route via the `CurrentUser` extractor.
pub async fn auth_gate(headers: HeaderMap, mut request: Request, next: Next) -> Response {
    // Resolution happens at most once; later stages only read the extension
    if request.extensions().get::<AuthUser>().is_none() {
        if let Some(token) = extract_bearer(&headers) {
            match resolve_identity(&token).await {
                Ok(Some(user)) => {
                    request.extensions_mut().insert(user);
                }
                Ok(None) => {}
                Err(e) => {
                    // Downgrade to unauthenticated, but keep token failures
                    // visible - a wrong signing key would otherwise look
                    // like anonymous traffic
                    tracing::warn!("Token rejected by auth gate: {}", e);
                }
            }
        }
    }

    next.run(request).await
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("authorization")?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Extract the subject, load the stored user record, and validate the
/// token against it. Returns Ok(None) when the user no longer exists or
/// the token does not match the stored record.
async fn resolve_identity(token: &str) -> anyhow::Result<Option<AuthUser>> {
    let username = auth::extract_username(token)?;

    let pool = DatabaseManager::pool().await?;
    let user = sqlx::query_as::<_, User>(
        "SELECT user_id, username, password, email FROM users WHERE username = $1",
    )
    .bind(&username)
    .fetch_optional(&pool)
    .await?;

    let Some(user) = user else {
        return Ok(None);
    };

    if auth::validate_token(token, &user.username) {
        Ok(Some(AuthUser {
            username: user.username,
        }))
    } else {
        Ok(None)
    }
}

/// Route-level requirement: rejects with 401 when the gate attached no
/// identity
pub struct CurrentUser(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| ApiError::unauthorized("Authentication required"))
    }
}

/// Optional identity for public routes that behave differently when the
/// caller is logged in (catalog search annotations)
pub struct MaybeUser(pub Option<AuthUser>);

#[async_trait]
impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(parts.extensions.get::<AuthUser>().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(extract_bearer(&headers), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn missing_header_yields_none() {
        assert_eq!(extract_bearer(&HeaderMap::new()), None);
    }

    #[test]
    fn non_bearer_scheme_yields_none() {
        let headers = headers_with("Basic dXNlcjpwdw==");
        assert_eq!(extract_bearer(&headers), None);
    }

    #[test]
    fn empty_bearer_yields_none() {
        let headers = headers_with("Bearer   ");
        assert_eq!(extract_bearer(&headers), None);
    }
}
