//! HTTP basic authentication for the admin panel

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderValue, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::config::AdminConfig;
use crate::server::AppState;

/// Decides whether a username/password pair may use the admin panel
pub trait Authenticator: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;

    /// Realm advertised in the `WWW-Authenticate` challenge
    fn realm(&self) -> &str;
}

/// A single configured credential pair
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
    realm: String,
}

impl StaticCredentials {
    pub fn new(username: &str, password: &str, realm: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            realm: realm.to_string(),
        }
    }

    pub fn from_config(config: &AdminConfig) -> Self {
        Self::new(&config.username, &config.password, &config.realm)
    }
}

impl Authenticator for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }

    fn realm(&self) -> &str {
        &self.realm
    }
}

/// Decode an `Authorization: Basic ...` header value into username and password
pub fn parse_basic_auth(value: &str) -> Option<(String, String)> {
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

/// Middleware guarding every admin route
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let credentials = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_basic_auth);

    match credentials {
        Some((username, password)) if state.auth.verify(&username, &password) => {
            next.run(req).await
        }
        credentials => {
            if let Some((username, _)) = credentials {
                tracing::warn!("Rejected admin login for user {:?} on {}", username, req.uri());
            } else {
                tracing::debug!("Missing admin credentials on {}", req.uri());
            }
            challenge(state.auth.realm())
        }
    }
}

fn challenge(realm: &str) -> Response {
    let realm = realm.replace(['"', '\\'], "");
    let mut response = (StatusCode::UNAUTHORIZED, "Authentication required").into_response();
    if let Ok(value) = HeaderValue::from_str(&format!("Basic realm=\"{}\"", realm)) {
        response.headers_mut().insert(header::WWW_AUTHENTICATE, value);
    }
    response
}
