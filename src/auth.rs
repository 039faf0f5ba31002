use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use leptos::logging::{log, warn};
use serde::Deserialize;
use serde_json::Value;

/// Local storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Route the login prompt sends the user to.
pub const LOGIN_ROUTE: &str = "/login";

/// Source of the persisted bearer token.
pub trait TokenStore {
    fn get_token(&self) -> Option<String>;
}

/// Reads the token from `window.localStorage`. Always empty outside the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl TokenStore for BrowserStorage {
    #[cfg(target_arch = "wasm32")]
    fn get_token(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(TOKEN_KEY).ok().flatten()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn get_token(&self) -> Option<String> {
        None
    }
}

/// A fixed token, for callers that already hold one.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(pub Option<String>);

impl TokenStore for StaticToken {
    fn get_token(&self) -> Option<String> {
        self.0.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user_id: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn from_token(token: Option<String>) -> Self {
        let token = token.filter(|t| !t.trim().is_empty());
        let user_id = token.as_deref().and_then(decode_user_id);
        Self { token, user_id }
    }

    pub fn from_store(store: &impl TokenStore) -> Self {
        Self::from_token(store.get_token())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {}", token))
    }
}

#[derive(Deserialize)]
struct Claims {
    #[serde(rename = "_id")]
    id: Option<Value>,
}

/// Extracts the `_id` claim from a JWT without checking its signature.
/// Returns `None` for anything that is not a readable token.
pub fn decode_user_id(token: &str) -> Option<String> {
    let mut parts = token.split('.');
    let payload = match (parts.next(), parts.next()) {
        (Some(_), Some(payload)) if !payload.is_empty() => payload,
        _ => {
            warn!("[AUTH] Token is not a JWT");
            return None;
        }
    };

    let bytes = match URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("[AUTH] Failed to decode token payload: {}", e);
            return None;
        }
    };

    let claims: Claims = match serde_json::from_slice(&bytes) {
        Ok(claims) => claims,
        Err(e) => {
            warn!("[AUTH] Token payload is not valid JSON: {}", e);
            return None;
        }
    };

    match claims.id {
        Some(Value::String(id)) if !id.is_empty() => Some(id),
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => {
            warn!("[AUTH] Token carries no user id");
            None
        }
    }
}

pub fn redirect_to_login() {
    log!("[AUTH] Redirecting to {}", LOGIN_ROUTE);
    #[cfg(target_arch = "wasm32")]
    {
        use leptos::logging::error;
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.location().set_href(LOGIN_ROUTE) {
                    error!("[AUTH] Navigation to {} failed: {:?}", LOGIN_ROUTE, e);
                }
            }
            None => error!("[AUTH] No window available for navigation"),
        }
    }
}
