//! Request authentication gate
//!
//! Runs as middleware in front of the product routes. When no authenticator is
//! configured the routes are served without it.

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::error::{Error, Result};

/// Decides whether a bearer token belongs to an authenticated caller
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, token: &str) -> bool;
}

/// Accepts any token from a fixed set
#[derive(Debug, Clone, Default)]
pub struct StaticTokens {
    tokens: HashSet<String>,
}

impl StaticTokens {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }
}

impl Authenticator for StaticTokens {
    fn authenticate(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }
}

pub async fn require_auth(
    State(authenticator): State<Arc<dyn Authenticator>>,
    req: Request,
    next: Next,
) -> Result<Response> {
    let token = extract_bearer(req.headers())?;

    if !authenticator.authenticate(token) {
        tracing::debug!(path = %req.uri().path(), "Rejected bearer token");
        return Err(Error::Unauthorized);
    }

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(Error::Unauthorized)?
        .to_str()
        .map_err(|_| Error::Unauthorized)?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or(Error::Unauthorized)?
        .trim();

    if token.is_empty() {
        return Err(Error::Unauthorized);
    }

    Ok(token)
}
