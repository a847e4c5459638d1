//! Owned session state.
//!
//! A [`SessionStore`] replaces ambient "current user" state: screens receive
//! the store (or a `&Session`) as an argument instead of reaching for a
//! global.

use marketdesk_model::UserRole;
use marketdesk_types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::claims::Claims;
use crate::error::{SessionError, SessionResult};
use crate::scope::ProductScope;

/// The logged-in user as described by the token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: RecordId,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub vendor_id: Option<i64>,
}

/// A validated login token and the user it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    token: String,
    user: SessionUser,
    expires_at: Option<Timestamp>,
}

impl Session {
    /// Decodes `token` and checks the claims every screen relies on.
    ///
    /// # Errors
    ///
    /// Fails when the token is malformed, a required claim is missing or
    /// empty, or the role is unknown.
    pub fn from_token(token: &str) -> SessionResult<Self> {
        let claims = Claims::decode(token)?;

        let id = claims.id.ok_or(SessionError::MissingClaim("id"))?;
        if claims.email.trim().is_empty() {
            return Err(SessionError::MissingClaim("email"));
        }
        if claims.name.trim().is_empty() {
            return Err(SessionError::MissingClaim("name"));
        }
        if claims.role.is_empty() {
            return Err(SessionError::MissingClaim("role"));
        }
        let role: UserRole = claims
            .role
            .parse()
            .map_err(|_| SessionError::UnknownRole(claims.role.clone()))?;

        let expires_at = match claims.exp {
            Some(exp) => Some(Timestamp::from_secs(exp).ok_or_else(|| {
                SessionError::InvalidTokenFormat(format!("exp {exp} out of range"))
            })?),
            None => None,
        };

        Ok(Self {
            token: token.trim().to_string(),
            user: SessionUser {
                id,
                email: claims.email,
                name: claims.name,
                role,
                vendor_id: claims.vendor_id,
            },
            expires_at,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> &SessionUser {
        &self.user
    }

    pub fn expires_at(&self) -> Option<Timestamp> {
        self.expires_at
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Tokens without `exp` never expire client-side.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }

    /// Products this session may list.
    pub fn product_scope(&self) -> SessionResult<ProductScope> {
        ProductScope::for_user(&self.user)
    }
}

/// Holds the current session, if any.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    current: Option<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `token` and makes it the current session, replacing any
    /// previous one. On failure the store is left unchanged.
    pub fn login(&mut self, token: &str) -> SessionResult<&Session> {
        let session = Session::from_token(token).inspect_err(|e| warn!("Login rejected: {}", e))?;
        info!("Logged in {} as {}", session.user.email, session.user.role);
        Ok(&*self.current.insert(session))
    }

    pub fn logout(&mut self) {
        if let Some(session) = self.current.take() {
            info!("Logged out {}", session.user.email);
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// The current session if it is still valid at `now`. An expired session
    /// is dropped.
    pub fn authenticated(&mut self, now: Timestamp) -> SessionResult<&Session> {
        let expired_at = match &self.current {
            None => return Err(SessionError::NotLoggedIn),
            Some(session) if session.is_expired(now) => session.expires_at,
            Some(_) => None,
        };

        if let Some(at) = expired_at {
            debug!("Session expired at {}, logging out", at);
            self.current = None;
            return Err(SessionError::Expired(at.to_string()));
        }
        self.current.as_ref().ok_or(SessionError::NotLoggedIn)
    }

    pub fn is_authenticated(&mut self, now: Timestamp) -> bool {
        self.authenticated(now).is_ok()
    }
}
