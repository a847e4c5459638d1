//! Login sessions for the MarketDesk dashboard.
//!
//! The dashboard authenticates against the commerce API and receives a JWT.
//! This crate turns that token into an owned [`Session`] value:
//! - Claims are decoded from the token payload and checked for the fields
//!   every screen relies on (id, email, name, role)
//! - [`SessionStore`] holds at most one session and is passed explicitly to
//!   whatever needs it
//! - [`ProductScope`] decides which products a user may list
//!
//! # Token Format
//!
//! Tokens are `base64url(header).base64url(payload).signature`. Only the
//! payload is read. Signatures are checked by the API on every request, so
//! the dashboard never holds the signing key.

mod claims;
mod error;
mod scope;
mod session;

pub use claims::Claims;
pub use error::{SessionError, SessionResult};
pub use scope::ProductScope;
pub use session::{Session, SessionStore, SessionUser};
