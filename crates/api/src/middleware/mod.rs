//! Request guards.
//!
//! - [`gate::require_session`] -- redirects dashboard page requests without a session.
//! - [`session::RequireSession`] -- extractor rejecting API requests without a session.

pub mod gate;
pub mod session;
