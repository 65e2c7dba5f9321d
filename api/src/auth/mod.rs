//! Request gating and request logging.
//!
//! Access is decided from a role claim the caller puts in the request body
//! itself. Nothing ties that claim to an identity.

pub mod claims;
pub mod guards;
pub mod middleware;
