// Caller-side match presentation.
// Wraps the recommendation flow with fallback to example matches and builds
// display records from real skill overlaps against the peer directory.

pub mod catalog;
pub mod decorate;
pub mod directory;
pub mod handlers;
pub mod models;

pub use directory::PeerDirectory;
