//! Dynasty: interacting walkers rendered as rings and trails
//!
//! A [`Session`] pairs a [`walker_simulation::WalkerSystem`] with the
//! geometry built from it, and is the only surface a UI or renderer needs.

pub mod error;
pub mod session;

pub use error::SessionError;
pub use session::Session;
