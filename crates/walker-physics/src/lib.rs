//! # Walker Physics
//!
//! Interaction laws, relation models and the pairwise kernels that move
//! walkers towards (or away from) the walkers they are related to.

pub mod constants;
pub mod forces;
pub mod laws;

pub use constants::*;
pub use forces::*;
pub use laws::*;
