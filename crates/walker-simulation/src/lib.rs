//! # Walker Simulation Engine
//!
//! Deterministic generation of walker start positions and relations, and
//! integration of their trajectories under an interaction law.
//!
//! The engine is a four-stage pipeline
//! (`StartPositions → RelationMask → RelationMatrix → Positions`): a
//! parameter change or a reseed invalidates one stage and everything
//! downstream of it, and only those stages are recomputed.

pub mod error;
pub mod history;
pub mod integrator;
pub mod params;
pub mod relations;
pub mod seed;
pub mod simulation;
pub mod stage;

pub use error::*;
pub use history::*;
pub use params::*;
pub use relations::*;
pub use seed::*;
pub use simulation::*;
pub use stage::*;
