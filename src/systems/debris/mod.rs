//! Debris - bounded lifecycle of thrown snow chunks
//!
//! Wraps a `PhysicsBackend` and owns every dynamic body it creates.
//! Two hard bounds hold at every tick boundary:
//! - no body outlives its time-to-live
//! - the number of live bodies never exceeds the configured cap
//!
//! Static boundary geometry (ground slab, optional side walls) is derived from
//! the viewport and the side-exit policy and is rebuilt wholesale on change.

mod config;
mod manager;


pub use config::{DebrisConfig, DebrisConfigPatch, DEFAULT_MAX_BODIES};
pub use manager::{DebrisManager, DebrisSink, SpawnRequest, StepReport};
