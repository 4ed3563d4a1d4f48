//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `step` is one tick)
//! - Injected, seedable RNG only
//! - No rendering or platform dependencies

pub mod bounce;
pub mod shared;
pub mod simulator;
pub mod state;
pub mod step;

pub use bounce::{VerticalResolution, Wall, fold_into, resolve_vertical};
pub use shared::SharedSimulator;
pub use simulator::Simulator;
pub use state::{Color, Snapshot, Viewport};
pub use step::{StepReport, VerticalMotion};
