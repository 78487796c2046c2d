//! Browser-free simulation core. Everything below builds on the host and is
//! exercised by the integration tests.

pub mod constants;
pub mod dust;
pub mod lifecycle;
pub mod network;
pub mod parallax;
pub mod particle;
pub mod pointer;
pub mod scene;
pub mod schedule;
pub mod stats;
pub mod surface;
pub mod viewport;

pub use lifecycle::teardown_on_pagehide;
pub use parallax::transform_css;
pub use scene::{Scene, SimConfig};
pub use schedule::{FrameScheduler, RenderLoop};
pub use surface::{Rgba, Surface, Translate};
pub use viewport::Viewport;
