//! Carousel Core (engine-agnostic)
//!
//! Headless navigation and layout engine for a circular pseudo-3D item
//! carousel. The crate owns the ring index math, the navigation state
//! machine, the multi-step walk scheduler, and the gesture/autoplay drivers;
//! rendering adapters feed raw events in through `Inputs` and apply the
//! per-item `SlidePlacement`s they get back. No DOM, no wall clock, no
//! rendering.

pub mod autoplay;
pub mod config;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod inputs;
pub mod layout;
pub mod nav;
pub mod outputs;
pub mod ring;
pub mod walk;

// Re-exports for consumers (adapters)
pub use autoplay::Autoplay;
pub use config::{Bias, CarouselConfig, Direction};
pub use engine::Engine;
pub use error::CarouselError;
pub use gesture::{GestureSession, SwipeIntent};
pub use inputs::{Command, Inputs, PointerEvent};
pub use layout::{compute_placements, slide_size};
pub use nav::NavState;
pub use outputs::{CarouselEvent, Outputs, SlidePlacement, SlideSize};
pub use ring::NeighborLayout;
pub use walk::Walk;

/// Carousel result type
pub type Result<T> = core::result::Result<T, CarouselError>;
