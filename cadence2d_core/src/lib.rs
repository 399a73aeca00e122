//! # cadence2d core
//!
//! A fixed-timestep 2D physics world controller for scene-driven hosts.
//!
//! The host environment (a scene graph, a game loop, a test harness) owns
//! the lifetimes of bodies and joints and delivers timer ticks; this crate
//! owns the physics engine and turns those irregular ticks into
//! deterministic fixed-size simulation steps:
//!
//! - **World**: owns the engine state, configuration and registry
//! - **Stepping**: fixed-timestep accumulation decoupling wake-up jitter
//!   from physics quanta
//! - **Registry**: generational keys so externally-owned wrappers can be
//!   unwound safely, even when the engine cascade-deletes joints
//! - **Events**: change notifications, per-tick stepped signal, and
//!   contact/destruction fan-out
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cadence2d_core::{Body, BodyDef, BodyType, FixtureDef, Shape, World, WorldConfig};
//!
//! let mut world = World::new(WorldConfig::default());
//!
//! let mut ground = Body::new(
//!     BodyDef::new(BodyType::Static, [0.0, 240.0])
//!         .with_fixture(FixtureDef::new(Shape::Box { width: 640.0, height: 16.0 })),
//! );
//! world.register_body(&mut ground)?;
//!
//! loop {
//!     world.tick(); // from the host timer, every ~16 ms
//!     for event in world.drain_events() {
//!         // react to Stepped / ContactBegan / ...
//!     }
//! }
//! ```
//!
//! Positions and distances cross the API in pixel-like display units with y
//! pointing down; see [`units`] for the conversion rules.

pub mod config;
pub mod error;
pub mod units;
pub mod world;

// Re-export commonly used types for easy access
pub use config::WorldConfig;
pub use error::{CadenceError, CadenceResult};
pub use world::body::{Body, BodyDef, BodyType, FixtureDef, Shape};
pub use world::events::WorldEvent;
pub use world::joint::{Joint, JointDef, JointKind};
pub use world::registry::{BodyKey, FixtureKey, JointKey};
pub use world::World;
