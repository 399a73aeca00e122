//! Host-side body and fixture descriptions.

use super::registry::BodyKey;
use nalgebra::Vector2;
use serde::Deserialize;

/// How the engine treats a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum BodyType {
    /// Never moves. Ground, walls.
    Static,
    /// Moved by setting velocities, ignores forces.
    Kinematic,
    /// Fully simulated.
    Dynamic,
}

/// Collision shape in display units.
#[derive(Debug, Clone, Copy, Deserialize)]
pub enum Shape {
    Box { width: f32, height: f32 },
    Circle { radius: f32 },
}

/// Shape + material attached to a body.
///
/// Friction/restitution/density follow the usual rigid-body material model;
/// a sensor fixture reports contacts without generating a collision response.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureDef {
    pub shape: Shape,
    /// Offset of the shape from the body origin, display units.
    #[serde(default)]
    pub offset: [f32; 2],
    #[serde(default = "default_density")]
    pub density: f32,
    #[serde(default = "default_friction")]
    pub friction: f32,
    #[serde(default)]
    pub restitution: f32,
    #[serde(default)]
    pub sensor: bool,
}

fn default_density() -> f32 {
    1.0
}

fn default_friction() -> f32 {
    0.5
}

impl FixtureDef {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            offset: [0.0, 0.0],
            density: default_density(),
            friction: default_friction(),
            restitution: 0.0,
            sensor: false,
        }
    }
}

/// Everything needed to create a body, display coordinates throughout.
#[derive(Debug, Clone, Deserialize)]
pub struct BodyDef {
    pub body_type: BodyType,
    /// Position of the body origin, pixels, y-down.
    pub position: [f32; 2],
    /// Rotation in radians, clockwise-positive.
    #[serde(default)]
    pub angle: f32,
    /// Initial linear velocity, pixels per second.
    #[serde(default)]
    pub linear_velocity: [f32; 2],
    /// Initial angular velocity, radians per second, clockwise-positive.
    #[serde(default)]
    pub angular_velocity: f32,
    #[serde(default)]
    pub linear_damping: f32,
    #[serde(default)]
    pub angular_damping: f32,
    /// Multiplier on world gravity for this body.
    #[serde(default = "default_gravity_scale")]
    pub gravity_scale: f32,
    /// Lock rotation entirely (top-down characters, elevators).
    #[serde(default)]
    pub fixed_rotation: bool,
    /// Enable continuous collision detection for fast movers.
    #[serde(default)]
    pub ccd: bool,
    #[serde(default)]
    pub fixtures: Vec<FixtureDef>,
}

fn default_gravity_scale() -> f32 {
    1.0
}

impl BodyDef {
    pub fn new(body_type: BodyType, position: [f32; 2]) -> Self {
        Self {
            body_type,
            position,
            angle: 0.0,
            linear_velocity: [0.0, 0.0],
            angular_velocity: 0.0,
            linear_damping: 0.0,
            angular_damping: 0.0,
            gravity_scale: 1.0,
            fixed_rotation: false,
            ccd: false,
            fixtures: Vec::new(),
        }
    }

    pub fn with_fixture(mut self, fixture: FixtureDef) -> Self {
        self.fixtures.push(fixture);
        self
    }

    pub fn with_linear_velocity(mut self, velocity: Vector2<f32>) -> Self {
        self.linear_velocity = [velocity.x, velocity.y];
        self
    }
}

/// A host-owned rigid body.
///
/// The wrapper participates in stepping only between
/// [`World::register_body`] and [`World::unregister_body`]; its key goes
/// stale the moment the underlying engine object is destroyed, whoever
/// destroyed it.
///
/// [`World::register_body`]: crate::World::register_body
/// [`World::unregister_body`]: crate::World::unregister_body
#[derive(Debug, Clone)]
pub struct Body {
    pub(crate) def: BodyDef,
    pub(crate) key: Option<BodyKey>,
}

impl Body {
    pub fn new(def: BodyDef) -> Self {
        Self { def, key: None }
    }

    pub fn def(&self) -> &BodyDef {
        &self.def
    }

    /// Registry key while registered, `None` otherwise. A returned key may
    /// still be stale if the engine cascaded this body away.
    pub fn key(&self) -> Option<BodyKey> {
        self.key
    }
}
