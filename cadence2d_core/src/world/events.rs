//! Notifications emitted by the world and drained by the host.

use super::registry::{FixtureKey, JointKey};
use nalgebra::Vector2;

/// Something the host may want to react to.
///
/// Configuration events fire on value change, not on every tick. `Stepped`
/// fires exactly once per wake-up, never once per physics quantum. Contact
/// pairs are sorted within a step for stable delivery, but their order across
/// steps is engine-determined and not guaranteed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorldEvent {
    GravityChanged { gravity: Vector2<f32> },
    RunningChanged { running: bool },
    AllowSleepingChanged { allow_sleeping: bool },
    ReportFpsChanged { report_fps: bool },
    FpsChanged { fps: f32 },
    /// One wake-up completed; `steps` physics quanta ran (possibly zero).
    Stepped { steps: u32 },
    ContactBegan { a: FixtureKey, b: FixtureKey },
    ContactEnded { a: FixtureKey, b: FixtureKey },
    /// The engine destroyed this joint as a side effect of removing one of
    /// its bodies. Its registry entry is already gone when this is observed.
    JointDestroyed { joint: JointKey },
    /// A fixture's collider left the simulation, either with its body or
    /// through an explicit removal.
    FixtureDestroyed { fixture: FixtureKey },
}
