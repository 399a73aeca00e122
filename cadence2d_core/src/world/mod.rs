//! The world controller: engine ownership, stepping, and the body/joint
//! registry.

pub mod body;
pub mod events;
pub mod joint;
pub mod registry;
pub mod stepping;

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use nalgebra::{Unit, Vector2};
use rapier2d::prelude::*;
use tracing::debug;

use crate::config::WorldConfig;
use crate::error::{CadenceError, CadenceResult};
use crate::units;

use body::{Body, BodyType, Shape};
use events::WorldEvent;
use joint::{Joint, JointKind};
use registry::{BodyKey, FixtureKey, JointKey, SlotArena};
use stepping::{FpsMeter, StepClock};

struct BodyEntry {
    rb: RigidBodyHandle,
    fixtures: Vec<FixtureKey>,
    joints: Vec<JointKey>,
}

struct JointEntry {
    handle: ImpulseJointHandle,
    body_a: BodyKey,
    body_b: BodyKey,
}

struct FixtureEntry {
    collider: ColliderHandle,
    body: BodyKey,
}

/// A fixed-timestep physics world driven by a host timer.
///
/// The world owns one instance of the engine state for its whole lifetime
/// and tracks every registered body, joint and fixture in a generational
/// registry so externally-owned wrappers can be unwound safely, including
/// when the engine cascade-deletes joints during a body removal.
///
/// All operations are synchronous and run on the caller's thread; the only
/// source of progress is [`tick`] (or the [`run_for`] convenience loop).
///
/// ```rust,ignore
/// let mut world = World::new(WorldConfig::default());
/// let mut crate_body = Body::new(
///     BodyDef::new(BodyType::Dynamic, [160.0, 0.0])
///         .with_fixture(FixtureDef::new(Shape::Box { width: 32.0, height: 32.0 })),
/// );
/// world.register_body(&mut crate_body)?;
/// world.run_for(Duration::from_secs(2));
/// ```
///
/// [`tick`]: World::tick
/// [`run_for`]: World::run_for
pub struct World {
    // Engine state, opaque to everything outside this module.
    rigid_bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    ccd_solver: CCDSolver,
    integration: IntegrationParameters,
    gravity_sim: Vector<f32>,

    // Staged configuration, copied into the engine structs at the next
    // wake-up so a change can never land inside a step.
    gravity: Vector2<f32>,
    allow_sleeping: bool,
    velocity_iterations: u32,
    position_iterations: u32,
    frame_time: u64,
    running: bool,
    report_fps: bool,

    clock: StepClock,
    fps_meter: FpsMeter,
    last_wake: Option<Instant>,

    body_entries: SlotArena<BodyEntry>,
    joint_entries: SlotArena<JointEntry>,
    fixture_entries: SlotArena<FixtureEntry>,
    collider_index: HashMap<ColliderHandle, FixtureKey>,

    events: Vec<WorldEvent>,
}

impl Default for World {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

impl World {
    pub fn new(config: WorldConfig) -> Self {
        let gravity = Vector2::new(config.gravity[0], config.gravity[1]);
        Self {
            rigid_bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            ccd_solver: CCDSolver::new(),
            integration: IntegrationParameters::default(),
            gravity_sim: units::accel_to_sim(gravity),

            gravity,
            allow_sleeping: config.allow_sleeping,
            velocity_iterations: config.velocity_iterations,
            position_iterations: config.position_iterations,
            frame_time: config.frame_time,
            running: true,
            report_fps: config.report_fps,

            clock: StepClock::new(config.time_step),
            fps_meter: FpsMeter::new(),
            last_wake: None,

            body_entries: SlotArena::new(),
            joint_entries: SlotArena::new(),
            fixture_entries: SlotArena::new(),
            collider_index: HashMap::new(),

            events: Vec::new(),
        }
    }

    // ---- Configuration surface -------------------------------------------

    pub fn gravity(&self) -> Vector2<f32> {
        self.gravity
    }

    /// Set gravity in display coordinates (positive y pulls down-screen,
    /// m/s²). Takes effect at the next step boundary.
    pub fn set_gravity(&mut self, gravity: Vector2<f32>) {
        if gravity == self.gravity {
            return;
        }
        debug!(gx = gravity.x, gy = gravity.y, "gravity staged for next step");
        self.gravity = gravity;
        self.events.push(WorldEvent::GravityChanged { gravity });
    }

    pub fn allow_sleeping(&self) -> bool {
        self.allow_sleeping
    }

    /// Allow or forbid the engine to sleep resting bodies. Applies to every
    /// registered body and to bodies registered later.
    pub fn set_allow_sleeping(&mut self, allow_sleeping: bool) {
        if allow_sleeping == self.allow_sleeping {
            return;
        }
        self.allow_sleeping = allow_sleeping;
        for (_, entry) in self.body_entries.iter() {
            if let Some(rb) = self.rigid_bodies.get_mut(entry.rb) {
                *rb.activation_mut() = if allow_sleeping {
                    RigidBodyActivation::default()
                } else {
                    RigidBodyActivation::cannot_sleep()
                };
                if !allow_sleeping {
                    rb.wake_up(true);
                }
            }
        }
        self.events
            .push(WorldEvent::AllowSleepingChanged { allow_sleeping });
    }

    pub fn time_step(&self) -> f32 {
        self.clock.time_step()
    }

    /// Set the physics quantum in seconds. Applies from the next quantum;
    /// already-accumulated wake-up time is consumed in quanta of the new
    /// size.
    pub fn set_time_step(&mut self, time_step: f32) {
        self.clock.set_time_step(time_step);
    }

    pub fn velocity_iterations(&self) -> u32 {
        self.velocity_iterations
    }

    pub fn set_velocity_iterations(&mut self, iterations: u32) {
        self.velocity_iterations = iterations;
    }

    pub fn position_iterations(&self) -> u32 {
        self.position_iterations
    }

    pub fn set_position_iterations(&mut self, iterations: u32) {
        self.position_iterations = iterations;
    }

    /// Advisory wake-up interval in milliseconds for driver loops. Not the
    /// physics quantum.
    pub fn frame_time(&self) -> u64 {
        self.frame_time
    }

    pub fn set_frame_time(&mut self, frame_time: u64) {
        self.frame_time = frame_time;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        if running {
            self.start();
        } else {
            self.stop();
        }
    }

    pub fn report_fps(&self) -> bool {
        self.report_fps
    }

    pub fn set_report_fps(&mut self, report_fps: bool) {
        if report_fps == self.report_fps {
            return;
        }
        self.report_fps = report_fps;
        self.fps_meter.reset();
        self.events.push(WorldEvent::ReportFpsChanged { report_fps });
    }

    /// Last measured wake-up rate, 0.0 before the first window closes.
    pub fn fps(&self) -> f32 {
        self.fps_meter.fps()
    }

    /// Display units per simulation meter.
    pub const fn scale_ratio(&self) -> f32 {
        units::SCALE_RATIO
    }

    // ---- Run control ------------------------------------------------------

    /// Resume stepping. Resets the elapsed-time baseline and drops banked
    /// accumulator time so a paused interval contributes zero steps.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.clock.reset();
        self.last_wake = None;
        self.events.push(WorldEvent::RunningChanged { running: true });
    }

    /// Suspend stepping. Ticks arriving while stopped are ignored.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.events.push(WorldEvent::RunningChanged { running: false });
    }

    /// Zero the linear and angular velocity of every registered body,
    /// leaving positions untouched.
    pub fn reset_velocities(&mut self) {
        for (_, entry) in self.body_entries.iter() {
            if let Some(rb) = self.rigid_bodies.get_mut(entry.rb) {
                rb.set_linvel(vector![0.0, 0.0], false);
                rb.set_angvel(0.0, false);
            }
        }
    }

    // ---- Stepping ---------------------------------------------------------

    /// Host timer entry point: measures elapsed wall-clock time since the
    /// previous tick and advances the simulation by whole fixed quanta.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = match self.last_wake.replace(now) {
            Some(prev) => now.duration_since(prev),
            None => Duration::ZERO,
        };
        self.tick_elapsed(elapsed);
    }

    /// Like [`tick`], with the elapsed interval supplied by the caller.
    /// This is the deterministic entry point for tests and hosts with their
    /// own clock.
    ///
    /// [`tick`]: World::tick
    pub fn tick_elapsed(&mut self, elapsed: Duration) {
        if !self.running {
            return;
        }
        self.apply_staged_settings();

        let steps = self.clock.advance(elapsed.as_secs_f32());
        for _ in 0..steps {
            self.step_once();
        }

        if self.report_fps {
            if let Some(fps) = self.fps_meter.frame(elapsed.as_secs_f32()) {
                self.events.push(WorldEvent::FpsChanged { fps });
            }
        }
        self.events.push(WorldEvent::Stepped { steps });
    }

    /// Drive [`tick`] at roughly [`frame_time`] until `duration` has passed
    /// or the world is stopped.
    ///
    /// [`tick`]: World::tick
    /// [`frame_time`]: World::frame_time
    pub fn run_for(&mut self, duration: Duration) {
        let deadline = Instant::now() + duration;
        while self.running && Instant::now() < deadline {
            let frame = Duration::from_millis(self.frame_time.max(1));
            let tick_start = Instant::now();
            self.tick();
            if let Some(remaining) = frame.checked_sub(tick_start.elapsed()) {
                std::thread::sleep(remaining);
            }
        }
    }

    /// Copy staged configuration into the engine structs. Runs at the top
    /// of each wake-up, before any quantum, so changes always land on a step
    /// boundary.
    fn apply_staged_settings(&mut self) {
        self.gravity_sim = units::accel_to_sim(self.gravity);
        self.integration.dt = self.clock.time_step();
        if let Some(iterations) = NonZeroUsize::new(self.velocity_iterations as usize) {
            self.integration.num_solver_iterations = iterations;
        }
        self.integration.num_internal_pgs_iterations = self.position_iterations.max(1) as usize;
    }

    /// One fixed-size engine step plus contact fan-out.
    fn step_once(&mut self) {
        let (collision_send, collision_recv) =
            rapier2d::crossbeam::channel::unbounded::<CollisionEvent>();
        let (force_send, _force_recv) =
            rapier2d::crossbeam::channel::unbounded::<ContactForceEvent>();
        let event_handler = ChannelEventCollector::new(collision_send, force_send);

        self.pipeline.step(
            &self.gravity_sim,
            &self.integration,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &event_handler,
        );

        // Fan-out happens after the engine call returns, so no observer can
        // see a half-stepped world or mutate the registry mid-step.
        let mut contacts = Vec::new();
        while let Ok(event) = collision_recv.try_recv() {
            let (h1, h2, began) = match event {
                CollisionEvent::Started(h1, h2, _) => (h1, h2, true),
                CollisionEvent::Stopped(h1, h2, _) => (h1, h2, false),
            };
            // Colliders already purged from the registry (mid-removal
            // stop events) are dropped here.
            if let (Some(&a), Some(&b)) =
                (self.collider_index.get(&h1), self.collider_index.get(&h2))
            {
                contacts.push((a.min(b), a.max(b), began));
            }
        }
        // The engine's delivery order varies with object count; sort within
        // the step for stable delivery.
        contacts.sort();
        for (a, b, began) in contacts {
            self.events.push(if began {
                WorldEvent::ContactBegan { a, b }
            } else {
                WorldEvent::ContactEnded { a, b }
            });
        }
    }

    // ---- Registration -----------------------------------------------------

    /// Insert a body (and its fixtures) into the simulation.
    ///
    /// Fails with [`CadenceError::DuplicateBody`] if the wrapper is already
    /// registered: that always means two owners believe they hold the same
    /// engine object.
    pub fn register_body(&mut self, new_body: &mut Body) -> CadenceResult<()> {
        if let Some(key) = new_body.key {
            if self.body_entries.contains(key.0) {
                return Err(CadenceError::DuplicateBody);
            }
        }

        let def = new_body.def.clone();
        let position = units::point_to_sim(Vector2::new(def.position[0], def.position[1]));
        let linvel = units::point_to_sim(Vector2::new(
            def.linear_velocity[0],
            def.linear_velocity[1],
        ));

        let rb = RigidBodyBuilder::new(engine_body_type(def.body_type))
            .translation(vector![position.x, position.y])
            .rotation(units::flip_angle(def.angle))
            .linvel(vector![linvel.x, linvel.y])
            .angvel(units::flip_angle(def.angular_velocity))
            .linear_damping(def.linear_damping)
            .angular_damping(def.angular_damping)
            .gravity_scale(def.gravity_scale)
            .locked_axes(if def.fixed_rotation {
                LockedAxes::ROTATION_LOCKED
            } else {
                LockedAxes::empty()
            })
            .ccd_enabled(def.ccd)
            .can_sleep(self.allow_sleeping)
            .build();
        let rb_handle = self.rigid_bodies.insert(rb);

        let key = BodyKey(self.body_entries.insert(BodyEntry {
            rb: rb_handle,
            fixtures: Vec::new(),
            joints: Vec::new(),
        }));

        let mut fixture_keys = Vec::with_capacity(def.fixtures.len());
        for fixture in &def.fixtures {
            let offset = units::point_to_sim(Vector2::new(fixture.offset[0], fixture.offset[1]));
            let collider = collider_shape(fixture.shape)
                .translation(vector![offset.x, offset.y])
                .density(fixture.density)
                .friction(fixture.friction)
                .restitution(fixture.restitution)
                .sensor(fixture.sensor)
                .active_events(ActiveEvents::COLLISION_EVENTS)
                .build();
            let collider_handle =
                self.colliders
                    .insert_with_parent(collider, rb_handle, &mut self.rigid_bodies);

            let fixture_key = FixtureKey(self.fixture_entries.insert(FixtureEntry {
                collider: collider_handle,
                body: key,
            }));
            self.collider_index.insert(collider_handle, fixture_key);
            fixture_keys.push(fixture_key);
        }
        if let Some(entry) = self.body_entries.get_mut(key.0) {
            entry.fixtures = fixture_keys;
        }

        debug!(fixtures = def.fixtures.len(), "registered body");
        new_body.key = Some(key);
        Ok(())
    }

    /// Remove a body from the simulation.
    ///
    /// The engine cascade-deletes the body's colliders and joints inside
    /// this call; before it returns, every cascaded joint and fixture has
    /// been purged from the registry and announced via
    /// [`WorldEvent::JointDestroyed`] / [`WorldEvent::FixtureDestroyed`].
    /// A no-op for unregistered or already-cascaded wrappers, so teardown
    /// code can call it unconditionally.
    pub fn unregister_body(&mut self, registered: &mut Body) {
        let Some(key) = registered.key.take() else {
            return;
        };
        let Some(entry) = self.body_entries.remove(key.0) else {
            return;
        };

        self.rigid_bodies.remove(
            entry.rb,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );

        // The engine already destroyed these joints; purge the entries
        // without a second engine removal.
        for joint_key in entry.joints {
            if let Some(joint_entry) = self.joint_entries.remove(joint_key.0) {
                let other = if joint_entry.body_a == key {
                    joint_entry.body_b
                } else {
                    joint_entry.body_a
                };
                if let Some(other_entry) = self.body_entries.get_mut(other.0) {
                    other_entry.joints.retain(|j| *j != joint_key);
                }
                self.events
                    .push(WorldEvent::JointDestroyed { joint: joint_key });
            }
        }

        for fixture_key in entry.fixtures {
            if let Some(fixture_entry) = self.fixture_entries.remove(fixture_key.0) {
                self.collider_index.remove(&fixture_entry.collider);
                self.events
                    .push(WorldEvent::FixtureDestroyed { fixture: fixture_key });
            }
        }

        debug!("unregistered body");
    }

    /// Insert a joint between two registered bodies.
    pub fn register_joint(&mut self, new_joint: &mut Joint) -> CadenceResult<()> {
        if let Some(key) = new_joint.key {
            if self.joint_entries.contains(key.0) {
                return Err(CadenceError::DuplicateJoint);
            }
        }

        let def = new_joint.def.clone();
        let rb_a = self
            .body_entries
            .get(def.body_a.0)
            .ok_or(CadenceError::UnknownBody)?
            .rb;
        let rb_b = self
            .body_entries
            .get(def.body_b.0)
            .ok_or(CadenceError::UnknownBody)?
            .rb;

        let anchor_a = units::point_to_sim(Vector2::new(
            def.local_anchor_a[0],
            def.local_anchor_a[1],
        ));
        let anchor_b = units::point_to_sim(Vector2::new(
            def.local_anchor_b[0],
            def.local_anchor_b[1],
        ));
        let joint_data = engine_joint(&def.kind, anchor_a, anchor_b);
        let handle = self.impulse_joints.insert(rb_a, rb_b, joint_data, true);

        let key = JointKey(self.joint_entries.insert(JointEntry {
            handle,
            body_a: def.body_a,
            body_b: def.body_b,
        }));
        for body_key in [def.body_a, def.body_b] {
            if let Some(entry) = self.body_entries.get_mut(body_key.0) {
                entry.joints.push(key);
            }
        }

        new_joint.key = Some(key);
        Ok(())
    }

    /// Remove a joint from the simulation.
    ///
    /// A no-op for unregistered wrappers and for joints the engine already
    /// cascade-deleted — the destroy is never issued twice.
    pub fn unregister_joint(&mut self, registered: &mut Joint) {
        let Some(key) = registered.key.take() else {
            return;
        };
        let Some(entry) = self.joint_entries.remove(key.0) else {
            return;
        };

        self.impulse_joints.remove(entry.handle, true);
        for body_key in [entry.body_a, entry.body_b] {
            if let Some(body_entry) = self.body_entries.get_mut(body_key.0) {
                body_entry.joints.retain(|j| *j != key);
            }
        }
    }

    /// Remove a single fixture from its body, announcing
    /// [`WorldEvent::FixtureDestroyed`]. A no-op on stale keys.
    pub fn destroy_fixture(&mut self, fixture: FixtureKey) {
        let Some(entry) = self.fixture_entries.remove(fixture.0) else {
            return;
        };
        self.collider_index.remove(&entry.collider);
        if let Some(body_entry) = self.body_entries.get_mut(entry.body.0) {
            body_entry.fixtures.retain(|f| *f != fixture);
        }
        self.colliders
            .remove(entry.collider, &mut self.islands, &mut self.rigid_bodies, true);
        self.events.push(WorldEvent::FixtureDestroyed { fixture });
    }

    // ---- Body access ------------------------------------------------------

    /// Position of the body origin in display coordinates.
    pub fn body_position(&self, body: BodyKey) -> CadenceResult<Vector2<f32>> {
        let rb = self.body_ref(body)?;
        let t = rb.translation();
        Ok(units::point_to_display(Vector2::new(t.x, t.y)))
    }

    /// Rotation in radians, display convention (clockwise-positive).
    pub fn body_angle(&self, body: BodyKey) -> CadenceResult<f32> {
        let rb = self.body_ref(body)?;
        Ok(units::flip_angle(rb.rotation().angle()))
    }

    /// Linear velocity in display units per second.
    pub fn body_linear_velocity(&self, body: BodyKey) -> CadenceResult<Vector2<f32>> {
        let rb = self.body_ref(body)?;
        let v = rb.linvel();
        Ok(units::point_to_display(Vector2::new(v.x, v.y)))
    }

    /// Angular velocity in radians per second, clockwise-positive.
    pub fn body_angular_velocity(&self, body: BodyKey) -> CadenceResult<f32> {
        let rb = self.body_ref(body)?;
        Ok(units::flip_angle(rb.angvel()))
    }

    pub fn set_body_linear_velocity(
        &mut self,
        body: BodyKey,
        velocity: Vector2<f32>,
    ) -> CadenceResult<()> {
        let rb = self.body_mut(body)?;
        let v = units::point_to_sim(velocity);
        rb.set_linvel(vector![v.x, v.y], true);
        Ok(())
    }

    /// Apply a continuous force (display units), cleared by the engine each
    /// step.
    pub fn apply_force(&mut self, body: BodyKey, force: Vector2<f32>) -> CadenceResult<()> {
        let rb = self.body_mut(body)?;
        let f = units::point_to_sim(force);
        rb.add_force(vector![f.x, f.y], true);
        Ok(())
    }

    /// Apply an instantaneous impulse (display units).
    pub fn apply_impulse(&mut self, body: BodyKey, impulse: Vector2<f32>) -> CadenceResult<()> {
        let rb = self.body_mut(body)?;
        let i = units::point_to_sim(impulse);
        rb.apply_impulse(vector![i.x, i.y], true);
        Ok(())
    }

    /// Fixture keys currently attached to a body, in registration order.
    pub fn body_fixtures(&self, body: BodyKey) -> CadenceResult<Vec<FixtureKey>> {
        let entry = self
            .body_entries
            .get(body.0)
            .ok_or(CadenceError::stale("body"))?;
        Ok(entry.fixtures.clone())
    }

    pub fn body_count(&self) -> usize {
        self.body_entries.len()
    }

    pub fn joint_count(&self) -> usize {
        self.joint_entries.len()
    }

    pub fn fixture_count(&self) -> usize {
        self.fixture_entries.len()
    }

    /// Take all notifications buffered since the last drain.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.events)
    }

    fn body_ref(&self, body: BodyKey) -> CadenceResult<&RigidBody> {
        let entry = self
            .body_entries
            .get(body.0)
            .ok_or(CadenceError::stale("body"))?;
        self.rigid_bodies
            .get(entry.rb)
            .ok_or(CadenceError::stale("body"))
    }

    fn body_mut(&mut self, body: BodyKey) -> CadenceResult<&mut RigidBody> {
        let entry = self
            .body_entries
            .get(body.0)
            .ok_or(CadenceError::stale("body"))?;
        self.rigid_bodies
            .get_mut(entry.rb)
            .ok_or(CadenceError::stale("body"))
    }
}

fn engine_body_type(body_type: BodyType) -> RigidBodyType {
    match body_type {
        BodyType::Static => RigidBodyType::Fixed,
        BodyType::Kinematic => RigidBodyType::KinematicVelocityBased,
        BodyType::Dynamic => RigidBodyType::Dynamic,
    }
}

fn collider_shape(shape: Shape) -> ColliderBuilder {
    match shape {
        Shape::Box { width, height } => ColliderBuilder::cuboid(
            units::to_meters(width) / 2.0,
            units::to_meters(height) / 2.0,
        ),
        Shape::Circle { radius } => ColliderBuilder::ball(units::to_meters(radius)),
    }
}

fn engine_joint(kind: &JointKind, anchor_a: Vector2<f32>, anchor_b: Vector2<f32>) -> GenericJoint {
    match *kind {
        JointKind::Revolute { limits } => {
            let mut builder = RevoluteJointBuilder::new()
                .local_anchor1(point![anchor_a.x, anchor_a.y])
                .local_anchor2(point![anchor_b.x, anchor_b.y]);
            if let Some([min, max]) = limits {
                // The y flip mirrors rotation direction, swapping the bounds.
                builder = builder.limits([units::flip_angle(max), units::flip_angle(min)]);
            }
            builder.build().into()
        }
        JointKind::Prismatic { axis, limits } => {
            let axis = Unit::new_normalize(vector![axis[0], -axis[1]]);
            let mut builder = PrismaticJointBuilder::new(axis)
                .local_anchor1(point![anchor_a.x, anchor_a.y])
                .local_anchor2(point![anchor_b.x, anchor_b.y]);
            if let Some([min, max]) = limits {
                builder = builder.limits([units::to_meters(min), units::to_meters(max)]);
            }
            builder.build().into()
        }
        JointKind::Fixed => FixedJointBuilder::new()
            .local_anchor1(point![anchor_a.x, anchor_a.y])
            .local_anchor2(point![anchor_b.x, anchor_b.y])
            .build()
            .into(),
        JointKind::Spring {
            rest_length,
            stiffness,
            damping,
        } => SpringJointBuilder::new(units::to_meters(rest_length), stiffness, damping)
            .local_anchor1(point![anchor_a.x, anchor_a.y])
            .local_anchor2(point![anchor_b.x, anchor_b.y])
            .build()
            .into(),
    }
}
