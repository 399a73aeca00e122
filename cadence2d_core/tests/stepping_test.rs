// Stepping scheduler behavior observed through the public world surface.
use approx::assert_relative_eq;
use cadence2d_core::{Body, BodyDef, BodyType, FixtureDef, Shape, World, WorldConfig, WorldEvent};
use std::time::Duration;

const DT: f32 = 1.0 / 60.0;

fn secs(s: f32) -> Duration {
    Duration::from_secs_f32(s)
}

// Wake-up spanning `n` quanta, padded by 1% of a quantum so that the
// f32 → Duration → f32 round-trip can never land just below a step boundary.
fn quanta(n: f32) -> Duration {
    secs((n + 0.01) * DT)
}

fn steps_in(events: &[WorldEvent]) -> u32 {
    events
        .iter()
        .map(|e| match e {
            WorldEvent::Stepped { steps } => *steps,
            _ => 0,
        })
        .sum()
}

fn falling_box(x: f32, y: f32) -> Body {
    Body::new(
        BodyDef::new(BodyType::Dynamic, [x, y])
            .with_fixture(FixtureDef::new(Shape::Box {
                width: 32.0,
                height: 32.0,
            })),
    )
}

#[test]
fn test_step_count_is_independent_of_wakeup_distribution() {
    let mut burst = World::new(WorldConfig::default());
    burst.tick_elapsed(quanta(5.0));
    let burst_steps = steps_in(&burst.drain_events());

    let mut spread = World::new(WorldConfig::default());
    for _ in 0..5 {
        spread.tick_elapsed(quanta(1.0));
    }
    let spread_steps = steps_in(&spread.drain_events());

    assert_eq!(burst_steps, 5);
    assert_eq!(spread_steps, burst_steps);
}

#[test]
fn test_stepped_fires_once_per_wakeup() {
    let mut world = World::new(WorldConfig::default());
    world.tick_elapsed(quanta(5.0));

    let stepped: Vec<_> = world
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, WorldEvent::Stepped { .. }))
        .collect();
    assert_eq!(stepped, vec![WorldEvent::Stepped { steps: 5 }]);

    // A wake-up that banks less than a quantum still announces itself.
    world.tick_elapsed(secs(0.25 * DT));
    let stepped: Vec<_> = world
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, WorldEvent::Stepped { .. }))
        .collect();
    assert_eq!(stepped, vec![WorldEvent::Stepped { steps: 0 }]);
}

#[test]
fn test_stepping_with_empty_registry_is_valid() {
    let mut world = World::new(WorldConfig::default());
    world.tick_elapsed(quanta(1.0));
    assert_eq!(steps_in(&world.drain_events()), 1);
    assert_eq!(world.body_count(), 0);
}

#[test]
fn test_pause_preserves_no_queued_steps() {
    let mut world = World::new(WorldConfig::default());

    // Bank 0.9 of a quantum, then pause.
    world.tick_elapsed(secs(0.9 * DT));
    world.stop();

    // However long the pause was, resuming starts from a clean accumulator:
    // another 0.9 of a quantum must still not step.
    world.start();
    world.tick_elapsed(secs(0.9 * DT));
    assert_eq!(steps_in(&world.drain_events()), 0);
}

#[test]
fn test_ticks_while_stopped_are_ignored() {
    let mut world = World::new(WorldConfig::default());
    world.stop();
    world.tick_elapsed(secs(10.0 * DT));

    let events = world.drain_events();
    assert_eq!(steps_in(&events), 0);
    assert!(!events.iter().any(|e| matches!(e, WorldEvent::Stepped { .. })));
}

#[test]
fn test_spike_gap_contributes_zero_steps() {
    let mut world = World::new(WorldConfig::default());
    world.tick_elapsed(secs(3.0));
    let events = world.drain_events();
    assert_eq!(steps_in(&events), 0);
    // The gap is dropped entirely: a following normal wake-up behaves as if
    // the world had just started.
    world.tick_elapsed(secs(0.5 * DT));
    assert_eq!(steps_in(&world.drain_events()), 0);
}

#[test]
fn test_trajectories_are_deterministic_across_distributions() {
    let mut a = World::new(WorldConfig::default());
    let mut b = World::new(WorldConfig::default());

    let mut body_a = falling_box(100.0, 0.0);
    let mut body_b = falling_box(100.0, 0.0);
    a.register_body(&mut body_a).unwrap();
    b.register_body(&mut body_b).unwrap();

    // 30 quanta delivered as 30 small wake-ups vs 6 large ones.
    for _ in 0..30 {
        a.tick_elapsed(quanta(1.0));
    }
    for _ in 0..6 {
        b.tick_elapsed(quanta(5.0));
    }

    let pos_a = a.body_position(body_a.key().unwrap()).unwrap();
    let pos_b = b.body_position(body_b.key().unwrap()).unwrap();
    assert_relative_eq!(pos_a.x, pos_b.x, epsilon = 1e-4);
    assert_relative_eq!(pos_a.y, pos_b.y, epsilon = 1e-4);
    // Gravity points down-screen: the body must actually have fallen.
    assert!(pos_a.y > 1.0);
}

#[test]
fn test_reset_velocities_zeroes_motion_but_not_positions() {
    let mut world = World::new(WorldConfig::default());

    let mut mover = Body::new(
        BodyDef::new(BodyType::Dynamic, [0.0, 0.0])
            .with_fixture(FixtureDef::new(Shape::Circle { radius: 8.0 }))
            .with_linear_velocity(nalgebra::Vector2::new(120.0, 0.0)),
    );
    let mut faller = falling_box(300.0, 0.0);
    world.register_body(&mut mover).unwrap();
    world.register_body(&mut faller).unwrap();

    for _ in 0..10 {
        world.tick_elapsed(secs(DT));
    }

    let mover_key = mover.key().unwrap();
    let faller_key = faller.key().unwrap();
    let mover_pos = world.body_position(mover_key).unwrap();
    let faller_pos = world.body_position(faller_key).unwrap();

    world.reset_velocities();

    let mover_vel = world.body_linear_velocity(mover_key).unwrap();
    let faller_vel = world.body_linear_velocity(faller_key).unwrap();
    assert_relative_eq!(mover_vel.norm(), 0.0);
    assert_relative_eq!(faller_vel.norm(), 0.0);
    assert_relative_eq!(world.body_angular_velocity(mover_key).unwrap(), 0.0);

    let mover_pos_after = world.body_position(mover_key).unwrap();
    let faller_pos_after = world.body_position(faller_key).unwrap();
    assert_relative_eq!(mover_pos.x, mover_pos_after.x);
    assert_relative_eq!(mover_pos.y, mover_pos_after.y);
    assert_relative_eq!(faller_pos.x, faller_pos_after.x);
    assert_relative_eq!(faller_pos.y, faller_pos_after.y);
}

#[test]
fn test_fps_window_reports_once_per_second() {
    let mut config = WorldConfig::default();
    config.report_fps = true;
    let mut world = World::new(config);

    let mut measurements = Vec::new();
    for _ in 0..65 {
        world.tick_elapsed(secs(DT));
        for event in world.drain_events() {
            if let WorldEvent::FpsChanged { fps } = event {
                measurements.push(fps);
            }
        }
    }

    assert_eq!(measurements.len(), 1);
    assert_relative_eq!(measurements[0], 60.0, epsilon = 1.0);
    assert_relative_eq!(world.fps(), measurements[0]);
}

#[test]
fn test_run_for_drives_wall_clock_ticks() {
    let mut world = World::new(WorldConfig::default());
    world.run_for(Duration::from_millis(100));

    let events = world.drain_events();
    // ~6 wake-ups at the default 16 ms frame time; at least one must have
    // banked a full quantum.
    assert!(events
        .iter()
        .any(|e| matches!(e, WorldEvent::Stepped { .. })));
    assert!(steps_in(&events) >= 1);
}

#[test]
fn test_config_change_events_fire_on_change_only() {
    let mut world = World::new(WorldConfig::default());
    world.drain_events();

    let g = world.gravity();
    world.set_gravity(g);
    world.set_allow_sleeping(world.allow_sleeping());
    world.set_report_fps(world.report_fps());
    assert!(world.drain_events().is_empty());

    world.set_gravity(nalgebra::Vector2::new(0.0, 0.0));
    world.set_allow_sleeping(false);
    world.set_report_fps(true);
    let events = world.drain_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, WorldEvent::GravityChanged { .. })));
    assert!(events
        .iter()
        .any(|e| matches!(e, WorldEvent::AllowSleepingChanged { allow_sleeping: false })));
    assert!(events
        .iter()
        .any(|e| matches!(e, WorldEvent::ReportFpsChanged { report_fps: true })));
}

#[test]
fn test_running_transitions_emit_events() {
    let mut world = World::new(WorldConfig::default());
    world.drain_events();

    world.stop();
    world.stop(); // second stop is silent
    world.start();

    let running_events: Vec<_> = world
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, WorldEvent::RunningChanged { .. }))
        .collect();
    assert_eq!(
        running_events,
        vec![
            WorldEvent::RunningChanged { running: false },
            WorldEvent::RunningChanged { running: true },
        ]
    );
}

#[test]
fn test_gravity_change_applies_at_next_wakeup() {
    let mut config = WorldConfig::default();
    config.gravity = [0.0, 0.0];
    let mut world = World::new(config);

    let mut floater = falling_box(0.0, 0.0);
    world.register_body(&mut floater).unwrap();
    let key = floater.key().unwrap();

    for _ in 0..10 {
        world.tick_elapsed(quanta(1.0));
    }
    let before = world.body_position(key).unwrap();
    assert_relative_eq!(before.y, 0.0, epsilon = 1e-4);

    world.set_gravity(nalgebra::Vector2::new(0.0, 10.0));
    for _ in 0..30 {
        world.tick_elapsed(quanta(1.0));
    }
    let after = world.body_position(key).unwrap();
    assert!(after.y > before.y);
}
