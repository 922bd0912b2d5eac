//! Integration tests for the particle field.
//!
//! These drive the simulation through the public API the way the
//! windowed runner does: construct, tick every frame, convert to
//! instances, resize in between.

use driftfield::{FieldConfig, Particle, ParticleField, Spawner, Vec2};

// ============================================================================
// Drift and wrap behavior
// ============================================================================

#[test]
fn test_scripted_drift_until_wrap() {
    // One particle aimed at the right edge: it must advance linearly,
    // then reset (not clamp, not bounce) on the tick that carries it out.
    let mut field = ParticleField::from_spawner(
        FieldConfig::default().with_particle_count(1),
        100.0,
        100.0,
        |_| Particle {
            position: Vec2::new(98.0, 50.0),
            velocity: Vec2::new(0.25, 0.0),
            size: 2.0,
            hue: 300.0,
        },
    );

    // 8 ticks take it to exactly 100.0, which is still inside.
    for i in 1..=8 {
        field.tick();
        let p = &field.particles()[0];
        assert!(
            (p.position.x - (98.0 + 0.25 * i as f32)).abs() < 1e-3,
            "tick {i} drifted to unexpected x {}",
            p.position.x
        );
        assert_eq!(p.hue, 300.0);
    }

    // The 9th tick crosses the edge and rerolls everything.
    field.tick();
    let p = &field.particles()[0];
    assert!(p.position.x >= 0.0 && p.position.x < 100.0);
    assert!(p.position.y >= 0.0 && p.position.y < 100.0);
    assert!(p.size >= 1.0 && p.size < 3.0);
}

#[test]
fn test_crossing_the_far_edge_resets_in_the_same_tick() {
    // A particle a tenth of a pixel from the right edge, moving half a
    // pixel per tick: one tick pushes it past x = 800 and it must come
    // back as a fresh particle while its in-bounds neighbors keep theirs.
    let mut field = ParticleField::from_spawner(
        FieldConfig::default().with_particle_count(3),
        800.0,
        600.0,
        |i| Particle {
            position: match i {
                0 => Vec2::new(799.9, 300.0),
                1 => Vec2::new(100.0, 100.0),
                _ => Vec2::new(200.0, 200.0),
            },
            velocity: if i == 0 {
                Vec2::new(0.5, 0.0)
            } else {
                Vec2::ZERO
            },
            // Values a reset can never draw.
            size: 5.0,
            hue: 10.0,
        },
    );

    field.tick();
    assert_eq!(field.len(), 3);

    let rerolled = &field.particles()[0];
    assert!(rerolled.position.x >= 0.0 && rerolled.position.x < 800.0);
    assert!(rerolled.position.y >= 0.0 && rerolled.position.y < 600.0);
    assert!(rerolled.velocity.x >= -0.25 && rerolled.velocity.x < 0.25);
    assert!(rerolled.size >= 1.0 && rerolled.size < 3.0);

    for p in &field.particles()[1..] {
        assert_eq!(p.size, 5.0);
    }
}

#[test]
fn test_long_run_keeps_field_full_and_bounded() {
    let mut field = ParticleField::seeded(FieldConfig::default(), 1920.0, 1080.0, 11);
    for _ in 0..2000 {
        field.tick();
    }
    assert_eq!(field.len(), 120);
    for p in field.particles() {
        assert!(p.position.x >= 0.0 && p.position.x <= 1920.0);
        assert!(p.position.y >= 0.0 && p.position.y <= 1080.0);
    }
}

#[test]
fn test_shrink_resize_wraps_stragglers_on_their_next_tick() {
    let mut field = ParticleField::from_spawner(
        FieldConfig::default().with_particle_count(2),
        800.0,
        600.0,
        |i| Particle {
            position: if i == 0 {
                Vec2::new(700.0, 300.0)
            } else {
                Vec2::new(100.0, 100.0)
            },
            velocity: Vec2::new(0.1, 0.1),
            size: 1.5,
            hue: 45.0,
        },
    );

    // Shrinking moves nothing by itself.
    field.resize(400.0, 400.0);
    assert_eq!(field.particles()[0].position, Vec2::new(700.0, 300.0));

    // The straggler at x=700 is outside the new bounds, so its next
    // advance wraps it; the in-bounds particle just drifts.
    field.tick();
    let straggler = &field.particles()[0];
    assert!(straggler.position.x >= 0.0 && straggler.position.x <= 400.0);
    assert!(straggler.position.y >= 0.0 && straggler.position.y <= 400.0);
    let drifter = &field.particles()[1];
    assert_eq!(drifter.position, Vec2::new(100.1, 100.1));
}

#[test]
fn test_grow_resize_spreads_new_spawns_over_new_area() {
    let mut field = ParticleField::seeded(FieldConfig::default(), 100.0, 100.0, 12);
    field.resize(1000.0, 1000.0);

    // Run long enough for wraps to happen; respawns must use the new
    // bounds, so eventually particles appear beyond the old 100x100.
    let mut seen_beyond_old_bounds = false;
    for _ in 0..20_000 {
        field.tick();
        if field
            .particles()
            .iter()
            .any(|p| p.position.x > 100.0 || p.position.y > 100.0)
        {
            seen_beyond_old_bounds = true;
            break;
        }
    }
    assert!(seen_beyond_old_bounds);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_custom_config_flows_into_spawns() {
    let config = FieldConfig::default()
        .with_particle_count(30)
        .with_max_speed(2.0)
        .with_size_range(4.0..8.0);
    let field = ParticleField::seeded(config, 500.0, 500.0, 13);

    assert_eq!(field.len(), 30);
    for p in field.particles() {
        assert!(p.velocity.x >= -2.0 && p.velocity.x < 2.0);
        assert!(p.velocity.y >= -2.0 && p.velocity.y < 2.0);
        assert!(p.size >= 4.0 && p.size < 8.0);
    }
}

#[test]
fn test_zero_speed_field_is_static_forever() {
    let config = FieldConfig::default()
        .with_particle_count(10)
        .with_max_speed(0.0);
    let mut field = ParticleField::seeded(config, 300.0, 300.0, 14);
    let before: Vec<Particle> = field.particles().to_vec();

    for _ in 0..100 {
        field.tick();
    }
    assert_eq!(field.particles(), &before[..]);
}

// ============================================================================
// Instances
// ============================================================================

#[test]
fn test_instances_resolve_hue_through_field_palette() {
    // Hue 0 at full saturation and 0.75 lightness is the pastel red
    // (1.0, 0.5, 0.5).
    let field = ParticleField::from_spawner(
        FieldConfig::default().with_particle_count(1),
        100.0,
        100.0,
        |_| Particle {
            position: Vec2::new(50.0, 50.0),
            velocity: Vec2::ZERO,
            size: 2.0,
            hue: 0.0,
        },
    );

    let mut instances = Vec::new();
    field.fill_instances(&mut instances);
    assert_eq!(instances.len(), 1);
    let color = instances[0].color;
    assert!((color.x - 1.0).abs() < 1e-5);
    assert!((color.y - 0.5).abs() < 1e-5);
    assert!((color.z - 0.5).abs() < 1e-5);
}

#[test]
fn test_instances_stay_in_step_with_ticks() {
    let mut field = ParticleField::seeded(
        FieldConfig::default().with_particle_count(50),
        640.0,
        480.0,
        15,
    );
    let mut instances = Vec::new();

    for _ in 0..10 {
        field.tick();
        field.fill_instances(&mut instances);
        assert_eq!(instances.len(), 50);
        for (inst, p) in instances.iter().zip(field.particles()) {
            assert_eq!(inst.position, p.position);
            assert_eq!(inst.radius, p.size);
            for channel in [inst.color.x, inst.color.y, inst.color.z] {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_seeded_runs_replay_exactly() {
    let run = |seed| {
        let mut field = ParticleField::seeded(FieldConfig::default(), 800.0, 600.0, seed);
        for _ in 0..500 {
            field.tick();
        }
        field.particles().to_vec()
    };

    assert_eq!(run(99), run(99));
    assert_ne!(run(99), run(100));
}

#[test]
fn test_seeded_spawners_draw_identical_sequences() {
    let mut a = Spawner::seeded(21);
    let mut b = Spawner::seeded(21);
    for _ in 0..100 {
        assert_eq!(a.position_in(800.0, 600.0), b.position_in(800.0, 600.0));
        assert_eq!(a.velocity(0.25), b.velocity(0.25));
        assert_eq!(a.hue(), b.hue());
    }
}
