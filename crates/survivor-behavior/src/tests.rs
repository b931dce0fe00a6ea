#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use glam::DVec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use survivor_core::components::MotionParams;
    use survivor_core::config::EnemyTuning;
    use survivor_core::enums::{Behavior, SineAxis, SpawnEdge};
    use survivor_core::types::Playfield;

    use crate::motion::{bounce, evaluate, initial_velocity, Motion, MotionContext};
    use crate::profiles::{roll_params, roll_spawn_point, SpawnContext};

    fn field() -> Playfield {
        Playfield::new(800.0, 600.0)
    }

    fn make_context(params: MotionParams, position: DVec2, elapsed: f64) -> MotionContext {
        MotionContext {
            params,
            position,
            elapsed_secs: elapsed,
            player_position: DVec2::new(400.0, 300.0),
            playfield: field(),
            wobble_amplitude: 30f64.to_radians(),
            wobble_frequency: 2.0,
        }
    }

    fn velocity_of(motion: Motion) -> DVec2 {
        match motion {
            Motion::Velocity(v) => v,
            Motion::Position(_) => panic!("expected a velocity"),
        }
    }

    fn position_of(motion: Motion) -> DVec2 {
        match motion {
            Motion::Position(p) => p,
            Motion::Velocity(_) => panic!("expected a position"),
        }
    }

    // ---- Seeking ----

    #[test]
    fn test_seeking_heads_at_player_when_wobble_is_zero() {
        // sin(0 * 2 + 0) = 0, so the heading is the straight bearing.
        let ctx = make_context(
            MotionParams::Seeking {
                speed: 100.0,
                phase: 0.0,
            },
            DVec2::new(0.0, 300.0),
            0.0,
        );
        let v = velocity_of(evaluate(&ctx).motion);
        assert!((v.x - 100.0).abs() < 1e-9);
        assert!(v.y.abs() < 1e-9);
    }

    #[test]
    fn test_seeking_wobble_is_bounded_by_amplitude() {
        let params = MotionParams::Seeking {
            speed: 60.0,
            phase: 1.3,
        };
        for step in 0..200 {
            let t = step as f64 * 0.05;
            let ctx = make_context(params, DVec2::new(0.0, 300.0), t);
            let v = velocity_of(evaluate(&ctx).motion);
            let angle = v.y.atan2(v.x);
            assert!(angle.abs() <= 30f64.to_radians() + 1e-9);
            assert!((v.length() - 60.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_seeking_peak_wobble() {
        // t * 2 + phase = PI / 2 gives the full +30 degree deflection.
        let ctx = make_context(
            MotionParams::Seeking {
                speed: 50.0,
                phase: FRAC_PI_2,
            },
            DVec2::new(0.0, 300.0),
            0.0,
        );
        let v = velocity_of(evaluate(&ctx).motion);
        assert!((v.y.atan2(v.x) - 30f64.to_radians()).abs() < 1e-9);
    }

    #[test]
    fn test_seeking_is_idempotent() {
        let ctx = make_context(
            MotionParams::Seeking {
                speed: 80.0,
                phase: 0.4,
            },
            DVec2::new(123.0, 45.0),
            3.7,
        );
        assert_eq!(evaluate(&ctx), evaluate(&ctx));
    }

    // ---- Predictive straight ----

    #[test]
    fn test_predictive_position_is_closed_form() {
        let params = MotionParams::PredictiveStraight {
            speed: 100.0,
            heading: 0.0,
            origin: DVec2::new(-50.0, 200.0),
        };
        let p = position_of(evaluate(&make_context(params, DVec2::ZERO, 2.5)).motion);
        assert!((p - DVec2::new(200.0, 200.0)).length() < 1e-9);
        // The stored position plays no part.
        let again = position_of(
            evaluate(&make_context(params, DVec2::new(999.0, 999.0), 2.5)).motion,
        );
        assert_eq!(p, again);
    }

    #[test]
    fn test_predictive_heading_leads_moving_player() {
        let tuning = EnemyTuning::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let ctx = SpawnContext {
            origin: DVec2::new(400.0, -50.0),
            player_position: DVec2::new(400.0, 300.0),
            player_velocity: DVec2::new(400.0, 0.0),
            playfield: field(),
        };
        let params = roll_params(Behavior::PredictiveStraight, &ctx, &tuning, &mut rng);
        let MotionParams::PredictiveStraight { heading, speed, origin } = params else {
            panic!("wrong params");
        };
        // Player will be at (640, 300) after the 0.6 s lead.
        let expected = (350.0f64).atan2(240.0);
        assert!((heading - expected).abs() < 1e-9);
        assert!((80.0..=200.0).contains(&speed));
        assert_eq!(origin, ctx.origin);
    }

    // ---- Bouncing ----

    #[test]
    fn test_bounce_flips_only_outward_components() {
        let f = field();
        // Past the left edge moving left: flip x only.
        assert_eq!(
            bounce(DVec2::new(-5.0, 300.0), DVec2::new(-1.0, 1.0), &f),
            DVec2::new(1.0, 1.0)
        );
        // Past the left edge already moving right: no change.
        assert_eq!(
            bounce(DVec2::new(-5.0, 300.0), DVec2::new(1.0, 1.0), &f),
            DVec2::new(1.0, 1.0)
        );
        // Past the bottom-right corner moving out on both axes.
        assert_eq!(
            bounce(DVec2::new(801.0, 601.0), DVec2::new(1.0, 1.0), &f),
            DVec2::new(-1.0, -1.0)
        );
    }

    #[test]
    fn test_bouncing_update_is_idempotent() {
        let params = MotionParams::BouncingDiagonal {
            speed: 100.0,
            dir: DVec2::new(1.0, -1.0),
        };
        let ctx = make_context(params, DVec2::new(810.0, -10.0), 1.0);
        let first = evaluate(&ctx);
        assert_eq!(velocity_of(first.motion), DVec2::new(-100.0, 100.0));

        let ctx2 = make_context(first.params, DVec2::new(810.0, -10.0), 1.0);
        let second = evaluate(&ctx2);
        assert_eq!(second, first);
    }

    // ---- Sinusoidal ----

    #[test]
    fn test_sinusoidal_horizontal_path() {
        let params = MotionParams::Sinusoidal {
            axis: SineAxis::Horizontal,
            speed: 100.0,
            amplitude: 50.0,
            frequency: PI,
            travel_sign: 1.0,
            base: DVec2::new(-50.0, 300.0),
        };
        let p = position_of(evaluate(&make_context(params, DVec2::ZERO, 0.5)).motion);
        assert!((p.x - 0.0).abs() < 1e-9);
        assert!((p.y - 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_sinusoidal_vertical_path_reverse_travel() {
        let params = MotionParams::Sinusoidal {
            axis: SineAxis::Vertical,
            speed: 80.0,
            amplitude: 100.0,
            frequency: 2.0,
            travel_sign: -1.0,
            base: DVec2::new(200.0, 650.0),
        };
        let p = position_of(evaluate(&make_context(params, DVec2::ZERO, 1.0)).motion);
        assert!((p.y - 570.0).abs() < 1e-9);
        assert!((p.x - (200.0 + 100.0 * 2f64.sin())).abs() < 1e-9);
    }

    #[test]
    fn test_sinusoidal_rolls_travel_inward() {
        let tuning = EnemyTuning::default();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..100 {
            let (_, origin) = roll_spawn_point(&mut rng, &field(), 50.0);
            let ctx = SpawnContext {
                origin,
                player_position: field().center(),
                player_velocity: DVec2::ZERO,
                playfield: field(),
            };
            let MotionParams::Sinusoidal {
                axis,
                travel_sign,
                amplitude,
                frequency,
                ..
            } = roll_params(Behavior::Sinusoidal, &ctx, &tuning, &mut rng)
            else {
                panic!("wrong params");
            };
            let toward_center = match axis {
                SineAxis::Horizontal => (400.0 - origin.x) * travel_sign,
                SineAxis::Vertical => (300.0 - origin.y) * travel_sign,
            };
            assert!(toward_center >= 0.0);
            assert!((50.0..=150.0).contains(&amplitude));
            assert!((2.0..=6.0).contains(&frequency));
        }
    }

    // ---- Spawn rolls ----

    #[test]
    fn test_spawn_points_lie_outside_an_edge() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let f = field();
        let mut seen = [false; 4];
        for _ in 0..400 {
            let (edge, p) = roll_spawn_point(&mut rng, &f, 50.0);
            match edge {
                SpawnEdge::Top => {
                    seen[0] = true;
                    assert_eq!(p.y, -50.0);
                    assert!((-50.0..=850.0).contains(&p.x));
                }
                SpawnEdge::Right => {
                    seen[1] = true;
                    assert_eq!(p.x, 850.0);
                    assert!((-50.0..=650.0).contains(&p.y));
                }
                SpawnEdge::Bottom => {
                    seen[2] = true;
                    assert_eq!(p.y, 650.0);
                }
                SpawnEdge::Left => {
                    seen[3] = true;
                    assert_eq!(p.x, -50.0);
                }
            }
        }
        assert!(seen.iter().all(|s| *s), "every edge should be used");
    }

    #[test]
    fn test_seeking_roll_ranges() {
        let tuning = EnemyTuning::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let ctx = SpawnContext {
            origin: DVec2::new(-50.0, 10.0),
            player_position: field().center(),
            player_velocity: DVec2::ZERO,
            playfield: field(),
        };
        for _ in 0..50 {
            let MotionParams::Seeking { speed, phase } =
                roll_params(Behavior::Seeking, &ctx, &tuning, &mut rng)
            else {
                panic!("wrong params");
            };
            assert!((30.0..=120.0).contains(&speed));
            assert_eq!(speed.fract(), 0.0, "seeking speed is a whole number");
            assert!((0.0..std::f64::consts::TAU).contains(&phase));
        }
    }

    #[test]
    fn test_speed_and_amplitude_rolls_are_whole_numbers() {
        let tuning = EnemyTuning::default();
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let ctx = SpawnContext {
            origin: DVec2::new(850.0, 300.0),
            player_position: field().center(),
            player_velocity: DVec2::new(40.0, 0.0),
            playfield: field(),
        };
        let mut fractional_frequency = false;
        for _ in 0..40 {
            match roll_params(Behavior::PredictiveStraight, &ctx, &tuning, &mut rng) {
                MotionParams::PredictiveStraight { speed, .. } => {
                    assert!((80.0..=200.0).contains(&speed));
                    assert_eq!(speed.fract(), 0.0);
                }
                other => panic!("unexpected params {other:?}"),
            }
            match roll_params(Behavior::BouncingDiagonal, &ctx, &tuning, &mut rng) {
                MotionParams::BouncingDiagonal { speed, .. } => {
                    assert!((60.0..=250.0).contains(&speed));
                    assert_eq!(speed.fract(), 0.0);
                }
                other => panic!("unexpected params {other:?}"),
            }
            match roll_params(Behavior::Sinusoidal, &ctx, &tuning, &mut rng) {
                MotionParams::Sinusoidal {
                    speed,
                    amplitude,
                    frequency,
                    ..
                } => {
                    assert!((50.0..=200.0).contains(&speed));
                    assert_eq!(speed.fract(), 0.0);
                    assert!((50.0..=150.0).contains(&amplitude));
                    assert_eq!(amplitude.fract(), 0.0);
                    assert!((2.0..=6.0).contains(&frequency));
                    fractional_frequency |= frequency.fract() != 0.0;
                }
                other => panic!("unexpected params {other:?}"),
            }
        }
        assert!(fractional_frequency, "frequency stays continuous");
    }

    #[test]
    fn test_initial_velocity() {
        let bouncing = MotionParams::BouncingDiagonal {
            speed: 60.0,
            dir: DVec2::new(-1.0, 1.0),
        };
        assert_eq!(initial_velocity(&bouncing), DVec2::new(-60.0, 60.0));
        let seeking = MotionParams::Seeking {
            speed: 60.0,
            phase: 0.0,
        };
        assert_eq!(initial_velocity(&seeking), DVec2::ZERO);
    }
}
