//! Unit tests for ph-core primitives.

#[cfg(test)]
mod direction {
    use std::f64::consts::{PI, TAU};

    use proptest::prelude::*;

    use crate::{Direction, SimRng};

    #[test]
    fn wraps_out_of_range_values() {
        assert_eq!(Direction::from_angle(-0.5), Direction::from_angle((-0.5f64).rem_euclid(TAU)));
        assert_eq!(Direction::from_angle(7.5), Direction::from_angle(7.5f64.rem_euclid(TAU)));
        assert!((Direction::from_angle(-0.5).radians() - (TAU - 0.5)).abs() < 1e-12);
        assert!((Direction::from_angle(7.5).radians() - (7.5 - TAU)).abs() < 1e-12);
    }

    #[test]
    fn full_turn_is_zero() {
        assert_eq!(Direction::from_angle(TAU).radians(), 0.0);
        assert_eq!(Direction::from_angle(-TAU).radians(), 0.0);
    }

    #[test]
    fn tiny_negative_does_not_round_to_tau() {
        let d = Direction::from_angle(-1e-18);
        assert!(d.radians() < TAU);
        assert!(d.radians() >= 0.0);
    }

    #[test]
    fn unit_convention() {
        let (x, y) = Direction::ZERO.unit();
        assert!(x.abs() < 1e-12);
        assert!((y - 1.0).abs() < 1e-12);

        let (x, y) = Direction::from_angle(PI / 2.0).unit();
        assert!((x + 1.0).abs() < 1e-12);
        assert!(y.abs() < 1e-12);
    }

    #[test]
    fn add_and_sub_accept_both_operands() {
        let a = Direction::from_angle(6.0);
        let b = Direction::from_angle(0.5);
        assert!(((a + b).radians() - (6.5 - TAU)).abs() < 1e-12);
        assert!(((a + 0.5).radians() - (6.5 - TAU)).abs() < 1e-12);
        assert!(((b - a).radians() - (0.5 - 6.0 + TAU)).abs() < 1e-12);
        assert!(((b - 1.0).radians() - (TAU - 0.5)).abs() < 1e-12);
    }

    #[test]
    fn mul_is_product_of_magnitudes() {
        let a = Direction::from_angle(3.0);
        let b = Direction::from_angle(2.5);
        assert!(((a * b).radians() - (7.5 - TAU)).abs() < 1e-12);
        assert!(((a * 0.5).radians() - 1.5).abs() < 1e-12);
        assert_eq!(a.scale(0.5), a * 0.5);
    }

    #[test]
    fn delta_to_takes_short_way_round() {
        let a = Direction::from_angle(0.1);
        let b = Direction::from_angle(TAU - 0.1);
        assert!((a.delta_to(b) + 0.2).abs() < 1e-12);
        assert!((b.delta_to(a) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn random_is_reproducible() {
        let mut r1 = SimRng::new(9);
        let mut r2 = SimRng::new(9);
        for _ in 0..50 {
            assert_eq!(Direction::random(r1.inner()), Direction::random(r2.inner()));
        }
    }

    proptest! {
        #[test]
        fn from_angle_is_canonical(a in -1.0e6f64..1.0e6) {
            let d = Direction::from_angle(a);
            prop_assert!(d.radians() >= 0.0);
            prop_assert!(d.radians() < TAU);
        }

        #[test]
        fn reducing_twice_is_identity(a in -1.0e6f64..1.0e6) {
            let once = Direction::from_angle(a);
            prop_assert_eq!(Direction::from_angle(once.radians()), once);
        }

        #[test]
        fn unit_has_length_one(a in -100.0f64..100.0) {
            let (x, y) = Direction::from_angle(a).unit();
            prop_assert!(((x * x + y * y).sqrt() - 1.0).abs() < 1e-12);
        }

        #[test]
        fn combined_values_stay_canonical(a in -50.0f64..50.0, b in -50.0f64..50.0) {
            let (da, db) = (Direction::from_angle(a), Direction::from_angle(b));
            for d in [da + db, da - db, da * db, da + b, da - b, da * b, -da] {
                prop_assert!(d.radians() >= 0.0 && d.radians() < TAU);
            }
        }
    }
}

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert!(AgentId(1) < id);
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick::ZERO.next().next(), Tick(2));
        assert_eq!(t.to_string(), "T10");
    }

    #[test]
    fn intervals() {
        assert!(Tick(0).is_on_interval(5));
        assert!(Tick(10).is_on_interval(5));
        assert!(!Tick(11).is_on_interval(5));
        assert!(!Tick(10).is_on_interval(0));
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: f64 = r1.gen_range(0.5..1.0);
            let b: f64 = r2.gen_range(0.5..1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.gen_range(0..u64::MAX);
        let b: u64 = r1.gen_range(0..u64::MAX);
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn sign_yields_both_values() {
        let mut rng = AgentRng::new(3, AgentId(0));
        let signs: Vec<f64> = (0..200).map(|_| rng.sign()).collect();
        assert!(signs.iter().all(|&s| s == 1.0 || s == -1.0));
        assert!(signs.contains(&1.0));
        assert!(signs.contains(&-1.0));
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, PhysarumConfig};

    #[test]
    fn defaults_match_standard_parameters() {
        let cfg = PhysarumConfig::default();
        assert_eq!((cfg.width, cfg.height), (500, 500));
        assert_eq!(cfg.population, 1000);
        assert_eq!(cfg.agent.sensor_angle, 0.4);
        assert_eq!(cfg.agent.sensor_distance, 6.0);
        assert_eq!(cfg.agent.rotation_step, 0.3);
        assert_eq!(cfg.agent.step_size, 3.0);
        assert_eq!(cfg.deposit_amount, 0.005);
        assert_eq!(cfg.kernel_mass, 0.99);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_dimensions_rejected() {
        let cfg = PhysarumConfig { width: 0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
        let cfg = PhysarumConfig { height: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_population_rejected() {
        let cfg = PhysarumConfig { population: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn non_positive_constants_rejected() {
        let mut cfg = PhysarumConfig::default();
        cfg.agent.step_size = 0.0;
        assert!(cfg.validate().is_err());

        let mut cfg = PhysarumConfig::default();
        cfg.agent.sensor_distance = -1.0;
        assert!(cfg.validate().is_err());

        for r in [0.0, -0.3] {
            let mut cfg = PhysarumConfig::default();
            cfg.agent.rotation_step = r;
            assert!(cfg.validate().is_err(), "rotation_step {r}");
        }

        let cfg = PhysarumConfig { deposit_amount: 0.0, ..Default::default() };
        assert!(cfg.validate().is_err());

        let cfg = PhysarumConfig { kernel_mass: f32::NAN, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn non_finite_angles_rejected() {
        let mut cfg = PhysarumConfig::default();
        cfg.agent.sensor_angle = f64::INFINITY;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn error_message_names_the_field() {
        let mut cfg = PhysarumConfig::default();
        cfg.agent.step_size = -3.0;
        let msg = cfg.validate().unwrap_err().to_string();
        assert!(msg.contains("step_size"), "{msg}");
    }
}
