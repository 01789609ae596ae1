//! Unit tests for pk-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ActivityId, ParkgoerId};

    #[test]
    fn index_roundtrip() {
        let id = ParkgoerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(ParkgoerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn next_is_monotonic() {
        assert_eq!(ParkgoerId(7).next(), ParkgoerId(8));
        assert!(ParkgoerId(7) < ParkgoerId(7).next());
    }

    #[test]
    fn activity_id_rejects_overflow() {
        assert!(ActivityId::try_from(70_000usize).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(ParkgoerId(7).to_string(), "ParkgoerId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Point;

    #[test]
    fn distance_345() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn move_toward_advances_exact_distance() {
        let mut p = Point::new(0.0, 0.0);
        p.move_toward(Point::new(3.0, 4.0), 1.0);
        assert!((p.x - 0.6).abs() < 1e-12);
        assert!((p.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn move_toward_self_is_noop() {
        let mut p = Point::new(0.2, 0.2);
        p.move_toward(Point::new(0.2, 0.2), 0.1);
        assert_eq!(p, Point::new(0.2, 0.2));
    }

    #[test]
    fn ring_positions() {
        // 0° is straight up from the centre, 90° is to the right.
        let top = Point::on_ring(0.0);
        assert!((top.x - 0.5).abs() < 1e-12);
        assert!((top.y - 0.1).abs() < 1e-12);
        let right = Point::on_ring(90.0);
        assert!((right.x - 0.9).abs() < 1e-12);
        assert!((right.y - 0.5).abs() < 1e-12);
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn since_saturates() {
        assert_eq!(Tick(9).since(Tick(5)), 4);
        assert_eq!(Tick(5).since(Tick(9)), 0);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn jitter_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let j = rng.jitter(0.5);
            assert!((-0.5..0.5).contains(&j), "got {j}");
        }
        assert_eq!(rng.jitter(0.0), 0.0);
    }

    #[test]
    fn poisson_rejects_non_positive_rate() {
        let mut rng = SimRng::new(0);
        assert!(rng.poisson(0.0).is_err());
        assert!(rng.poisson(-3.0).is_err());
    }

    #[test]
    fn poisson_mean_is_close() {
        let mut rng = SimRng::new(7);
        let n = 5_000;
        let total: u64 = (0..n).map(|_| rng.poisson(4.0).unwrap()).sum();
        let mean = total as f64 / n as f64;
        assert!((mean - 4.0).abs() < 0.2, "mean {mean}");
    }

    #[test]
    fn pick_cumulative_certain_and_impossible() {
        let mut rng = SimRng::new(1);
        let items = [(1u32, 0.0), (2u32, 1.0)];
        for _ in 0..50 {
            assert_eq!(rng.pick_cumulative(&items, |i| i.1).unwrap().0, 2);
        }
        let none = [(1u32, 0.0)];
        assert!(rng.pick_cumulative(&none, |i| i.1).is_none());
    }
}
