//! Unit tests for pk-activity.

#[cfg(test)]
mod helpers {
    use pk_core::{Group, ParkgoerId, Privileges, Tick};

    use crate::{CapacityKind, DurationSource, Process, Queue};

    pub fn party(id: u32, people: u32) -> Group {
        Group::new(ParkgoerId(id), people)
    }

    pub fn privs(tags: &[&str]) -> Privileges {
        tags.iter().map(|t| t.to_string()).collect()
    }

    pub fn fixed(capacity: u32, kind: CapacityKind, duration: f64) -> Process {
        Process::new(capacity, kind, DurationSource::Fixed(duration))
    }

    /// A queue pre-filled with single-person parties `ids`, all enqueued at
    /// tick 0.
    pub fn filled(privileges: &[&str], ids: impl IntoIterator<Item = u32>) -> Queue {
        let mut q = Queue::new(privs(privileges), None);
        for id in ids {
            q.push(party(id, 1), Tick::ZERO);
        }
        q
    }

    pub fn ids(groups: &[Group]) -> Vec<u32> {
        groups.iter().map(|g| g.id.0).collect()
    }
}

// ── Process ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod process {
    use pk_core::SimRng;

    use super::helpers::*;
    use crate::{ActivityError, CapacityKind, DurationSource, Process};

    #[test]
    fn person_capacity_allows_exact_fill() {
        let mut p = fixed(3, CapacityKind::Person, 1.0);
        p.seat(party(1, 2)).unwrap();
        assert!(!p.is_full(Some(party(2, 1))));
        p.seat(party(2, 1)).unwrap();
        assert_eq!(p.occupied(), 3);

        let err = p.seat(party(3, 1)).unwrap_err();
        assert_eq!(
            err,
            ActivityError::CapacityExceeded { capacity: 3, occupied: 3, incoming: 1 }
        );
        assert_eq!(p.people(), 3);
    }

    #[test]
    fn group_capacity_counts_parties() {
        let mut p = fixed(2, CapacityKind::Group, 1.0);
        p.seat(party(1, 4)).unwrap();
        p.seat(party(2, 3)).unwrap();
        assert!(p.is_full(None));
        assert_eq!(p.occupied(), 2);
        assert_eq!(p.people(), 7);

        let err = p.seat(party(3, 1)).unwrap_err();
        assert!(matches!(err, ActivityError::CapacityExceeded { occupied: 2, .. }));
    }

    #[test]
    fn cycle_releases_after_target_duration() {
        let mut rng = SimRng::new(1);
        let mut p = fixed(4, CapacityKind::Person, 3.0);
        p.seat(party(1, 2)).unwrap();
        p.start(&mut rng).unwrap();
        assert!(p.is_active());
        assert_eq!(p.elapsed(), 1);
        assert_eq!(p.target_duration(), 3);

        assert!(p.tick().is_empty());
        assert!(p.tick().is_empty());
        assert_eq!(p.elapsed(), 3);

        let released = p.tick();
        assert_eq!(ids(&released), vec![1]);
        assert!(!p.is_active());
        assert!(p.is_empty());
        assert_eq!(p.elapsed(), 0);
    }

    #[test]
    fn idle_tick_is_noop() {
        let mut p = fixed(4, CapacityKind::Person, 3.0);
        p.seat(party(1, 1)).unwrap();
        assert!(p.tick().is_empty());
        assert_eq!(p.occupants().len(), 1);
    }

    #[test]
    fn start_requires_occupants() {
        let mut rng = SimRng::new(1);
        let mut p = fixed(4, CapacityKind::Person, 3.0);
        assert_eq!(p.start(&mut rng), Err(ActivityError::EmptyProcess));
    }

    #[test]
    fn initial_target_is_rounded_base() {
        let p = Process::new(1, CapacityKind::Group, DurationSource::Ranged { base: 2.6, spread: 1.0 });
        assert_eq!(p.target_duration(), 3);
    }

    #[test]
    fn ranged_samples_stay_in_range() {
        let mut rng = SimRng::new(9);
        let d = DurationSource::Ranged { base: 10.0, spread: 2.0 };
        for _ in 0..500 {
            let s = d.sample(&mut rng);
            assert!((8..=12).contains(&s), "sample {s} out of range");
        }
    }

    #[test]
    fn negative_durations_clamp_to_zero() {
        let mut rng = SimRng::new(9);
        assert_eq!(DurationSource::Fixed(-2.0).sample(&mut rng), 0);
    }

    #[test]
    fn kind_parses() {
        assert_eq!("group".parse::<CapacityKind>().unwrap(), CapacityKind::Group);
        assert_eq!("person".parse::<CapacityKind>().unwrap(), CapacityKind::Person);
        assert!("vehicle".parse::<CapacityKind>().is_err());
    }

    #[test]
    fn log_snapshots_state() {
        let mut rng = SimRng::new(1);
        let mut p = fixed(2, CapacityKind::Group, 5.0);
        p.seat(party(1, 3)).unwrap();
        p.start(&mut rng).unwrap();
        p.log(pk_core::Tick(4));
        let s = p.record()[0];
        assert_eq!(s.occupants, 1);
        assert_eq!(s.people, 3);
        assert!(s.active);
        assert_eq!(s.progress, 1);
        assert_eq!(s.current_duration, 5);
    }
}

// ── Queue ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue {
    use pk_core::{ParkgoerId, Point, Tick};

    use super::helpers::*;
    use crate::{Queue, QueueDisplay};

    #[test]
    fn fifo_order() {
        let mut q = Queue::open();
        for id in 1..=3 {
            q.push(party(id, 1), Tick::ZERO);
        }
        let popped: Vec<u32> = std::iter::from_fn(|| q.pop(Tick(1)))
            .map(|g| g.id.0)
            .collect();
        assert_eq!(popped, vec![1, 2, 3]);
        assert!(q.is_empty());
    }

    #[test]
    fn length_is_people_weighted() {
        let mut q = Queue::open();
        q.push(party(1, 2), Tick::ZERO);
        q.push(party(2, 3), Tick::ZERO);
        assert_eq!(q.len(), 5);
        assert_eq!(q.party_count(), 2);
        assert_eq!(q.peek(), Some(party(1, 2)));
        assert_eq!(q.position_of(ParkgoerId(2)), Some(1));
    }

    #[test]
    fn wait_time_sampled_per_person() {
        let mut q = Queue::open();
        q.push(party(1, 2), Tick(5));
        q.pop(Tick(9));
        assert_eq!(q.wait_times(), &[4, 4]);
        assert_eq!(q.mean_wait(), Some(4.0));
    }

    #[test]
    fn mean_wait_empty() {
        assert_eq!(Queue::open().mean_wait(), None);
    }

    #[test]
    fn privilege_admission() {
        let restricted = Queue::new(privs(&["priority"]), None);
        assert!(restricted.is_restricted());
        assert!(restricted.admits(&privs(&["priority", "single"])));
        assert!(!restricted.admits(&privs(&[])));
        assert!(!restricted.admits(&privs(&["single"])));

        let open = Queue::open();
        assert!(open.admits(&privs(&[])));
        assert!(open.admits(&privs(&["priority"])));
    }

    #[test]
    fn slot_position_extends_along_angle() {
        let display = QueueDisplay { offset: Point::default(), angle: 90.0, spacing: 0.1 };
        let p = display.slot_position(Point::new(0.5, 0.5), 1);
        assert!((p.x - 0.6).abs() < 1e-9);
        assert!((p.y - 0.5).abs() < 1e-9);
    }

    #[test]
    fn log_records_length() {
        let mut q = Queue::open();
        q.push(party(1, 4), Tick::ZERO);
        q.log(Tick(2));
        assert_eq!(q.record()[0].length, 4);
        assert_eq!(q.record()[0].time, Tick(2));
    }
}

// ── Assignment ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod assign {
    use super::helpers::*;
    use crate::{AssignPolicy, BuildError, Queue};

    #[test]
    fn privileged_skips_restricted_queues() {
        let queues = vec![filled(&["priority"], []), filled(&[], [1, 2, 3])];
        assert_eq!(AssignPolicy::Privileged.select(&queues, &privs(&[])), Some(1));
        assert_eq!(AssignPolicy::Privileged.select(&queues, &privs(&["priority"])), Some(0));
    }

    #[test]
    fn privileged_with_no_admitting_queue() {
        let queues = vec![filled(&["priority"], [])];
        assert_eq!(AssignPolicy::Privileged.select(&queues, &privs(&["single"])), None);
    }

    #[test]
    fn shortest_ignores_privileges() {
        let queues = vec![filled(&["priority"], []), filled(&[], [1])];
        assert_eq!(AssignPolicy::ShortestQueue.select(&queues, &privs(&[])), Some(0));
    }

    #[test]
    fn ties_keep_first() {
        let queues = vec![filled(&[], [1]), filled(&[], [2]), Queue::open()];
        assert_eq!(AssignPolicy::ShortestQueue.select(&queues[..2], &privs(&[])), Some(0));
        assert_eq!(AssignPolicy::Privileged.select(&queues, &privs(&[])), Some(2));
    }

    #[test]
    fn names() {
        assert_eq!(AssignPolicy::from_name(None).unwrap(), AssignPolicy::Privileged);
        assert_eq!(
            AssignPolicy::from_name(Some("shortestQueue")).unwrap(),
            AssignPolicy::ShortestQueue
        );
        assert_eq!(
            AssignPolicy::from_name(Some("random")),
            Err(BuildError::UnknownAssigner("random".into()))
        );
    }
}

// ── Consumption ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod consume {
    use super::helpers::*;
    use crate::{BuildError, CapacityKind, ConsumePolicy, ConsumerKind, LongestQueue, TurnBased};

    #[test]
    fn longest_queue_picks_longest() {
        let p = fixed(4, CapacityKind::Person, 1.0);
        let queues = vec![filled(&[], [1]), filled(&[], [2, 3, 4]), filled(&[], [5, 6])];
        let mut policy = LongestQueue::new(3);
        assert_eq!(policy.select(&p, &queues), Some(1));
        assert_eq!(policy.order(), &[1, 2, 0]);
    }

    #[test]
    fn longest_queue_ties_keep_rank() {
        let p = fixed(4, CapacityKind::Person, 1.0);
        let queues = vec![filled(&[], [1, 2]), filled(&[], [3, 4])];
        let mut policy = LongestQueue::new(2);
        assert_eq!(policy.select(&p, &queues), Some(0));
        assert_eq!(policy.order(), &[0, 1]);
    }

    #[test]
    fn longest_queue_skips_head_that_does_not_fit() {
        let p = fixed(2, CapacityKind::Person, 1.0);
        let mut big = filled(&[], []);
        big.push(party(9, 3), pk_core::Tick::ZERO);
        let queues = vec![filled(&[], [1]), big];
        let mut policy = LongestQueue::new(2);
        assert_eq!(policy.select(&p, &queues), Some(0));
    }

    #[test]
    fn longest_queue_all_empty() {
        let p = fixed(2, CapacityKind::Person, 1.0);
        let queues = vec![filled(&[], []), filled(&[], [])];
        assert_eq!(LongestQueue::new(2).select(&p, &queues), None);
    }

    #[test]
    fn turn_based_skips_empty_queues() {
        let p = fixed(4, CapacityKind::Person, 1.0);
        let queues = vec![filled(&[], []), filled(&[], [1]), filled(&[], [2])];
        let mut policy = TurnBased::new();
        assert_eq!(policy.select(&p, &queues), Some(1));
        assert_eq!(policy.index(), 2);
        assert_eq!(policy.select(&p, &queues), Some(2));
        assert_eq!(policy.index(), 0);
    }

    #[test]
    fn turn_based_holds_index_when_nothing_fits() {
        let p = fixed(4, CapacityKind::Person, 1.0);
        let queues = vec![filled(&[], []), filled(&[], [])];
        let mut policy = TurnBased::new();
        assert_eq!(policy.select(&p, &queues), None);
        assert_eq!(policy.index(), 0);
    }

    #[test]
    fn turn_based_holds_index_when_process_is_full() {
        let mut p = fixed(1, CapacityKind::Person, 1.0);
        p.seat(party(9, 1)).unwrap();
        let queues = vec![filled(&[], [1]), filled(&[], [2]), filled(&[], [3])];
        let mut policy = TurnBased::new();
        assert_eq!(policy.select(&p, &queues), None);
        assert_eq!(policy.index(), 0);
    }

    #[test]
    fn kind_names() {
        assert_eq!(ConsumerKind::from_name(None).unwrap(), ConsumerKind::Tiered);
        assert_eq!(ConsumerKind::from_name(Some("turnBased")).unwrap(), ConsumerKind::TurnBased);
        assert_eq!(
            ConsumerKind::from_name(Some("longestQueue")).unwrap(),
            ConsumerKind::LongestQueue
        );
        assert_eq!(
            ConsumerKind::from_name(Some("fastest")),
            Err(BuildError::UnknownConsumer("fastest".into()))
        );
    }
}

// ── Activity ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod activity {
    use pk_core::{ParkgoerId, Point, SimRng, Tick};

    use super::helpers::*;
    use crate::{
        ActivityBuilder, ActivityError, BuildError, CapacityKind, ConsumerKind, Queue, QueueDisplay,
        RelativeWindow,
    };

    #[test]
    fn seat_and_run() {
        let mut rng = SimRng::new(3);
        let mut a = ActivityBuilder::new("Carousel", Point::new(0.5, 0.5))
            .process(fixed(4, CapacityKind::Person, 2.0))
            .queue(Queue::open())
            .build()
            .unwrap();

        a.assign(party(1, 2), &privs(&[]), Tick(0)).unwrap();
        assert_eq!(a.prospective_length(&privs(&[])).unwrap(), 2);
        a.assign(party(2, 2), &privs(&[]), Tick(0)).unwrap();
        assert_eq!(a.queued_people(), 4);

        let out = a.tick(Tick(1), &mut rng).unwrap();
        assert_eq!(ids(&out.seated), vec![1, 2]);
        assert!(out.released.is_empty());
        assert_eq!(a.processing_people(), 4);
        assert_eq!(a.queued_people(), 0);

        let out = a.tick(Tick(2), &mut rng).unwrap();
        assert!(out.seated.is_empty() && out.released.is_empty());

        let out = a.tick(Tick(3), &mut rng).unwrap();
        assert_eq!(ids(&out.released), vec![1, 2]);
        assert_eq!(a.processing_people(), 0);

        assert_eq!(a.queues()[0].wait_times(), &[1, 1, 1, 1]);
        assert_eq!(a.stats().total_assigned, 4);
    }

    #[test]
    fn turn_based_rotates_fairly() {
        let mut rng = SimRng::new(3);
        let mut a = ActivityBuilder::new("Swings", Point::default())
            .process(fixed(1, CapacityKind::Group, 1.0))
            .queue(filled(&[], 100..110))
            .queue(filled(&[], 200..210))
            .queue(filled(&[], 300..310))
            .consumer(ConsumerKind::TurnBased)
            .build()
            .unwrap();

        let mut seated = Vec::new();
        for t in 1..=6 {
            let out = a.tick(Tick(t), &mut rng).unwrap();
            seated.extend(ids(&out.seated));
        }
        assert_eq!(seated, vec![100, 200, 300, 101, 201, 301]);
    }

    #[test]
    fn longest_queue_keeps_configured_queue_order() {
        let mut rng = SimRng::new(3);
        let mut a = ActivityBuilder::new("Coaster", Point::default())
            .process(fixed(1, CapacityKind::Group, 1.0))
            .queue(filled(&[], [1]))
            .queue(filled(&[], [2, 3, 4]))
            .consumer(ConsumerKind::LongestQueue)
            .build()
            .unwrap();

        let out = a.tick(Tick(1), &mut rng).unwrap();
        assert_eq!(ids(&out.seated), vec![2]);
        assert_eq!(a.queues()[0].position_of(ParkgoerId(1)), Some(0));
        assert_eq!(a.queues()[1].position_of(ParkgoerId(3)), Some(0));
    }

    #[test]
    fn turn_based_rotates_fairly_by_person() {
        let mut rng = SimRng::new(3);
        let mut a = ActivityBuilder::new("Swings", Point::default())
            .process(fixed(1, CapacityKind::Person, 1.0))
            .queue(filled(&[], 100..110))
            .queue(filled(&[], 200..210))
            .queue(filled(&[], 300..310))
            .consumer(ConsumerKind::TurnBased)
            .build()
            .unwrap();

        let mut seated = Vec::new();
        for t in 1..=9 {
            let out = a.tick(Tick(t), &mut rng).unwrap();
            seated.extend(ids(&out.seated));
        }
        assert_eq!(seated, vec![100, 200, 300, 101, 201, 301, 102, 202, 302]);
    }

    #[test]
    fn turn_based_serves_every_queue_at_two_seats() {
        let mut rng = SimRng::new(3);
        let mut a = ActivityBuilder::new("Swings", Point::default())
            .process(fixed(2, CapacityKind::Person, 1.0))
            .queue(filled(&[], 100..110))
            .queue(filled(&[], 200..210))
            .queue(filled(&[], 300..310))
            .consumer(ConsumerKind::TurnBased)
            .build()
            .unwrap();

        let mut per_tick = Vec::new();
        for t in 1..=3 {
            let out = a.tick(Tick(t), &mut rng).unwrap();
            per_tick.push(ids(&out.seated));
        }
        assert_eq!(per_tick, vec![vec![100, 200], vec![300, 101], vec![201, 301]]);
    }

    #[test]
    fn tiered_fills_priority_then_normal_then_single() {
        let mut rng = SimRng::new(3);
        let mut a = ActivityBuilder::new("Coaster", Point::default())
            .process(fixed(4, CapacityKind::Person, 5.0))
            .queue(filled(&["single"], [20, 21]))
            .queue(filled(&[], [10, 11, 12]))
            .queue(filled(&["priority"], [1, 2, 3]))
            .build()
            .unwrap();

        let out = a.tick(Tick(1), &mut rng).unwrap();
        assert_eq!(ids(&out.seated), vec![1, 2, 10, 11]);
    }

    #[test]
    fn tiered_falls_through_to_single_riders() {
        let mut rng = SimRng::new(3);
        let mut a = ActivityBuilder::new("Coaster", Point::default())
            .process(fixed(3, CapacityKind::Person, 5.0))
            .queue(filled(&[], [10]))
            .queue(filled(&["single"], [20, 21, 22]))
            .build()
            .unwrap();

        let out = a.tick(Tick(1), &mut rng).unwrap();
        assert_eq!(ids(&out.seated), vec![10, 20, 21]);
    }

    #[test]
    fn relative_window_rotates() {
        let mut rng = SimRng::new(3);
        let mut builder = ActivityBuilder::new("Bumper cars", Point::default())
            .queue(filled(&[], 1..=10))
            .relative_processes(true);
        for _ in 0..4 {
            builder = builder.process(fixed(1, CapacityKind::Group, 4.0));
        }
        let mut a = builder.build().unwrap();
        assert_eq!(a.window(), Some(RelativeWindow { size: 1, cursor: 0 }));

        let out = a.tick(Tick(1), &mut rng).unwrap();
        assert_eq!(ids(&out.seated), vec![1]);
        assert!(a.processes()[0].is_active());
        assert!(!a.processes()[1].is_active());
        assert_eq!(a.window().unwrap().cursor, 1);

        for t in 2..=4 {
            a.tick(Tick(t), &mut rng).unwrap();
        }
        assert!(a.processes().iter().all(|p| p.is_active()));
        assert_eq!(a.window().unwrap().cursor, 0);
    }

    #[test]
    fn window_size_formula() {
        assert_eq!(RelativeWindow::for_processes(4, 16.0).size, 1);
        assert_eq!(RelativeWindow::for_processes(3, 2.0).size, 5);
    }

    #[test]
    fn oversized_window_covers_all_processes() {
        let mut rng = SimRng::new(3);
        let mut a = ActivityBuilder::new("Teacups", Point::default())
            .process(fixed(1, CapacityKind::Group, 0.5))
            .process(fixed(1, CapacityKind::Group, 0.5))
            .queue(filled(&[], 1..=4))
            .relative_processes(true)
            .build()
            .unwrap();
        assert_eq!(a.window().unwrap().size, 4);

        let out = a.tick(Tick(1), &mut rng).unwrap();
        assert_eq!(out.seated.len(), 2);
        assert_eq!(a.window().unwrap().cursor, 0);
    }

    #[test]
    fn assign_without_admitting_queue_fails() {
        let mut a = ActivityBuilder::new("VIP lounge", Point::default())
            .process(fixed(2, CapacityKind::Person, 1.0))
            .queue(Queue::new(privs(&["priority"]), None))
            .build()
            .unwrap();
        let err = a.assign(party(1, 1), &privs(&[]), Tick(0)).unwrap_err();
        assert!(matches!(err, ActivityError::NoAssignableQueue { .. }));
        assert!(a.prospective_length(&privs(&[])).is_err());
    }

    #[test]
    fn waiting_position_uses_queue_display() {
        let display = QueueDisplay { offset: Point::default(), angle: 180.0, spacing: 0.1 };
        let mut a = ActivityBuilder::new("Wheel", Point::new(0.5, 0.5))
            .process(fixed(2, CapacityKind::Person, 1.0))
            .queue(Queue::new(privs(&[]), Some(display)))
            .build()
            .unwrap();
        a.assign(party(1, 1), &privs(&[]), Tick(0)).unwrap();

        let p = a.waiting_position(ParkgoerId(1)).unwrap();
        assert!((p.x - 0.5).abs() < 1e-9);
        assert!((p.y - 0.6).abs() < 1e-9);
        assert_eq!(a.waiting_position(ParkgoerId(2)), None);
    }

    #[test]
    fn build_errors() {
        let no_proc = ActivityBuilder::new("a", Point::default()).queue(Queue::open()).build();
        assert_eq!(no_proc.unwrap_err(), BuildError::NoProcesses("a".into()));

        let no_queue = ActivityBuilder::new("b", Point::default())
            .process(fixed(1, CapacityKind::Group, 1.0))
            .build();
        assert_eq!(no_queue.unwrap_err(), BuildError::NoQueues("b".into()));

        let zero = ActivityBuilder::new("c", Point::default())
            .process(fixed(1, CapacityKind::Group, 0.0))
            .queue(Queue::open())
            .relative_processes(true)
            .build();
        assert_eq!(zero.unwrap_err(), BuildError::RelativeWindow("c".into()));
    }

    #[test]
    fn log_appends_samples() {
        let mut a = ActivityBuilder::new("Wheel", Point::default())
            .process(fixed(2, CapacityKind::Person, 1.0))
            .queue(filled(&[], [1]))
            .build()
            .unwrap();
        a.log(Tick(0));
        a.log(Tick(1));
        assert_eq!(a.processes()[0].record().len(), 2);
        assert_eq!(a.queues()[0].record()[0].length, 1);
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use pk_core::{ActivityId, Point};

    use super::helpers::*;
    use crate::{
        Activity, ActivityBuilder, ActivityRegistry, BuildError, CapacityKind, Placement, Queue,
    };

    fn activity(label: &str) -> Activity {
        ActivityBuilder::new(label, Point::default())
            .process(fixed(1, CapacityKind::Group, 1.0))
            .queue(Queue::open())
            .build()
            .unwrap()
    }

    #[test]
    fn tick_order_groups_placements() {
        let mut reg = ActivityRegistry::new();
        let ride_a = reg.add(activity("A"), Placement::Ride).unwrap();
        let gate = reg.add(activity("Gate"), Placement::Before).unwrap();
        let exit = reg.add(activity("Exit"), Placement::After).unwrap();
        let ride_b = reg.add(activity("B"), Placement::Ride).unwrap();

        assert_eq!(reg.len(), 4);
        assert_eq!(reg.tick_order().collect::<Vec<_>>(), vec![gate, ride_a, ride_b, exit]);
        assert_eq!(reg.rides(), &[ride_a, ride_b]);
        assert_eq!(reg.before_stations(), &[gate]);
        assert_eq!(reg.after_stations(), &[exit]);
        assert_eq!(reg.label(exit), Some("Exit"));
        assert_eq!(reg.placement(gate), Some(Placement::Before));
        assert!(reg.get(ActivityId(9)).is_none());
    }

    #[test]
    fn placement_parses() {
        assert_eq!("before".parse::<Placement>().unwrap(), Placement::Before);
        assert_eq!("after".parse::<Placement>().unwrap(), Placement::After);
        assert_eq!(
            "ride".parse::<Placement>(),
            Err(BuildError::UnknownStation("ride".into()))
        );
        assert_eq!(
            "middle".parse::<Placement>(),
            Err(BuildError::UnknownStation("middle".into()))
        );
    }

    #[test]
    fn prospective_length_by_id() {
        let mut reg = ActivityRegistry::new();
        let mut ride = activity("A");
        ride.assign(party(1, 3), &privs(&[]), pk_core::Tick(0)).unwrap();
        let id = reg.add(ride, Placement::Ride).unwrap();

        assert_eq!(reg.prospective_length(id, &privs(&[])), Some(Ok(3)));
        assert!(reg.prospective_length(ActivityId(9), &privs(&[])).is_none());
    }
}
