//! Unit tests for qn-schedule.

use qn_core::SimTime;

use crate::{EventQueue, ScheduleError};

// ── Ordering ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ordering {
    use super::*;

    #[test]
    fn pops_in_time_order() {
        let mut q = EventQueue::new();
        q.schedule(SimTime(5.0), "c").unwrap();
        q.schedule(SimTime(1.0), "a").unwrap();
        q.schedule(SimTime(3.0), "b").unwrap();

        let order: Vec<_> = std::iter::from_fn(|| q.pop_earliest())
            .map(|e| e.payload)
            .collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn same_instant_keeps_insertion_order() {
        let mut q = EventQueue::new();
        for i in 0..10 {
            q.schedule(SimTime(2.0), i).unwrap();
        }
        q.schedule(SimTime(1.0), 99).unwrap();

        assert_eq!(q.pop_earliest().unwrap().payload, 99);
        let rest: Vec<i32> = std::iter::from_fn(|| q.pop_earliest())
            .map(|e| e.payload)
            .collect();
        assert_eq!(rest, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn popped_times_never_decrease() {
        let mut q = EventQueue::new();
        let times = [4.0, 0.0, 7.5, 0.0, 3.25, 7.5, 1.0, 12.0, 3.25];
        for (i, t) in times.iter().enumerate() {
            q.schedule(SimTime(*t), i).unwrap();
        }
        let mut last = SimTime::ZERO;
        while let Some(e) = q.pop_earliest() {
            assert!(e.wake_time >= last);
            last = e.wake_time;
        }
    }

    #[test]
    fn later_insert_at_earlier_time_still_pops_first() {
        let mut q = EventQueue::new();
        q.schedule(SimTime(10.0), 'x').unwrap();
        q.pop_earliest();
        q.schedule(SimTime(20.0), 'y').unwrap();
        q.schedule(SimTime(15.0), 'z').unwrap();
        assert_eq!(q.pop_earliest().unwrap().payload, 'z');
    }
}

// ── Sequence ids and bookkeeping ──────────────────────────────────────────────

#[cfg(test)]
mod bookkeeping {
    use super::*;

    #[test]
    fn sequence_ids_strictly_increase() {
        let mut q = EventQueue::new();
        let a = q.schedule(SimTime(9.0), ()).unwrap();
        let b = q.schedule(SimTime(1.0), ()).unwrap();
        let c = q.schedule(SimTime(9.0), ()).unwrap();
        assert_eq!((a, b, c), (0, 1, 2));
        assert_eq!(q.scheduled_count(), 3);
    }

    #[test]
    fn popped_event_carries_its_sequence_id() {
        let mut q = EventQueue::new();
        q.schedule(SimTime(2.0), "late").unwrap();
        let seq = q.schedule(SimTime(1.0), "early").unwrap();
        let e = q.pop_earliest().unwrap();
        assert_eq!(e.sequence_id, seq);
        assert_eq!(e.wake_time, SimTime(1.0));
    }

    #[test]
    fn len_peek_and_empty() {
        let mut q: EventQueue<u8> = EventQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.peek_time(), None);
        assert!(q.pop_earliest().is_none());

        q.schedule(SimTime(3.0), 1).unwrap();
        q.schedule(SimTime(2.0), 2).unwrap();
        assert_eq!(q.len(), 2);
        assert_eq!(q.peek_time(), Some(SimTime(2.0)));
    }

    #[test]
    fn invalid_times_rejected() {
        let mut q = EventQueue::new();
        assert_eq!(
            q.schedule(SimTime(-1.0), ()),
            Err(ScheduleError::InvalidTime(SimTime(-1.0)))
        );
        assert!(q.schedule(SimTime(f64::NAN), ()).is_err());
        assert!(q.schedule(SimTime(f64::INFINITY), ()).is_err());
        assert!(q.is_empty());
        assert_eq!(q.scheduled_count(), 0);
    }
}
