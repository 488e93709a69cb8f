//! Unit tests for qn-process.

use qn_core::{Capacities, EntityId, SimTime, StageId};
use qn_resource::ResourcePool;

use crate::{
    ArrivalGenerator, Intent, Pipeline, Process, ProcessError, ProcessState, ServiceRange, Wakeup,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn airport() -> Pipeline {
    Pipeline::airport(&Capacities::default()).unwrap()
}

fn pools(pipeline: &Pipeline) -> Vec<ResourcePool> {
    pipeline
        .stages()
        .iter()
        .map(|s| ResourcePool::new(s.id, s.capacity).unwrap())
        .collect()
}

/// Drive `process` through every stage with no contention, returning the
/// service durations it drew and its final sample.
fn run_uncontended(process: &mut Process, pipeline: &Pipeline, start: SimTime) -> (Vec<f64>, f64) {
    let mut pools = pools(pipeline);
    let mut now = start;
    let mut durations = Vec::new();
    let mut wakeup = Wakeup::Start;

    loop {
        let intents = process.resume(wakeup, now, pipeline).unwrap();
        let mut next = None;
        for intent in intents {
            match intent {
                Intent::Request(stage) => {
                    let ticket = pools[stage.index()].request(process.id()).unwrap();
                    next = Some(Wakeup::Granted(ticket));
                }
                Intent::Hold { duration, .. } => {
                    durations.push(duration);
                    now = now + duration;
                    next = Some(Wakeup::ServiceDone);
                }
                Intent::Release(ticket) => {
                    let pool = &mut pools[ticket.pool().index()];
                    assert!(pool.release(ticket).unwrap().is_none());
                }
                Intent::Complete(sample) => {
                    assert_eq!(sample.entity_id, process.id());
                    return (durations, sample.total_elapsed);
                }
            }
        }
        wakeup = next.expect("every resumption either waits for something or completes");
    }
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pipeline {
    use super::*;

    #[test]
    fn airport_stage_order_and_ranges() {
        let caps = Capacities { gate: 1, security: 3, checkin: 2 };
        let p = Pipeline::airport(&caps).unwrap();
        let names: Vec<&str> = p.stages().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["check-in", "security", "gate"]);

        let caps_in_order: Vec<u32> = p.stages().iter().map(|s| s.capacity).collect();
        assert_eq!(caps_in_order, [2, 3, 1]);

        assert_eq!(p.stage(StageId(0)).unwrap().service, ServiceRange::new(2, 5));
        assert_eq!(p.stage(StageId(1)).unwrap().service, ServiceRange::new(8, 12));
        assert_eq!(p.stage(StageId(2)).unwrap().service, ServiceRange::new(1, 3));
    }

    #[test]
    fn next_walks_forward_and_stops() {
        let p = airport();
        assert_eq!(p.first(), StageId(0));
        assert_eq!(p.next(StageId(0)), Some(StageId(1)));
        assert_eq!(p.next(StageId(1)), Some(StageId(2)));
        assert_eq!(p.next(StageId(2)), None);
    }

    #[test]
    fn unknown_stage() {
        let p = airport();
        assert_eq!(p.stage(StageId(7)).unwrap_err(), ProcessError::UnknownStage(StageId(7)));
    }

    #[test]
    fn invalid_pipelines_rejected() {
        let empty: [(&str, u32, ServiceRange); 0] = [];
        assert!(Pipeline::new(empty).is_err());
        assert!(Pipeline::new([("a", 0, ServiceRange::new(1, 2))]).is_err());
        assert!(Pipeline::new([("a", 1, ServiceRange::new(3, 2))]).is_err());
    }

    #[test]
    fn service_samples_stay_in_range() {
        let mut rng = qn_core::EntityRng::new(1, EntityId(0));
        let range = ServiceRange::new(8, 12);
        let mut seen = [false; 5];
        for _ in 0..500 {
            let d = range.sample(&mut rng);
            assert!((8.0..=12.0).contains(&d));
            assert_eq!(d.fract(), 0.0);
            seen[(d as usize) - 8] = true;
        }
        assert!(seen.iter().all(|&s| s), "both ends of the range are reachable");
    }
}

// ── Process state machine ─────────────────────────────────────────────────────

#[cfg(test)]
mod process {
    use super::*;

    #[test]
    fn start_requests_first_stage() {
        let p = airport();
        let mut proc = Process::new(EntityId(0), SimTime::ZERO, 123);
        assert!(matches!(proc.state(), ProcessState::Created));

        let intents = proc.resume(Wakeup::Start, SimTime::ZERO, &p).unwrap();
        assert!(matches!(intents.as_slice(), [Intent::Request(StageId(0))]));
        assert!(matches!(proc.state(), ProcessState::Waiting(StageId(0))));
    }

    #[test]
    fn grant_starts_service_within_range() {
        let p = airport();
        let mut pool = ResourcePool::new(StageId(0), 2).unwrap();
        let mut proc = Process::new(EntityId(0), SimTime::ZERO, 123);
        proc.resume(Wakeup::Start, SimTime::ZERO, &p).unwrap();

        let ticket = pool.request(EntityId(0)).unwrap();
        let intents = proc.resume(Wakeup::Granted(ticket), SimTime::ZERO, &p).unwrap();
        match intents.as_slice() {
            [Intent::Hold { stage, duration }] => {
                assert_eq!(*stage, StageId(0));
                assert!((2.0..=5.0).contains(duration));
            }
            other => panic!("unexpected intents {other:?}"),
        }
        assert!(matches!(proc.state(), ProcessState::InService { stage: StageId(0), .. }));
    }

    #[test]
    fn service_done_releases_before_next_request() {
        let p = airport();
        let mut pool = ResourcePool::new(StageId(0), 1).unwrap();
        let mut proc = Process::new(EntityId(0), SimTime::ZERO, 123);
        proc.resume(Wakeup::Start, SimTime::ZERO, &p).unwrap();
        let ticket = pool.request(EntityId(0)).unwrap();
        proc.resume(Wakeup::Granted(ticket), SimTime::ZERO, &p).unwrap();

        let intents = proc.resume(Wakeup::ServiceDone, SimTime(4.0), &p).unwrap();
        match intents.as_slice() {
            [Intent::Release(t), Intent::Request(StageId(1))] => {
                assert_eq!(t.pool(), StageId(0));
            }
            other => panic!("unexpected intents {other:?}"),
        }
        assert!(matches!(proc.state(), ProcessState::Waiting(StageId(1))));
    }

    #[test]
    fn uncontended_journey_takes_eleven_to_twenty() {
        let p = airport();
        for id in 0..50 {
            let mut proc = Process::new(EntityId(id), SimTime::ZERO, 123);
            let (durations, elapsed) = run_uncontended(&mut proc, &p, SimTime::ZERO);
            assert_eq!(durations.len(), 3);
            assert_eq!(elapsed, durations.iter().sum::<f64>());
            assert!((11.0..=20.0).contains(&elapsed), "elapsed {elapsed}");
            assert!(proc.is_completed());
        }
    }

    #[test]
    fn elapsed_is_measured_from_arrival() {
        let p = airport();
        let mut proc = Process::new(EntityId(3), SimTime(100.0), 123);
        let (durations, elapsed) = run_uncontended(&mut proc, &p, SimTime(100.0));
        assert_eq!(elapsed, durations.iter().sum::<f64>());
    }

    #[test]
    fn same_seed_same_durations() {
        let p = airport();
        let mut a = Process::new(EntityId(9), SimTime::ZERO, 77);
        let mut b = Process::new(EntityId(9), SimTime::ZERO, 77);
        assert_eq!(
            run_uncontended(&mut a, &p, SimTime::ZERO),
            run_uncontended(&mut b, &p, SimTime::ZERO),
        );
    }

    #[test]
    fn unexpected_wakeup_keeps_state() {
        let p = airport();
        let mut proc = Process::new(EntityId(1), SimTime::ZERO, 123);
        let err = proc.resume(Wakeup::ServiceDone, SimTime::ZERO, &p).unwrap_err();
        assert_eq!(
            err,
            ProcessError::UnexpectedWakeup {
                entity: EntityId(1),
                state:  "created",
                wakeup: "service-done",
            }
        );
        assert!(matches!(proc.state(), ProcessState::Created));
    }

    #[test]
    fn grant_for_wrong_pool_is_unexpected() {
        let p = airport();
        let mut other = ResourcePool::new(StageId(2), 1).unwrap();
        let mut proc = Process::new(EntityId(1), SimTime::ZERO, 123);
        proc.resume(Wakeup::Start, SimTime::ZERO, &p).unwrap();

        let ticket = other.request(EntityId(1)).unwrap();
        assert!(proc.resume(Wakeup::Granted(ticket), SimTime::ZERO, &p).is_err());
        assert!(matches!(proc.state(), ProcessState::Waiting(StageId(0))));
    }
}

// ── Arrival generator ─────────────────────────────────────────────────────────

#[cfg(test)]
mod arrivals {
    use super::*;

    #[test]
    fn ids_increase_and_next_fire_is_one_interval_later() {
        let mut g = ArrivalGenerator::new(1.0, 123, None);
        let a = g.fire(SimTime::ZERO).unwrap();
        assert_eq!(a.process.id(), EntityId(0));
        assert_eq!(a.process.arrival(), SimTime::ZERO);
        assert_eq!(a.next_at, Some(SimTime(1.0)));

        let b = g.fire(SimTime(1.0)).unwrap();
        assert_eq!(b.process.id(), EntityId(1));
        assert_eq!(b.next_at, Some(SimTime(2.0)));
        assert_eq!(g.spawned(), 2);
    }

    #[test]
    fn cap_stops_rescheduling() {
        let mut g = ArrivalGenerator::new(2.5, 123, Some(2));
        assert_eq!(g.fire(SimTime::ZERO).unwrap().next_at, Some(SimTime(2.5)));
        assert_eq!(g.fire(SimTime(2.5)).unwrap().next_at, None);
        assert!(g.fire(SimTime(5.0)).is_none());
        assert_eq!(g.spawned(), 2);
    }

    #[test]
    fn zero_cap_spawns_nothing() {
        let mut g = ArrivalGenerator::new(1.0, 123, Some(0));
        assert!(g.fire(SimTime::ZERO).is_none());
        assert_eq!(g.spawned(), 0);
    }
}
