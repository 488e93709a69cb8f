//! Pipeline stages and their service-time ranges.

use qn_core::{Capacities, EntityRng, StageId};

use crate::{ProcessError, ProcessResult};

/// Inclusive range of whole minutes a stage's service can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceRange {
    pub min: u32,
    pub max: u32,
}

impl ServiceRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Draw a service time uniformly from `min..=max`.
    pub fn sample(&self, rng: &mut EntityRng) -> f64 {
        f64::from(rng.gen_range(self.min..=self.max))
    }
}

/// One service stage: a named pool of `capacity` workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub id:       StageId,
    pub name:     String,
    pub capacity: u32,
    pub service:  ServiceRange,
}

/// The ordered stages every entity passes through, first to last.
///
/// Stage IDs are positions: `stages[i].id == StageId(i)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    /// Airport check-in service time, minutes.
    pub const CHECK_IN: ServiceRange = ServiceRange::new(2, 5);
    /// Airport security service time, minutes.
    pub const SECURITY: ServiceRange = ServiceRange::new(8, 12);
    /// Airport gate service time, minutes.
    pub const GATE: ServiceRange = ServiceRange::new(1, 3);

    /// Build a pipeline from `(name, capacity, service)` triples, in order.
    pub fn new<S: Into<String>>(
        stages: impl IntoIterator<Item = (S, u32, ServiceRange)>,
    ) -> ProcessResult<Self> {
        let stages = stages
            .into_iter()
            .enumerate()
            .map(|(i, (name, capacity, service))| {
                let id = u16::try_from(i)
                    .map(StageId)
                    .map_err(|_| ProcessError::Config("too many stages".into()))?;
                let name = name.into();
                if capacity == 0 {
                    return Err(ProcessError::Config(format!(
                        "stage {name:?} needs a capacity of at least 1"
                    )));
                }
                if service.min > service.max {
                    return Err(ProcessError::Config(format!(
                        "stage {name:?} service range {}..={} is empty",
                        service.min, service.max
                    )));
                }
                Ok(Stage { id, name, capacity, service })
            })
            .collect::<ProcessResult<Vec<_>>>()?;

        if stages.is_empty() {
            return Err(ProcessError::Config("pipeline needs at least one stage".into()));
        }
        Ok(Self { stages })
    }

    /// Check-in, then security, then the gate.
    pub fn airport(caps: &Capacities) -> ProcessResult<Self> {
        Self::new([
            ("check-in", caps.checkin,  Self::CHECK_IN),
            ("security", caps.security, Self::SECURITY),
            ("gate",     caps.gate,     Self::GATE),
        ])
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always `false`: construction rejects empty pipelines.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn first(&self) -> StageId {
        StageId(0)
    }

    pub fn stage(&self, id: StageId) -> ProcessResult<&Stage> {
        self.stages.get(id.index()).ok_or(ProcessError::UnknownStage(id))
    }

    /// The stage after `id`, or `None` if `id` is the last one.
    pub fn next(&self, id: StageId) -> Option<StageId> {
        self.stages.get(id.index() + 1).map(|s| s.id)
    }
}
