use std::hash::Hash;

use fnv::FnvHashMap;

use crate::{
    error::{Phase, PipelineError},
    mr::{pool::WorkerPool, shuffle::shuffle},
    KeyValue,
};

/// A job the coordinator can drive: one pair per input, one output per key.
pub trait MapReduce: Sync {
    type Input: Send;
    type Key: Eq + Hash + Send;
    type Value: Send;
    type Output: Send;

    fn map(&self, input: Self::Input) -> KeyValue<Self::Key, Self::Value>;

    /// `values` arrive in the order their pairs were emitted.
    fn reduce(&self, key: &Self::Key, values: Vec<Self::Value>) -> Self::Output;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Worker pool size, `0` means one per logical CPU.
    pub workers: usize,
}

/// Drives map, shuffle and reduce over a bounded worker pool.
///
/// Map and reduce are each a full fan-out/fan-in: the next stage only starts once every task of the
/// previous one has returned. Shuffle runs on the calling thread between them.
#[derive(Debug)]
pub struct Coordinator {
    pool: WorkerPool,
}

impl Coordinator {
    pub fn new(config: &PipelineConfig) -> Result<Self, PipelineError> {
        Ok(Self {
            pool: WorkerPool::new(config.workers)?,
        })
    }

    pub fn workers(&self) -> usize {
        self.pool.workers()
    }

    pub fn run<J: MapReduce>(
        &self,
        job: &J,
        inputs: Vec<J::Input>,
    ) -> Result<FnvHashMap<J::Key, J::Output>, PipelineError> {
        let input_n = inputs.len();
        log::debug!("[Map] Dispatching #{} input(s) to #{} worker(s)", input_n, self.workers());
        let mapped = self.pool.fan_out(Phase::Map, inputs, |input| job.map(input))?;
        log::debug!("[Map] All #{} map task(s) have finished", mapped.len());

        let groups = shuffle(mapped);
        log::debug!("[Shuffle] Grouped #{} pair(s) under #{} key(s)", input_n, groups.len());

        let reduced = self.pool.fan_out(
            Phase::Reduce,
            groups.into_iter().collect::<Vec<_>>(),
            |(key, values)| {
                let output = job.reduce(&key, values);
                (key, output)
            },
        )?;
        log::debug!("[Reduce] All #{} reduce task(s) have finished", reduced.len());

        Ok(reduced.into_iter().collect())
    }
}
