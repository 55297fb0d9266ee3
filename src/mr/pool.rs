use std::{any::Any, panic::{self, AssertUnwindSafe}};

use rayon::{prelude::*, ThreadPool, ThreadPoolBuilder};

use crate::error::{Phase, PipelineError};

/// Fixed-size pool that runs one fan-out/fan-in phase at a time.
#[derive(Debug)]
pub struct WorkerPool {
    pool: ThreadPool,
}

impl WorkerPool {
    /// `workers == 0` lets rayon pick the number of logical CPUs.
    pub fn new(workers: usize) -> Result<Self, PipelineError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("mr-worker-{}", i))
            .build()?;
        log::debug!("[Pool] Built worker pool with #{} thread(s)", pool.current_num_threads());
        Ok(Self { pool })
    }

    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Runs `f` over every item and returns the results in input order. Returns only after every
    /// task has finished; a panicking task fails the whole phase.
    pub fn fan_out<T, R, F>(&self, phase: Phase, items: Vec<T>, f: F) -> Result<Vec<R>, PipelineError>
    where
        T: Send,
        R: Send,
        F: Fn(T) -> R + Send + Sync,
    {
        let run = || self.pool.install(|| items.into_par_iter().map(&f).collect::<Vec<R>>());
        panic::catch_unwind(AssertUnwindSafe(run)).map_err(|payload| PipelineError::WorkerPanicked {
            phase,
            message: panic_message(payload.as_ref()),
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_owned()
    }
}
