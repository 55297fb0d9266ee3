pub mod coordinator;
pub mod pool;
pub mod shuffle;

pub use coordinator::{Coordinator, MapReduce, PipelineConfig};
pub use pool::WorkerPool;
pub use shuffle::{shuffle, ShuffleGroups};
