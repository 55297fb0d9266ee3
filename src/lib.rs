#![forbid(unsafe_code)]
pub mod app;
pub mod error;
pub mod logging;
pub mod mr;
pub mod report;
pub mod sorter;

pub use error::{CopyError, InputError, PipelineError, SortError};

/// A single intermediate pair emitted by a mapper.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct KeyValue<K, V> {

    pub key: K,

    pub value: V,
}

impl<K, V> KeyValue<K, V> {

    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

}
