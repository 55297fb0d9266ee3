use std::hash::Hash;

use fnv::FnvHashMap;

use crate::KeyValue;

/// Key to the values observed for it, in arrival order.
pub type ShuffleGroups<K, V> = FnvHashMap<K, Vec<V>>;

/// Groups mapped pairs by key. Runs on the calling thread; this is the only serial stage.
pub fn shuffle<K, V, I>(pairs: I) -> ShuffleGroups<K, V>
where
    K: Eq + Hash,
    I: IntoIterator<Item = KeyValue<K, V>>,
{
    let mut groups = ShuffleGroups::default();
    for KeyValue { key, value } in pairs {
        groups.entry(key).or_insert_with(Vec::new).push(value);
    }
    groups
}
