//! Hash containers used across Kinograph.
//!
//! All maps share `ahash`'s randomized state; lookups by name are hot in
//! every traversal.

/// Hasher state shared by every Kinograph container.
pub type FastState = ahash::RandomState;

/// `hashbrown` map keyed with [`FastState`].
pub type FastHashMap<K, V> = hashbrown::HashMap<K, V, FastState>;

/// `hashbrown` set keyed with [`FastState`].
pub type FastHashSet<T> = hashbrown::HashSet<T, FastState>;

/// Insertion-ordered map keyed with [`FastState`].
///
/// Graph stores use it as an arena: the slot index doubles as the id.
pub type FastIndexMap<K, V> = indexmap::IndexMap<K, V, FastState>;
