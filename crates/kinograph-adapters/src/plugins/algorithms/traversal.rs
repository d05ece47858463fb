//! Breadth-first shortest paths over the actor graph.

use super::traits::SearchState;
use kinograph_core::graph::actor::ActorStore;
use kinograph_core::graph::path::Path;
use std::collections::VecDeque;
use std::sync::Arc;

/// Finds a path with the fewest movies between two actors.
///
/// Returns `None` if the names are equal, either is unknown, or no path
/// exists. Each actor is linked through the first movie that reaches it;
/// because movies are visited by key and casts by name, ties between equally
/// short paths always resolve the same way. The search stops once `end` is
/// dequeued.
pub fn bfs_path(store: &ActorStore, start: &str, end: &str) -> Option<Path> {
    if start == end {
        return None;
    }
    let start_id = store.actor_id(start)?;
    let end_id = store.actor_id(end)?;

    let mut state = SearchState::new(store.actor_count(), u64::MAX);
    let mut queue = VecDeque::new();
    let mut expanded = 0usize;

    state.set_source(start_id, 0);
    queue.push_back(start_id);

    while let Some(current) = queue.pop_front() {
        if current == end_id {
            break;
        }
        expanded += 1;

        let next_distance = state.distance(current) + 1;
        for (movie, next) in store.co_actors(current) {
            if state.is_unreached(next) {
                state.relax(next, next_distance, current, Some(movie));
                queue.push_back(next);
            }
        }
    }

    tracing::debug!(start, end, expanded, "bfs finished");

    let hops = state.distance(end_id);
    state
        .path_to(
            start_id,
            end_id,
            |n| Arc::clone(store.actor(n).name_arc()),
            |e| Arc::clone(store.movie(e).label_arc()),
        )
        .map(|path| path.with_cost(hops as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> ActorStore {
        let mut store = ActorStore::new();
        store.insert("A", "m1", 2011);
        store.insert("B", "m1", 2011);
        store.insert("B", "m2", 2016);
        store.insert("C", "m2", 2016);
        store.insert("B", "m3", 2019);
        store.insert("D", "m3", 2019);
        store
    }

    #[test]
    fn test_bfs_chain() {
        let store = chain();
        let path = bfs_path(&store, "A", "D").unwrap();
        assert_eq!(path.to_string(), "(A)--[m1#@2011]-->(B)--[m3#@2019]-->(D)");
        assert_eq!(path.len(), 2);
        assert_eq!(path.cost(), 2.0);
    }

    #[test]
    fn test_bfs_is_symmetric_in_length() {
        let store = chain();
        let forward = bfs_path(&store, "A", "C").unwrap();
        let backward = bfs_path(&store, "C", "A").unwrap();
        assert_eq!(forward.len(), backward.len());
        assert_eq!(backward.to_string(), "(C)--[m2#@2016]-->(B)--[m1#@2011]-->(A)");
    }

    #[test]
    fn test_bfs_same_or_unknown_is_none() {
        let store = chain();
        assert!(bfs_path(&store, "A", "A").is_none());
        assert!(bfs_path(&store, "Nobody", "A").is_none());
        assert!(bfs_path(&store, "A", "Nobody").is_none());
    }

    #[test]
    fn test_bfs_disconnected_is_none() {
        let mut store = chain();
        store.insert("X", "island", 2000);
        store.insert("Y", "island", 2000);
        assert!(bfs_path(&store, "A", "Y").is_none());
    }

    #[test]
    fn test_bfs_tie_break_prefers_smaller_movie_key() {
        // Two equally short routes A -> D: via B (movie "b-side") and via C
        // (movie "a-side"). The movie with the smaller key is expanded first.
        let mut store = ActorStore::new();
        store.insert("A", "b-side", 2000);
        store.insert("B", "b-side", 2000);
        store.insert("A", "a-side", 2000);
        store.insert("C", "a-side", 2000);
        store.insert("B", "end-b", 2000);
        store.insert("D", "end-b", 2000);
        store.insert("C", "end-c", 2000);
        store.insert("D", "end-c", 2000);

        let path = bfs_path(&store, "A", "D").unwrap();
        assert_eq!(
            path.to_string(),
            "(A)--[a-side#@2000]-->(C)--[end-c#@2000]-->(D)"
        );
    }

    #[test]
    fn test_bfs_reruns_are_independent() {
        let store = chain();
        let first = bfs_path(&store, "A", "D").unwrap();
        let _ = bfs_path(&store, "C", "A");
        let again = bfs_path(&store, "A", "D").unwrap();
        assert_eq!(first, again);
    }
}
