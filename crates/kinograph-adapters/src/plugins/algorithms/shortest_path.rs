//! Weighted shortest paths: Dijkstra over actors, A* over cities.

use super::traits::{MinScored, SearchState};
use super::traversal::bfs_path;
use kinograph_core::graph::actor::ActorStore;
use kinograph_core::graph::city::CityStore;
use kinograph_core::graph::path::Path;
use std::collections::BinaryHeap;
use std::sync::Arc;

/// Finds a shortest path between two actors.
///
/// `weighted` selects Dijkstra over movie weights; otherwise the path with
/// the fewest movies is found by breadth-first search.
pub fn shortest_path(store: &ActorStore, start: &str, end: &str, weighted: bool) -> Option<Path> {
    if weighted {
        dijkstra_path(store, start, end)
    } else {
        bfs_path(store, start, end)
    }
}

// ============================================================================
// Dijkstra
// ============================================================================

/// Finds the path between two actors with the lowest total movie weight.
///
/// Returns `None` if the names are equal, either is unknown, or no path
/// exists. Improved distances are pushed again rather than decreased in
/// place; stale entries are skipped when popped. The search stops once
/// `end` is popped.
pub fn dijkstra_path(store: &ActorStore, start: &str, end: &str) -> Option<Path> {
    if start == end {
        return None;
    }
    let start_id = store.actor_id(start)?;
    let end_id = store.actor_id(end)?;

    let mut state = SearchState::new(store.actor_count(), u64::MAX);
    let mut heap = BinaryHeap::new();
    let mut expanded = 0usize;

    state.set_source(start_id, 0);
    heap.push(MinScored::new(
        0u64,
        start_id,
        Arc::clone(store.actor(start_id).name_arc()),
    ));

    while let Some(MinScored { score, node, .. }) = heap.pop() {
        if node == end_id {
            break;
        }
        if score > state.distance(node) {
            continue;
        }
        expanded += 1;

        for (movie, next) in store.co_actors(node) {
            let candidate = score.saturating_add(store.movie(movie).weight());
            if candidate < state.distance(next) {
                state.relax(next, candidate, node, Some(movie));
                heap.push(MinScored::new(
                    candidate,
                    next,
                    Arc::clone(store.actor(next).name_arc()),
                ));
            }
        }
    }

    tracing::debug!(start, end, expanded, "dijkstra finished");

    let cost = state.distance(end_id);
    state
        .path_to(
            start_id,
            end_id,
            |n| Arc::clone(store.actor(n).name_arc()),
            |e| Arc::clone(store.movie(e).label_arc()),
        )
        .map(|path| path.with_cost(cost as f64))
}

// ============================================================================
// A*
// ============================================================================

/// Finds a shortest road route between two cities with A*.
///
/// Road length and the heuristic are both straight-line distance; the
/// frontier is ordered by `g + heuristic_weight * h`, ties going to the
/// smaller city name. With `heuristic_weight <= 1` the heuristic is
/// admissible and the route is optimal. Returns `None` if the names are
/// equal, either is unknown, or the target is unreachable.
pub fn astar(store: &CityStore, start: &str, end: &str, heuristic_weight: f64) -> Option<Path> {
    if start == end {
        return None;
    }
    let start_id = store.city_id(start)?;
    let end_id = store.city_id(end)?;

    let target = store.city(end_id).position();
    let heuristic: Vec<f64> = store
        .cities()
        .map(|(_, city)| heuristic_weight * city.position().distance(target))
        .collect();

    let mut state = SearchState::new(store.city_count(), f64::INFINITY);
    let mut heap = BinaryHeap::new();
    let mut expanded = 0usize;

    state.set_source(start_id, 0.0);
    heap.push(MinScored::new(
        heuristic[start_id.index()],
        start_id,
        Arc::clone(store.city(start_id).name_arc()),
    ));

    while let Some(MinScored { score, node, .. }) = heap.pop() {
        if node == end_id {
            break;
        }
        let g = state.distance(node);
        if score > g + heuristic[node.index()] {
            continue;
        }
        expanded += 1;

        for &next in store.city(node).roads() {
            let candidate = g + store.road_length(node, next);
            if candidate < state.distance(next) {
                state.relax(next, candidate, node, None);
                heap.push(MinScored::new(
                    candidate + heuristic[next.index()],
                    next,
                    Arc::clone(store.city(next).name_arc()),
                ));
            }
        }
    }

    tracing::debug!(start, end, expanded, "a* finished");

    let cost = state.distance(end_id);
    state
        .path_to(
            start_id,
            end_id,
            |n| Arc::clone(store.city(n).name_arc()),
            |_| Arc::from(""),
        )
        .map(|path| path.with_cost(cost))
}
