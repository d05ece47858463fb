//! Property-based tests for the graph analyses using proptest.
//!
//! Small random graphs are checked against brute-force references
//! (Floyd-Warshall distances, naive component counts).

use proptest::prelude::*;

use kinograph_adapters::plugins::algorithms::connected_component_count;
use kinograph_core::graph::actor::ActorStore;
use kinograph_core::record::{CastRecord, CityRecord, RoadRecord};
use kinograph_engine::{ActorGraph, CityGraph, Config};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Credits over a small pool of actors and titles so that graphs are dense
/// enough to have interesting paths.
fn arb_credits() -> impl Strategy<Value = Vec<CastRecord>> {
    prop::collection::vec((0u8..8, 0u8..6, 2000u32..2020), 1..40).prop_map(|raw| {
        raw.into_iter()
            .map(|(a, m, year)| CastRecord::new(format!("actor{a}"), format!("movie{m}"), year))
            .collect()
    })
}

fn arb_cities() -> impl Strategy<Value = (Vec<CityRecord>, Vec<RoadRecord>)> {
    (
        prop::collection::vec((-20i32..20, -20i32..20), 2..9),
        prop::collection::vec((0usize..9, 0usize..9), 0..20),
    )
        .prop_map(|(points, pairs)| {
            let n = points.len();
            let cities = points
                .into_iter()
                .enumerate()
                .map(|(i, (x, y))| CityRecord::new(format!("c{i}"), x, y))
                .collect();
            let roads = pairs
                .into_iter()
                .map(|(a, b)| RoadRecord::new(format!("c{}", a % n), format!("c{}", b % n)))
                .collect();
            (cities, roads)
        })
}

// ---------------------------------------------------------------------------
// Reference implementations
// ---------------------------------------------------------------------------

/// All-pairs shortest distances where an actor pair costs the lightest
/// movie they share (or 1 per movie when `unit`).
fn actor_floyd(store: &ActorStore, unit: bool) -> Vec<Vec<Option<u64>>> {
    let n = store.actor_count();
    let mut dist = vec![vec![None; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Some(0);
    }
    for (_, movie) in store.movies() {
        let weight = if unit { 1 } else { movie.weight() };
        for &a in movie.cast() {
            for &b in movie.cast() {
                if a != b {
                    let cell = &mut dist[a.index()][b.index()];
                    *cell = Some(cell.map_or(weight, |d: u64| d.min(weight)));
                }
            }
        }
    }
    floyd(&mut dist, |a, b| a + b);
    dist
}

fn floyd<T: Copy + PartialOrd>(dist: &mut [Vec<Option<T>>], add: impl Fn(T, T) -> T) {
    let n = dist.len();
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(ik), Some(kj)) = (dist[i][k], dist[k][j]) {
                    let through = add(ik, kj);
                    if dist[i][j].is_none_or(|d| through < d) {
                        dist[i][j] = Some(through);
                    }
                }
            }
        }
    }
}

fn names(store: &ActorStore) -> Vec<String> {
    store.actors().map(|(_, a)| a.name().to_string()).collect()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_bfs_length_is_graph_distance(records in arb_credits()) {
        let graph = ActorGraph::from_records(Config::weighted(), records).unwrap();
        let (dist, names) = graph.with_store(|s| (actor_floyd(s, true), names(s)));

        for (i, start) in names.iter().enumerate() {
            for (j, end) in names.iter().enumerate() {
                let path = graph.shortest_path(start, end, false);
                match dist[i][j] {
                    _ if i == j => prop_assert!(path.is_none()),
                    Some(d) => {
                        let path = path.unwrap();
                        prop_assert_eq!(path.len() as u64, d);
                        prop_assert_eq!(path.start(), start.as_str());
                        prop_assert_eq!(path.end(), end.as_str());
                    }
                    None => prop_assert!(path.is_none()),
                }
            }
        }
    }

    #[test]
    fn prop_dijkstra_is_optimal(records in arb_credits()) {
        let graph = ActorGraph::from_records(Config::weighted(), records).unwrap();
        let (dist, names) = graph.with_store(|s| (actor_floyd(s, false), names(s)));

        for (i, start) in names.iter().enumerate() {
            for (j, end) in names.iter().enumerate() {
                if i == j {
                    continue;
                }
                let path = graph.shortest_path(start, end, true);
                prop_assert_eq!(path.map(|p| p.cost() as u64), dist[i][j]);
            }
        }
    }

    #[test]
    fn prop_dijkstra_matches_bfs_under_unit_weights(records in arb_credits()) {
        let graph = ActorGraph::from_records(Config::unweighted(), records).unwrap();
        let names = graph.with_store(names);
        for start in &names {
            for end in &names {
                let bfs = graph.shortest_path(start, end, false).map(|p| p.cost());
                let dijkstra = graph.shortest_path(start, end, true).map(|p| p.cost());
                prop_assert_eq!(bfs, dijkstra);
            }
        }
    }

    #[test]
    fn prop_path_hops_share_their_movie(records in arb_credits()) {
        let graph = ActorGraph::from_records(Config::weighted(), records).unwrap();
        let names = graph.with_store(names);
        let (Some(first), Some(last)) = (names.first(), names.last()) else {
            return Ok(());
        };
        if let Some(path) = graph.shortest_path(first, last, true) {
            let casts: Vec<Option<Vec<String>>> = graph.with_store(|store| {
                path.hops()
                    .iter()
                    .map(|hop| {
                        let movie = store.get_movie(hop.via.as_deref()?)?;
                        Some(
                            movie
                                .cast()
                                .iter()
                                .map(|&id| store.actor(id).name().to_string())
                                .collect(),
                        )
                    })
                    .collect()
            });
            let mut previous = path.start().to_string();
            for (hop, cast) in path.hops().iter().zip(casts) {
                prop_assert!(cast.is_some(), "no movie behind hop {:?}", hop.via);
                let cast = cast.unwrap_or_default();
                prop_assert!(cast.contains(&previous), "{previous} missing from {:?}", hop.via);
                prop_assert!(cast.iter().any(|name| name.as_str() == &*hop.to));
                previous = hop.to.to_string();
            }
        }
    }

    #[test]
    fn prop_astar_matches_euclidean_distance((cities, roads) in arb_cities()) {
        let graph = CityGraph::from_records(Config::default(), cities.clone(), roads.clone()).unwrap();

        let n = cities.len();
        let index = |name: &str| name[1..].parse::<usize>().unwrap();
        let length = |a: usize, b: usize| {
            f64::from(cities[a].x - cities[b].x).hypot(f64::from(cities[a].y - cities[b].y))
        };
        let mut dist = vec![vec![None; n]; n];
        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = Some(0.0);
        }
        for road in &roads {
            let (a, b) = (index(&road.from), index(&road.to));
            if a != b {
                dist[a][b] = Some(length(a, b));
                dist[b][a] = Some(length(a, b));
            }
        }
        floyd(&mut dist, |a, b| a + b);

        for i in 0..n {
            for j in 0..n {
                let path = graph.a_star(&cities[i].name, &cities[j].name);
                match dist[i][j] {
                    _ if i == j => prop_assert!(path.is_none()),
                    Some(d) => prop_assert!((path.unwrap().cost() - d).abs() < 1e-6),
                    None => prop_assert!(path.is_none()),
                }
            }
        }
    }

    #[test]
    fn prop_mst_spans_connected_graphs(records in arb_credits()) {
        let graph = ActorGraph::from_records(Config::weighted(), records).unwrap();
        let (actors, components) =
            graph.with_store(|s| (s.actor_count(), connected_component_count(s)));

        match graph.build_mst() {
            Some(mst) => {
                prop_assert_eq!(components, 1);
                prop_assert_eq!(mst.node_count, actors);
                prop_assert_eq!(mst.edge_count(), actors - 1);
            }
            None => prop_assert!(components > 1),
        }
    }

    #[test]
    fn prop_mst_weight_ignores_insertion_order(
        raw in prop::collection::vec((0u8..8, 0u8..10), 1..40),
    ) {
        // One year per title, so every movie has a distinct weight.
        let records: Vec<CastRecord> = raw
            .into_iter()
            .map(|(a, m)| {
                CastRecord::new(format!("actor{a}"), format!("movie{m}"), 2000 + u32::from(m))
            })
            .collect();
        let forward = ActorGraph::from_records(Config::weighted(), records.clone()).unwrap();
        let backward =
            ActorGraph::from_records(Config::weighted(), records.into_iter().rev()).unwrap();

        let total = |g: &ActorGraph| g.build_mst().map(|mst| (mst.edge_count(), mst.total_weight));
        prop_assert_eq!(total(&forward), total(&backward));
    }

    #[test]
    fn prop_link_prediction_lists(records in arb_credits(), top_k in 1usize..6) {
        let graph = ActorGraph::from_records(Config::unweighted().with_top_k(top_k), records).unwrap();
        for actor in graph.with_store(names) {
            let prediction = graph.predict_links(&actor);
            let yes = prediction.collaborated_names();
            let no = prediction.not_collaborated_names();

            prop_assert!(yes.len() <= top_k && no.len() <= top_k);
            prop_assert!(!yes.contains(&actor.as_str()));
            prop_assert!(!no.contains(&actor.as_str()));
            prop_assert!(yes.iter().all(|name| !no.contains(name)));
        }
    }

    #[test]
    fn prop_reinsert_is_idempotent(records in arb_credits()) {
        let graph = ActorGraph::from_records(Config::weighted(), records.clone()).unwrap();
        let before = graph.stats();
        graph.insert_records(records);
        prop_assert_eq!(graph.stats(), before);
    }
}
