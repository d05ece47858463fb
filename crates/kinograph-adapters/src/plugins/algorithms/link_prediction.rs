//! Two-hop link prediction over the actor graph.
//!
//! Priority counts two-hop walks: for every direct collaborator `f` of the
//! target, each credit `(movie, s)` of `f` with `s` not the target adds one
//! to `s`. An actor reached through two different collaborators, or through
//! two movies of the same collaborator, scores twice.

use super::traits::ranking_order;
use kinograph_common::types::NodeId;
use kinograph_common::utils::hash::{FastHashMap, FastHashSet};
use kinograph_core::graph::actor::ActorStore;
use serde::Serialize;
use std::sync::Arc;

/// An actor with its two-hop priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedActor {
    /// Actor name.
    pub name: Arc<str>,
    /// Number of two-hop walks from the target.
    pub priority: u32,
}

/// Ranked candidates for one target actor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkPrediction {
    /// Actors who already share a movie with the target.
    pub collaborated: Vec<RankedActor>,
    /// Actors only reachable through a collaborator.
    pub not_collaborated: Vec<RankedActor>,
}

impl LinkPrediction {
    /// Names of the collaborated candidates, best first.
    #[must_use]
    pub fn collaborated_names(&self) -> Vec<&str> {
        self.collaborated.iter().map(|r| &*r.name).collect()
    }

    /// Names of the not-yet-collaborated candidates, best first.
    #[must_use]
    pub fn not_collaborated_names(&self) -> Vec<&str> {
        self.not_collaborated.iter().map(|r| &*r.name).collect()
    }
}

/// Renders names as a tab-terminated list: `"A\tB\t"`.
#[must_use]
pub fn tab_terminated(names: &[&str]) -> String {
    let mut line = String::with_capacity(names.iter().map(|n| n.len() + 1).sum());
    for name in names {
        line.push_str(name);
        line.push('\t');
    }
    line
}

/// Ranks the strongest existing and potential collaborators of `actor`.
///
/// Each list holds at most `top_k` actors ordered by priority descending,
/// then name ascending. The target never appears in either list and the
/// lists are disjoint. An unknown actor yields two empty lists.
pub fn predict_links(store: &ActorStore, actor: &str, top_k: usize) -> LinkPrediction {
    let Some(target) = store.actor_id(actor) else {
        return LinkPrediction::default();
    };

    let mut first_degree: Vec<NodeId> = Vec::new();
    let mut seen: FastHashSet<NodeId> = FastHashSet::default();
    for (_, co) in store.co_actors(target) {
        if seen.insert(co) {
            first_degree.push(co);
        }
    }

    let mut priority: FastHashMap<NodeId, u32> = FastHashMap::default();
    for &collaborator in &first_degree {
        for (_, second) in store.co_actors(collaborator) {
            if second != target {
                *priority.entry(second).or_insert(0) += 1;
            }
        }
    }

    let rank = |ids: &mut dyn Iterator<Item = NodeId>| {
        let mut ranked: Vec<RankedActor> = ids
            .map(|id| RankedActor {
                name: Arc::clone(store.actor(id).name_arc()),
                priority: priority.get(&id).copied().unwrap_or(0),
            })
            .collect();
        ranked.sort_by(|a, b| ranking_order((&*a.name, a.priority), (&*b.name, b.priority)));
        ranked.truncate(top_k);
        ranked
    };

    let collaborated = rank(&mut first_degree.iter().copied());
    let not_collaborated = rank(&mut priority.keys().copied().filter(|id| !seen.contains(id)));

    tracing::debug!(
        actor,
        first_degree = first_degree.len(),
        touched = priority.len(),
        "link prediction finished"
    );

    LinkPrediction {
        collaborated,
        not_collaborated,
    }
}
