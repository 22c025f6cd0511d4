use crate::error::{GraphError, Result};
use crate::graph::priority_queue::PriorityQueue;
use crate::graph::GraphProvider;
use crate::log_search_stats;
use crate::logging::SearchStats;
use std::collections::HashMap;
use std::hash::Hash;

/// Single-source shortest-path distances plus the predecessor of each
/// reached vertex on its best path
#[derive(Debug, Clone)]
pub struct ShortestPaths<V: Eq + Hash> {
    source: V,
    distances: HashMap<V, f64>,
    predecessors: HashMap<V, V>,
}

impl<V: Clone + Eq + Hash> ShortestPaths<V> {
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Best distance to `vertex`: `Some(f64::INFINITY)` when unreachable,
    /// `None` when the vertex is not part of the graph
    pub fn distance(&self, vertex: &V) -> Option<f64> {
        self.distances.get(vertex).copied()
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_some_and(f64::is_finite)
    }

    /// Every vertex of the graph mapped to its distance
    pub fn distances(&self) -> &HashMap<V, f64> {
        &self.distances
    }

    /// Vertices on a shortest path from the source to `target`, inclusive
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while *current != self.source {
            current = self.predecessors.get(current)?;
            path.push(current.clone());
            // Only reachable with negative weights; never loop forever
            if path.len() > self.predecessors.len() + 1 {
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Dijkstra's algorithm from `source` over non-negative edge weights.
///
/// Queue entries are never updated in place: an improved distance pushes a
/// fresh entry, and entries whose priority exceeds the vertex's best known
/// distance are discarded when popped. Negative weights are not detected and
/// give unspecified results.
#[tracing::instrument(skip(graph))]
pub fn dijkstra<G: GraphProvider>(
    graph: &G,
    source: &G::Vertex,
) -> Result<ShortestPaths<G::Vertex>> {
    if !graph.contains(source) {
        return Err(GraphError::missing_vertex("source", source));
    }

    let mut distances: HashMap<G::Vertex, f64> = graph
        .vertices()
        .into_iter()
        .map(|v| (v, f64::INFINITY))
        .collect();
    distances.insert(source.clone(), 0.0);

    let mut predecessors = HashMap::new();
    let mut queue = PriorityQueue::by_cost();
    let mut stats = SearchStats::new();

    queue.push(source.clone(), 0.0);
    stats.record_push();

    while let Some((current, distance)) = queue.pop_min() {
        stats.record_pop();

        let best = distances.get(&current).copied().unwrap_or(f64::INFINITY);
        if distance > best {
            stats.record_stale();
            continue;
        }

        for (neighbor, weight) in graph.outbound(&current) {
            let candidate = distance + weight;
            let known = distances.entry(neighbor.clone()).or_insert(f64::INFINITY);
            if candidate < *known {
                *known = candidate;
                predecessors.insert(neighbor.clone(), current.clone());
                queue.push(neighbor, candidate);
                stats.record_push();
            }
        }
    }

    log_search_stats!(stats, "dijkstra");

    Ok(ShortestPaths {
        source: source.clone(),
        distances,
        predecessors,
    })
}
