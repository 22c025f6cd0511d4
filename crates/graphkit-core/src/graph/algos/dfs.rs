use crate::graph::GraphProvider;
use std::collections::HashSet;

/// Lazy depth-first traversal in pre-order.
///
/// Uses an explicit stack, but yields the same order as the recursive
/// formulation: a vertex on first entry, then each unvisited neighbor's
/// subtree in adjacency-list order.
pub struct Dfs<'g, G: GraphProvider> {
    graph: &'g G,
    stack: Vec<G::Vertex>,
    visited: HashSet<G::Vertex>,
}

impl<G: GraphProvider> Iterator for Dfs<'_, G> {
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let vertex = self.stack.pop()?;
            if !self.visited.insert(vertex.clone()) {
                continue;
            }

            // Reverse so the first neighbor is explored first
            for (neighbor, _) in self.graph.outbound(&vertex).into_iter().rev() {
                if !self.visited.contains(&neighbor) {
                    self.stack.push(neighbor);
                }
            }
            return Some(vertex);
        }
    }
}

/// Depth-first traversal from `start`; yields nothing if `start` is absent
#[tracing::instrument(skip(graph))]
pub fn dfs<'g, G: GraphProvider>(graph: &'g G, start: &G::Vertex) -> Dfs<'g, G> {
    let mut stack = Vec::new();
    if graph.contains(start) {
        stack.push(start.clone());
    } else {
        tracing::debug!("start vertex not in graph");
    }

    Dfs {
        graph,
        stack,
        visited: HashSet::new(),
    }
}
