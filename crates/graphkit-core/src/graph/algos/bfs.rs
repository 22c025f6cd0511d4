use crate::graph::GraphProvider;
use std::collections::{HashSet, VecDeque};

/// Lazy breadth-first traversal.
///
/// A vertex is marked visited when it is dequeued, not when it is enqueued,
/// so it may sit in the queue more than once; later copies are skipped.
pub struct Bfs<'g, G: GraphProvider> {
    graph: &'g G,
    queue: VecDeque<G::Vertex>,
    visited: HashSet<G::Vertex>,
}

impl<G: GraphProvider> Iterator for Bfs<'_, G> {
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let vertex = self.queue.pop_front()?;
            if !self.visited.insert(vertex.clone()) {
                continue;
            }

            for (neighbor, _) in self.graph.outbound(&vertex) {
                if !self.visited.contains(&neighbor) {
                    self.queue.push_back(neighbor);
                }
            }
            return Some(vertex);
        }
    }
}

/// Breadth-first traversal from `start`; yields nothing if `start` is absent
#[tracing::instrument(skip(graph))]
pub fn bfs<'g, G: GraphProvider>(graph: &'g G, start: &G::Vertex) -> Bfs<'g, G> {
    let mut queue = VecDeque::new();
    if graph.contains(start) {
        queue.push_back(start.clone());
    } else {
        tracing::debug!("start vertex not in graph");
    }

    Bfs {
        graph,
        queue,
        visited: HashSet::new(),
    }
}
