use crate::error::{GraphError, Result};
use crate::graph::GraphProvider;
use std::collections::HashMap;

/// DFS colour of a vertex; absent from the map means unvisited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the current DFS path
    InProgress,
    Done,
}

/// Order the vertices so every edge `u -> v` has `u` before `v`.
///
/// Runs an explicit-stack depth-first search from every vertex in insertion
/// order and returns the reverse post-order. Reaching a vertex that is still
/// on the current path means the graph has a cycle; the whole sort fails with
/// [`GraphError::CycleDetected`] naming that vertex.
#[tracing::instrument(skip(graph))]
pub fn topological_sort<G: GraphProvider>(graph: &G) -> Result<Vec<G::Vertex>> {
    let vertices = graph.vertices();
    let mut marks: HashMap<G::Vertex, Mark> = HashMap::with_capacity(vertices.len());
    let mut order = Vec::with_capacity(vertices.len());

    for root in vertices {
        if marks.contains_key(&root) {
            continue;
        }

        marks.insert(root.clone(), Mark::InProgress);
        let pending = graph.outbound(&root).into_iter();
        let mut stack = vec![(root, pending)];

        while let Some((vertex, pending)) = stack.last_mut() {
            match pending.next() {
                Some((next, _)) => match marks.get(&next) {
                    Some(Mark::InProgress) => {
                        tracing::debug!(vertex = %next, "back edge");
                        return Err(GraphError::cycle_detected(&next));
                    }
                    Some(Mark::Done) => {}
                    None => {
                        marks.insert(next.clone(), Mark::InProgress);
                        let pending = graph.outbound(&next).into_iter();
                        stack.push((next, pending));
                    }
                },
                None => {
                    marks.insert(vertex.clone(), Mark::Done);
                    order.push(vertex.clone());
                    stack.pop();
                }
            }
        }
    }

    order.reverse();
    Ok(order)
}
