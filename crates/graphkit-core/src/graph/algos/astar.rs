//! A* path-finding over a 4-connected [`Grid`]
//!
//! Search nodes live in an arena (`Vec<SearchNode>`) and point at their
//! predecessor by index. Best-known costs are keyed by grid coordinate.

use crate::error::{GraphError, Result};
use crate::graph::grid::{Grid, Position};
use crate::graph::priority_queue::PriorityQueue;
use crate::log_search_stats;
use crate::logging::SearchStats;
use std::collections::HashMap;

/// Every move between neighboring cells costs the same
const STEP_COST: usize = 1;

#[derive(Debug, Clone, Copy)]
struct SearchNode {
    position: Position,
    /// Cost from the start
    g: usize,
    /// Manhattan estimate to the goal
    h: usize,
    parent: Option<usize>,
}

impl SearchNode {
    fn f(&self) -> usize {
        self.g + self.h
    }
}

/// Walk predecessor links from `idx` back to the start, then reverse
fn reconstruct_path(nodes: &[SearchNode], idx: usize) -> Vec<Position> {
    let mut path = Vec::new();
    let mut current = Some(idx);
    while let Some(i) = current {
        path.push(nodes[i].position);
        current = nodes[i].parent;
    }
    path.reverse();
    path
}

/// Shortest 4-directional path from `start` to `goal`, both inclusive.
///
/// Returns `Ok(None)` when no path exists, including when either endpoint is
/// a blocked cell. Out-of-bounds endpoints are invalid input.
#[tracing::instrument(skip(grid), fields(rows = grid.rows(), cols = grid.cols()))]
pub fn a_star(grid: &Grid, start: Position, goal: Position) -> Result<Option<Vec<Position>>> {
    if !grid.in_bounds(start) {
        return Err(GraphError::missing_vertex("start", start));
    }
    if !grid.in_bounds(goal) {
        return Err(GraphError::missing_vertex("goal", goal));
    }
    if !grid.is_walkable(start) || !grid.is_walkable(goal) {
        tracing::debug!("start or goal cell is blocked");
        return Ok(None);
    }

    let mut nodes = vec![SearchNode {
        position: start,
        g: 0,
        h: start.manhattan(&goal),
        parent: None,
    }];
    let mut best_g: HashMap<Position, usize> = HashMap::from([(start, 0)]);
    // Ordered by f, then by h so nodes nearer the goal win ties
    let mut open: PriorityQueue<usize, (usize, usize)> = PriorityQueue::new();
    let mut stats = SearchStats::new();

    open.push(0, (nodes[0].f(), nodes[0].h));
    stats.record_push();

    while let Some((idx, _)) = open.pop_min() {
        stats.record_pop();
        let node = nodes[idx];

        if best_g
            .get(&node.position)
            .is_some_and(|&best| node.g > best)
        {
            stats.record_stale();
            continue;
        }

        if node.position == goal {
            log_search_stats!(stats, "a_star");
            return Ok(Some(reconstruct_path(&nodes, idx)));
        }

        for next in grid.neighbors(node.position) {
            let tentative = node.g + STEP_COST;
            if best_g.get(&next).is_none_or(|&g| tentative < g) {
                best_g.insert(next, tentative);
                let h = next.manhattan(&goal);
                nodes.push(SearchNode {
                    position: next,
                    g: tentative,
                    h,
                    parent: Some(idx),
                });
                open.push(nodes.len() - 1, (tentative + h, h));
                stats.record_push();
            }
        }
    }

    log_search_stats!(stats, "a_star");
    Ok(None)
}
