use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::debug;

use crate::direction::Path;
use crate::error::{Error, Result};
use crate::graph::{MazeGraph, VertexId};
use crate::grid::Position;

/// Find the shortest move sequence from `start` to `goal`.
///
/// Dijkstra runs backwards from `goal`. Whenever a vertex `u` is reached from
/// `v`, the label of `u → v` is remembered, so following predecessors from
/// `start` yields the forward route fragment by fragment. Edge weight is the
/// label length.
pub fn solve(graph: &MazeGraph, start: VertexId, goal: VertexId) -> Result<Path> {
    let start_position = position_of(graph, start)?;
    let goal_position = position_of(graph, goal)?;

    let tree = search(graph, goal, Some(start))?;
    if !tree.distances.contains_key(&start) {
        return Err(Error::Unreachable {
            start: start_position,
            goal: goal_position,
        });
    }

    let mut path = Path::new();
    let mut current = start;
    while current != goal {
        let (next, fragment) = tree.parents.get(&current).ok_or_else(|| {
            Error::invariant(format!("vertex {current} has a distance but no predecessor"))
        })?;
        path.append(fragment);
        current = *next;
    }

    let expected = tree.distances.get(&start).copied().unwrap_or_default();
    if path.len() != expected {
        return Err(Error::invariant(format!(
            "reconstructed path has {} moves but the search found {expected}",
            path.len()
        )));
    }

    debug!(
        settled = tree.distances.len(),
        moves = path.len(),
        "shortest path found"
    );
    Ok(path)
}

/// Shortest distance, in unit moves, from `source` to every vertex it reaches.
pub fn shortest_distances(
    graph: &MazeGraph,
    source: VertexId,
) -> Result<HashMap<VertexId, usize>> {
    position_of(graph, source)?;
    Ok(search(graph, source, None)?.distances)
}

struct SearchTree<'a> {
    distances: HashMap<VertexId, usize>,
    /// For each reached vertex: the vertex it was reached from and the label
    /// leading towards it.
    parents: HashMap<VertexId, (VertexId, &'a Path)>,
}

fn search<'a>(
    graph: &'a MazeGraph,
    source: VertexId,
    stop_at: Option<VertexId>,
) -> Result<SearchTree<'a>> {
    let mut distances: HashMap<VertexId, usize> = HashMap::new();
    let mut parents: HashMap<VertexId, (VertexId, &'a Path)> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(source, 0);
    queue.push(QueueEntry::new(source, 0));

    while let Some(entry) = queue.pop() {
        match distances.get(&entry.node) {
            Some(&best) if best < entry.cost => continue,
            Some(_) => {}
            None => continue,
        }

        if stop_at == Some(entry.node) {
            break;
        }

        let Some(vertex) = graph.vertex(entry.node) else {
            continue;
        };
        for (&next, label) in vertex.incidents() {
            let back = graph.label(next, entry.node).ok_or_else(|| {
                Error::invariant(format!("edge {} -> {next} has no partner edge", entry.node))
            })?;

            let next_cost = entry.cost + label.len();
            if next_cost < distances.get(&next).copied().unwrap_or(usize::MAX) {
                distances.insert(next, next_cost);
                parents.insert(next, (entry.node, back));
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    Ok(SearchTree { distances, parents })
}

fn position_of(graph: &MazeGraph, id: VertexId) -> Result<Position> {
    graph
        .vertex(id)
        .map(|vertex| vertex.position())
        .ok_or_else(|| Error::invariant(format!("vertex {id} is not in the graph")))
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: VertexId,
    cost: usize,
}

impl QueueEntry {
    fn new(node: VertexId, cost: usize) -> Self {
        Self { node, cost }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
