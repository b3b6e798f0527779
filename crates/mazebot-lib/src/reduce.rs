//! Graph contraction.
//!
//! Reduction repeatedly sweeps the whole graph, removing every non-fixed
//! vertex of degree 0, 1 or 2, until a sweep removes nothing:
//!
//! - degree 0: isolated, dropped;
//! - degree 1: a dead end, dropped together with its only edge;
//! - degree 2: contracted into a direct edge between its two neighbours,
//!   unless the neighbours already share an edge that is no longer.
//!
//! Shortest distances between the surviving vertices are unchanged.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{MazeGraph, VertexId};

/// Counters describing one reduction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReductionSummary {
    /// Sweeps performed, including the final sweep that removed nothing.
    pub passes: usize,
    pub isolated: usize,
    pub dead_ends: usize,
    pub contracted: usize,
}

impl ReductionSummary {
    /// Total vertices removed.
    pub fn removed(&self) -> usize {
        self.isolated + self.dead_ends + self.contracted
    }
}

/// Reduce `graph` in place to its fixed point.
pub fn reduce(graph: &mut MazeGraph) -> Result<ReductionSummary> {
    let mut summary = ReductionSummary::default();

    loop {
        summary.passes += 1;
        let before = graph.len();

        for id in graph.ids() {
            let Some(vertex) = graph.vertex(id) else {
                continue;
            };
            if vertex.is_fixed() {
                continue;
            }

            match vertex.degree() {
                0 => {
                    graph.remove_vertex(id);
                    summary.isolated += 1;
                }
                1 => {
                    graph.remove_vertex(id);
                    summary.dead_ends += 1;
                }
                2 => {
                    contract(graph, id)?;
                    summary.contracted += 1;
                }
                _ => {}
            }
        }

        debug!(
            pass = summary.passes,
            remaining = graph.len(),
            removed = before - graph.len(),
            "reduction pass complete"
        );

        if graph.len() == before {
            break;
        }
    }

    Ok(summary)
}

/// Replace the degree-2 vertex `id` by a direct edge between its neighbours.
///
/// The lower neighbour id plays `v1`. When `v1` and `v2` are already linked by
/// an edge no longer than the route through `id`, that edge is kept as is.
fn contract(graph: &mut MazeGraph, id: VertexId) -> Result<()> {
    let (v1, v2) = {
        let vertex = graph
            .vertex(id)
            .ok_or_else(|| Error::invariant(format!("vertex {id} vanished mid-contraction")))?;
        let mut neighbours = vertex.incidents().keys().copied();
        match (neighbours.next(), neighbours.next(), neighbours.next()) {
            (Some(v1), Some(v2), None) => (v1, v2),
            _ => {
                return Err(Error::invariant(format!(
                    "vertex {id} is not of degree 2"
                )))
            }
        }
    };

    let into = graph.label(v1, id).ok_or_else(|| {
        Error::invariant(format!("vertex {v1} lacks the partner edge to {id}"))
    })?;
    let out = graph
        .label(id, v2)
        .ok_or_else(|| Error::invariant(format!("vertex {id} lost its edge to {v2}")))?;
    let candidate = into.concat(out);

    let keep_existing = graph
        .label(v1, v2)
        .is_some_and(|existing| existing.len() <= candidate.len());
    if !keep_existing {
        graph.connect(v1, v2, candidate)?;
    }

    graph.remove_vertex(id);
    Ok(())
}
