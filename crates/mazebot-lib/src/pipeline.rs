//! End-to-end maze solving: build, reduce, search, check.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::info;

use crate::direction::Path;
use crate::error::{Error, Result};
use crate::graph::{build_graph, MazeGraph, VertexId};
use crate::grid::{Grid, Position};
use crate::reduce::{reduce, ReductionSummary};
use crate::solve::solve;
use crate::verify::verify_solution;

/// Vertex and edge counts before and after reduction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub built_vertices: usize,
    pub built_edges: usize,
    pub reduced_vertices: usize,
    pub reduced_edges: usize,
}

/// Wall-clock time spent in each phase, in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PhaseTimings {
    pub build_ms: f64,
    pub reduce_ms: f64,
    pub solve_ms: f64,
}

/// Reduced graph ready for searching.
#[derive(Debug, Clone)]
pub struct PreparedGraph {
    pub graph: MazeGraph,
    pub start: VertexId,
    pub goal: VertexId,
    pub stats: GraphStats,
    pub reduction: ReductionSummary,
    build_time: Duration,
    reduce_time: Duration,
}

/// Result of solving one maze.
#[derive(Debug, Clone, Serialize)]
pub struct MazeSolution {
    pub start: Position,
    pub goal: Position,
    pub moves: usize,
    pub directions: Path,
    pub graph: GraphStats,
    pub reduction: ReductionSummary,
    pub timings: PhaseTimings,
}

/// Build the maze graph for `grid` and reduce it to its fixed point.
///
/// The reduced graph is checked for label consistency before it is returned.
pub fn prepare_graph(grid: &Grid) -> Result<PreparedGraph> {
    let started = Instant::now();
    let built = build_graph(grid)?;
    let build_time = started.elapsed();

    let mut graph = built.graph;
    let built_vertices = graph.len();
    let built_edges = graph.edge_count();

    let started = Instant::now();
    let reduction = reduce(&mut graph)?;
    graph.check_invariants()?;
    let reduce_time = started.elapsed();

    let stats = GraphStats {
        built_vertices,
        built_edges,
        reduced_vertices: graph.len(),
        reduced_edges: graph.edge_count(),
    };

    Ok(PreparedGraph {
        graph,
        start: built.start,
        goal: built.goal,
        stats,
        reduction,
        build_time,
        reduce_time,
    })
}

/// Solve `grid`, returning the shortest move sequence from `A` to `B`.
///
/// The returned path has been replayed against the grid; a path that fails
/// the replay is reported as an invariant violation rather than returned.
pub fn solve_maze(grid: &Grid) -> Result<MazeSolution> {
    let prepared = prepare_graph(grid)?;

    let started = Instant::now();
    let directions = solve(&prepared.graph, prepared.start, prepared.goal)?;
    let solve_time = started.elapsed();

    verify_solution(grid, &directions).map_err(|error| {
        Error::invariant(format!("solver produced a path that fails replay: {error}"))
    })?;

    let timings = PhaseTimings {
        build_ms: millis(prepared.build_time),
        reduce_ms: millis(prepared.reduce_time),
        solve_ms: millis(solve_time),
    };

    info!(
        width = grid.width(),
        height = grid.height(),
        built_vertices = prepared.stats.built_vertices,
        reduced_vertices = prepared.stats.reduced_vertices,
        passes = prepared.reduction.passes,
        moves = directions.len(),
        build_ms = timings.build_ms,
        reduce_ms = timings.reduce_ms,
        solve_ms = timings.solve_ms,
        "solved maze"
    );

    Ok(MazeSolution {
        start: grid.start(),
        goal: grid.goal(),
        moves: directions.len(),
        directions,
        graph: prepared.stats,
        reduction: prepared.reduction,
        timings,
    })
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_keeps_only_markers_in_a_tree_maze() {
        let grid = Grid::parse(concat!(
            "XXXXXXX\n",
            "XA    X\n",
            "X XXX X\n",
            "X X   X\n",
            "X X XBX\n",
            "XXXXXXX",
        ))
        .expect("valid maze");

        let prepared = prepare_graph(&grid).expect("graph prepared");
        assert_eq!(prepared.stats.reduced_vertices, 2);
        assert_eq!(prepared.stats.reduced_edges, 1);
        assert!(prepared.stats.built_vertices > prepared.stats.reduced_vertices);
    }

    #[test]
    fn solution_reports_counts_and_moves() {
        let grid = Grid::parse("XXXXXX\nXA  BX\nXXXXXX").expect("valid maze");
        let solution = solve_maze(&grid).expect("solvable");
        assert_eq!(solution.directions.to_string(), "EEE");
        assert_eq!(solution.moves, 3);
        assert_eq!(solution.graph.built_vertices, 2);
        assert_eq!(solution.reduction.removed(), 0);
    }
}
