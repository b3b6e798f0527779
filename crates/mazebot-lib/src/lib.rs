//! Mazebot library entry points.
//!
//! This crate turns a grid maze into a compact weighted graph and finds the
//! shortest route from the `A` cell to the `B` cell. The pipeline runs in four
//! steps: classify cells ([`is_vertex_candidate`]), build the corridor graph
//! ([`build_graph`]), contract it ([`reduce()`]) and search it ([`solve()`]).
//! [`solve_maze`] runs them all and checks the answer. Higher-level consumers
//! (the CLI) should only depend on the functions exported here.
//!

#![deny(warnings)]

pub mod classify;
pub mod direction;
pub mod document;
pub mod error;
pub mod graph;
pub mod grid;
pub mod pipeline;
pub mod reduce;
pub mod solve;
pub mod verify;

pub use classify::is_vertex_candidate;
pub use direction::{Direction, Path};
pub use document::{ExampleSolution, MazeDocument, SolutionSubmission};
pub use error::{Error, Result};
pub use graph::{build_graph, BuiltGraph, MazeGraph, Vertex, VertexId};
pub use grid::{Cell, Grid, Marker, Position};
pub use pipeline::{
    prepare_graph, solve_maze, GraphStats, MazeSolution, PhaseTimings, PreparedGraph,
};
pub use reduce::{reduce, ReductionSummary};
pub use solve::{shortest_distances, solve};
pub use verify::{replay, verify_solution};
