//! Output formatting for solver results.

use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use mazebot_lib::{GraphStats, MazeSolution, Path, Position, PreparedGraph, ReductionSummary};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Text,
    /// Bare direction string, suitable for piping.
    Basic,
    /// Pretty-printed JSON.
    Json,
}

/// Outcome of replaying a direction sequence.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VerificationReport {
    pub valid: bool,
    pub moves: usize,
    pub end: Position,
}

/// Surviving vertex in a reduced graph.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VertexReport {
    pub position: Position,
    pub degree: usize,
    pub fixed: bool,
}

/// Reduced graph summary.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GraphReport {
    pub stats: GraphStats,
    pub reduction: ReductionSummary,
    pub vertices: Vec<VertexReport>,
}

impl GraphReport {
    pub fn from_prepared(prepared: &PreparedGraph) -> Self {
        let vertices = prepared
            .graph
            .vertices()
            .map(|(_, vertex)| VertexReport {
                position: vertex.position(),
                degree: vertex.degree(),
                fixed: vertex.is_fixed(),
            })
            .collect();
        Self {
            stats: prepared.stats,
            reduction: prepared.reduction,
            vertices,
        }
    }
}

/// Render a solved maze.
pub fn render_solution(solution: &MazeSolution, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Basic => Ok(solution.directions.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(solution)?),
        OutputFormat::Text => {
            let mut out = String::new();
            writeln!(out, "Solved maze from {} to {}", solution.start, solution.goal)?;
            writeln!(out, "  moves: {}", solution.moves)?;
            writeln!(
                out,
                "  vertices: {} built, {} after reduction ({} passes)",
                solution.graph.built_vertices,
                solution.graph.reduced_vertices,
                solution.reduction.passes
            )?;
            write!(out, "  directions: {}", format_directions(&solution.directions))?;
            Ok(out)
        }
    }
}

/// Render a successful replay.
pub fn render_verification(report: &VerificationReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Basic => Ok(if report.valid { "valid" } else { "invalid" }.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => Ok(format!(
            "Path of {} moves reaches the goal at {}",
            report.moves, report.end
        )),
    }
}

/// Render the reduced graph of a maze.
pub fn render_graph(report: &GraphReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Basic | OutputFormat::Text => {
            let mut out = String::new();
            writeln!(
                out,
                "Graph: {} vertices / {} edges built, {} vertices / {} edges after reduction",
                report.stats.built_vertices,
                report.stats.built_edges,
                report.stats.reduced_vertices,
                report.stats.reduced_edges
            )?;
            writeln!(
                out,
                "Removed: {} isolated, {} dead ends, {} contracted in {} passes",
                report.reduction.isolated,
                report.reduction.dead_ends,
                report.reduction.contracted,
                report.reduction.passes
            )?;
            for vertex in &report.vertices {
                let marker = if vertex.fixed { " (fixed)" } else { "" };
                writeln!(
                    out,
                    "- {} degree {}{}",
                    vertex.position, vertex.degree, marker
                )?;
            }
            Ok(out.trim_end().to_string())
        }
    }
}

/// Group long direction strings into blocks of ten for readability.
fn format_directions(directions: &Path) -> String {
    let text = directions.to_string();
    if text.is_empty() {
        return "(none)".to_string();
    }
    text.as_bytes()
        .chunks(10)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
