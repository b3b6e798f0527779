use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::classify::is_vertex_candidate;
use crate::direction::{Direction, Path};
use crate::error::{Error, Result};
use crate::grid::{Cell, Grid, Position};

/// Stable arena index of a vertex. Ids are never reused within one graph.
pub type VertexId = usize;

/// Decision-relevant grid cell together with its labelled adjacencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    position: Position,
    incidents: BTreeMap<VertexId, Path>,
    fixed: bool,
}

impl Vertex {
    pub fn position(&self) -> Position {
        self.position
    }

    /// Outgoing edges keyed by neighbour id; each label is the move sequence
    /// leading from this vertex to that neighbour.
    pub fn incidents(&self) -> &BTreeMap<VertexId, Path> {
        &self.incidents
    }

    pub fn degree(&self) -> usize {
        self.incidents.len()
    }

    /// Start and goal vertices are fixed and survive reduction.
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }
}

/// Index-based maze graph.
///
/// Vertices live in a growable arena and refer to each other by [`VertexId`],
/// so removing a vertex leaves a tombstone rather than shifting ids. Every edge
/// is stored on both endpoints: `u → v` with label `L` always has a partner
/// `v → u` labelled with the inverse of `L`. [`MazeGraph::connect`] is the only
/// way to add edges and maintains this pairing.
#[derive(Debug, Clone, Default)]
pub struct MazeGraph {
    vertices: Vec<Option<Vertex>>,
    by_position: HashMap<Position, VertexId>,
    live: usize,
}

impl MazeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex at `position` and return its id.
    pub fn add_vertex(&mut self, position: Position, fixed: bool) -> VertexId {
        let id = self.vertices.len();
        self.vertices.push(Some(Vertex {
            position,
            incidents: BTreeMap::new(),
            fixed,
        }));
        self.by_position.insert(position, id);
        self.live += 1;
        id
    }

    /// Number of vertices still present.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Total number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.vertices().map(|(_, v)| v.degree()).sum::<usize>() / 2
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.vertex(id).is_some()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id).and_then(Option::as_ref)
    }

    fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.vertices.get_mut(id).and_then(Option::as_mut)
    }

    /// Id of the vertex at `position`, if one exists.
    pub fn vertex_at(&self, position: Position) -> Option<VertexId> {
        self.by_position.get(&position).copied()
    }

    /// Degree of `id`, or zero when the vertex is gone.
    pub fn degree(&self, id: VertexId) -> usize {
        self.vertex(id).map_or(0, Vertex::degree)
    }

    /// Live vertices in ascending id order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|vertex| (id, vertex)))
    }

    /// Live vertex ids in ascending order.
    pub fn ids(&self) -> Vec<VertexId> {
        self.vertices().map(|(id, _)| id).collect()
    }

    /// Grid cells of the vertices still present, in ascending id order.
    pub fn vertex_positions(&self) -> Vec<Position> {
        self.vertices().map(|(_, v)| v.position).collect()
    }

    /// Label of the edge `from → to`.
    pub fn label(&self, from: VertexId, to: VertexId) -> Option<&Path> {
        self.vertex(from)?.incidents.get(&to)
    }

    /// Record `from → to` with `label` and `to → from` with its inverse,
    /// replacing any existing edge between the pair.
    pub fn connect(&mut self, from: VertexId, to: VertexId, label: Path) -> Result<()> {
        if from == to {
            return Err(Error::invariant(format!("refusing self-loop on vertex {from}")));
        }
        if !self.contains(from) || !self.contains(to) {
            return Err(Error::invariant(format!(
                "cannot connect {from} and {to}: vertex missing"
            )));
        }
        let inverse = label.inverse();
        if let Some(vertex) = self.vertex_mut(from) {
            vertex.incidents.insert(to, label);
        }
        if let Some(vertex) = self.vertex_mut(to) {
            vertex.incidents.insert(from, inverse);
        }
        Ok(())
    }

    /// Remove the edge between `a` and `b` on both endpoints.
    pub fn disconnect(&mut self, a: VertexId, b: VertexId) {
        if let Some(vertex) = self.vertex_mut(a) {
            vertex.incidents.remove(&b);
        }
        if let Some(vertex) = self.vertex_mut(b) {
            vertex.incidents.remove(&a);
        }
    }

    /// Remove a vertex and every edge that points at it.
    pub fn remove_vertex(&mut self, id: VertexId) -> Option<Vertex> {
        let vertex = self.vertices.get_mut(id)?.take()?;
        for neighbour in vertex.incidents.keys() {
            if let Some(other) = self.vertex_mut(*neighbour) {
                other.incidents.remove(&id);
            }
        }
        self.by_position.remove(&vertex.position);
        self.live -= 1;
        Some(vertex)
    }

    /// Verify the structural guarantees the solver depends on.
    ///
    /// Every edge must point at a live vertex, be non-empty, have a partner
    /// edge carrying the inverse label, and walking its label from the source
    /// cell must land exactly on the target cell.
    pub fn check_invariants(&self) -> Result<()> {
        for (id, vertex) in self.vertices() {
            for (&target, label) in &vertex.incidents {
                let Some(other) = self.vertex(target) else {
                    return Err(Error::invariant(format!(
                        "vertex {id} at {} points at missing vertex {target}",
                        vertex.position
                    )));
                };
                if label.is_empty() {
                    return Err(Error::invariant(format!(
                        "edge {} -> {} has an empty label",
                        vertex.position, other.position
                    )));
                }
                match other.incidents.get(&id) {
                    Some(back) if *back == label.inverse() => {}
                    Some(back) => {
                        return Err(Error::invariant(format!(
                            "edge {} -> {} is labelled {label} but its partner is {back}",
                            vertex.position, other.position
                        )));
                    }
                    None => {
                        return Err(Error::invariant(format!(
                            "edge {} -> {} has no partner edge",
                            vertex.position, other.position
                        )));
                    }
                }
                if walk(vertex.position, label) != Some(other.position) {
                    return Err(Error::invariant(format!(
                        "edge label {label} does not lead from {} to {}",
                        vertex.position, other.position
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Follow `label` from `origin` using plain coordinate arithmetic.
fn walk(origin: Position, label: &Path) -> Option<Position> {
    label.iter().try_fold(origin, |at, direction| {
        let (dx, dy) = direction.offset();
        Some(Position::new(
            at.x.checked_add_signed(dx)?,
            at.y.checked_add_signed(dy)?,
        ))
    })
}

/// Graph produced from a grid, with the ids of its two fixed vertices.
#[derive(Debug, Clone)]
pub struct BuiltGraph {
    pub graph: MazeGraph,
    pub start: VertexId,
    pub goal: VertexId,
}

/// Turn a validated grid into a maze graph.
///
/// Cells are visited row by row, left to right. Each new vertex looks back
/// along its row and up its column for the nearest earlier vertex; a wall ends
/// the probe without an edge. Rightward and downward edges therefore appear
/// when the later vertex probes back, so each corridor is linked exactly once.
pub fn build_graph(grid: &Grid) -> Result<BuiltGraph> {
    let mut graph = MazeGraph::new();
    let mut start = None;
    let mut goal = None;

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let Some(cell) = grid.cell(x, y) else {
                continue;
            };
            if cell.is_wall() || !is_vertex_candidate(grid, x, y) {
                continue;
            }

            let fixed = matches!(cell, Cell::Start | Cell::Goal);
            let id = graph.add_vertex(Position::new(x, y), fixed);
            match cell {
                Cell::Start => start = Some(id),
                Cell::Goal => goal = Some(id),
                Cell::Wall | Cell::Open => {}
            }

            for tx in (0..x).rev() {
                if !grid.is_open(tx, y) {
                    break;
                }
                if let Some(found) = graph.vertex_at(Position::new(tx, y)) {
                    graph.connect(id, found, Path::straight(Direction::West, x - tx))?;
                    break;
                }
            }

            for ty in (0..y).rev() {
                if !grid.is_open(x, ty) {
                    break;
                }
                if let Some(found) = graph.vertex_at(Position::new(x, ty)) {
                    graph.connect(id, found, Path::straight(Direction::North, y - ty))?;
                    break;
                }
            }
        }
    }

    let start = start.ok_or_else(|| Error::invariant("start cell produced no vertex"))?;
    let goal = goal.ok_or_else(|| Error::invariant("goal cell produced no vertex"))?;

    debug!(
        vertices = graph.len(),
        edges = graph.edge_count(),
        "built maze graph"
    );

    Ok(BuiltGraph { graph, start, goal })
}
