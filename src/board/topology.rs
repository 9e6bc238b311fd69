//! Fixed board graph: 18 nodes on three hexagons and 30 weighted edges

use super::{NodeId, Player, CIRCUITS, EDGE_COUNT, NODES_PER_CIRCUIT, NODE_COUNT};

/// Circuit radius relative to half the drawing area
pub const CIRCUIT_RADII: [f32; CIRCUITS] = [0.8, 0.6, 0.4];

/// Edge weights indexed by `[circuit][position % 3]`.
/// Radial edges from circuit `c` take their weight from row `c + 1`.
pub const EDGE_WEIGHTS: [[u32; 3]; CIRCUITS] = [[1, 2, 1], [4, 5, 6], [8, 9, 8]];

/// Logical 2D position inside the drawing area
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub pos: Point,
    pub occupant: Option<Player>,
}

impl Node {
    #[inline]
    pub fn circuit(&self) -> u8 {
        self.id.circuit()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub start: NodeId,
    pub end: NodeId,
    pub weight: u32,
    /// Derived by score recomputation, never set directly
    pub controlled_by: Option<Player>,
}

impl Edge {
    fn new(start: NodeId, end: NodeId, weight: u32) -> Self {
        debug_assert_ne!(start, end);
        Self {
            start,
            end,
            weight,
            controlled_by: None,
        }
    }

    /// The endpoint opposite `node`, if `node` is an endpoint
    #[inline]
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.start == node {
            Some(self.end)
        } else if self.end == node {
            Some(self.start)
        } else {
            None
        }
    }
}

/// Position of a node for a square drawing area of side `size`.
///
/// Nodes sit at angles `60° * i - 30°` around the center.
pub fn node_position(id: NodeId, size: f32) -> Point {
    let center = size / 2.0;
    let radius = center * CIRCUIT_RADII[id.circuit() as usize];
    let angle = std::f32::consts::FRAC_PI_3 * id.position() as f32 - std::f32::consts::FRAC_PI_6;
    Point::new(center + radius * angle.cos(), center + radius * angle.sin())
}

/// Build the nodes and edges for a drawing area of side `size`.
///
/// Edge order: ring edges of circuit 0, 1, 2 (node `i` to `i + 1 mod 6`),
/// then radial edges circuit 0→1 and 1→2. Deterministic.
pub fn generate(size: f32) -> (Vec<Node>, Vec<Edge>) {
    let nodes: Vec<Node> = NodeId::all()
        .map(|id| Node {
            id,
            pos: node_position(id, size),
            occupant: None,
        })
        .collect();

    let mut edges = Vec::with_capacity(EDGE_COUNT);

    for circuit in 0..CIRCUITS as u8 {
        for i in 0..NODES_PER_CIRCUIT as u8 {
            let next = (i + 1) % NODES_PER_CIRCUIT as u8;
            let weight = EDGE_WEIGHTS[circuit as usize][i as usize % 3];
            edges.push(Edge::new(NodeId::new(circuit, i), NodeId::new(circuit, next), weight));
        }
    }

    for circuit in 0..(CIRCUITS - 1) as u8 {
        for i in 0..NODES_PER_CIRCUIT as u8 {
            let weight = EDGE_WEIGHTS[circuit as usize + 1][i as usize % 3];
            edges.push(Edge::new(NodeId::new(circuit, i), NodeId::new(circuit + 1, i), weight));
        }
    }

    debug_assert_eq!(nodes.len(), NODE_COUNT);
    debug_assert_eq!(edges.len(), EDGE_COUNT);
    (nodes, edges)
}

/// Neighbor lists derived from `edges`, indexed by node.
pub fn adjacency(edges: &[Edge]) -> Vec<Vec<NodeId>> {
    let mut adj = vec![Vec::with_capacity(4); NODE_COUNT];
    for edge in edges {
        adj[edge.start.to_index()].push(edge.end);
        adj[edge.end.to_index()].push(edge.start);
    }
    adj
}
