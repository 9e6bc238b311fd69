//! Board structure: topology plus occupancy

use super::topology::{self, Edge, Node, Point};
use super::{NodeId, Player, NODES_PER_CIRCUIT};

/// Game board: fixed graph, mutable occupancy and edge control
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    /// Neighbors of each node, derived once from `edges`
    adjacency: Vec<Vec<NodeId>>,
    size: f32,
}

impl Board {
    /// Build a board laid out in a square drawing area of side `size`
    pub fn new(size: f32) -> Self {
        let (nodes, edges) = topology::generate(size);
        let adjacency = topology::adjacency(&edges);
        Self {
            nodes,
            edges,
            adjacency,
            size,
        }
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub(crate) fn edges_mut(&mut self) -> &mut [Edge] {
        &mut self.edges
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.to_index()]
    }

    /// Get occupant at node
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<Player> {
        self.nodes[id.to_index()].occupant
    }

    #[inline]
    pub fn is_empty(&self, id: NodeId) -> bool {
        self.get(id).is_none()
    }

    /// Occupy a node (no rule checks)
    #[inline]
    pub fn place(&mut self, id: NodeId, player: Player) {
        self.nodes[id.to_index()].occupant = Some(player);
    }

    #[inline]
    pub fn remove(&mut self, id: NodeId) {
        self.nodes[id.to_index()].occupant = None;
    }

    /// Nodes sharing an edge with `id`
    #[inline]
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        &self.adjacency[id.to_index()]
    }

    #[inline]
    pub fn are_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Occupied node count on a circuit
    pub fn occupied_in_circuit(&self, circuit: u8) -> usize {
        self.circuit_nodes(circuit).filter(|n| !n.is_empty()).count()
    }

    #[inline]
    pub fn is_circuit_full(&self, circuit: u8) -> bool {
        self.occupied_in_circuit(circuit) == NODES_PER_CIRCUIT
    }

    pub fn circuit_nodes(&self, circuit: u8) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.circuit() == circuit)
    }

    /// Titans on the board for a player
    pub fn titan_count(&self, player: Player) -> usize {
        self.nodes.iter().filter(|n| n.occupant == Some(player)).count()
    }

    /// Nearest node whose center lies within `radius` of `point`
    pub fn node_at(&self, point: Point, radius: f32) -> Option<NodeId> {
        self.nodes
            .iter()
            .map(|n| (n.id, n.pos.distance(point)))
            .filter(|&(_, d)| d <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    /// Recompute node positions for a new drawing-area size.
    /// Identities, weights and occupancy are untouched.
    pub fn layout(&mut self, size: f32) {
        if size == self.size {
            return;
        }
        for node in &mut self.nodes {
            node.pos = topology::node_position(node.id, size);
        }
        self.size = size;
    }

    /// Clear all occupancy and edge control, keeping the topology
    pub fn clear(&mut self) {
        for node in &mut self.nodes {
            node.occupant = None;
        }
        for edge in &mut self.edges {
            edge.controlled_by = None;
        }
    }
}
