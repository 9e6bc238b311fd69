//! Board representation for Titan Crash
//!
//! Three concentric hexagonal circuits of six nodes each, joined by
//! weighted ring and radial edges.

pub mod board;
pub mod topology;


// Re-exports
pub use board::Board;
pub use topology::{generate, Edge, Node, Point};

/// Number of concentric circuits (0 = outer, 2 = inner)
pub const CIRCUITS: usize = 3;
/// Nodes on each circuit
pub const NODES_PER_CIRCUIT: usize = 6;
pub const NODE_COUNT: usize = CIRCUITS * NODES_PER_CIRCUIT; // 18
/// 6 ring edges per circuit + 6 radial edges between each adjacent pair
pub const EDGE_COUNT: usize = CIRCUITS * NODES_PER_CIRCUIT + (CIRCUITS - 1) * NODES_PER_CIRCUIT; // 30

/// Index of the innermost circuit
pub const INNER_CIRCUIT: u8 = (CIRCUITS - 1) as u8;

/// Player colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Red, Player::Blue];

    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::Red => 0,
            Player::Blue => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Blue => "Blue",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A value held once per player, indexable by [`Player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct PerPlayer<T> {
    pub red: T,
    pub blue: T,
}

impl<T> PerPlayer<T> {
    pub const fn new(red: T, blue: T) -> Self {
        Self { red, blue }
    }
}

impl<T> std::ops::Index<Player> for PerPlayer<T> {
    type Output = T;

    fn index(&self, player: Player) -> &T {
        match player {
            Player::Red => &self.red,
            Player::Blue => &self.blue,
        }
    }
}

impl<T> std::ops::IndexMut<Player> for PerPlayer<T> {
    fn index_mut(&mut self, player: Player) -> &mut T {
        match player {
            Player::Red => &mut self.red,
            Player::Blue => &mut self.blue,
        }
    }
}

/// Node identity: circuit-major index in `0..NODE_COUNT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct NodeId(u8);

impl NodeId {
    #[inline]
    pub fn new(circuit: u8, position: u8) -> Self {
        debug_assert!((circuit as usize) < CIRCUITS && (position as usize) < NODES_PER_CIRCUIT);
        Self(circuit * NODES_PER_CIRCUIT as u8 + position)
    }

    #[inline]
    pub fn circuit(self) -> u8 {
        self.0 / NODES_PER_CIRCUIT as u8
    }

    /// Position within the circuit (0..6)
    #[inline]
    pub fn position(self) -> u8 {
        self.0 % NODES_PER_CIRCUIT as u8
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < NODE_COUNT);
        Self(idx as u8)
    }

    /// All node ids in circuit-major order
    pub fn all() -> impl Iterator<Item = NodeId> {
        (0..NODE_COUNT).map(NodeId::from_index)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}n{}", self.circuit(), self.position())
    }
}
