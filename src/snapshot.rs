//! Read-only view of a game for renderers

use serde::Serialize;

use crate::board::{Board, Edge, Node, NodeId, PerPlayer, Player, Point};
use crate::engine::{Phase, RuleEngine};
use crate::rules::{Scores, Verdict};

/// Distance of an edge's weight label from the edge midpoint
pub const LABEL_OFFSET: f32 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    pub id: NodeId,
    pub circuit: u8,
    pub position: u8,
    pub pos: Point,
    pub occupant: Option<Player>,
}

impl From<&Node> for NodeView {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id,
            circuit: node.id.circuit(),
            position: node.id.position(),
            pos: node.pos,
            occupant: node.occupant,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeView {
    pub start: NodeId,
    pub end: NodeId,
    pub from: Point,
    pub to: Point,
    pub weight: u32,
    pub controlled_by: Option<Player>,
    /// Where the weight label goes: midpoint pushed off the edge
    pub label: Point,
}

impl EdgeView {
    fn new(board: &Board, edge: &Edge) -> Self {
        let from = board.node(edge.start).pos;
        let to = board.node(edge.end).pos;
        Self {
            start: edge.start,
            end: edge.end,
            from,
            to,
            weight: edge.weight,
            controlled_by: edge.controlled_by,
            label: label_anchor(from, to, LABEL_OFFSET),
        }
    }
}

/// Midpoint of `from`-`to` shifted `offset` along the edge's left normal
pub fn label_anchor(from: Point, to: Point, offset: f32) -> Point {
    let mid = Point::new((from.x + to.x) / 2.0, (from.y + to.y) / 2.0);
    let angle = (to.y - from.y).atan2(to.x - from.x) + std::f32::consts::FRAC_PI_2;
    Point::new(mid.x + angle.cos() * offset, mid.y + angle.sin() * offset)
}

/// Which controls the UI should enable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Controls {
    pub start: bool,
    pub pause: bool,
    pub reset: bool,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
    pub board_size: f32,
    pub node_radius: f32,
    pub current: Player,
    pub phase: Phase,
    pub scores: Scores,
    pub placed: PerPlayer<u8>,
    pub titans_per_player: u8,
    pub selected: Option<NodeId>,
    /// Circuit open for placement; `None` outside the placement phase
    pub unlocked_circuit: Option<u8>,
    pub started: bool,
    pub paused: bool,
    /// Remaining time per player as `MM:SS`
    pub clocks: PerPlayer<String>,
    pub verdict: Option<Verdict>,
    pub controls: Controls,
}

impl GameSnapshot {
    pub(crate) fn capture(
        engine: &RuleEngine,
        node_radius: f32,
        paused: bool,
        clocks: PerPlayer<String>,
    ) -> Self {
        let board = engine.board();
        let state = engine.state();
        let over = state.is_over();

        Self {
            nodes: board.nodes().iter().map(NodeView::from).collect(),
            edges: board.edges().iter().map(|e| EdgeView::new(board, e)).collect(),
            board_size: board.size(),
            node_radius,
            current: state.current,
            phase: state.phase,
            scores: state.scores,
            placed: state.placed,
            titans_per_player: engine.titans_per_player(),
            selected: state.selected,
            unlocked_circuit: (state.phase == Phase::Placement && !over).then(|| engine.unlocked_circuit()),
            started: state.started,
            paused,
            clocks,
            verdict: state.verdict,
            controls: Controls {
                start: !state.started,
                pause: state.started && !over,
                reset: state.started,
            },
        }
    }

    pub fn node(&self, id: NodeId) -> &NodeView {
        &self.nodes[id.to_index()]
    }

    /// Empty nodes the current player may place on
    pub fn highlighted(&self) -> impl Iterator<Item = &NodeView> {
        let circuit = self.unlocked_circuit;
        self.nodes
            .iter()
            .filter(move |n| Some(n.circuit) == circuit && n.occupant.is_none())
    }
}
