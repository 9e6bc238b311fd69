//! Capture by surrounding
//!
//! After a titan moves to `target`, every opponent titan adjacent to
//! `target` whose neighbors are all either the mover's titans or `target`
//! itself is removed. Candidates are judged against the board as it stood
//! before any removal, so captures never cascade within one move.
//!
//! Only movement triggers captures; placements never do.

use crate::board::{Board, NodeId, Player};

/// Find the opponent titans that a move to `target` by `mover` captures.
///
/// Uses literal "every neighbor" semantics with no minimum count.
pub fn captured_by_move(board: &Board, target: NodeId, mover: Player) -> Vec<NodeId> {
    let opponent = mover.opponent();

    board
        .neighbors(target)
        .iter()
        .copied()
        .filter(|&adj| board.get(adj) == Some(opponent))
        .filter(|&adj| {
            board
                .neighbors(adj)
                .iter()
                .all(|&n| n == target || board.get(n) == Some(mover))
        })
        .collect()
}

/// Remove every titan captured by a move to `target` and return them.
pub fn execute_captures(board: &mut Board, target: NodeId, mover: Player) -> Vec<NodeId> {
    let captured = captured_by_move(board, target, mover);
    for &node in &captured {
        board.remove(node);
    }
    captured
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_outer_titan() {
        let mut board = Board::new(600.0);
        // Blue at c0n0 has neighbors c0n1, c0n5, c1n0
        board.place(NodeId::new(0, 0), Player::Blue);
        board.place(NodeId::new(0, 1), Player::Red);
        board.place(NodeId::new(0, 5), Player::Red);
        board.place(NodeId::new(1, 0), Player::Red); // just moved here

        let captured = execute_captures(&mut board, NodeId::new(1, 0), Player::Red);
        assert_eq!(captured, vec![NodeId::new(0, 0)]);
        assert!(board.is_empty(NodeId::new(0, 0)));
    }

    #[test]
    fn test_no_capture_with_empty_liberty() {
        let mut board = Board::new(600.0);
        board.place(NodeId::new(0, 0), Player::Blue);
        board.place(NodeId::new(0, 1), Player::Red);
        board.place(NodeId::new(1, 0), Player::Red);
        // c0n5 stays empty

        let captured = execute_captures(&mut board, NodeId::new(1, 0), Player::Red);
        assert!(captured.is_empty());
        assert_eq!(board.get(NodeId::new(0, 0)), Some(Player::Blue));
    }

    #[test]
    fn test_no_capture_with_friendly_neighbor() {
        let mut board = Board::new(600.0);
        board.place(NodeId::new(0, 0), Player::Blue);
        board.place(NodeId::new(0, 5), Player::Blue);
        board.place(NodeId::new(0, 1), Player::Red);
        board.place(NodeId::new(1, 0), Player::Red);

        assert!(captured_by_move(&board, NodeId::new(1, 0), Player::Red).is_empty());
    }

    #[test]
    fn test_non_adjacent_opponent_not_considered() {
        let mut board = Board::new(600.0);
        // Blue c0n3 is fully surrounded but not adjacent to the target
        board.place(NodeId::new(0, 3), Player::Blue);
        board.place(NodeId::new(0, 2), Player::Red);
        board.place(NodeId::new(0, 4), Player::Red);
        board.place(NodeId::new(1, 3), Player::Red);
        board.place(NodeId::new(2, 0), Player::Red);

        assert!(captured_by_move(&board, NodeId::new(2, 0), Player::Red).is_empty());
    }

    #[test]
    fn test_multiple_captures_in_one_move() {
        let mut board = Board::new(600.0);
        // Red moves into c0n1; Blue at c0n0 and c0n2 both lose their last liberty
        board.place(NodeId::new(0, 0), Player::Blue);
        board.place(NodeId::new(0, 2), Player::Blue);
        board.place(NodeId::new(0, 5), Player::Red);
        board.place(NodeId::new(1, 0), Player::Red);
        board.place(NodeId::new(0, 3), Player::Red);
        board.place(NodeId::new(1, 2), Player::Red);
        board.place(NodeId::new(0, 1), Player::Red);

        let mut captured = execute_captures(&mut board, NodeId::new(0, 1), Player::Red);
        captured.sort_by_key(|n| n.to_index());
        assert_eq!(captured, vec![NodeId::new(0, 0), NodeId::new(0, 2)]);
    }

    #[test]
    fn test_adjacent_opponents_shield_each_other() {
        let mut board = Board::new(600.0);
        // Blue pair c0n0/c0n1; each has the other as a neighbor
        board.place(NodeId::new(0, 0), Player::Blue);
        board.place(NodeId::new(0, 1), Player::Blue);
        board.place(NodeId::new(0, 5), Player::Red);
        board.place(NodeId::new(1, 0), Player::Red);
        board.place(NodeId::new(0, 2), Player::Red);
        board.place(NodeId::new(1, 1), Player::Red);

        assert!(captured_by_move(&board, NodeId::new(1, 1), Player::Red).is_empty());
        assert!(captured_by_move(&board, NodeId::new(1, 0), Player::Red).is_empty());
    }

    #[test]
    fn test_inner_titan_capture() {
        let mut board = Board::new(600.0);
        // Blue c2n3: neighbors c2n2, c2n4, c1n3
        board.place(NodeId::new(2, 3), Player::Blue);
        board.place(NodeId::new(2, 2), Player::Red);
        board.place(NodeId::new(2, 4), Player::Red);
        board.place(NodeId::new(1, 3), Player::Red);

        let captured = execute_captures(&mut board, NodeId::new(2, 4), Player::Red);
        assert_eq!(captured, vec![NodeId::new(2, 3)]);
    }
}
