use std::convert::TryInto;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Dir, Pos, DIRECTIONS};

pub const BOARD_SIZE: i8 = 3;

pub const BLOCK: usize = 0;
pub const RED_SHOE: usize = 1;
pub const BLUE_SHOE: usize = 2;
pub const BLACK_SHOE: usize = 3;

/// Positions of the block and the three shoes. Immutable - moves produce new
/// states.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    positions: [Pos; 4],
}

impl PuzzleState {
    /// The starting configuration of the puzzle.
    pub const INITIAL: PuzzleState = PuzzleState {
        positions: [
            Pos { r: 0, c: 0 },
            Pos { r: 2, c: 0 },
            Pos { r: 1, c: 1 },
            Pos { r: 0, c: 2 },
        ],
    };

    /// Positions are block, red shoe, blue shoe, black shoe, in this order.
    pub fn new(positions: &[Pos]) -> Result<PuzzleState, InvalidState> {
        let positions: [Pos; 4] = positions
            .try_into()
            .map_err(|_| InvalidState::PieceCount(positions.len()))?;
        for &pos in positions.iter() {
            if !Self::on_board(pos) {
                return Err(InvalidState::OffBoard(pos));
            }
        }
        if positions[BLUE_SHOE] == positions[BLACK_SHOE] {
            return Err(InvalidState::ShoeOverlap(positions[BLUE_SHOE]));
        }
        Ok(PuzzleState { positions })
    }

    pub fn positions(&self) -> &[Pos; 4] {
        &self.positions
    }

    /// The puzzle is solved when the red shoe is inside the blue shoe.
    pub fn is_goal(&self) -> bool {
        self.coincide(RED_SHOE, BLUE_SHOE)
    }

    pub fn can_move(&self, dir: Dir) -> bool {
        match dir {
            Dir::Up => self.can_move_up(),
            Dir::Right => self.can_move_right(),
            Dir::Down => self.can_move_down(),
            Dir::Left => self.can_move_left(),
        }
    }

    fn can_move_up(&self) -> bool {
        let block = self.positions[BLOCK];
        block.r > 0 && self.is_empty(block + Dir::Up)
    }

    fn can_move_right(&self) -> bool {
        let right = self.positions[BLOCK] + Dir::Right;
        if self.positions[BLACK_SHOE] == right {
            // the block may climb onto the black shoe unless it carries blue
            return !self.coincide(BLOCK, BLUE_SHOE);
        }
        Self::on_board(right) && self.is_empty(right)
    }

    fn can_move_down(&self) -> bool {
        let down = self.positions[BLOCK] + Dir::Down;
        if down.r >= BOARD_SIZE || self.positions[BLACK_SHOE] == down {
            return false;
        }
        if self.positions[RED_SHOE] == down
            && (self.coincide(BLOCK, BLACK_SHOE) || self.coincide(BLOCK, BLUE_SHOE))
        {
            return false;
        }
        !(self.positions[BLUE_SHOE] == down && self.coincide(BLOCK, BLACK_SHOE))
    }

    fn can_move_left(&self) -> bool {
        let block = self.positions[BLOCK];
        block.c > 0 && self.is_empty(block + Dir::Left)
    }

    /// The state after moving the block (and whatever travels with it), or
    /// `None` when the move is not legal. Not an error - callers just skip
    /// the direction.
    pub fn moved(&self, dir: Dir) -> Option<PuzzleState> {
        if !self.can_move(dir) {
            return None;
        }

        let companions = self.companions(dir);
        let mut positions = self.positions;
        for (i, pos) in positions.iter_mut().enumerate() {
            if companions[i] {
                *pos = *pos + dir;
            }
        }
        PuzzleState::new(&positions).ok()
    }

    /// Which pieces travel together with the block. The rules are asymmetric
    /// by direction: the black shoe is dragged right and down but never left,
    /// and rides upward only while stacked under the block.
    fn companions(&self, dir: Dir) -> [bool; 4] {
        let mut selected = [false; 4];
        selected[BLOCK] = true;
        match dir {
            Dir::Up => {
                if self.coincide(BLOCK, BLACK_SHOE) && self.coincide(BLOCK, RED_SHOE) {
                    selected[BLACK_SHOE] = true;
                    selected[RED_SHOE] = true;
                } else if self.coincide(BLOCK, BLACK_SHOE) {
                    selected[BLACK_SHOE] = true;
                }
            }
            Dir::Right | Dir::Down => {
                for &shoe in &[RED_SHOE, BLUE_SHOE, BLACK_SHOE] {
                    if self.coincide(BLOCK, shoe) {
                        selected[shoe] = true;
                    }
                }
            }
            Dir::Left => {
                for &shoe in &[RED_SHOE, BLUE_SHOE] {
                    if self.coincide(BLOCK, shoe) {
                        selected[shoe] = true;
                    }
                }
            }
        }
        selected
    }

    /// Legal directions in the fixed order UP, RIGHT, DOWN, LEFT so the
    /// search expands states deterministically.
    pub fn legal_moves(&self) -> Vec<Dir> {
        DIRECTIONS
            .iter()
            .copied()
            .filter(|&dir| self.can_move(dir))
            .collect()
    }

    fn on_board(pos: Pos) -> bool {
        pos.r >= 0 && pos.r < BOARD_SIZE && pos.c >= 0 && pos.c < BOARD_SIZE
    }

    fn is_empty(&self, pos: Pos) -> bool {
        self.positions.iter().all(|&p| p != pos)
    }

    fn coincide(&self, a: usize, b: usize) -> bool {
        self.positions[a] == self.positions[b]
    }
}

impl Display for PuzzleState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, pos) in self.positions.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", pos)?;
        }
        write!(f, "]")
    }
}

impl Debug for PuzzleState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidState {
    PieceCount(usize),
    OffBoard(Pos),
    ShoeOverlap(Pos),
}

impl Display for InvalidState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            InvalidState::PieceCount(count) => {
                write!(f, "Expected 4 piece positions, got {}", count)
            }
            InvalidState::OffBoard(pos) => write!(f, "Position {} is outside the board", pos),
            InvalidState::ShoeOverlap(pos) => {
                write!(f, "Blue and black shoe both at {}", pos)
            }
        }
    }
}

impl Error for InvalidState {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dir::*;

    fn p(r: i8, c: i8) -> Pos {
        Pos::new(r, c)
    }

    fn state(positions: &[Pos]) -> PuzzleState {
        PuzzleState::new(positions).unwrap()
    }

    #[test]
    fn construction_needs_exactly_four_pieces() {
        assert_eq!(
            PuzzleState::new(&[p(0, 0), p(1, 1), p(2, 2)]),
            Err(InvalidState::PieceCount(3))
        );
        assert_eq!(
            PuzzleState::new(&[p(0, 0), p(1, 1), p(2, 2), p(0, 1), p(0, 2)]),
            Err(InvalidState::PieceCount(5))
        );
    }

    #[test]
    fn construction_needs_pieces_on_board() {
        assert_eq!(
            PuzzleState::new(&[p(0, 0), p(3, 0), p(1, 1), p(0, 2)]),
            Err(InvalidState::OffBoard(p(3, 0)))
        );
        assert_eq!(
            PuzzleState::new(&[p(0, -1), p(2, 0), p(1, 1), p(0, 2)]),
            Err(InvalidState::OffBoard(p(0, -1)))
        );
    }

    #[test]
    fn construction_needs_distinct_blue_and_black() {
        assert_eq!(
            PuzzleState::new(&[p(0, 0), p(2, 0), p(1, 1), p(1, 1)]),
            Err(InvalidState::ShoeOverlap(p(1, 1)))
        );
        // every other pair may overlap
        assert!(PuzzleState::new(&[p(1, 1), p(1, 1), p(1, 1), p(1, 2)]).is_ok());
    }

    #[test]
    fn initial_state() {
        let initial = state(&[p(0, 0), p(2, 0), p(1, 1), p(0, 2)]);
        assert_eq!(initial, PuzzleState::INITIAL);
        assert!(!initial.is_goal());
        assert_eq!(initial.to_string(), "[(0,0),(2,0),(1,1),(0,2)]");
    }

    #[test]
    fn goal_when_red_and_blue_meet() {
        assert!(state(&[p(1, 1), p(1, 1), p(1, 1), p(1, 2)]).is_goal());
        assert!(!state(&[p(1, 1), p(1, 2), p(1, 1), p(0, 2)]).is_goal());
    }

    #[test]
    fn moves_from_initial_state() {
        let initial = PuzzleState::INITIAL;
        assert!(!initial.can_move(Up));
        assert!(initial.can_move(Right));
        assert!(initial.can_move(Down));
        assert!(!initial.can_move(Left));
        assert_eq!(initial.legal_moves(), vec![Right, Down]);
    }

    #[test]
    fn dead_end_has_no_legal_moves() {
        let dead_end = state(&[p(0, 0), p(1, 0), p(0, 1), p(0, 0)]);
        assert_eq!(dead_end.legal_moves(), vec![]);
    }

    #[test]
    fn legal_moves_keep_direction_order() {
        let free = state(&[p(1, 1), p(2, 2), p(0, 0), p(2, 0)]);
        assert_eq!(free.legal_moves(), vec![Up, Right, Down, Left]);
    }

    #[test]
    fn up_needs_an_empty_cell() {
        let blocked = state(&[p(1, 1), p(0, 1), p(0, 0), p(2, 2)]);
        assert!(!blocked.can_move(Up));
        assert_eq!(blocked.moved(Up), None);
    }

    #[test]
    fn up_drags_black_shoe_and_red_on_top_of_it() {
        // block, black and red stacked - all three ride up
        let stacked = state(&[p(1, 1), p(1, 1), p(0, 0), p(1, 1)]);
        assert_eq!(
            stacked.moved(Up),
            Some(state(&[p(0, 1), p(0, 1), p(0, 0), p(0, 1)]))
        );

        // only block and black stacked - red stays behind
        let pair = state(&[p(1, 1), p(2, 2), p(0, 0), p(1, 1)]);
        assert_eq!(
            pair.moved(Up),
            Some(state(&[p(0, 1), p(2, 2), p(0, 0), p(0, 1)]))
        );

        // blue never rides up
        let with_blue = state(&[p(1, 1), p(2, 2), p(1, 1), p(2, 0)]);
        assert_eq!(
            with_blue.moved(Up),
            Some(state(&[p(0, 1), p(2, 2), p(1, 1), p(2, 0)]))
        );
    }

    #[test]
    fn right_climbs_onto_black_shoe() {
        let next_to_black = state(&[p(1, 1), p(0, 0), p(2, 0), p(1, 2)]);
        assert!(next_to_black.can_move(Right));
        assert_eq!(
            next_to_black.moved(Right),
            Some(state(&[p(1, 2), p(0, 0), p(2, 0), p(1, 2)]))
        );

        // not while carrying the blue shoe
        let carrying_blue = state(&[p(1, 1), p(0, 0), p(1, 1), p(1, 2)]);
        assert!(!carrying_blue.can_move(Right));
        assert_eq!(carrying_blue.moved(Right), None);
    }

    #[test]
    fn right_blocked_by_other_shoes_and_the_edge() {
        let next_to_blue = state(&[p(1, 1), p(0, 0), p(1, 2), p(2, 2)]);
        assert!(!next_to_blue.can_move(Right));

        let at_edge = state(&[p(0, 2), p(2, 0), p(1, 1), p(2, 2)]);
        assert!(!at_edge.can_move(Right));
        assert_eq!(at_edge.moved(Right), None);
    }

    #[test]
    fn right_drags_every_colocated_shoe() {
        let stacked = state(&[p(1, 0), p(1, 0), p(2, 2), p(1, 0)]);
        assert_eq!(
            stacked.moved(Right),
            Some(state(&[p(1, 1), p(1, 1), p(2, 2), p(1, 1)]))
        );
    }

    #[test]
    fn down_rules() {
        // black shoe below always blocks
        let black_below = state(&[p(0, 0), p(2, 2), p(1, 1), p(1, 0)]);
        assert!(!black_below.can_move(Down));

        // red below is fine for a lone block
        let red_below = state(&[p(0, 0), p(1, 0), p(2, 2), p(0, 2)]);
        assert_eq!(
            red_below.moved(Down),
            Some(state(&[p(1, 0), p(1, 0), p(2, 2), p(0, 2)]))
        );

        // but not when the block carries the black shoe
        let red_below_with_black = state(&[p(0, 0), p(1, 0), p(2, 2), p(0, 0)]);
        assert!(!red_below_with_black.can_move(Down));

        // or the blue shoe
        let red_below_with_blue = state(&[p(0, 0), p(1, 0), p(0, 0), p(0, 2)]);
        assert!(!red_below_with_blue.can_move(Down));

        // blue below blocks a block carrying the black shoe
        let blue_below_with_black = state(&[p(0, 0), p(2, 2), p(1, 0), p(0, 0)]);
        assert!(!blue_below_with_black.can_move(Down));

        // bottom row
        let at_edge = state(&[p(2, 0), p(0, 0), p(1, 1), p(0, 2)]);
        assert!(!at_edge.can_move(Down));
    }

    #[test]
    fn left_leaves_black_shoe_behind() {
        let with_black = state(&[p(1, 1), p(2, 2), p(0, 0), p(1, 1)]);
        assert_eq!(
            with_black.moved(Left),
            Some(state(&[p(1, 0), p(2, 2), p(0, 0), p(1, 1)]))
        );

        // red and blue do travel left
        let with_blue = state(&[p(1, 1), p(2, 2), p(1, 1), p(0, 2)]);
        assert_eq!(
            with_blue.moved(Left),
            Some(state(&[p(1, 0), p(2, 2), p(1, 0), p(0, 2)]))
        );
    }

    #[test]
    fn moved_agrees_with_can_move_everywhere() {
        let mut cells = Vec::new();
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                cells.push(p(r, c));
            }
        }

        let mut checked = 0;
        for &block in &cells {
            for &red in &cells {
                for &blue in &cells {
                    for &black in &cells {
                        let state = match PuzzleState::new(&[block, red, blue, black]) {
                            Ok(state) => state,
                            Err(_) => continue,
                        };
                        checked += 1;
                        for &dir in &DIRECTIONS {
                            assert_eq!(
                                state.can_move(dir),
                                state.moved(dir).is_some(),
                                "state {} dir {}",
                                state,
                                dir
                            );
                        }
                    }
                }
            }
        }
        assert_eq!(checked, 5832);
    }
}
