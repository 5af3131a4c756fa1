use super::{Move, Player, Position};
use std::fmt;

/// Knight-jump offsets, fixed order. Move enumeration order is part of the
/// contract: tie-breaks downstream depend on it being stable.
const JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const DEFAULT_WIDTH: u8 = 7;
pub const DEFAULT_HEIGHT: u8 = 7;

/// Isolation board: a W x H grid where every visited cell is blocked for the
/// rest of the game. Each player's opening move may claim any blank cell;
/// afterwards movement is by knight jump onto blank cells. A player who is
/// to move with no legal moves has lost.
///
/// Cells are packed into a u64 bitmask, so boards are capped at 64 cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    blocked: u64,
    locations: [Option<Move>; 2],
    active: Player,
}

impl Board {
    pub fn new(width: u8, height: u8) -> Self {
        assert!(
            width >= 2 && height >= 2 && (width as u16) * (height as u16) <= 64,
            "board must be at least 2x2 and at most 64 cells"
        );
        Board {
            width,
            height,
            blocked: 0,
            locations: [None, None],
            active: Player::One,
        }
    }

    /// Board with both players already placed, for tests and scenarios.
    pub fn with_positions(width: u8, height: u8, p1: Move, p2: Move) -> Self {
        let mut board = Board::new(width, height);
        board = board.apply(p1);
        board = board.apply(p2);
        board
    }

    fn index(&self, row: u8, col: u8) -> u8 {
        row * self.width + col
    }

    fn is_blank(&self, row: u8, col: u8) -> bool {
        self.blocked & (1u64 << self.index(row, col)) == 0
    }

    fn blank_cells(&self) -> Vec<Move> {
        let mut cells = Vec::with_capacity((self.width as usize) * (self.height as usize));
        for row in 0..self.height {
            for col in 0..self.width {
                if self.is_blank(row, col) {
                    cells.push(Move::new(row, col));
                }
            }
        }
        cells
    }

    fn jumps_from(&self, from: Move) -> Vec<Move> {
        let mut moves = Vec::with_capacity(JUMPS.len());
        for (dr, dc) in JUMPS {
            let row = from.row as i8 + dr;
            let col = from.col as i8 + dc;
            if row >= 0
                && col >= 0
                && (row as u8) < self.height
                && (col as u8) < self.width
                && self.is_blank(row as u8, col as u8)
            {
                moves.push(Move::new(row as u8, col as u8));
            }
        }
        moves
    }

    fn slot(player: Player) -> usize {
        match player {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Mark extra cells as blocked, for setting up mid-game scenarios.
    pub fn blocking(mut self, cells: &[Move]) -> Self {
        for cell in cells {
            self.blocked |= 1u64 << self.index(cell.row, cell.col);
        }
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Position for Board {
    fn legal_moves(&self, player: Player) -> Vec<Move> {
        match self.locations[Self::slot(player)] {
            // Opening placement: any blank cell, row-major order.
            None => self.blank_cells(),
            Some(from) => self.jumps_from(from),
        }
    }

    fn apply(&self, mv: Move) -> Self {
        debug_assert!(
            self.legal_moves(self.active).contains(&mv),
            "illegal move {mv} for {}",
            self.active
        );
        let mut next = self.clone();
        next.blocked |= 1u64 << next.index(mv.row, mv.col);
        next.locations[Self::slot(self.active)] = Some(mv);
        next.active = self.active.opponent();
        next
    }

    fn to_move(&self) -> Player {
        self.active
    }

    fn is_loser(&self, player: Player) -> bool {
        self.active == player && self.legal_moves(player).is_empty()
    }

    fn is_winner(&self, player: Player) -> bool {
        let opp = player.opponent();
        self.active == opp && self.legal_moves(opp).is_empty()
    }

    fn location(&self, player: Player) -> Option<Move> {
        self.locations[Self::slot(player)]
    }

    fn width(&self) -> u8 {
        self.width
    }

    fn height(&self) -> u8 {
        self.height
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let here = Move::new(row, col);
                let glyph = if self.locations[0] == Some(here) {
                    " 1 "
                } else if self.locations[1] == Some(here) {
                    " 2 "
                } else if self.is_blank(row, col) {
                    " . "
                } else {
                    " x "
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
