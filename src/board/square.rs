//! Board squares.
//!
//! Squares are indexed 0..64 with a1 = 0, b1 = 1, ..., h8 = 63, so
//! `index = rank * 8 + file` with file 0 = a and rank 0 = the first rank.

/// A square on the 8x8 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Creates a square from a file (0..8, a..h) and rank (0..8).
    pub const fn new(file: u8, rank: u8) -> Square {
        debug_assert!(file < 8 && rank < 8);
        Square(rank * 8 + file)
    }

    /// Creates a square from a raw 0..64 index.
    pub const fn from_index(index: usize) -> Square {
        debug_assert!(index < 64);
        Square(index as u8)
    }

    /// Raw index in 0..64.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// File in 0..8 (0 = a-file).
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Rank in 0..8 (0 = first rank).
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Returns the square displaced by `(dfile, drank)`, or `None` if that
    /// falls off the board.
    pub fn offset(self, dfile: i8, drank: i8) -> Option<Square> {
        let file = self.file() as i8 + dfile;
        let rank = self.rank() as i8 + drank;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square::new(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// True if the square lies on the edge of the board.
    pub const fn is_edge(self) -> bool {
        let f = self.file();
        let r = self.rank();
        f == 0 || f == 7 || r == 0 || r == 7
    }

    /// Algebraic name, e.g. `e4`.
    pub fn name(self) -> String {
        let file = (b'a' + self.file()) as char;
        let rank = (b'1' + self.rank()) as char;
        format!("{}{}", file, rank)
    }

    /// Parses an algebraic name such as `e4`.
    pub fn from_name(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }
        Some(Square::new(file as u8 - b'a', rank as u8 - b'1'))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
