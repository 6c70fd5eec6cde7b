use crate::board::Board;
use std::fmt::Formatter;
use std::str::{Chars, FromStr};

/// A cell on the board as (column, row), row 0 being black's back rank.
///
/// Relocations never clamp, so a location may also lie off the board.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Location {
    x: i32,
    y: i32,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Move {
    pub from: Location,
    pub to: Location,
}

impl Location {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Like [`Location::new`] but only for cells on the board.
    pub fn from_xy(x: i32, y: i32) -> Option<Self> {
        let location = Self::new(x, y);
        location.on_board().then_some(location)
    }

    pub fn from_chars(chars: &mut Chars<'_>) -> Option<Self> {
        let file = chars.next().filter(char::is_ascii_alphabetic)?.to_ascii_lowercase() as u8;
        let rank = chars.next()?.to_digit(10)? as i32;
        Self::from_xy(file.wrapping_sub(b'a') as i32, Board::CELLS - rank)
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn on_board(&self) -> bool {
        (0..Board::CELLS).contains(&self.x) && (0..Board::CELLS).contains(&self.y)
    }

    /// Iterates every cell of the board row by row.
    pub fn iter_board() -> impl Iterator<Item = Self> {
        (0..Board::CELLS).flat_map(|y| (0..Board::CELLS).map(move |x| Self::new(x, y)))
    }
}

impl FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match Self::from_chars(&mut chars) {
            Some(location) if chars.next().is_none() => Ok(location),
            _ => Err(format!("'{s}' is not a board cell")),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.on_board() {
            write!(f, "{}{}", (b'a' + self.x as u8) as char, Board::CELLS - self.y)
        } else {
            write!(f, "({},{})", self.x, self.y)
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebraic_names_follow_rows() {
        assert_eq!(Location::new(0, 7).to_string(), "a1");
        assert_eq!(Location::new(4, 0).to_string(), "e8");
        assert_eq!("e2".parse::<Location>(), Ok(Location::new(4, 6)));
        assert_eq!("H8".parse::<Location>(), Ok(Location::new(7, 0)));
    }

    #[test]
    fn rejects_cells_off_the_board() {
        assert!("i1".parse::<Location>().is_err());
        assert!("a9".parse::<Location>().is_err());
        assert!("a0".parse::<Location>().is_err());
        assert!("e2e4".parse::<Location>().is_err());
        assert!("š1".parse::<Location>().is_err());
        assert!("ą2".parse::<Location>().is_err());
        assert_eq!(Location::from_xy(8, 0), None);
        assert_eq!(Location::from_xy(-1, 3), None);
    }

    #[test]
    fn off_board_locations_display_as_pairs() {
        assert_eq!(Location::new(9, -2).to_string(), "(9,-2)");
        let mv = Move { from: Location::new(0, 6), to: Location::new(0, 4) };
        assert_eq!(mv.to_string(), "a2a4");
    }

    #[test]
    fn iterates_all_cells() {
        let cells: Vec<_> = Location::iter_board().collect();
        assert_eq!(cells.len(), 64);
        assert_eq!(cells[0], Location::new(0, 0));
        assert_eq!(cells[9], Location::new(1, 1));
    }
}
