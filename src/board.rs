use crate::location::Location;

/// Pixel geometry of the square board drawn in the window.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    size: u32,
    cell_size: u32,
}

/// Fill color of a single cell.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Board {
    pub const CELLS: i32 = 8;

    pub const LIGHT: Rgb = Rgb(255, 228, 196); // bisque
    pub const DARK: Rgb = Rgb(165, 42, 42); // brown

    /// A board with the given edge length, rounded down to a multiple of eight.
    pub fn new(size: u32) -> Self {
        let cell_size = (size / Self::CELLS as u32).max(1);
        Self {
            size: cell_size * Self::CELLS as u32,
            cell_size,
        }
    }

    /// Sized to 80% of the smaller screen dimension.
    pub fn fit_screen(width: u32, height: u32) -> Self {
        Self::new(Self::CELLS as u32 * (width.min(height) / 10))
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// The cell under a pixel. Floors, so points left of or above the board land on negative cells.
    pub fn cell(&self, x: i32, y: i32) -> Location {
        let cell = self.cell_size as i32;
        Location::new(x.div_euclid(cell), y.div_euclid(cell))
    }

    /// Top-left pixel of a cell.
    pub fn origin(&self, location: Location) -> (i32, i32) {
        let cell = self.cell_size as i32;
        (location.x() * cell, location.y() * cell)
    }

    pub fn fill(location: Location) -> Rgb {
        if (location.x() + location.y()) % 2 == 0 { Self::LIGHT } else { Self::DARK }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_eighty_percent_of_smaller_dimension() {
        let board = Board::fit_screen(1920, 1080);
        assert_eq!(board.size(), 864);
        assert_eq!(board.cell_size(), 108);

        let board = Board::fit_screen(1366, 768);
        assert_eq!(board.size(), 608);
        assert_eq!(board.size() % 8, 0);
    }

    #[test]
    fn rounds_edge_down_to_multiple_of_eight() {
        let board = Board::new(500);
        assert_eq!(board.size(), 496);
        assert_eq!(board.cell_size(), 62);
    }

    #[test]
    fn cell_of_cell_origin_is_identity() {
        let board = Board::new(640);
        for location in Location::iter_board() {
            let (x, y) = board.origin(location);
            assert_eq!(board.cell(x, y), location);
            assert_eq!(board.cell(x + 79, y + 79), location);
        }
    }

    #[test]
    fn cell_floors_negative_pixels() {
        let board = Board::new(640);
        assert_eq!(board.cell(-1, 0), Location::new(-1, 0));
        assert_eq!(board.cell(640, 700), Location::new(8, 8));
    }

    #[test]
    fn colors_alternate() {
        assert_eq!(Board::fill(Location::new(0, 0)), Board::LIGHT);
        assert_eq!(Board::fill(Location::new(1, 0)), Board::DARK);
        assert_eq!(Board::fill(Location::new(7, 7)), Board::LIGHT);
    }
}
