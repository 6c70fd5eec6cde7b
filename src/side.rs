use crate::assets::SpriteSheet;
use crate::board::Board;
use crate::location::Location;
use crate::piece::{Color, Piece, PieceKind};
use std::collections::HashMap;

/// One player's pieces, keyed by the cell they stand on.
///
/// The two sides never look at each other's cells, so a piece can be moved onto an
/// enemy piece and both stay where they are.
pub struct Side {
    color: Color,
    pieces: HashMap<Location, Piece>,
}

impl Side {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            pieces: HashMap::new(),
        }
    }

    /// A side with its opening layout already in place.
    #[cfg(test)]
    pub fn opening(color: Color, sheet: &SpriteSheet) -> Self {
        let mut side = Self::new(color);
        side.setup_pieces(sheet);
        side
    }

    pub fn setup_pieces(&mut self, sheet: &SpriteSheet) {
        let c = self.color.index() as i32;

        let pawns = 1 + 5 * (1 - c);
        for x in 0..Board::CELLS {
            self.put(PieceKind::Pawn, Location::new(x, pawns), sheet);
        }

        let back = 7 * (1 - c);
        for (i, kind) in [PieceKind::Rook, PieceKind::Knight, PieceKind::Bishop].into_iter().enumerate() {
            let i = i as i32;
            self.put(kind, Location::new(i, back), sheet);
            self.put(kind, Location::new(7 - i, back), sheet);
        }
        self.put(PieceKind::Queen, Location::new(3, back), sheet);
        self.put(PieceKind::King, Location::new(4, back), sheet);
    }

    fn put(&mut self, kind: PieceKind, location: Location, sheet: &SpriteSheet) {
        self.pieces.insert(location, Piece::new(kind, self.color, location, sheet));
    }

    /// Takes every piece, and with it its sprite, off the board.
    pub fn clear_pieces(&mut self) {
        self.pieces.clear();
    }

    /// Moves the piece at `from` to `to` and re-keys it. A piece of this side already at `to` is replaced.
    ///
    /// Returns false if there is no piece at `from`.
    pub fn relocate(&mut self, from: Location, to: Location, board: &Board) -> bool {
        if from == to {
            return self.pieces.contains_key(&from);
        }
        let Some(mut piece) = self.pieces.remove(&from) else {
            return false;
        };
        piece.set_position(to, board);
        self.pieces.insert(to, piece);
        true
    }

    /// Redraws every sprite from `sheet`, after the cell size changed.
    pub fn redraw(&mut self, sheet: &SpriteSheet) {
        for piece in self.pieces.values_mut() {
            piece.draw(sheet);
        }
    }

    pub fn get(&self, location: Location) -> Option<&Piece> {
        self.pieces.get(&location)
    }

    pub fn get_mut(&mut self, location: Location) -> Option<&mut Piece> {
        self.pieces.get_mut(&location)
    }

    pub fn contains(&self, location: Location) -> bool {
        self.pieces.contains_key(&location)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Assets;

    fn sheet() -> SpriteSheet {
        Assets::blank().sheet(Board::new(640))
    }

    fn count(side: &Side, kind: PieceKind) -> usize {
        side.iter().filter(|piece| piece.kind() == kind).count()
    }

    #[test]
    fn opening_has_standard_material() {
        let sheet = sheet();
        for color in Color::ALL {
            let side = Side::opening(color, &sheet);
            assert_eq!(side.len(), 16);
            assert_eq!(count(&side, PieceKind::Pawn), 8);
            assert_eq!(count(&side, PieceKind::Rook), 2);
            assert_eq!(count(&side, PieceKind::Knight), 2);
            assert_eq!(count(&side, PieceKind::Bishop), 2);
            assert_eq!(count(&side, PieceKind::Queen), 1);
            assert_eq!(count(&side, PieceKind::King), 1);
            assert!(side.iter().all(|piece| side.get(piece.location()).is_some_and(|p| p.kind() == piece.kind())));
            assert!(side.iter().all(|piece| piece.color() == color));
        }
    }

    #[test]
    fn rows_depend_on_color() {
        let sheet = sheet();
        let white = Side::opening(Color::White, &sheet);
        let black = Side::opening(Color::Black, &sheet);

        for x in 0..8 {
            assert_eq!(white.get(Location::new(x, 6)).map(Piece::kind), Some(PieceKind::Pawn));
            assert_eq!(black.get(Location::new(x, 1)).map(Piece::kind), Some(PieceKind::Pawn));
        }

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (x, kind) in back.into_iter().enumerate() {
            assert_eq!(white.get(Location::new(x as i32, 7)).map(Piece::kind), Some(kind));
            assert_eq!(black.get(Location::new(x as i32, 0)).map(Piece::kind), Some(kind));
        }
    }

    #[test]
    fn relocate_rekeys() {
        let sheet = sheet();
        let mut side = Side::opening(Color::White, &sheet);
        let (from, to) = (Location::new(4, 6), Location::new(4, 4));

        assert!(side.relocate(from, to, sheet.board()));
        assert!(!side.contains(from));
        let piece = side.get(to).unwrap();
        assert_eq!(piece.location(), to);
        assert_eq!(piece.sprite().position(), (320, 320));
        assert_eq!(side.len(), 16);
    }

    #[test]
    fn relocate_accepts_any_destination() {
        let sheet = sheet();
        let mut side = Side::opening(Color::Black, &sheet);
        let to = Location::new(-3, 12);
        assert!(side.relocate(Location::new(0, 0), to, sheet.board()));
        assert_eq!(side.get(to).map(Piece::location), Some(to));
    }

    #[test]
    fn relocate_in_place_keeps_piece() {
        let sheet = sheet();
        let mut side = Side::opening(Color::White, &sheet);
        let at = Location::new(2, 7);
        assert!(side.relocate(at, at, sheet.board()));
        assert!(side.contains(at));
        assert!(!side.relocate(Location::new(2, 3), at, sheet.board()));
    }

    #[test]
    fn clear_removes_everything() {
        let sheet = sheet();
        let mut side = Side::opening(Color::White, &sheet);
        side.clear_pieces();
        assert!(side.is_empty());
    }
}
