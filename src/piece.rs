use crate::assets::SpriteSheet;
use crate::board::Board;
use crate::location::Location;
use iced::widget::image::Handle;
use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

/// White moves first and starts on rows 6 and 7.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Color {
    White,
    Black,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [Self::Pawn, Self::Rook, Self::Knight, Self::Bishop, Self::Queen, Self::King];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn fen_char(self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Rook => 'r',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Queen => 'q',
            Self::King => 'k',
        }
    }
}

impl Color {
    pub const ALL: [Color; 2] = [Self::White, Self::Black];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// -1 for white, +1 for black: the vertical direction a selected piece is nudged in.
    pub fn lift(self) -> i32 {
        2 * self.index() as i32 - 1
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::White => write!(f, "white"),
            Self::Black => write!(f, "black"),
        }
    }
}

/// A positioned image on the window, owning its decoded pixels.
#[derive(Clone, Debug)]
pub struct Sprite {
    pub handle: Handle,
    pub x: i32,
    pub y: i32,
}

impl Sprite {
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

#[derive(Clone, Debug)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    location: Location,
    sprite: Sprite,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, location: Location, sheet: &SpriteSheet) -> Self {
        Self {
            kind,
            color,
            location,
            sprite: Self::place(kind, color, location, sheet),
        }
    }

    fn place(kind: PieceKind, color: Color, location: Location, sheet: &SpriteSheet) -> Sprite {
        let (x, y) = sheet.board().origin(location);
        Sprite {
            handle: sheet.handle(color, kind).clone(),
            x,
            y,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    /// Replaces the sprite with a fresh one from `sheet`, at the cell's top-left corner.
    pub fn draw(&mut self, sheet: &SpriteSheet) {
        self.sprite = Self::place(self.kind, self.color, self.location, sheet);
    }

    pub fn activate(&mut self, board: &Board) {
        self.nudge(board, 1);
    }

    pub fn deactivate(&mut self, board: &Board) {
        self.nudge(board, -1);
    }

    fn nudge(&mut self, board: &Board, direction: i32) {
        self.sprite.y += direction * self.color.lift() * (board.cell_size() as i32 / 5);
    }

    /// Moves the piece to any location, on the board or not. The owning side re-keys it.
    pub fn set_position(&mut self, location: Location, board: &Board) {
        (self.sprite.x, self.sprite.y) = board.origin(location);
        self.location = location;
    }

    pub fn fen_char(&self) -> char {
        let c = self.kind.fen_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}
