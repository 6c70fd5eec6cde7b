use crate::assets::{Assets, SpriteSheet};
use crate::board::Board;
use crate::location::{Location, Move};
use crate::piece::{Color, Piece};
use crate::side::Side;
use log::{debug, info, trace};
use std::fmt::{Display, Formatter};

/// Receives the two inputs the window forwards: a pointer click in pixels and the reset key.
pub trait InputSink {
    fn on_click(&mut self, x: i32, y: i32);
    fn on_reset(&mut self);
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ClickOutcome {
    Ignored,
    Selected(Location),
    Moved(Move),
}

/// Two sides taking turns on one board. Moves are never checked against any rule.
pub struct Game {
    assets: Assets,
    sheet: SpriteSheet,
    sides: [Side; 2],
    active: Color,
    selected: Option<Location>,
}

impl Game {
    pub fn new(assets: Assets, board: Board) -> Self {
        let sheet = assets.sheet(board);
        let mut game = Self {
            assets,
            sheet,
            sides: Color::ALL.map(Side::new),
            active: Color::White,
            selected: None,
        };
        game.new_game();
        game
    }

    /// Clears both sides and starts again from the opening layout with white to play.
    pub fn new_game(&mut self) {
        for side in &mut self.sides {
            side.clear_pieces();
            side.setup_pieces(&self.sheet);
        }
        self.active = Color::White;
        self.selected = None;
        info!("new game started");
    }

    pub fn click(&mut self, x: i32, y: i32) -> ClickOutcome {
        let location = self.board().cell(x, y);
        trace!("click at ({x}, {y}) on {location}");

        let board = *self.sheet.board();
        let active = self.active;
        let side = &mut self.sides[active.index()];

        if side.contains(location) {
            if let Some(previous) = self.selected
                && let Some(piece) = side.get_mut(previous)
            {
                piece.deactivate(&board);
            }
            if let Some(piece) = side.get_mut(location) {
                piece.activate(&board);
            }
            self.selected = Some(location);
            debug!("{active} selected {location}");
            return ClickOutcome::Selected(location);
        }

        let Some(from) = self.selected.take() else {
            trace!("ignored click on {location}, no {active} piece there or selected");
            return ClickOutcome::Ignored;
        };

        side.relocate(from, location, &board);
        self.active = active.opponent();

        let mv = Move { from, to: location };
        debug!("{active} moved {mv}, {} to play", self.active);
        trace!("\n{self}");
        ClickOutcome::Moved(mv)
    }

    /// Rescales every sprite to a new board geometry. Positions and selection are kept.
    pub fn resize(&mut self, board: Board) {
        if board == *self.board() {
            return;
        }
        self.sheet = self.assets.sheet(board);
        for side in &mut self.sides {
            side.redraw(&self.sheet);
        }
        if let Some(selected) = self.selected
            && let Some(piece) = self.sides[self.active.index()].get_mut(selected)
        {
            piece.activate(&board);
        }
        info!("board resized to {} pixels", board.size());
    }

    pub fn board(&self) -> &Board {
        self.sheet.board()
    }

    pub fn side(&self, color: Color) -> &Side {
        &self.sides[color.index()]
    }

    pub fn active(&self) -> Color {
        self.active
    }

    pub fn selected(&self) -> Option<Location> {
        self.selected
    }

    /// Every piece in drawing order: white first, so black sprites cover white ones.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.sides.iter().flat_map(Side::iter)
    }

    /// Pieces of either side standing outside the 8x8 grid.
    pub fn off_board(&self) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(|piece| !piece.location().on_board())
    }
}

impl InputSink for Game {
    fn on_click(&mut self, x: i32, y: i32) {
        self.click(x, y);
    }

    fn on_reset(&mut self) {
        self.new_game();
    }
}

/// Letters as in FEN, `*` where both sides stand on one cell, then the turn,
/// the selection and any pieces moved off the board.
impl Display for Game {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for y in 0..Board::CELLS {
            let row: Vec<String> = (0..Board::CELLS)
                .map(|x| {
                    let location = Location::new(x, y);
                    let cell = match self.sides.each_ref().map(|side| side.get(location)) {
                        [Some(_), Some(_)] => '*',
                        [Some(piece), None] | [None, Some(piece)] => piece.fen_char(),
                        [None, None] => '.',
                    };
                    cell.to_string()
                })
                .collect();
            writeln!(f, "{} {}", Board::CELLS - y, row.join(" "))?;
        }
        writeln!(f, "  a b c d e f g h")?;

        write!(f, "{} to play", self.active)?;
        if let Some(selected) = self.selected {
            write!(f, ", {selected} selected")?;
        }

        let off_board: Vec<String> = self.off_board().map(|piece| format!("{piece}{}", piece.location())).collect();
        if !off_board.is_empty() {
            write!(f, ", off board: {}", off_board.join(" "))?;
        }
        Ok(())
    }
}
