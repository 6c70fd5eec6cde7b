pub mod assets;
pub mod board;
pub mod game;
pub mod location;
pub mod piece;
pub mod side;
pub mod window;
