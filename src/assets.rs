use crate::board::Board;
use crate::piece::{Color, PieceKind};
use iced::widget::image::Handle;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use log::debug;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("piece image '{}' could not be read: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// The twelve decoded piece images at their original resolution, indexed by color then kind.
pub struct Assets {
    images: [[RgbaImage; 6]; 2],
}

impl Assets {
    /// Reads `<root>/<color>/<kind>.png` for every color and kind.
    pub fn load(root: &Path) -> Result<Self, AssetError> {
        let mut images = Color::ALL.map(|_| PieceKind::ALL.map(|_| RgbaImage::new(0, 0)));
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let path = Self::path(root, color, kind);
                let image = image::open(&path).map_err(|source| AssetError::Unreadable {
                    path: path.clone(),
                    source,
                })?;
                debug!("loaded {} {kind:?} from {}", color, path.display());
                images[color.index()][kind.index()] = image.into_rgba8();
            }
        }
        Ok(Self { images })
    }

    pub fn path(root: &Path, color: Color, kind: PieceKind) -> PathBuf {
        root.join(color.index().to_string()).join(format!("{}.png", kind.index()))
    }

    pub fn from_fn(mut image: impl FnMut(Color, PieceKind) -> RgbaImage) -> Self {
        let images = Color::ALL.map(|color| PieceKind::ALL.map(|kind| image(color, kind)));
        Self { images }
    }

    /// One-pixel white and black squares, for running without image files.
    pub fn blank() -> Self {
        Self::from_fn(|color, _| match color {
            Color::White => RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 255])),
            Color::Black => RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255])),
        })
    }

    /// Scales every image to one cell of `board`.
    pub fn sheet(&self, board: Board) -> SpriteSheet {
        let size = board.cell_size();
        let handles = self.images.each_ref().map(|images| {
            images.each_ref().map(|image| {
                let scaled = imageops::resize(image, size, size, FilterType::Lanczos3);
                Handle::from_rgba(size, size, scaled.into_raw())
            })
        });
        SpriteSheet { board, handles }
    }
}

/// Piece images scaled for one board geometry.
pub struct SpriteSheet {
    board: Board,
    handles: [[Handle; 6]; 2],
}

impl SpriteSheet {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn handle(&self, color: Color, kind: PieceKind) -> &Handle {
        &self.handles[color.index()][kind.index()]
    }
}
