use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("read out of bounds: need {need} bytes at {offset:#x}, rom has {have}")]
    OutOfBounds { offset: usize, need: usize, have: usize },

    #[error("map {map_id:#04x}: {width}x{height} blocks at {offset:#x} overrun {rom_len} byte rom")]
    MapLayout {
        map_id: u8,
        width: u8,
        height: u8,
        offset: usize,
        rom_len: usize,
    },

    #[error("map {map_id:#04x}: invalid dimensions {width}x{height}")]
    InvalidMapDimensions { map_id: u8, width: u8, height: u8 },

    #[error("invalid tile size {tile_size}: must be between 1 and {max}")]
    InvalidTileSize { tile_size: u32, max: u32 },

    #[error("output path {}: {reason}", path.display())]
    OutputPath { path: PathBuf, reason: String },

    #[error("io error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, Error>;
