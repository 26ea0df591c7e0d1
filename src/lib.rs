//! Gen 1 terrain extraction
//!
//! Reads the map header tables of a Pokémon Red/Blue ROM, finds the grass
//! and water blocks of every outdoor map, and writes them out as pixel
//! rectangles, one CSV file per map.

pub mod error;
pub mod extract;
pub mod output;
pub mod rom;
pub mod terrain;

pub use error::{Error, Result};
pub use extract::{
    extract, extract_map, ExtractConfig, Extraction, MapFailure, MapRecord, RomContext,
};
pub use output::{write_map_csv, write_records, RectangleRow};
pub use rom::{MapCatalog, MapDescriptor, MapEntry, MapHeader, MapId, Rom, RomSummary};
pub use terrain::{
    classify, to_rectangles, GeometryMode, MapGeometry, Rectangle, TerrainKind, TerrainMatches,
    MAX_TILE_SIZE, TILE_SIZE,
};
