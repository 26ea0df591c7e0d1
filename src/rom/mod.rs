//! ROM image access and the map header catalog

pub mod catalog;
pub mod header;
pub mod image;
pub mod names;
pub mod reader;

pub use catalog::{CatalogFailure, MapCatalog, MapDescriptor, MapEntry, MapId, OVERWORLD_TILESET};
pub use header::{MapHeader, MAP_COUNT, MAP_HEADER_BANKS, MAP_HEADER_POINTERS};
pub use image::{banked_address, Rom, RomSummary, BANK_SIZE};
pub use names::{map_name, slugify};
pub use reader::RomReader;
