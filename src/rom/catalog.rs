use super::header::{MapHeader, MAP_COUNT};
use super::names::{is_unused, map_name, slugify};
use super::Rom;
use crate::error::{Error, Result};

pub type MapId = u8;

/// Tileset used by towns and routes
pub const OVERWORLD_TILESET: u8 = 0x00;

/// Where a map's block data lives and how it is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapDescriptor {
    pub tileset: u8,
    pub width: u8,
    pub height: u8,
    /// Absolute offset of the first block byte
    pub offset: usize,
}

impl MapDescriptor {
    pub fn is_outdoor(&self) -> bool {
        self.tileset == OVERWORLD_TILESET
    }

    pub fn block_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Slice this map's blocks out of the ROM, one byte per block, row-major.
    pub fn blocks<'a>(&self, map_id: MapId, rom: &'a [u8]) -> Result<&'a [u8]> {
        let end = self.offset.checked_add(self.block_count());
        match end {
            Some(end) if end <= rom.len() => Ok(&rom[self.offset..end]),
            _ => Err(Error::MapLayout {
                map_id,
                width: self.width,
                height: self.height,
                offset: self.offset,
                rom_len: rom.len(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEntry {
    pub id: MapId,
    pub name: String,
    pub descriptor: MapDescriptor,
}

impl MapEntry {
    pub fn new(id: MapId, descriptor: MapDescriptor) -> Self {
        Self { id, name: map_name(id), descriptor }
    }

    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

/// A header that could not be decoded
#[derive(Debug)]
pub struct CatalogFailure {
    pub map_id: MapId,
    pub error: Error,
}

/// Every map known to a ROM, in map id order
#[derive(Debug, Default)]
pub struct MapCatalog {
    entries: Vec<MapEntry>,
    failures: Vec<CatalogFailure>,
}

impl MapCatalog {
    pub fn from_entries(entries: Vec<MapEntry>) -> Self {
        Self { entries, failures: Vec::new() }
    }

    /// Decode every used map header. A header that cannot be read is kept
    /// as a failure and does not stop the rest of the table.
    pub fn read(rom: &Rom) -> Self {
        let mut catalog = Self::default();

        for index in 0..MAP_COUNT {
            let map_id = index as MapId;
            if is_unused(map_id) {
                continue;
            }

            match MapHeader::read_for(rom, map_id) {
                Ok(header) => catalog.entries.push(MapEntry::new(map_id, header.descriptor())),
                Err(error) => {
                    tracing::warn!(map_id, %error, "skipping unreadable map header");
                    catalog.failures.push(CatalogFailure { map_id, error });
                }
            }
        }

        tracing::debug!(
            maps = catalog.entries.len(),
            failures = catalog.failures.len(),
            "map catalog loaded"
        );
        catalog
    }

    pub fn entries(&self) -> &[MapEntry] {
        &self.entries
    }

    pub fn failures(&self) -> &[CatalogFailure] {
        &self.failures
    }
}
