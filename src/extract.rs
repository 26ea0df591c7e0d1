//! Per-map extraction over a loaded ROM

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::output::DEFAULT_OUT_DIR;
use crate::rom::{MapCatalog, MapEntry, MapId, Rom};
use crate::terrain::{classify, GeometryMode, MapGeometry, Rectangle, TerrainKind, TILE_SIZE};

/// A ROM and its map catalog, loaded once and only read afterwards
#[derive(Debug)]
pub struct RomContext {
    pub rom: Rom,
    pub catalog: MapCatalog,
}

impl RomContext {
    pub fn new(rom: Rom, catalog: MapCatalog) -> Self {
        Self { rom, catalog }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let rom = Rom::load(path)?;
        let catalog = MapCatalog::read(&rom);
        Ok(Self::new(rom, catalog))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    pub out_dir: PathBuf,
    pub tile_size: u32,
    pub geometry: GeometryMode,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            tile_size: TILE_SIZE,
            geometry: GeometryMode::default(),
        }
    }
}

/// Terrain found in one outdoor map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapRecord {
    pub name: String,
    pub slug: String,
    pub width: u8,
    pub height: u8,
    pub grass_tiles: Vec<usize>,
    pub water_tiles: Vec<usize>,
    pub grass_rects: Vec<Rectangle>,
    pub water_rects: Vec<Rectangle>,
}

impl MapRecord {
    pub fn rects(&self, kind: TerrainKind) -> &[Rectangle] {
        match kind {
            TerrainKind::Grass => &self.grass_rects,
            TerrainKind::Water => &self.water_rects,
        }
    }

    pub fn has_matches(&self) -> bool {
        !self.grass_rects.is_empty() || !self.water_rects.is_empty()
    }
}

#[derive(Debug)]
pub struct MapFailure {
    pub map_id: MapId,
    pub error: Error,
}

/// Results of one run, keyed by map id in catalog order
#[derive(Debug, Default)]
pub struct Extraction {
    pub maps: IndexMap<MapId, MapRecord>,
    pub failures: Vec<MapFailure>,
}

impl Extraction {
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.maps.values().map(|m| m.slug.as_str())
    }
}

/// Extract one map. Returns `None` for maps that are not outdoors.
pub fn extract_map(
    rom: &[u8],
    entry: &MapEntry,
    config: &ExtractConfig,
) -> Result<Option<MapRecord>> {
    let descriptor = &entry.descriptor;
    if !descriptor.is_outdoor() {
        tracing::debug!(map_id = entry.id, tileset = descriptor.tileset, "skipping indoor map");
        return Ok(None);
    }

    let geometry = MapGeometry::new(
        entry.id,
        descriptor.width,
        descriptor.height,
        config.tile_size,
        config.geometry,
    )?;
    let blocks = descriptor.blocks(entry.id, rom)?;
    let matches = classify(blocks);
    if matches.is_empty() {
        tracing::debug!(map_id = entry.id, "no grass or water blocks");
    }

    Ok(Some(MapRecord {
        name: entry.name.clone(),
        slug: entry.slug(),
        width: descriptor.width,
        height: descriptor.height,
        grass_rects: geometry.rectangles(&matches.grass),
        water_rects: geometry.rectangles(&matches.water),
        grass_tiles: matches.grass,
        water_tiles: matches.water,
    }))
}

/// Extract every outdoor map in the catalog. A map that fails is recorded
/// and the rest of the catalog is still processed.
pub fn extract(context: &RomContext, config: &ExtractConfig) -> Extraction {
    let mut extraction = Extraction::default();

    for entry in context.catalog.entries() {
        match extract_map(context.rom.as_slice(), entry, config) {
            Ok(Some(record)) => {
                tracing::info!(
                    map = %record.slug,
                    grass = record.grass_tiles.len(),
                    water = record.water_tiles.len(),
                    "extracted map"
                );
                extraction.maps.insert(entry.id, record);
            }
            Ok(None) => {}
            Err(error) => {
                tracing::warn!(map_id = entry.id, %error, "map extraction failed");
                extraction.failures.push(MapFailure { map_id: entry.id, error });
            }
        }
    }

    extraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rom::MapDescriptor;
    use crate::terrain::MAX_TILE_SIZE;

    fn entry(id: MapId, tileset: u8, width: u8, height: u8, offset: usize) -> MapEntry {
        MapEntry::new(id, MapDescriptor { tileset, width, height, offset })
    }

    fn context(rom: Vec<u8>, entries: Vec<MapEntry>) -> RomContext {
        RomContext::new(Rom::new(rom), MapCatalog::from_entries(entries))
    }

    #[test]
    fn test_extract_small_map() {
        let ctx = context(vec![0x0B, 0x1D, 0x00, 0x0B], vec![entry(0x00, 0, 2, 2, 0)]);
        let extraction = extract(&ctx, &ExtractConfig::default());

        let record = &extraction.maps[&0x00];
        assert_eq!(record.slug, "pallet-town");
        assert_eq!(record.grass_tiles, vec![0, 3]);
        assert_eq!(record.water_tiles, vec![1]);
        assert_eq!(
            record.grass_rects,
            vec![Rectangle::square(0, 0, 32), Rectangle::square(32, 32, 32)]
        );
        assert_eq!(record.water_rects, vec![Rectangle::square(0, 0, 32)]);
        assert!(extraction.failures.is_empty());
    }

    #[test]
    fn test_indoor_maps_skipped() {
        let ctx = context(vec![0x0B; 16], vec![entry(0x25, 0x01, 4, 4, 0)]);
        let extraction = extract(&ctx, &ExtractConfig::default());

        assert!(extraction.maps.is_empty());
        assert!(extraction.failures.is_empty());
    }

    #[test]
    fn test_unmatched_map_kept_without_rects() {
        let ctx = context(vec![0x00; 4], vec![entry(0x0C, 0, 2, 2, 0)]);
        let extraction = extract(&ctx, &ExtractConfig::default());

        let record = &extraction.maps[&0x0C];
        assert!(!record.has_matches());
        assert_eq!(extraction.slugs().collect::<Vec<_>>(), vec!["route-1"]);
    }

    #[test]
    fn test_failures_isolated() {
        let ctx = context(
            vec![0x0B, 0x0B, 0x1E, 0x1E],
            vec![
                entry(0x00, 0, 0, 2, 0),
                entry(0x01, 0, 3, 3, 0),
                entry(0x02, 0, 2, 2, 0),
            ],
        );
        let extraction = extract(&ctx, &ExtractConfig::default());

        assert_eq!(extraction.maps.len(), 1);
        assert!(extraction.maps.contains_key(&0x02));
        assert_eq!(extraction.failures.len(), 2);
        assert!(matches!(
            extraction.failures[0].error,
            Error::InvalidMapDimensions { map_id: 0x00, .. }
        ));
        assert!(matches!(extraction.failures[1].error, Error::MapLayout { map_id: 0x01, .. }));
    }

    #[test]
    fn test_oversized_tile_size_reported() {
        let ctx = context(vec![0x0B; 4], vec![entry(0x00, 0, 2, 2, 0)]);
        let config = ExtractConfig { tile_size: 0x8000_0000, ..ExtractConfig::default() };
        let extraction = extract(&ctx, &config);

        assert!(extraction.maps.is_empty());
        assert_eq!(extraction.failures.len(), 1);
        assert!(matches!(
            extraction.failures[0].error,
            Error::InvalidTileSize { tile_size: 0x8000_0000, .. }
        ));

        let config = ExtractConfig { tile_size: MAX_TILE_SIZE, ..ExtractConfig::default() };
        let record = &extract(&ctx, &config).maps[&0x00];
        assert_eq!(record.grass_rects[3].x2, 2 * MAX_TILE_SIZE);
    }

    #[test]
    fn test_grid_mode() {
        let ctx = context(vec![0x0B, 0x1D, 0x00, 0x0B], vec![entry(0x00, 0, 2, 2, 0)]);
        let config = ExtractConfig { geometry: GeometryMode::Grid, ..ExtractConfig::default() };
        let extraction = extract(&ctx, &config);

        let record = &extraction.maps[&0x00];
        assert_eq!(record.grass_rects[1], Rectangle::square(32, 32, 32));
        assert_eq!(record.water_rects[0], Rectangle::square(32, 0, 32));
    }

    #[test]
    fn test_catalog_order_preserved() {
        let ctx = context(
            vec![0x0B; 4],
            vec![entry(0x0D, 0, 2, 2, 0), entry(0x00, 0, 2, 2, 0), entry(0x0C, 0, 1, 1, 3)],
        );
        let extraction = extract(&ctx, &ExtractConfig::default());
        let ids: Vec<_> = extraction.maps.keys().copied().collect();
        assert_eq!(ids, vec![0x0D, 0x00, 0x0C]);
    }
}
