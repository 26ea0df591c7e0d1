/// Block values drawn as tall grass
pub const GRASS_BLOCKS: [u8; 1] = [0x0B];

/// Block values drawn as water
pub const WATER_BLOCKS: [u8; 6] = [0x1D, 0x1E, 0x1F, 0x43, 0x64, 0x65];

/// Terrain category, with the type id written to the output rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TerrainKind {
    Grass = 1,
    Water = 2,
}

impl TerrainKind {
    pub const ALL: [TerrainKind; 2] = [TerrainKind::Grass, TerrainKind::Water];

    /// Classify a block byte. Grass is tested before water.
    pub fn of(block: u8) -> Option<Self> {
        if GRASS_BLOCKS.contains(&block) {
            Some(Self::Grass)
        } else if WATER_BLOCKS.contains(&block) {
            Some(Self::Water)
        } else {
            None
        }
    }

    pub fn type_id(self) -> u8 {
        self as u8
    }
}
