use super::TerrainKind;

/// Block indices of every grass and water block in a map, ascending
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerrainMatches {
    pub grass: Vec<usize>,
    pub water: Vec<usize>,
}

impl TerrainMatches {
    pub fn is_empty(&self) -> bool {
        self.grass.is_empty() && self.water.is_empty()
    }
}

/// Scan a map's block array once, in index order, recording the position
/// of every grass and water block. Other block values are ignored.
pub fn classify(blocks: &[u8]) -> TerrainMatches {
    let mut matches = TerrainMatches::default();

    for (pos, &block) in blocks.iter().enumerate() {
        match TerrainKind::of(block) {
            Some(TerrainKind::Grass) => matches.grass.push(pos),
            Some(TerrainKind::Water) => matches.water.push(pos),
            None => {}
        }
    }

    matches
}
