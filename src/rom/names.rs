use super::catalog::MapId;

const TOWN_NAMES: [&str; 11] = [
    "Pallet Town",
    "Viridian City",
    "Pewter City",
    "Cerulean City",
    "Lavender Town",
    "Vermilion City",
    "Celadon City",
    "Fuchsia City",
    "Cinnabar Island",
    "Indigo Plateau",
    "Saffron City",
];

const FIRST_ROUTE: MapId = 0x0C;
const LAST_ROUTE: MapId = 0x24;

/// Map ids with no map behind them in the header tables
const UNUSED_MAPS: &[MapId] = &[
    0x0B, 0x69, 0x6A, 0x6B, 0x6D, 0x6E, 0x6F, 0x70, 0x72, 0x73, 0x74, 0x75,
    0xCC, 0xCD, 0xCE, 0xE7, 0xED, 0xEE, 0xF1, 0xF2, 0xF3, 0xF4,
];

pub fn is_unused(map_id: MapId) -> bool {
    UNUSED_MAPS.contains(&map_id)
}

/// Display name for a map id. Towns and routes carry their in-game names,
/// everything else falls back to the hex id.
pub fn map_name(map_id: MapId) -> String {
    match map_id {
        id if (id as usize) < TOWN_NAMES.len() => TOWN_NAMES[id as usize].to_string(),
        FIRST_ROUTE..=LAST_ROUTE => format!("Route {}", map_id - FIRST_ROUTE + 1),
        _ => format!("Map {map_id:02X}"),
    }
}

/// Lowercase with spaces turned into dashes, used for output file names
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}
