use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rgby_terrain::{
    extract, write_records, ExtractConfig, GeometryMode, RomContext, MAX_TILE_SIZE, TILE_SIZE,
};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum Geometry {
    /// Place rectangles by their rank in the match list
    MatchOrder,
    /// Place rectangles at their block position in the map
    Grid,
}

impl From<Geometry> for GeometryMode {
    fn from(g: Geometry) -> Self {
        match g {
            Geometry::MatchOrder => GeometryMode::MatchOrder,
            Geometry::Grid => GeometryMode::Grid,
        }
    }
}

#[derive(Parser)]
#[command(name = "rgby-terrain")]
#[command(about = "Read map data from Pokemon RGB and dump grass and water rectangles")]
struct Args {
    /// The game ROM to be read
    rom_path: PathBuf,

    #[arg(long, default_value = "data")]
    out_dir: PathBuf,

    /// Side length of each output rectangle
    #[arg(long, default_value_t = TILE_SIZE, value_parser = tile_size_range())]
    tile_size: u32,

    #[arg(long, value_enum, default_value = "match-order")]
    geometry: Geometry,
}

fn tile_size_range() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(1..=MAX_TILE_SIZE as i64)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = ExtractConfig {
        out_dir: args.out_dir,
        tile_size: args.tile_size,
        geometry: args.geometry.into(),
    };

    let rom_path = std::path::absolute(&args.rom_path)?;
    println!("Using rom path {}", rom_path.display());

    let context = RomContext::load(&rom_path)?;
    println!("Loading rom... {}", context.rom.summary());

    let extraction = extract(&context, &config);
    let written = write_records(&extraction, &config.out_dir)?;
    tracing::info!(
        maps = extraction.maps.len(),
        files = written.len(),
        failures = extraction.failures.len() + context.catalog.failures().len(),
        "extraction finished"
    );

    println!("{{}}");
    for slug in extraction.slugs() {
        println!("{slug}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_size_bounds() {
        let args = Args::try_parse_from(["rgby-terrain", "red.gb"]).unwrap();
        assert_eq!(args.tile_size, TILE_SIZE);

        let max = MAX_TILE_SIZE.to_string();
        let args = Args::try_parse_from(["rgby-terrain", "red.gb", "--tile-size", &max]).unwrap();
        assert_eq!(args.tile_size, MAX_TILE_SIZE);

        for bad in ["0", "2147483648"] {
            assert!(Args::try_parse_from(["rgby-terrain", "red.gb", "--tile-size", bad]).is_err());
        }
    }
}
