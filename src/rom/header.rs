//! Map header tables
//!
//! Every map has a 16-bit in-bank pointer to its header in the table at
//! `MAP_HEADER_POINTERS` and the bank holding that header in the table at
//! `MAP_HEADER_BANKS`. The fixed part of a header is:
//!
//! ```text
//! 0  tileset
//! 1  height (blocks)
//! 2  width (blocks)
//! 3  block data pointer (u16 le, same bank as the header)
//! 5  text pointer (u16 le)
//! 7  script pointer (u16 le)
//! 9  connection flags
//! ```

use super::{banked_address, Rom, RomReader};
use crate::error::Result;
use crate::rom::catalog::{MapDescriptor, MapId};

pub const MAP_HEADER_POINTERS: usize = 0x01AE;
pub const MAP_HEADER_BANKS: usize = 0xC23D;
pub const MAP_COUNT: usize = 0xF8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapHeader {
    pub bank: u8,
    pub tileset: u8,
    pub height: u8,
    pub width: u8,
    pub blocks_pointer: u16,
    pub text_pointer: u16,
    pub script_pointer: u16,
    /// North, south, west, east in bits 3..0
    pub connections: u8,
}

impl MapHeader {
    pub const SIZE: usize = 10;

    /// Absolute offset of a map's header, resolved through the pointer and
    /// bank tables.
    pub fn locate(rom: &Rom, map_id: MapId) -> Result<(u8, usize)> {
        let index = map_id as usize;
        let pointer = rom.read_u16_le(MAP_HEADER_POINTERS + index * 2)?;
        let bank = rom.read_u8(MAP_HEADER_BANKS + index)?;
        Ok((bank, banked_address(bank, pointer)))
    }

    pub fn read_for(rom: &Rom, map_id: MapId) -> Result<Self> {
        let (bank, offset) = Self::locate(rom, map_id)?;
        let mut reader = rom.reader_at(offset)?;
        Self::read(&mut reader, bank)
    }

    pub fn read(reader: &mut RomReader, bank: u8) -> Result<Self> {
        Ok(Self {
            bank,
            tileset: reader.read_u8()?,
            height: reader.read_u8()?,
            width: reader.read_u8()?,
            blocks_pointer: reader.read_u16_le()?,
            text_pointer: reader.read_u16_le()?,
            script_pointer: reader.read_u16_le()?,
            connections: reader.read_u8()?,
        })
    }

    pub fn blocks_offset(&self) -> usize {
        banked_address(self.bank, self.blocks_pointer)
    }

    pub fn descriptor(&self) -> MapDescriptor {
        MapDescriptor {
            tileset: self.tileset,
            width: self.width,
            height: self.height,
            offset: self.blocks_offset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rom_with_header(map_id: MapId, bank: u8, pointer: u16, header: [u8; 10]) -> Rom {
        let mut data = vec![0u8; 4 * 0x4000];
        let index = map_id as usize;
        data[MAP_HEADER_POINTERS + index * 2..MAP_HEADER_POINTERS + index * 2 + 2]
            .copy_from_slice(&pointer.to_le_bytes());
        data[MAP_HEADER_BANKS + index] = bank;
        let at = banked_address(bank, pointer);
        data[at..at + MapHeader::SIZE].copy_from_slice(&header);
        Rom::new(data)
    }

    #[test]
    fn test_read_header() {
        // Pallet Town-like header: overworld, 9x10 blocks, north and south connections
        let header = [0x00, 0x09, 0x0A, 0x10, 0x42, 0x20, 0x42, 0x30, 0x42, 0x0C];
        let rom = rom_with_header(0x00, 0x02, 0x4000, header);

        let parsed = MapHeader::read_for(&rom, 0x00).unwrap();
        assert_eq!(parsed.bank, 0x02);
        assert_eq!(parsed.tileset, 0x00);
        assert_eq!(parsed.height, 9);
        assert_eq!(parsed.width, 10);
        assert_eq!(parsed.blocks_pointer, 0x4210);
        assert_eq!(parsed.text_pointer, 0x4220);
        assert_eq!(parsed.script_pointer, 0x4230);
        assert_eq!(parsed.connections, 0x0C);

        let descriptor = parsed.descriptor();
        assert_eq!(descriptor.offset, 0x8210);
        assert_eq!(descriptor.width, 10);
        assert_eq!(descriptor.height, 9);
    }

    #[test]
    fn test_header_past_end() {
        let mut data = vec![0u8; 4 * 0x4000];
        data[MAP_HEADER_POINTERS..MAP_HEADER_POINTERS + 2]
            .copy_from_slice(&0x7FFCu16.to_le_bytes());
        data[MAP_HEADER_BANKS] = 0x03;
        let rom = Rom::new(data);

        assert_eq!(MapHeader::locate(&rom, 0x00).unwrap(), (0x03, 0xFFFC));
        assert!(matches!(
            MapHeader::read_for(&rom, 0x00),
            Err(crate::error::Error::OutOfBounds { offset: 0xFFFF, need: 2, .. })
        ));
    }
}
