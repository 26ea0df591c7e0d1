use std::fmt;
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};

use super::RomReader;
use crate::error::{Error, Result};

/// Size of a switchable ROM bank
pub const BANK_SIZE: usize = 0x4000;

const TITLE_START: usize = 0x134;
const TITLE_END: usize = 0x144;

/// Convert an in-bank pointer into an absolute file offset.
///
/// Pointers below 0x4000 address the fixed home bank and are already
/// absolute; anything else is relative to the start of `bank`.
pub fn banked_address(bank: u8, pointer: u16) -> usize {
    let pointer = pointer as usize;
    if pointer < BANK_SIZE {
        pointer
    } else {
        bank as usize * BANK_SIZE + (pointer - BANK_SIZE)
    }
}

/// An immutable ROM image
#[derive(Clone)]
pub struct Rom {
    data: Vec<u8>,
}

impl Rom {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .map_err(|e| Error::Io(format!("unable to load rom at {}: {}", path.display(), e)))?;
        Ok(Self::new(data))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn reader_at(&self, offset: usize) -> Result<RomReader<'_>> {
        RomReader::at(&self.data, offset)
    }

    pub fn read_n(&self, offset: usize, n: usize) -> Result<&[u8]> {
        match offset.checked_add(n) {
            Some(end) if end <= self.data.len() => Ok(&self.data[offset..end]),
            _ => Err(Error::OutOfBounds { offset, need: n, have: self.data.len() }),
        }
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8> {
        Ok(self.read_n(offset, 1)?[0])
    }

    pub fn read_u16_le(&self, offset: usize) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.read_n(offset, 2)?))
    }

    /// Cartridge title from the header, if present
    pub fn title(&self) -> Option<String> {
        let raw = self.data.get(TITLE_START..TITLE_END)?;
        let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
        let title = String::from_utf8_lossy(&raw[..end]).trim().to_string();
        (!title.is_empty()).then_some(title)
    }

    pub fn summary(&self) -> RomSummary {
        RomSummary {
            title: self.title(),
            len: self.data.len(),
            crc32: crc32fast::hash(&self.data),
        }
    }
}

impl fmt::Debug for Rom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rom").field("len", &self.data.len()).finish()
    }
}

/// Load status printed after reading a ROM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomSummary {
    pub title: Option<String>,
    pub len: usize,
    pub crc32: u32,
}

impl fmt::Display for RomSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = &self.title {
            write!(f, "{title}, ")?;
        }
        write!(f, "{} bytes, crc32 {:08x}", self.len, self.crc32)
    }
}
