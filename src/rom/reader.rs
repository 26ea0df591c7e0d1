use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Error, Result};

/// Bounds-checked cursor over ROM bytes
pub struct RomReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> RomReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Start reading at an absolute offset
    pub fn at(data: &'a [u8], pos: usize) -> Result<Self> {
        let mut reader = Self::new(data);
        reader.seek(pos)?;
        Ok(reader)
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos > self.data.len() {
            return Err(self.out_of_bounds_at(pos, 0));
        }
        self.pos = pos;
        Ok(())
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.ensure(n)?;
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        let v = self.data[self.pos];
        self.pos += 1;
        Ok(v)
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.read_bytes(2)?))
    }

    fn ensure(&self, need: usize) -> Result<()> {
        if self.remaining() < need {
            return Err(self.out_of_bounds_at(self.pos, need));
        }
        Ok(())
    }

    fn out_of_bounds_at(&self, offset: usize, need: usize) -> Error {
        Error::OutOfBounds { offset, need, have: self.data.len() }
    }
}
