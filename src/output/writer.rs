use crate::terrain::{Rectangle, TerrainKind};

pub const HEADER: [&str; 7] = ["gen_id", "route_id", "type_id", "x1", "y1", "x2", "y2"];

/// Generation the rows belong to
pub const GEN_ID: u32 = 1;

/// Placeholder route id, to be assigned when the rows are post-processed
pub const ROUTE_ID: u32 = 1;

/// Row terminator, matching the usual CSV dialect
pub const LINE_END: &[u8] = b"\r\n";

/// One output row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectangleRow {
    pub gen_id: u32,
    pub route_id: u32,
    pub kind: TerrainKind,
    pub rect: Rectangle,
}

impl RectangleRow {
    pub fn new(kind: TerrainKind, rect: Rectangle) -> Self {
        Self { gen_id: GEN_ID, route_id: ROUTE_ID, kind, rect }
    }

    pub fn fields(&self) -> [u32; 7] {
        [
            self.gen_id,
            self.route_id,
            self.kind.type_id() as u32,
            self.rect.x1,
            self.rect.y1,
            self.rect.x2,
            self.rect.y2,
        ]
    }
}

/// CSV text buffer for rectangle rows
pub struct CsvWriter {
    data: Vec<u8>,
}

impl CsvWriter {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { data: Vec::with_capacity(capacity) }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn write_header(&mut self) {
        for (i, name) in HEADER.iter().enumerate() {
            self.write_separator(i);
            self.data.extend_from_slice(name.as_bytes());
        }
        self.data.extend_from_slice(LINE_END);
    }

    pub fn write_row(&mut self, row: &RectangleRow) {
        for (i, value) in row.fields().iter().enumerate() {
            self.write_separator(i);
            self.data.extend_from_slice(value.to_string().as_bytes());
        }
        self.data.extend_from_slice(LINE_END);
    }

    fn write_separator(&mut self, column: usize) {
        if column > 0 {
            self.data.push(b',');
        }
    }
}
