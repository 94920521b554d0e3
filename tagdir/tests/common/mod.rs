//! Helpers shared by the integration tests: logging and a tiny TIFF writer.

#![allow(dead_code)]

use tagdir::primitives::ByteOrder;

/// Sets up the logger for tests.
pub fn logger() {
    _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::max())
        .format_file(true)
        .format_line_number(true)
        .try_init();
}

/// One IFD entry, with its value already encoded.
#[derive(Clone, Debug)]
pub struct Entry {
    pub tag: u16,
    pub ty: u16,
    pub count: u32,
    pub data: Vec<u8>,
}

/// Where an IFD landed once written.
#[derive(Clone, Debug)]
pub struct Written {
    /// Offset of the entry count.
    pub start: usize,

    /// Offset of the next-IFD pointer.
    pub next_at: usize,

    /// Offset of each entry's four-byte value field.
    pub value_at: Vec<usize>,
}

/// Appends TIFF structures to a byte buffer in one byte order.
pub struct Writer {
    pub order: ByteOrder,
    pub bytes: Vec<u8>,
}

impl Writer {
    /// An empty buffer.
    pub fn new(order: ByteOrder) -> Self {
        Self {
            order,
            bytes: Vec::new(),
        }
    }

    /// A buffer holding a TIFF header whose first IFD sits right after it.
    pub fn tiff(order: ByteOrder) -> Self {
        let mut w = Self::new(order);
        w.bytes.extend_from_slice(order.marker().as_slice());
        w.u16(42);
        w.u32(8);
        w
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn u16(&mut self, v: u16) {
        let b = self.u16_bytes(v);
        self.bytes.extend_from_slice(b.as_slice());
    }

    pub fn u32(&mut self, v: u32) {
        let b = self.u32_bytes(v);
        self.bytes.extend_from_slice(b.as_slice());
    }

    pub fn raw(&mut self, v: &[u8]) {
        self.bytes.extend_from_slice(v);
    }

    /// Overwrites four bytes at `at`.
    pub fn patch_u32(&mut self, at: usize, v: u32) {
        let b = self.u32_bytes(v);
        self.bytes[at..at + 4].copy_from_slice(b.as_slice());
    }

    fn u16_bytes(&self, v: u16) -> [u8; 2] {
        match self.order {
            ByteOrder::Little => v.to_le_bytes(),
            ByteOrder::Big => v.to_be_bytes(),
        }
    }

    fn u32_bytes(&self, v: u32) -> [u8; 4] {
        match self.order {
            ByteOrder::Little => v.to_le_bytes(),
            ByteOrder::Big => v.to_be_bytes(),
        }
    }

    //
    // entries
    //

    pub fn shorts(&self, tag: u16, values: &[u16]) -> Entry {
        Entry {
            tag,
            ty: 3,
            count: values.len() as u32,
            data: values.iter().flat_map(|v| self.u16_bytes(*v)).collect(),
        }
    }

    pub fn longs(&self, tag: u16, values: &[u32]) -> Entry {
        Entry {
            tag,
            ty: 4,
            count: values.len() as u32,
            data: values.iter().flat_map(|v| self.u32_bytes(*v)).collect(),
        }
    }

    pub fn rationals(&self, tag: u16, values: &[(u32, u32)]) -> Entry {
        Entry {
            tag,
            ty: 5,
            count: values.len() as u32,
            data: values
                .iter()
                .flat_map(|(n, d)| {
                    let mut b = self.u32_bytes(*n).to_vec();
                    b.extend_from_slice(self.u32_bytes(*d).as_slice());
                    b
                })
                .collect(),
        }
    }

    /// NUL-terminated ASCII.
    pub fn ascii(&self, tag: u16, text: &str) -> Entry {
        let mut data = text.as_bytes().to_vec();
        data.push(0);
        Entry {
            tag,
            ty: 2,
            count: data.len() as u32,
            data,
        }
    }

    pub fn undefined(&self, tag: u16, data: &[u8]) -> Entry {
        Entry {
            tag,
            ty: 7,
            count: data.len() as u32,
            data: data.to_vec(),
        }
    }

    //
    // directories
    //

    /// Appends an IFD with its out-of-line values right after it.
    ///
    /// Offsets are written relative to the start of the buffer.
    pub fn ifd(&mut self, entries: &[Entry], next: u32) -> Written {
        self.ifd_based(entries, next, 0)
    }

    /// Like [`Writer::ifd`], but out-of-line offsets are written relative
    /// to `base`.
    pub fn ifd_based(&mut self, entries: &[Entry], next: u32, base: usize) -> Written {
        let start = self.len();
        let mut data_at = start + 2 + 12 * entries.len() + 4;
        let mut out_of_line = Vec::new();
        let mut value_at = Vec::with_capacity(entries.len());

        self.u16(entries.len() as u16);
        for e in entries {
            self.u16(e.tag);
            self.u16(e.ty);
            self.u32(e.count);
            value_at.push(self.len());

            if e.data.len() <= 4 {
                let mut field = e.data.clone();
                field.resize(4, 0);
                self.raw(&field);
            } else {
                self.u32((data_at - base) as u32);
                out_of_line.extend_from_slice(&e.data);
                data_at += e.data.len();
            }
        }

        let next_at = self.len();
        self.u32(next);
        self.raw(&out_of_line);

        Written {
            start,
            next_at,
            value_at,
        }
    }
}
