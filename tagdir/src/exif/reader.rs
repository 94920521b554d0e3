//! A byte-order-aware cursor over the TIFF blob.
//!
//! Every read is bounds-checked by winnow. Running out of data gives an
//! [`OuttaData`] error instead of a panic.

use tagdir_types::primitives::ByteOrder;
use winnow::{
    Parser as _,
    binary::{Endianness as WinnowEndianness, f32, f64, i8, i16, i32, u8, u16, u32},
    error::EmptyError,
    token::take,
};

use super::error::OuttaData;

/// Reads primitives out of a blob, sequentially or at absolute indices.
#[derive(Clone, Copy, Debug)]
pub struct ByteCursor<'a> {
    blob: &'a [u8],
    position: usize,
    order: ByteOrder,
}

impl<'a> ByteCursor<'a> {
    pub fn new(blob: &'a [u8], order: ByteOrder) -> Self {
        Self {
            blob,
            position: 0,
            order,
        }
    }

    /// The same blob, read in another byte order.
    pub fn with_order(&self, order: ByteOrder) -> Self {
        Self { order, ..*self }
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    pub fn blob(&self) -> &'a [u8] {
        self.blob
    }

    pub fn len(&self) -> usize {
        self.blob.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blob.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves to an absolute index. Indices past the end are rejected.
    pub fn seek(&mut self, index: usize) -> Result<(), OuttaData> {
        if index > self.blob.len() {
            return Err(self.outta_data(index, 0));
        }
        self.position = index;
        Ok(())
    }

    /// Whether `len` bytes starting at `index` lie inside the blob.
    pub fn contains(&self, index: usize, len: usize) -> bool {
        index
            .checked_add(len)
            .is_some_and(|end| end <= self.blob.len())
    }

    fn endianness(&self) -> WinnowEndianness {
        match self.order {
            ByteOrder::Little => WinnowEndianness::Little,
            ByteOrder::Big => WinnowEndianness::Big,
        }
    }

    fn input_at(&self, index: usize) -> &'a [u8] {
        self.blob.get(index..).unwrap_or_default()
    }

    fn outta_data(&self, index: usize, wanted: usize) -> OuttaData {
        OuttaData {
            index,
            wanted,
            len: self.blob.len(),
        }
    }

    //
    // random access
    //

    pub fn u8_at(&self, index: usize) -> Result<u8, OuttaData> {
        u8.parse_next(&mut self.input_at(index))
            .map_err(|_: EmptyError| self.outta_data(index, 1))
    }

    pub fn i8_at(&self, index: usize) -> Result<i8, OuttaData> {
        i8.parse_next(&mut self.input_at(index))
            .map_err(|_: EmptyError| self.outta_data(index, 1))
    }

    pub fn u16_at(&self, index: usize) -> Result<u16, OuttaData> {
        u16(self.endianness())
            .parse_next(&mut self.input_at(index))
            .map_err(|_: EmptyError| self.outta_data(index, 2))
    }

    pub fn i16_at(&self, index: usize) -> Result<i16, OuttaData> {
        i16(self.endianness())
            .parse_next(&mut self.input_at(index))
            .map_err(|_: EmptyError| self.outta_data(index, 2))
    }

    pub fn u32_at(&self, index: usize) -> Result<u32, OuttaData> {
        u32(self.endianness())
            .parse_next(&mut self.input_at(index))
            .map_err(|_: EmptyError| self.outta_data(index, 4))
    }

    pub fn i32_at(&self, index: usize) -> Result<i32, OuttaData> {
        i32(self.endianness())
            .parse_next(&mut self.input_at(index))
            .map_err(|_: EmptyError| self.outta_data(index, 4))
    }

    pub fn f32_at(&self, index: usize) -> Result<f32, OuttaData> {
        f32(self.endianness())
            .parse_next(&mut self.input_at(index))
            .map_err(|_: EmptyError| self.outta_data(index, 4))
    }

    pub fn f64_at(&self, index: usize) -> Result<f64, OuttaData> {
        f64(self.endianness())
            .parse_next(&mut self.input_at(index))
            .map_err(|_: EmptyError| self.outta_data(index, 8))
    }

    pub fn bytes_at(&self, index: usize, len: usize) -> Result<&'a [u8], OuttaData> {
        take(len)
            .parse_next(&mut self.input_at(index))
            .map_err(|_: EmptyError| self.outta_data(index, len))
    }

    //
    // sequential
    //

    fn advance<T>(&mut self, width: usize, read: Result<T, OuttaData>) -> Result<T, OuttaData> {
        let value = read?;
        self.position += width;
        Ok(value)
    }

    pub fn read_u8(&mut self) -> Result<u8, OuttaData> {
        self.advance(1, self.u8_at(self.position))
    }

    pub fn read_u16(&mut self) -> Result<u16, OuttaData> {
        self.advance(2, self.u16_at(self.position))
    }

    pub fn read_u32(&mut self) -> Result<u32, OuttaData> {
        self.advance(4, self.u32_at(self.position))
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], OuttaData> {
        self.advance(len, self.bytes_at(self.position, len))
    }
}

#[cfg(test)]
mod tests {
    use tagdir_types::primitives::ByteOrder;

    use super::ByteCursor;
    use crate::{exif::error::OuttaData, util::logger};

    #[test]
    fn same_bytes_both_orders() {
        logger();

        let blob = [0x00, 0x02, 0x12, 0x34, 0x56, 0x78];
        let be = ByteCursor::new(&blob, ByteOrder::Big);
        let le = be.with_order(ByteOrder::Little);

        assert_eq!(be.u16_at(0), Ok(2));
        assert_eq!(le.u16_at(0), Ok(512));
        assert_eq!(be.u32_at(2), Ok(0x1234_5678));
        assert_eq!(le.u32_at(2), Ok(0x7856_3412));
    }

    #[test]
    fn signed_and_float_reads() {
        logger();

        let mut blob = Vec::new();
        blob.extend_from_slice((-2_i16).to_le_bytes().as_slice());
        blob.extend_from_slice(1.5_f32.to_le_bytes().as_slice());
        blob.extend_from_slice((-0.25_f64).to_le_bytes().as_slice());
        blob.push(0xFF);

        let cursor = ByteCursor::new(&blob, ByteOrder::Little);
        assert_eq!(cursor.i16_at(0), Ok(-2));
        assert_eq!(cursor.f32_at(2), Ok(1.5));
        assert_eq!(cursor.f64_at(6), Ok(-0.25));
        assert_eq!(cursor.i8_at(14), Ok(-1));
        assert_eq!(cursor.u8_at(14), Ok(255));
    }

    #[test]
    fn sequential_reads_advance() {
        logger();

        let blob = [0x00, 0x01, 0x00, 0x00, 0x00, 0x02, 0xAA, 0xBB];
        let mut cursor = ByteCursor::new(&blob, ByteOrder::Big);

        assert_eq!(cursor.read_u16(), Ok(1));
        assert_eq!(cursor.read_u32(), Ok(2));
        assert_eq!(cursor.position(), 6);
        assert_eq!(cursor.read_bytes(2), Ok([0xAA, 0xBB].as_slice()));
        assert!(cursor.read_u8().is_err());
        assert_eq!(cursor.position(), 8, "failed reads don't move the cursor");
    }

    #[test]
    fn never_reads_past_the_end() {
        logger();

        let blob = [0x01, 0x02, 0x03];
        let mut cursor = ByteCursor::new(&blob, ByteOrder::Little);

        assert_eq!(
            cursor.u32_at(0),
            Err(OuttaData {
                index: 0,
                wanted: 4,
                len: 3
            })
        );
        assert!(cursor.u16_at(2).is_err());
        assert!(cursor.u8_at(usize::MAX).is_err());
        assert!(cursor.bytes_at(1, usize::MAX).is_err());
        assert!(cursor.seek(4).is_err());
        assert!(cursor.seek(3).is_ok());
        assert!(!cursor.contains(2, usize::MAX));
        assert!(cursor.contains(0, 3));
    }
}
