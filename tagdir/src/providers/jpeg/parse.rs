use winnow::{
    Parser as _,
    binary::{be_u16, u8},
    error::EmptyError,
    token::take,
};

use super::JpegError;

const SOI: u8 = 0xD8;
const EOI: u8 = 0xD9;
const SOS: u8 = 0xDA;
const APP1: u8 = 0xE1;

/// Exif's `APP1` segments open with this.
const EXIF_SIGNATURE: &[u8] = b"Exif\0\0";

/// Checks for `SOI` followed by the start of another marker.
pub fn magic_number(input: &[u8]) -> bool {
    input.starts_with(&[0xFF, SOI, 0xFF])
}

/// Finds the TIFF blob in the first Exif `APP1` segment, if any.
pub fn find_exif(input: &[u8]) -> Result<Option<&[u8]>, JpegError> {
    let Some(rest) = input.strip_prefix(&[0xFF, SOI]) else {
        return Err(JpegError::NoStartOfImage);
    };

    for segment in Segments::new(rest, 2) {
        let segment = segment?;
        if segment.code != APP1 {
            continue;
        }

        match segment.payload.strip_prefix(EXIF_SIGNATURE) {
            Some(tiff) => {
                log::trace!("Found Exif in `APP1` at `{}`.", segment.at);
                return Ok(Some(tiff));
            }
            None => log::trace!("`APP1` at `{}` wasn't Exif.", segment.at),
        }
    }

    log::debug!("JPEG had no Exif segment.");
    Ok(None)
}

/// One marker and its payload. Standalone markers have an empty payload.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Segment<'a> {
    code: u8,
    payload: &'a [u8],

    /// The position of the marker's `0xFF`, from the start of the file.
    at: usize,
}

/// Iterates over a JPEG's segments until the image data starts.
///
/// Metadata never comes after `SOS`, so iteration ends there (or at `EOI`).
/// The first error also ends it.
struct Segments<'a> {
    input: &'a [u8],

    /// How far into the file `input` starts.
    offset: usize,
    done: bool,
}

impl<'a> Segments<'a> {
    fn new(input: &'a [u8], offset: usize) -> Self {
        Self {
            input,
            offset,
            done: false,
        }
    }

    fn file_offset(&self, remaining: &[u8]) -> usize {
        self.offset + (self.input.len() - remaining.len())
    }

    fn next_segment(&self, input: &mut &'a [u8]) -> Result<Segment<'a>, JpegError> {
        let at = self.file_offset(input);

        let first: u8 = u8
            .parse_next(input)
            .map_err(|_: EmptyError| JpegError::TruncatedMarker { at })?;
        if first != 0xFF {
            return Err(JpegError::NotAMarker { at, found: first });
        }

        // any number of `0xFF` fill bytes may come first
        let code = loop {
            match u8.parse_next(input).map_err(|_: EmptyError| JpegError::TruncatedMarker { at })? {
                0xFF => continue,
                code => break code,
            }
        };

        if is_standalone(code) {
            return Ok(Segment {
                code,
                payload: &[],
                at,
            });
        }

        let len: u16 = be_u16
            .parse_next(input)
            .map_err(|_: EmptyError| JpegError::TruncatedMarker { at })?;

        // the length counts its own two bytes
        let wanted = len
            .checked_sub(2)
            .ok_or(JpegError::LengthTooShort { code, len })? as usize;
        let left = input.len();
        let payload = take(wanted)
            .parse_next(input)
            .map_err(|_: EmptyError| JpegError::TruncatedSegment { code, wanted, left })?;

        Ok(Segment { code, payload, at })
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Result<Segment<'a>, JpegError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // a clean end between segments, with no `EOI`
        if self.input.is_empty() {
            log::trace!("JPEG ended at `{}` without `EOI`.", self.offset);
            self.done = true;
            return None;
        }

        let mut input = self.input;
        let read = self.next_segment(&mut input);

        match &read {
            Err(e) => {
                log::error!("Stopped reading JPEG: {e}");
                self.done = true;
            }
            Ok(segment) if segment.code == EOI || segment.code == SOS => {
                log::trace!("Hit `{:#04x}` at `{}`. No metadata past here.", segment.code, segment.at);
                self.done = true;
                return None;
            }
            Ok(segment) => {
                log::trace!(
                    "Segment `{:#04x}` at `{}`, `{}` bytes.",
                    segment.code,
                    segment.at,
                    segment.payload.len()
                );
                self.offset = self.file_offset(input);
                self.input = input;
            }
        }

        Some(read)
    }
}

/// `RSTn`, `SOI`, `EOI` and `TEM` carry no length.
fn is_standalone(code: u8) -> bool {
    matches!(code, 0x01 | 0xD0..=0xD9)
}

#[cfg(test)]
mod tests {
    use super::{Segment, Segments, find_exif};
    use crate::{providers::jpeg::JpegError, util::logger};

    #[test]
    fn fill_bytes_and_standalone_markers() {
        logger();

        let body = [
            0xFF, 0xFF, 0xFF, 0xE0, 0x00, 0x03, 0xAB, // APP0 behind fill bytes
            0xFF, 0xD0, // RST0
            0xFF, 0xD9, // EOI
            0xFF, 0xE1, 0x00, 0x02, // never reached
        ];
        let segments: Vec<_> = Segments::new(&body, 2).collect::<Result<_, _>>().unwrap();

        assert_eq!(
            segments,
            [
                Segment {
                    code: 0xE0,
                    payload: &[0xAB],
                    at: 2
                },
                Segment {
                    code: 0xD0,
                    payload: &[],
                    at: 9
                },
            ]
        );
    }

    #[test]
    fn errors_carry_positions() {
        logger();

        assert_eq!(
            find_exif(&[0xFF, 0xD8, 0x00]),
            Err(JpegError::NotAMarker { at: 2, found: 0x00 })
        );
        assert_eq!(
            find_exif(&[0xFF, 0xD8, 0xFF, 0xE1, 0x00, 0x01]),
            Err(JpegError::LengthTooShort { code: 0xE1, len: 1 })
        );
        assert_eq!(
            find_exif(&[0xFF, 0xD8, 0xFF]),
            Err(JpegError::TruncatedMarker { at: 2 })
        );
        assert_eq!(find_exif(&[0x89, b'P']), Err(JpegError::NoStartOfImage));
    }

    #[test]
    fn running_off_the_end_without_eoi() {
        logger();

        // some encoders forget `EOI`
        assert_eq!(find_exif(&[0xFF, 0xD8]), Ok(None));
        assert_eq!(find_exif(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x03, 0xAB]), Ok(None));
    }

    #[test]
    fn offsets_follow_each_segment() {
        logger();

        let body = [
            0xFF, 0xE0, 0x00, 0x04, 0x01, 0x02, // APP0
            0xFF, 0xE2, 0x00, 0x02, // empty APP2
            0xFF, 0xE1, 0x00, 0x03, 0x07, // APP1, not Exif
        ];
        let at: Vec<usize> = Segments::new(&body, 2)
            .map(|s| s.unwrap().at)
            .collect();

        assert_eq!(at, [2, 8, 12]);
    }
}
