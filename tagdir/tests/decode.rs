//! Decoding whole TIFF blobs built in memory.

mod common;

use common::{Writer, logger};
use tagdir::{
    Exif, ReadOptions,
    exif::error::{DirectoryErrorKind, ErrorFamily},
    kind::DirectoryKind,
    primitives::{ByteOrder, Primitive, Rational},
    value::TagValue,
};

/// A plain IFD0 gives back exactly its entries, and no errors.
#[test]
fn well_formed_ifd0() {
    logger();

    let mut w = Writer::tiff(ByteOrder::Little);
    let entries = [
        w.shorts(0x0100, &[640]),
        w.shorts(0x0101, &[480]),
        w.ascii(0x010F, "Canon"),
        w.ascii(0x0110, "Canon EOS 5D"),
        w.shorts(0x0112, &[6]),
        w.rationals(0x011A, &[(72, 1)]),
    ];
    w.ifd(&entries, 0);

    let exif = Exif::new(&w.bytes).expect("header is fine");
    log::debug!("{exif:#?}");

    assert_eq!(exif.byte_order, ByteOrder::Little);
    assert_eq!(exif.directories.len(), 1);

    let ifd0 = &exif.directories[0];
    assert_eq!(ifd0.kind(), DirectoryKind::Ifd0);
    assert_eq!(ifd0.offset(), 8);
    assert_eq!(ifd0.len(), entries.len());
    assert!(!ifd0.has_errors());

    assert_eq!(ifd0.get_u32(0x0100), Some(640));
    assert_eq!(ifd0.get_string(0x0110).as_deref(), Some("Canon EOS 5D"));
    assert_eq!(exif.make().as_deref(), Some("Canon"));
}

/// Rationals come back exactly as stored, not reduced.
#[test]
fn rationals_are_exact() {
    logger();

    let mut w = Writer::tiff(ByteOrder::Big);
    let exif_pointer = w.longs(0x8769, &[0]);
    let ifd0 = w.ifd(&[exif_pointer], 0);

    let exif_at = w.len() as u32;
    w.patch_u32(ifd0.value_at[0], exif_at);
    w.ifd(
        &[
            w.rationals(0x829A, &[(10, 2500)]),
            w.rationals(0x829D, &[(28, 10)]),
        ],
        0,
    );

    let exif = Exif::new(&w.bytes).unwrap();
    let sub = exif.directory(DirectoryKind::Exif).expect("Exif SubIFD was read");

    assert_eq!(
        sub.get(0x829A),
        Some(&TagValue::Scalar(Primitive::Rational(Rational {
            numerator: 10,
            denominator: 2500
        })))
    );
    assert_eq!(sub.get_f64(0x829D), Some(2.8));
    assert_eq!(
        tagdir::describe::describe(sub, 0x829A).as_deref(),
        Some("1/250 sec")
    );
}

/// A value pointing past the end is an error on that tag alone.
#[test]
fn out_of_bounds_value_is_contained() {
    logger();

    let mut w = Writer::tiff(ByteOrder::Little);
    let written = w.ifd(
        &[
            w.shorts(0x0100, &[640]),
            w.rationals(0x011A, &[(72, 1)]),
            w.shorts(0x0112, &[1]),
        ],
        0,
    );
    // send the rational way past the end
    w.patch_u32(written.value_at[1], 0xFFFF);

    let exif = Exif::new(&w.bytes).unwrap();
    let ifd0 = &exif.directories[0];

    assert_eq!(ifd0.len(), 2);
    assert_eq!(ifd0.get_u32(0x0100), Some(640));
    assert_eq!(ifd0.get_u32(0x0112), Some(1));
    assert!(!ifd0.contains(0x011A));

    let errors = ifd0.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].tag, Some(0x011A));
    assert!(matches!(
        errors[0].kind,
        DirectoryErrorKind::ValueOutOfBounds { offset: 0xFFFF, .. }
    ));
    assert_eq!(errors[0].kind.family(), ErrorFamily::Structural);
}

/// Unknown type codes only cost the entry they're on.
#[test]
fn unknown_type_code() {
    logger();

    let mut w = Writer::tiff(ByteOrder::Little);
    let mut weird = w.shorts(0x0101, &[1]);
    weird.ty = 99;
    w.ifd(&[w.shorts(0x0100, &[1]), weird], 0);

    let exif = Exif::new(&w.bytes).unwrap();
    let ifd0 = &exif.directories[0];

    assert_eq!(ifd0.len(), 1);
    assert_eq!(ifd0.errors()[0].tag, Some(0x0101));
    assert_eq!(
        ifd0.errors()[0].kind,
        DirectoryErrorKind::UnknownType { code: 99 }
    );
    assert_eq!(ifd0.errors()[0].kind.family(), ErrorFamily::Type);
}

/// A next pointer that points at itself is read once.
#[test]
fn self_referential_next_pointer() {
    logger();

    let mut w = Writer::tiff(ByteOrder::Little);
    w.ifd(&[w.shorts(0x0100, &[1])], 8);

    let exif = Exif::new(&w.bytes).unwrap();
    assert_eq!(exif.directories.len(), 1);

    let ifd0 = &exif.directories[0];
    assert_eq!(ifd0.get_u32(0x0100), Some(1));
    assert_eq!(
        ifd0.errors()[0].kind,
        DirectoryErrorKind::Cycle {
            target: DirectoryKind::Thumbnail,
            offset: 8
        }
    );
}

/// A SubIFD pointing back at IFD0 doesn't loop forever.
#[test]
fn sub_ifd_pointing_back() {
    logger();

    let mut w = Writer::tiff(ByteOrder::Big);
    let ifd0 = w.ifd(&[w.longs(0x8769, &[0])], 0);
    let exif_at = w.len() as u32;
    w.patch_u32(ifd0.value_at[0], exif_at);
    w.ifd(&[w.longs(0xA005, &[8])], 0);

    let exif = Exif::new(&w.bytes).unwrap();
    assert_eq!(exif.directories.len(), 2);

    let sub = exif.directory(DirectoryKind::Exif).unwrap();
    assert_eq!(sub.errors().len(), 1);
    assert_eq!(sub.errors()[0].kind.family(), ErrorFamily::Cycle);
}

/// The same bytes read differently depending on the header.
#[test]
fn byte_order_changes_values() {
    logger();

    // one SHORT whose inline bytes are `00 02`
    let ifd = |marker: &[u8; 2], rest: &[u8]| {
        let mut v = marker.to_vec();
        v.extend_from_slice(rest);
        v
    };
    let big = ifd(
        b"MM",
        &[
            0x00, 0x2A, 0x00, 0x00, 0x00, 0x08, // header
            0x00, 0x01, // one entry
            0x01, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01, 0x00, 0x02, 0x00, 0x00, //
            0x00, 0x00, 0x00, 0x00, // no next
        ],
    );
    let little = ifd(
        b"II",
        &[
            0x2A, 0x00, 0x08, 0x00, 0x00, 0x00, // header
            0x01, 0x00, // one entry
            0x00, 0x01, 0x03, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, //
            0x00, 0x00, 0x00, 0x00, // no next
        ],
    );

    let big = Exif::new(&big).unwrap();
    let little = Exif::new(&little).unwrap();

    assert_eq!(big.directories[0].get_u32(0x0100), Some(2));
    assert_eq!(little.directories[0].get_u32(0x0100), Some(512));
}

/// IFD1 comes from IFD0's next pointer.
#[test]
fn thumbnail_follows_ifd0() {
    logger();

    let mut w = Writer::tiff(ByteOrder::Little);
    let ifd0 = w.ifd(&[w.shorts(0x0100, &[4000])], 0);
    let ifd1_at = w.len() as u32;
    w.patch_u32(ifd0.next_at, ifd1_at);
    w.ifd(
        &[
            w.shorts(0x0103, &[6]),
            w.longs(0x0201, &[1234]),
            w.longs(0x0202, &[5678]),
        ],
        0,
    );

    let exif = Exif::new(&w.bytes).unwrap();
    let kinds: Vec<_> = exif.directories.iter().map(|d| d.kind()).collect();
    assert_eq!(kinds, [DirectoryKind::Ifd0, DirectoryKind::Thumbnail]);

    let thumb = exif.directory(DirectoryKind::Thumbnail).unwrap();
    assert_eq!(thumb.name(), "Exif Thumbnail");
    assert_eq!(thumb.get_u32(0x0201), Some(1234));
    assert_eq!(
        tagdir::describe::describe(thumb, 0x0103).as_deref(),
        Some("JPEG (old-style)")
    );
}

/// GPS coordinates, described with their hemisphere.
#[test]
fn gps_directory() {
    logger();

    let mut w = Writer::tiff(ByteOrder::Little);
    let ifd0 = w.ifd(&[w.longs(0x8825, &[0])], 0);
    let gps_at = w.len() as u32;
    w.patch_u32(ifd0.value_at[0], gps_at);
    w.ifd(
        &[
            w.ascii(0x0001, "N"),
            w.rationals(0x0002, &[(37, 1), (46, 1), (2964, 100)]),
        ],
        0,
    );

    let exif = Exif::new(&w.bytes).unwrap();
    let gps = exif.directory(DirectoryKind::Gps).unwrap();

    assert_eq!(gps.label(0x0002), Some("GPS Latitude"));
    assert_eq!(
        tagdir::describe::describe(gps, 0x0002).as_deref(),
        Some("37° 46' 29.64\" N")
    );
}

/// Reading stops once the limit is hit, and says so.
#[test]
fn directory_limit() {
    logger();

    let mut w = Writer::tiff(ByteOrder::Little);
    let ifd0 = w.ifd(&[w.longs(0x8769, &[0]), w.longs(0x8825, &[0])], 0);

    let exif_at = w.len() as u32;
    w.patch_u32(ifd0.value_at[0], exif_at);
    w.ifd(&[w.shorts(0x9207, &[5])], 0);

    let gps_at = w.len() as u32;
    w.patch_u32(ifd0.value_at[1], gps_at);
    w.ifd(&[w.ascii(0x0001, "N")], 0);

    let everything = Exif::new(&w.bytes).unwrap();
    assert_eq!(everything.directories.len(), 3);

    let limited = Exif::with_options(&w.bytes, &ReadOptions::default().max_directories(2)).unwrap();
    assert_eq!(limited.directories.len(), 2);
    assert!(limited.directory(DirectoryKind::Gps).is_none());

    let ifd0 = limited.directory(DirectoryKind::Ifd0).unwrap();
    assert!(
        ifd0.errors()
            .iter()
            .any(|e| e.kind == DirectoryErrorKind::TooManyDirectories { limit: 2 })
    );
}

/// Pointers past the end are errors on the directory that held them.
#[test]
fn pointer_out_of_bounds() {
    logger();

    let mut w = Writer::tiff(ByteOrder::Little);
    w.ifd(&[w.longs(0x8769, &[0xFFFF_FF00])], 0);

    let exif = Exif::new(&w.bytes).unwrap();
    assert_eq!(exif.directories.len(), 1);

    let ifd0 = &exif.directories[0];
    // the pointer itself is still a tag
    assert_eq!(ifd0.get_u32(0x8769), Some(0xFFFF_FF00));
    assert_eq!(
        ifd0.errors()[0].kind,
        DirectoryErrorKind::PointerOutOfBounds {
            target: DirectoryKind::Exif,
            offset: 0xFFFF_FF00
        }
    );
}

/// A table cut short keeps what it could read.
#[test]
fn truncated_entry_table() {
    logger();

    let mut w = Writer::tiff(ByteOrder::Little);
    w.ifd(&[w.shorts(0x0100, &[1]), w.shorts(0x0101, &[2])], 0);
    // claim five entries instead of two, and chop off the next pointer
    w.bytes[8] = 5;
    let len = w.len() - 4;
    w.bytes.truncate(len);

    let exif = Exif::new(&w.bytes).unwrap();
    let ifd0 = &exif.directories[0];

    assert_eq!(ifd0.len(), 2);
    assert_eq!(
        ifd0.errors()[0].kind,
        DirectoryErrorKind::EntriesTruncated {
            declared: 5,
            read: 2
        }
    );
}

/// A header that's broken is the only fatal error.
#[test]
fn fatal_headers() {
    logger();

    assert!(Exif::new(b"").is_err());
    assert!(Exif::new(b"XX\x2a\0\x08\0\0\0").is_err());
    assert!(Exif::new(b"II\x2b\0\x08\0\0\0").is_err());
    assert!(Exif::new(b"II\x2a\0\x04\0\0\0").is_err());
}

/// Every tag gets a description, even the ones no table knows.
#[test]
fn describe_all() {
    logger();

    let mut w = Writer::tiff(ByteOrder::Little);
    w.ifd(&[w.shorts(0x0112, &[6]), w.shorts(0xBEEF, &[3, 4])], 0);

    let exif = Exif::new(&w.bytes).unwrap();
    let described = exif.describe_all();
    log::debug!("{described:#?}");

    assert!(described.contains(&(
        "Exif IFD0",
        "Orientation".to_string(),
        "Right side, top (Rotate 90 CW)".to_string()
    )));
    assert!(
        described
            .iter()
            .any(|(_, label, value)| label == "Unknown tag (0xbeef)" && value == "3 4")
    );
}
