//! Maker notes from each framing we know, plus the ones we don't.

mod common;

use common::{Entry, Writer, logger};
use tagdir::{
    Exif, ReadOptions,
    describe::describe,
    exif::error::{DirectoryErrorKind, ErrorFamily},
    kind::DirectoryKind,
    makernote::OffsetBase,
    primitives::ByteOrder,
    value::TagValue,
};

/// Builds IFD0 (with `Make`) and an Exif SubIFD whose maker note is written
/// last, by `note`. The closure gets the note's starting offset.
fn with_maker_note(order: ByteOrder, make: &str, note: impl FnOnce(&mut Writer, usize)) -> Vec<u8> {
    let mut w = Writer::tiff(order);
    let ifd0 = w.ifd(&[w.ascii(0x010F, make), w.longs(0x8769, &[0])], 0);

    let exif_at = w.len() as u32;
    w.patch_u32(ifd0.value_at[1], exif_at);

    // count and offset are filled in once the note exists
    let sub = w.ifd(
        &[Entry {
            tag: 0x927C,
            ty: 7,
            count: 0,
            data: vec![0; 4],
        }],
        0,
    );

    let note_at = w.len();
    w.patch_u32(sub.value_at[0], note_at as u32);
    note(&mut w, note_at);

    let note_len = (w.len() - note_at) as u32;
    w.patch_u32(sub.value_at[0] - 4, note_len);
    w.bytes
}

fn maker_note_errors(exif: &Exif, kind: DirectoryKind) -> Vec<DirectoryErrorKind> {
    exif.directory(kind)
        .map(|d| d.errors().iter().map(|e| e.kind.clone()).collect())
        .unwrap_or_default()
}

/// Canon notes have no header at all, so `Make` picks the layout.
#[test]
fn canon_headerless() {
    logger();

    let blob = with_maker_note(ByteOrder::Little, "Canon", |w, _| {
        w.ifd(
            &[
                w.shorts(0x0001, &[8, 1, 100, 5]),
                w.ascii(0x0006, "IMG:EOS 5D JPEG"),
                w.longs(0x000C, &[0x0123_0066]),
            ],
            0,
        );
    });

    let exif = Exif::new(&blob).unwrap();
    log::debug!("{:#?}", exif.directories);

    let canon = exif.directory(DirectoryKind::Canon).expect("Canon note was read");
    assert!(!canon.has_errors());
    assert_eq!(canon.name(), "Canon Makernote");

    // camera settings were split, one tag per element
    assert!(!canon.contains(0x0001));
    assert_eq!(canon.get_u32(0xC100), Some(8));
    assert_eq!(describe(canon, 0xC101).as_deref(), Some("Macro"));
    assert_eq!(describe(canon, 0xC102).as_deref(), Some("10 sec"));
    assert_eq!(describe(canon, 0xC103).as_deref(), Some("Superfine"));

    assert_eq!(canon.get_string(0x0006).as_deref(), Some("IMG:EOS 5D JPEG"));
    assert_eq!(describe(canon, 0x000C).as_deref(), Some("012300102"));
}

/// Splitting can be turned off.
#[test]
fn canon_without_splitting() {
    logger();

    let blob = with_maker_note(ByteOrder::Little, "Canon", |w, _| {
        w.ifd(&[w.shorts(0x0001, &[8, 1, 100, 5])], 0);
    });

    let exif = Exif::with_options(&blob, &ReadOptions::default().split_arrays(false)).unwrap();
    let canon = exif.directory(DirectoryKind::Canon).unwrap();

    assert_eq!(canon.get_u16_array(0x0001), Some(vec![8, 1, 100, 5]));
    assert!(!canon.contains(0xC101));
}

/// Nikon type 2 embeds its own TIFF header, which picks both the byte
/// order and the offset base.
#[test]
fn nikon_embedded_header() {
    logger();

    let blob = with_maker_note(ByteOrder::Little, "NIKON CORPORATION", |w, note_at| {
        w.raw(b"Nikon\0\x02\x10\0\0");

        let header_at = note_at + 10;
        w.order = ByteOrder::Big;
        w.raw(b"MM");
        w.u16(42);
        w.u32(8);

        let entries = [
            w.shorts(0x0002, &[0, 200]),
            w.rationals(0x0084, &[(18, 1), (55, 1), (35, 10), (56, 10)]),
        ];
        w.ifd_based(&entries, 0, header_at);
        w.order = ByteOrder::Little;
    });

    let exif = Exif::new(&blob).unwrap();
    let nikon = exif.directory(DirectoryKind::Nikon2).expect("Nikon note was read");

    assert_eq!(nikon.byte_order(), ByteOrder::Big);
    assert!(!nikon.has_errors());
    assert_eq!(describe(nikon, 0x0002).as_deref(), Some("ISO 200"));
    assert_eq!(describe(nikon, 0x0084).as_deref(), Some("18-55mm f/3.5-5.6"));
}

/// A broken embedded header still leaves an (empty) directory behind.
#[test]
fn nikon_broken_header() {
    logger();

    let blob = with_maker_note(ByteOrder::Little, "NIKON", |w, _| {
        w.raw(b"Nikon\0\x02\x10\0\0");
        w.raw(b"MM\0\x2b\0\0\0\x08");
        w.raw(&[0; 8]);
    });

    let exif = Exif::new(&blob).unwrap();
    let nikon = exif.directory(DirectoryKind::Nikon2).unwrap();

    assert!(nikon.is_empty());
    assert!(matches!(
        nikon.errors()[0].kind,
        DirectoryErrorKind::BadMakerNoteHeader { .. }
    ));
    assert_eq!(nikon.errors()[0].kind.family(), ErrorFamily::MakerNote);
}

/// Olympus "type II" notes count offsets from the note itself, and point
/// at more directories inside it.
#[test]
fn olympus_with_sub_directories() {
    logger();

    let blob = with_maker_note(ByteOrder::Big, "OLYMPUS IMAGING CORP.", |w, note_at| {
        w.raw(b"OLYMPUS\0MM\x03\0");

        let main = w.ifd_based(
            &[
                w.longs(0x0200, &[3, 2, 1]),
                w.shorts(0x0201, &[3]),
                w.longs(0x2010, &[0]),
            ],
            0,
            note_at,
        );

        let equipment_at = (w.len() - note_at) as u32;
        w.patch_u32(main.value_at[2], equipment_at);
        w.ifd_based(&[w.ascii(0x0101, "BHP123456")], 0, note_at);
    });

    let exif = Exif::new(&blob).unwrap();

    let olympus = exif.directory(DirectoryKind::Olympus).unwrap();
    assert!(!olympus.has_errors());
    assert_eq!(
        describe(olympus, 0x0200).as_deref(),
        Some("Panorama picture taking mode / Sequence number 2 / Left to right")
    );
    assert_eq!(describe(olympus, 0x0201).as_deref(), Some("SHQ"));

    let equipment = exif.directory(DirectoryKind::OlympusEquipment).unwrap();
    assert_eq!(equipment.name(), "Olympus Equipment");
    assert_eq!(equipment.get_string(0x0101).as_deref(), Some("BHP123456"));
}

/// Fujifilm notes are always little-endian, whatever the file says.
#[test]
fn fujifilm_fixed_order() {
    logger();

    let blob = with_maker_note(ByteOrder::Big, "FUJIFILM", |w, note_at| {
        w.raw(b"FUJIFILM");
        w.raw(12_u32.to_le_bytes().as_slice());

        w.order = ByteOrder::Little;
        let entries = [w.shorts(0x1002, &[0x302]), w.ascii(0x0000, "0130")];
        w.ifd_based(&entries, 0, note_at);
        w.order = ByteOrder::Big;
    });

    let exif = Exif::new(&blob).unwrap();
    assert_eq!(exif.byte_order, ByteOrder::Big);

    let fuji = exif.directory(DirectoryKind::Fujifilm).unwrap();
    assert_eq!(fuji.byte_order(), ByteOrder::Little);
    assert_eq!(describe(fuji, 0x1002).as_deref(), Some("White Fluorescent"));
}

/// Pentax `AOC` notes are read, but with a warning about their offsets.
#[test]
fn pentax_ambiguous_base() {
    logger();

    let blob = with_maker_note(ByteOrder::Big, "PENTAX Corporation", |w, _| {
        w.raw(b"AOC\0MM");
        w.ifd(&[w.shorts(0x0002, &[2]), w.shorts(0x0014, &[16])], 0);
    });

    let exif = Exif::new(&blob).unwrap();
    let pentax = exif.directory(DirectoryKind::Pentax).unwrap();

    assert_eq!(describe(pentax, 0x0002).as_deref(), Some("Best"));
    assert_eq!(describe(pentax, 0x0014).as_deref(), Some("ISO 200"));

    let errors = maker_note_errors(&exif, DirectoryKind::Pentax);
    assert_eq!(
        errors,
        [DirectoryErrorKind::AmbiguousOffsetBase {
            assumed: OffsetBase::MakerNote
        }]
    );
    assert!(errors[0].is_warning());
}

/// Notes nobody recognizes stay as raw bytes, with a warning.
#[test]
fn unrecognized_maker_note() {
    logger();

    let blob = with_maker_note(ByteOrder::Little, "LEICA", |w, _| {
        w.raw(b"LEICA\0\x01\0");
        w.raw(&[0xAB; 16]);
    });

    let exif = Exif::new(&blob).unwrap();
    assert_eq!(exif.directories.len(), 2);

    let sub = exif.directory(DirectoryKind::Exif).unwrap();
    assert!(matches!(
        sub.get(0x927C),
        Some(TagValue::Bytes { bytes, .. }) if bytes.starts_with(b"LEICA")
    ));

    let error = &sub.errors()[0];
    assert_eq!(error.tag, Some(0x927C));
    assert_eq!(
        error.kind,
        DirectoryErrorKind::UnrecognizedMakerNote {
            make: Some("LEICA".to_string())
        }
    );
    assert!(error.kind.is_warning());
}

/// With maker notes off, the note is only ever a blob.
#[test]
fn maker_notes_off() {
    logger();

    let blob = with_maker_note(ByteOrder::Little, "Canon", |w, _| {
        w.ifd(&[w.shorts(0x0001, &[8, 1, 100, 5])], 0);
    });

    let exif = Exif::with_options(&blob, &ReadOptions::default().maker_notes(false)).unwrap();
    assert_eq!(exif.directories.len(), 2);
    assert!(exif.directory(DirectoryKind::Canon).is_none());

    let sub = exif.directory(DirectoryKind::Exif).unwrap();
    assert!(matches!(sub.get(0x927C), Some(TagValue::Bytes { .. })));
    assert!(!sub.has_errors());
}
