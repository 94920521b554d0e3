use tagdir::{
    ReadError,
    kind::DirectoryKind,
    magic_number::{Container, MagicNumber},
};

fn logger() {
    _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::max())
        .format_file(true)
        .format_line_number(true)
        .try_init();
}

/// A big-endian TIFF with one IFD0 entry: Orientation = 6.
const TIFF: &[u8] = &[
    b'M', b'M', 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08, //
    0x00, 0x01, //
    0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01, 0x00, 0x06, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00,
];

/// Wraps [`TIFF`] in a JPEG: SOI, an APP0, then APP1 with the Exif.
fn jpeg() -> Vec<u8> {
    let mut v = vec![0xFF, 0xD8];

    v.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x07]);
    v.extend_from_slice(b"JFIF\0");

    let app1_len = (2 + 6 + TIFF.len()) as u16;
    v.extend_from_slice(&[0xFF, 0xE1]);
    v.extend_from_slice(app1_len.to_be_bytes().as_slice());
    v.extend_from_slice(b"Exif\0\0");
    v.extend_from_slice(TIFF);

    v.extend_from_slice(&[0xFF, 0xD9]);
    v
}

/// `detect` and `open` agree on every container we support.
#[test]
fn detect_and_open() {
    logger();

    let jpeg = jpeg();
    let files: &[(&[u8], MagicNumber)] = &[
        (jpeg.as_slice(), MagicNumber::Jpeg),
        (TIFF, MagicNumber::Tiff),
    ];

    for (file, ty) in files {
        log::debug!("TEST: {ty:?}");

        assert_eq!(tagdir::detect(file), Some(*ty));

        let container: Container = tagdir::open(file).unwrap();
        assert_eq!(container.magic_number(), *ty);
        assert_eq!(container.tiff_payload(), Some(TIFF));
    }
}

/// Both containers give the same Exif.
#[test]
fn read_both_containers() {
    logger();

    let from_jpeg = tagdir::read(&jpeg()).expect("jpeg has exif");
    let from_tiff = tagdir::read(&TIFF).expect("tiff is exif");
    assert_eq!(from_jpeg, from_tiff);

    let ifd0 = from_tiff.directory(DirectoryKind::Ifd0).unwrap();
    assert_eq!(ifd0.get_u32(0x0112), Some(6));
}

#[test]
fn unknown_files() {
    logger();

    assert_eq!(tagdir::detect(&b"GIF89a"), None);
    assert!(matches!(
        tagdir::open(&b"GIF89a"),
        Err(ReadError::UnknownContainer)
    ));
    assert!(matches!(
        tagdir::read(&b"GIF89a"),
        Err(ReadError::UnknownContainer)
    ));
}

/// A JPEG without APP1 has nothing to read.
#[test]
fn jpeg_without_exif() {
    logger();

    let file = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x02, 0xFF, 0xD9];
    assert_eq!(tagdir::detect(&file), Some(MagicNumber::Jpeg));
    assert!(matches!(tagdir::read(&file), Err(ReadError::NoExif)));
}
