//! Descriptors for the standard directories: IFD0 (and the thumbnail IFD),
//! the Exif SubIFD, GPS, and Interop.

use std::sync::LazyLock;

use tagdir_types::{
    tags::exif::{ExifTag, GpsTag, Ifd0Tag, InteropTag},
    value::TagValue,
};

use super::{
    Descriptor::{Directory as Dir, Value},
    DescriptorTable, apex_aperture, apex_time, decimal, dms, ev, exposure_time, flags, floats,
    fnumber, lens_range, lookup, lookup_first, lookup_text, table, version, xp_string,
};
use crate::exif::Directory;

pub(super) static IFD0: LazyLock<DescriptorTable> = LazyLock::new(|| {
    table(&[
        (Ifd0Tag::ImageWidth.tag_id(), Value(pixels)),
        (Ifd0Tag::ImageHeight.tag_id(), Value(pixels)),
        (
            Ifd0Tag::Compression.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (1, "Uncompressed"),
                        (2, "CCITT 1D"),
                        (5, "LZW"),
                        (6, "JPEG (old-style)"),
                        (7, "JPEG"),
                        (8, "Adobe Deflate"),
                        (32773, "PackBits"),
                    ],
                )
            }),
        ),
        (
            Ifd0Tag::PhotometricInterpretation.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0, "WhiteIsZero"),
                        (1, "BlackIsZero"),
                        (2, "RGB"),
                        (3, "RGB Palette"),
                        (5, "CMYK"),
                        (6, "YCbCr"),
                        (32803, "Color Filter Array"),
                    ],
                )
            }),
        ),
        (Ifd0Tag::Orientation.tag_id(), Value(orientation)),
        (Ifd0Tag::XResolution.tag_id(), Dir(x_resolution)),
        (Ifd0Tag::YResolution.tag_id(), Dir(y_resolution)),
        (
            Ifd0Tag::PlanarConfiguration.tag_id(),
            Value(|v| lookup(v, &[(1, "Chunky"), (2, "Planar")])),
        ),
        (
            Ifd0Tag::ResolutionUnit.tag_id(),
            Value(|v| lookup(v, &[(1, "(No unit)"), (2, "Inch"), (3, "cm")])),
        ),
        (
            Ifd0Tag::YCbCrSubSampling.tag_id(),
            Value(|v| match v.as_i64_array()?.as_slice() {
                [2, 1] => Some("YCbCr4:2:2".to_owned()),
                [2, 2] => Some("YCbCr4:2:0".to_owned()),
                [1, 1] => Some("YCbCr4:4:4".to_owned()),
                _ => None,
            }),
        ),
        (
            Ifd0Tag::YCbCrPositioning.tag_id(),
            Value(|v| lookup(v, &[(1, "Center of pixel array"), (2, "Datum point")])),
        ),
        (Ifd0Tag::WindowsTitle.tag_id(), Value(xp_string)),
        (Ifd0Tag::WindowsComment.tag_id(), Value(xp_string)),
        (Ifd0Tag::WindowsAuthor.tag_id(), Value(xp_string)),
        (Ifd0Tag::WindowsKeywords.tag_id(), Value(xp_string)),
        (Ifd0Tag::WindowsSubject.tag_id(), Value(xp_string)),
    ])
});

pub(super) static EXIF: LazyLock<DescriptorTable> = LazyLock::new(|| {
    table(&[
        (
            ExifTag::ExposureTime.tag_id(),
            Value(|v| exposure_time(v.as_f64()?)),
        ),
        (ExifTag::FNumber.tag_id(), Value(|v| Some(fnumber(v.as_f64()?)))),
        (
            ExifTag::ExposureProgram.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0, "Not defined"),
                        (1, "Manual control"),
                        (2, "Program normal"),
                        (3, "Aperture priority"),
                        (4, "Shutter priority"),
                        (5, "Program creative (slow program)"),
                        (6, "Program action (high-speed program)"),
                        (7, "Portrait mode"),
                        (8, "Landscape mode"),
                    ],
                )
            }),
        ),
        (ExifTag::ExifVersion.tag_id(), Value(version)),
        (ExifTag::FlashpixVersion.tag_id(), Value(version)),
        (ExifTag::ComponentsConfiguration.tag_id(), Value(components)),
        (
            ExifTag::ShutterSpeedValue.tag_id(),
            Value(|v| exposure_time(apex_time(v.as_f64()?))),
        ),
        (
            ExifTag::ApertureValue.tag_id(),
            Value(|v| Some(fnumber(apex_aperture(v.as_f64()?)))),
        ),
        (
            ExifTag::MaxApertureValue.tag_id(),
            Value(|v| Some(fnumber(apex_aperture(v.as_f64()?)))),
        ),
        (ExifTag::ExposureBiasValue.tag_id(), Value(|v| Some(ev(v.as_f64()?)))),
        (
            ExifTag::SubjectDistance.tag_id(),
            Value(|v| Some(format!("{} metres", decimal(v.as_f64()?)))),
        ),
        (
            ExifTag::MeteringMode.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0, "Unknown"),
                        (1, "Average"),
                        (2, "Center weighted average"),
                        (3, "Spot"),
                        (4, "Multi-spot"),
                        (5, "Multi-segment"),
                        (6, "Partial"),
                        (255, "(Other)"),
                    ],
                )
            }),
        ),
        (ExifTag::LightSource.tag_id(), Value(light_source)),
        (ExifTag::Flash.tag_id(), Value(flash)),
        (
            ExifTag::FocalLength.tag_id(),
            Value(|v| Some(format!("{} mm", decimal(v.as_f64()?)))),
        ),
        (ExifTag::UserComment.tag_id(), Dir(user_comment)),
        (
            ExifTag::ColorSpace.tag_id(),
            Value(|v| lookup(v, &[(1, "sRGB"), (0xFFFF, "Undefined")])),
        ),
        (ExifTag::PixelXDimension.tag_id(), Value(pixels)),
        (ExifTag::PixelYDimension.tag_id(), Value(pixels)),
        (
            ExifTag::FocalPlaneResolutionUnit.tag_id(),
            Value(|v| lookup(v, &[(1, "(No unit)"), (2, "Inches"), (3, "cm")])),
        ),
        (
            ExifTag::SensingMethod.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (1, "(Not defined)"),
                        (2, "One-chip color area sensor"),
                        (3, "Two-chip color area sensor"),
                        (4, "Three-chip color area sensor"),
                        (5, "Color sequential area sensor"),
                        (7, "Trilinear sensor"),
                        (8, "Color sequential linear sensor"),
                    ],
                )
            }),
        ),
        (
            ExifTag::FileSource.tag_id(),
            Value(|v| {
                lookup_first(
                    v,
                    &[
                        (1, "Film Scanner"),
                        (2, "Reflection Print Scanner"),
                        (3, "Digital Still Camera (DSC)"),
                    ],
                )
            }),
        ),
        (
            ExifTag::SceneType.tag_id(),
            Value(|v| lookup_first(v, &[(1, "Directly photographed image")])),
        ),
        (
            ExifTag::CustomRendered.tag_id(),
            Value(|v| lookup(v, &[(0, "Normal process"), (1, "Custom process")])),
        ),
        (
            ExifTag::ExposureMode.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[(0, "Auto exposure"), (1, "Manual exposure"), (2, "Auto bracket")],
                )
            }),
        ),
        (
            ExifTag::WhiteBalance.tag_id(),
            Value(|v| lookup(v, &[(0, "Auto white balance"), (1, "Manual white balance")])),
        ),
        (
            ExifTag::DigitalZoomRatio.tag_id(),
            Value(|v| {
                let zoom = v.as_f64()?;
                match zoom == 0.0 {
                    true => Some("Digital zoom not used".to_owned()),
                    false => Some(decimal(zoom)),
                }
            }),
        ),
        (
            ExifTag::FocalLengthIn35mmFilm.tag_id(),
            Value(|v| match v.as_i64()? {
                0 => Some("Unknown".to_owned()),
                mm => Some(format!("{mm} mm")),
            }),
        ),
        (
            ExifTag::SceneCaptureType.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[(0, "Standard"), (1, "Landscape"), (2, "Portrait"), (3, "Night scene")],
                )
            }),
        ),
        (
            ExifTag::GainControl.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0, "None"),
                        (1, "Low gain up"),
                        (2, "High gain up"),
                        (3, "Low gain down"),
                        (4, "High gain down"),
                    ],
                )
            }),
        ),
        (
            ExifTag::Contrast.tag_id(),
            Value(|v| lookup(v, &[(0, "Normal"), (1, "Soft"), (2, "Hard")])),
        ),
        (
            ExifTag::Saturation.tag_id(),
            Value(|v| lookup(v, &[(0, "Normal"), (1, "Low saturation"), (2, "High saturation")])),
        ),
        (
            ExifTag::Sharpness.tag_id(),
            Value(|v| lookup(v, &[(0, "Normal"), (1, "Soft"), (2, "Hard")])),
        ),
        (
            ExifTag::SubjectDistanceRange.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[(0, "Unknown"), (1, "Macro"), (2, "Close view"), (3, "Distant view")],
                )
            }),
        ),
        (ExifTag::LensSpecification.tag_id(), Value(lens_range)),
    ])
});

pub(super) static GPS: LazyLock<DescriptorTable> = LazyLock::new(|| {
    table(&[
        (GpsTag::VersionId.tag_id(), Value(version)),
        (
            GpsTag::LatitudeRef.tag_id(),
            Value(|v| lookup_text(v, &[("N", "North"), ("S", "South")])),
        ),
        (GpsTag::Latitude.tag_id(), Dir(latitude)),
        (
            GpsTag::LongitudeRef.tag_id(),
            Value(|v| lookup_text(v, &[("E", "East"), ("W", "West")])),
        ),
        (GpsTag::Longitude.tag_id(), Dir(longitude)),
        (
            GpsTag::AltitudeRef.tag_id(),
            Value(|v| lookup_first(v, &[(0, "Sea level"), (1, "Below sea level")])),
        ),
        (GpsTag::Altitude.tag_id(), Dir(altitude)),
        (GpsTag::TimeStamp.tag_id(), Value(gps_time)),
        (
            GpsTag::Status.tag_id(),
            Value(|v| {
                lookup_text(
                    v,
                    &[
                        ("A", "Active (Measurement in progress)"),
                        ("V", "Void (Measurement Interrupted)"),
                    ],
                )
            }),
        ),
        (
            GpsTag::MeasureMode.tag_id(),
            Value(|v| {
                lookup_text(
                    v,
                    &[("2", "2-dimensional measurement"), ("3", "3-dimensional measurement")],
                )
            }),
        ),
        (
            GpsTag::SpeedRef.tag_id(),
            Value(|v| lookup_text(v, &[("K", "kph"), ("M", "mph"), ("N", "knots")])),
        ),
        (
            GpsTag::ImgDirectionRef.tag_id(),
            Value(|v| lookup_text(v, &[("T", "True direction"), ("M", "Magnetic direction")])),
        ),
        (
            GpsTag::ImgDirection.tag_id(),
            Value(|v| Some(format!("{} degrees", decimal(v.as_f64()?)))),
        ),
        (
            GpsTag::Differential.tag_id(),
            Value(|v| lookup(v, &[(0, "No Correction"), (1, "Differential Corrected")])),
        ),
    ])
});

pub(super) static INTEROP: LazyLock<DescriptorTable> = LazyLock::new(|| {
    table(&[
        (
            InteropTag::InteropIndex.tag_id(),
            Value(|v| match v.as_string()?.trim() {
                "R98" => Some("Recommended Exif Interoperability Rules (ExifR98)".to_owned()),
                "THM" => Some("Thumbnail image".to_owned()),
                _ => None,
            }),
        ),
        (InteropTag::InteropVersion.tag_id(), Value(version)),
    ])
});

fn pixels(value: &TagValue) -> Option<String> {
    Some(format!("{} pixels", value.as_i64()?))
}

fn orientation(value: &TagValue) -> Option<String> {
    lookup(
        value,
        &[
            (1, "Top, left side (Horizontal / normal)"),
            (2, "Top, right side (Mirror horizontal)"),
            (3, "Bottom, right side (Rotate 180)"),
            (4, "Bottom, left side (Mirror vertical)"),
            (5, "Left side, top (Mirror horizontal and rotate 270 CW)"),
            (6, "Right side, top (Rotate 90 CW)"),
            (7, "Right side, bottom (Mirror horizontal and rotate 90 CW)"),
            (8, "Left side, bottom (Rotate 270 CW)"),
        ],
    )
}

/// `72 dots per inch`, using the directory's resolution unit.
fn resolution(directory: &Directory, tag: u16) -> Option<String> {
    let dots = decimal(directory.get_f64(tag)?);
    let unit = match directory.get_i64(Ifd0Tag::ResolutionUnit.tag_id()) {
        Some(3) => "cm",
        Some(1) => return Some(format!("{dots} dots")),
        _ => "inch",
    };
    Some(format!("{dots} dots per {unit}"))
}

fn x_resolution(directory: &Directory) -> Option<String> {
    resolution(directory, Ifd0Tag::XResolution.tag_id())
}

fn y_resolution(directory: &Directory) -> Option<String> {
    resolution(directory, Ifd0Tag::YResolution.tag_id())
}

fn components(value: &TagValue) -> Option<String> {
    const NAMES: [&str; 7] = ["", "Y", "Cb", "Cr", "R", "G", "B"];

    let bytes = value.as_bytes()?;
    Some(
        bytes
            .iter()
            .filter_map(|b| NAMES.get(usize::from(*b)))
            .copied()
            .collect(),
    )
}

fn light_source(value: &TagValue) -> Option<String> {
    lookup(
        value,
        &[
            (0, "Unknown"),
            (1, "Daylight"),
            (2, "Fluorescent"),
            (3, "Tungsten (Incandescent)"),
            (4, "Flash"),
            (9, "Fine weather"),
            (10, "Cloudy"),
            (11, "Shade"),
            (12, "Daylight fluorescent"),
            (13, "Day white fluorescent"),
            (14, "Cool white fluorescent"),
            (15, "White fluorescent"),
            (17, "Standard light A"),
            (18, "Standard light B"),
            (19, "Standard light C"),
            (20, "D55"),
            (21, "D65"),
            (22, "D75"),
            (23, "D50"),
            (24, "ISO studio tungsten"),
            (255, "(Other)"),
        ],
    )
}

/// Flash is a bit field: fired, strobe return, mode, function, red-eye.
fn flash(value: &TagValue) -> Option<String> {
    let v = value.as_i64()?;

    let mut parts = vec![match v & 0x1 {
        0 => "Flash did not fire",
        _ => "Flash fired",
    }];
    match v & 0x6 {
        0x4 => parts.push("return not detected"),
        0x6 => parts.push("return detected"),
        _ => (),
    }
    if v & 0x18 == 0x18 {
        parts.push("auto");
    }
    parts.extend(flags(v, &[(0x20, "no flash function"), (0x40, "red-eye reduction")]));

    Some(parts.join(", "))
}

/// Comments carry their own encoding, and `UNICODE` ones follow the
/// directory's byte order.
fn user_comment(directory: &Directory) -> Option<String> {
    directory.get_comment(ExifTag::UserComment.tag_id())
}

/// Degrees, minutes, seconds, then the hemisphere from the ref tag.
fn coordinate(directory: &Directory, tag: u16, ref_tag: u16) -> Option<String> {
    let dms = dms(directory.get(tag)?)?;
    match directory.get_string(ref_tag) {
        Some(hemisphere) if !hemisphere.trim().is_empty() => {
            Some(format!("{dms} {}", hemisphere.trim()))
        }
        _ => Some(dms),
    }
}

fn latitude(directory: &Directory) -> Option<String> {
    coordinate(directory, GpsTag::Latitude.tag_id(), GpsTag::LatitudeRef.tag_id())
}

fn longitude(directory: &Directory) -> Option<String> {
    coordinate(directory, GpsTag::Longitude.tag_id(), GpsTag::LongitudeRef.tag_id())
}

fn altitude(directory: &Directory) -> Option<String> {
    let metres = decimal(directory.get_f64(GpsTag::Altitude.tag_id())?);
    let below = directory
        .get(GpsTag::AltitudeRef.tag_id())
        .and_then(|v| v.as_i64_array())
        .is_some_and(|r| r.first() == Some(&1));

    Some(match below {
        true => format!("{metres} metres below sea level"),
        false => format!("{metres} metres"),
    })
}

fn gps_time(value: &TagValue) -> Option<String> {
    let [h, m, s] = floats(value)?[..] else {
        return None;
    };
    Some(format!("{h:02.0}:{m:02.0}:{} UTC", decimal_padded(s)))
}

fn decimal_padded(seconds: f64) -> String {
    let s = decimal(seconds);
    match seconds < 10.0 {
        true => format!("0{s}"),
        false => s,
    }
}

#[cfg(test)]
mod tests {
    use tagdir_types::{
        kind::DirectoryKind,
        primitives::{ByteOrder, Primitive, PrimitiveTy, Rational},
        value::TagValue,
    };

    use crate::{describe::describe, exif::Directory, util::logger};

    fn rational(numerator: u32, denominator: u32) -> Primitive {
        Primitive::Rational(Rational {
            numerator,
            denominator,
        })
    }

    #[test]
    fn exif_camera_settings() {
        logger();

        let mut dir = Directory::new(DirectoryKind::Exif, 0, ByteOrder::Big);
        dir.insert(0x829A, TagValue::Scalar(rational(1, 250)));
        dir.insert(0x829D, TagValue::Scalar(rational(28, 10)));
        dir.insert(0x9209, TagValue::Scalar(Primitive::Short(0x19)));
        dir.insert(
            0x9000,
            TagValue::Bytes {
                bytes: b"0231".to_vec(),
                ty: PrimitiveTy::Undefined,
            },
        );
        dir.insert(
            0x9101,
            TagValue::Bytes {
                bytes: vec![1, 2, 3, 0],
                ty: PrimitiveTy::Undefined,
            },
        );

        assert_eq!(describe(&dir, 0x829A).as_deref(), Some("1/250 sec"));
        assert_eq!(describe(&dir, 0x829D).as_deref(), Some("f/2.8"));
        assert_eq!(
            describe(&dir, 0x9209).as_deref(),
            Some("Flash fired, auto")
        );
        assert_eq!(describe(&dir, 0x9000).as_deref(), Some("2.31"));
        assert_eq!(describe(&dir, 0x9101).as_deref(), Some("YCbCr"));
    }

    #[test]
    fn user_comment_follows_byte_order() {
        logger();

        let mut bytes = b"UNICODE\0".to_vec();
        bytes.extend("hey".encode_utf16().flat_map(|u| u.to_be_bytes()));

        let mut dir = Directory::new(DirectoryKind::Exif, 0, ByteOrder::Big);
        dir.insert(
            0x9286,
            TagValue::Bytes {
                bytes,
                ty: PrimitiveTy::Undefined,
            },
        );
        assert_eq!(describe(&dir, 0x9286).as_deref(), Some("hey"));
    }

    #[test]
    fn gps_uses_reference_tags() {
        logger();

        let mut dir = Directory::new(DirectoryKind::Gps, 0, ByteOrder::Little);
        dir.insert(0x0001, TagValue::from("S"));
        dir.insert(
            0x0002,
            TagValue::Array {
                list: vec![rational(33, 1), rational(51, 1), rational(5400, 100)],
                ty: PrimitiveTy::Rational,
            },
        );
        dir.insert(
            0x0005,
            TagValue::Bytes {
                bytes: vec![1],
                ty: PrimitiveTy::Byte,
            },
        );
        dir.insert(0x0006, TagValue::Scalar(rational(12, 1)));
        dir.insert(
            0x0007,
            TagValue::Array {
                list: vec![rational(9, 1), rational(5, 1), rational(3, 1)],
                ty: PrimitiveTy::Rational,
            },
        );

        assert_eq!(describe(&dir, 0x0001).as_deref(), Some("South"));
        assert_eq!(describe(&dir, 0x0002).as_deref(), Some("33° 51' 54\" S"));
        assert_eq!(
            describe(&dir, 0x0006).as_deref(),
            Some("12 metres below sea level")
        );
        assert_eq!(describe(&dir, 0x0007).as_deref(), Some("09:05:03 UTC"));
    }

    #[test]
    fn thumbnail_shares_ifd0_descriptors() {
        logger();

        let mut dir = Directory::new(DirectoryKind::Thumbnail, 0, ByteOrder::Little);
        dir.insert(0x0112, TagValue::Scalar(Primitive::Short(6)));
        dir.insert(0x011A, TagValue::Scalar(rational(72, 1)));
        dir.insert(0x0128, TagValue::Scalar(Primitive::Short(2)));

        assert_eq!(
            describe(&dir, 0x0112).as_deref(),
            Some("Right side, top (Rotate 90 CW)")
        );
        assert_eq!(describe(&dir, 0x011A).as_deref(), Some("72 dots per inch"));
    }
}
