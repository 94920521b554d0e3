use std::sync::LazyLock;

use tagdir_types::{tags::panasonic::PanasonicTag as Tag, value::TagValue};

use super::{Descriptor::Value, DescriptorTable, ev, lookup, signed16, table, version};

pub(super) static PANASONIC: LazyLock<DescriptorTable> = LazyLock::new(|| {
    table(&[
        (
            Tag::QualityMode.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (2, "High"),
                        (3, "Normal"),
                        (6, "Very High"),
                        (7, "Raw"),
                        (9, "Motion Picture"),
                    ],
                )
            }),
        ),
        (Tag::FirmwareVersion.tag_id(), Value(version)),
        (
            Tag::WhiteBalance.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (1, "Auto"),
                        (2, "Daylight"),
                        (3, "Cloudy"),
                        (4, "Incandescent"),
                        (5, "Manual"),
                        (8, "Flash"),
                        (10, "Black & White"),
                        (11, "Manual"),
                        (12, "Shade"),
                    ],
                )
            }),
        ),
        (
            Tag::FocusMode.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (1, "Auto"),
                        (2, "Manual"),
                        (4, "Auto, Focus button"),
                        (5, "Auto, Continuous"),
                    ],
                )
            }),
        ),
        (
            Tag::ImageStabilization.tag_id(),
            Value(|v| lookup(v, &[(2, "On, Mode 1"), (3, "Off"), (4, "On, Mode 2")])),
        ),
        (
            Tag::MacroMode.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[(1, "On"), (2, "Off"), (0x101, "Tele-Macro"), (0x201, "Macro Zoom")],
                )
            }),
        ),
        (Tag::RecordMode.tag_id(), Value(record_mode)),
        (Tag::Audio.tag_id(), Value(|v| lookup(v, &[(1, "Yes"), (2, "No")]))),
        (Tag::WhiteBalanceBias.tag_id(), Value(thirds_ev)),
        (Tag::FlashBias.tag_id(), Value(thirds_ev)),
        (Tag::ExifVersion.tag_id(), Value(version)),
        (
            Tag::ColorEffect.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (1, "Off"),
                        (2, "Warm"),
                        (3, "Cool"),
                        (4, "Black & White"),
                        (5, "Sepia"),
                    ],
                )
            }),
        ),
        (
            Tag::BurstMode.tag_id(),
            Value(|v| lookup(v, &[(0, "Off"), (1, "On"), (2, "Infinite")])),
        ),
        (
            Tag::ContrastMode.tag_id(),
            Value(|v| lookup(v, &[(0, "Normal"), (1, "Low"), (2, "High")])),
        ),
        (
            Tag::NoiseReduction.tag_id(),
            Value(|v| lookup(v, &[(0, "Standard"), (1, "Low (-1)"), (2, "High (+1)")])),
        ),
        (
            Tag::SelfTimer.tag_id(),
            Value(|v| lookup(v, &[(1, "Off"), (2, "10 s"), (3, "2 s")])),
        ),
        (
            Tag::Rotation.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (1, "Horizontal (normal)"),
                        (3, "Rotate 180"),
                        (6, "Rotate 90 CW"),
                        (8, "Rotate 270 CW"),
                    ],
                )
            }),
        ),
        (
            Tag::ColorMode.tag_id(),
            Value(|v| lookup(v, &[(0, "Normal"), (1, "Natural"), (2, "Vivid")])),
        ),
        (Tag::BabyAge.tag_id(), Value(baby_age)),
        (Tag::BabyAge2.tag_id(), Value(baby_age)),
        (Tag::MakerNoteVersion.tag_id(), Value(version)),
    ])
});

fn record_mode(value: &TagValue) -> Option<String> {
    lookup(
        value,
        &[
            (1, "Normal"),
            (2, "Portrait"),
            (3, "Scenery"),
            (4, "Sports"),
            (5, "Night Portrait"),
            (6, "Program"),
            (7, "Aperture Priority"),
            (8, "Shutter Priority"),
            (9, "Macro"),
            (10, "Spot"),
            (11, "Manual"),
            (12, "Movie Preview"),
            (13, "Panning"),
            (14, "Simple"),
            (15, "Color Effects"),
            (18, "Fireworks"),
            (19, "Party"),
            (20, "Snow"),
            (21, "Night Scenery"),
            (22, "Food"),
            (23, "Baby"),
        ],
    )
}

/// Stored in thirds of an EV, as a signed short.
fn thirds_ev(value: &TagValue) -> Option<String> {
    Some(ev(signed16(value.as_i64()?) as f64 / 3.0))
}

/// An unset age is all nines.
fn baby_age(value: &TagValue) -> Option<String> {
    let age = value.as_string()?;
    Some(match age.trim() {
        "9999:99:99 00:00:00" => "(not set)".to_owned(),
        age => age.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use tagdir_types::{
        kind::DirectoryKind,
        primitives::{ByteOrder, Primitive},
        value::TagValue,
    };

    use crate::{describe::describe, exif::Directory, util::logger};

    #[test]
    fn panasonic_values() {
        logger();

        let mut dir = Directory::new(DirectoryKind::Panasonic, 0, ByteOrder::Little);
        dir.insert(0x0001, TagValue::Scalar(Primitive::Short(6)));
        dir.insert(0x0024, TagValue::Scalar(Primitive::Short(0xFFFD)));
        dir.insert(0x0033, TagValue::from("9999:99:99 00:00:00"));

        assert_eq!(describe(&dir, 0x0001).as_deref(), Some("Very High"));
        assert_eq!(describe(&dir, 0x0024).as_deref(), Some("-1 EV"));
        assert_eq!(describe(&dir, 0x0033).as_deref(), Some("(not set)"));
    }
}
