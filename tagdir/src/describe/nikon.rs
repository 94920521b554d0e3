//! Nikon maker note descriptors, for both the old (type 1) and newer
//! (type 2) layouts.

use std::sync::LazyLock;

use tagdir_types::{
    tags::nikon::{NikonType1Tag as Type1, NikonType2Tag as Type2},
    value::TagValue,
};

use super::{
    Descriptor::Value, DescriptorTable, decimal, ev, flags, lens_range, lookup, table, version,
};

pub(super) static TYPE1: LazyLock<DescriptorTable> = LazyLock::new(|| {
    table(&[
        (
            Type1::Quality.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (1, "VGA Basic"),
                        (2, "VGA Normal"),
                        (3, "VGA Fine"),
                        (4, "SXGA Basic"),
                        (5, "SXGA Normal"),
                        (6, "SXGA Fine"),
                    ],
                )
            }),
        ),
        (
            Type1::ColorMode.tag_id(),
            Value(|v| lookup(v, &[(1, "Color"), (2, "Monochrome")])),
        ),
        (
            Type1::ImageAdjustment.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0, "Normal"),
                        (1, "Bright +"),
                        (2, "Bright -"),
                        (3, "Contrast +"),
                        (4, "Contrast -"),
                    ],
                )
            }),
        ),
        (
            Type1::CcdSensitivity.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[(0, "ISO80"), (2, "ISO160"), (4, "ISO320"), (5, "ISO100")],
                )
            }),
        ),
        (
            Type1::WhiteBalance.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0, "Auto"),
                        (1, "Preset"),
                        (2, "Daylight"),
                        (3, "Incandescence"),
                        (4, "Florescence"),
                        (5, "Cloudy"),
                        (6, "SpeedLight"),
                    ],
                )
            }),
        ),
        (
            Type1::Focus.tag_id(),
            Value(|v| match v.as_rational()? {
                r if r.numerator == 1 && r.denominator == 0 => Some("Infinite".to_owned()),
                r => Some(decimal(r.to_f64()?)),
            }),
        ),
        (Type1::DigitalZoom.tag_id(), Value(digital_zoom)),
        (
            Type1::Converter.tag_id(),
            Value(|v| lookup(v, &[(0, "None"), (1, "Fisheye converter")])),
        ),
    ])
});

pub(super) static TYPE2: LazyLock<DescriptorTable> = LazyLock::new(|| {
    table(&[
        (Type2::FirmwareVersion.tag_id(), Value(version)),
        (Type2::Iso.tag_id(), Value(iso)),
        (Type2::IsoRequested.tag_id(), Value(iso)),
        (Type2::ProgramShift.tag_id(), Value(packed_ev)),
        (Type2::ExposureDifference.tag_id(), Value(packed_ev)),
        (Type2::AutoFlashCompensation.tag_id(), Value(packed_ev)),
        (Type2::FlashExposureCompensation.tag_id(), Value(packed_ev)),
        (Type2::FlashBracketCompensation.tag_id(), Value(packed_ev)),
        (Type2::AeBracketCompensation.tag_id(), Value(packed_ev)),
        (Type2::LensType.tag_id(), Value(lens_type)),
        (Type2::Lens.tag_id(), Value(lens_range)),
        (Type2::DigitalZoom.tag_id(), Value(digital_zoom)),
        (
            Type2::FlashUsed.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0, "Flash Not Used"),
                        (1, "Manual Flash"),
                        (3, "Flash Not Ready"),
                        (7, "External Flash"),
                        (8, "Fired, Commander Mode"),
                        (9, "Fired, TTL Mode"),
                    ],
                )
            }),
        ),
        (Type2::AfFocusPosition.tag_id(), Value(af_focus_position)),
        (Type2::ShootingMode.tag_id(), Value(shooting_mode)),
        (
            Type2::CameraHueAdjustment.tag_id(),
            Value(|v| Some(format!("{} degrees", v.as_i64()?))),
        ),
    ])
});

fn digital_zoom(value: &TagValue) -> Option<String> {
    let zoom = value.as_f64()?;
    Some(match zoom == 0.0 || zoom == 1.0 {
        true => "No digital zoom".to_owned(),
        false => format!("{}x digital zoom", decimal(zoom)),
    })
}

/// `[0, speed]`
fn iso(value: &TagValue) -> Option<String> {
    match value.as_i64_array()?.as_slice() {
        [_, speed] if *speed != 0 => Some(format!("ISO {speed}")),
        [_, _] => Some("Unknown".to_owned()),
        _ => None,
    }
}

/// Four bytes: a signed numerator, a scale, and a denominator.
fn packed_ev(value: &TagValue) -> Option<String> {
    let [a, b, c, ..] = value.as_bytes()? else {
        return None;
    };
    let (a, b, c) = (f64::from(*a as i8), f64::from(*b), f64::from(*c));

    Some(match c == 0.0 {
        true => ev(0.0),
        false => ev(a * b / c),
    })
}

fn lens_type(value: &TagValue) -> Option<String> {
    let v = value.as_i64()?;

    let mut parts = vec![match v & 0x1 {
        0 => "AF",
        _ => "MF",
    }];
    parts.extend(flags(v, &[(0x2, "D"), (0x4, "G"), (0x8, "VR")]));
    Some(parts.join(", "))
}

fn af_focus_position(value: &TagValue) -> Option<String> {
    let [_, point, ..] = value.as_bytes()? else {
        return None;
    };

    Some(
        match point {
            0 => "Centre",
            1 => "Top",
            2 => "Bottom",
            3 => "Left",
            4 => "Right",
            _ => return Some(format!("Unknown ({point})")),
        }
        .to_owned(),
    )
}

fn shooting_mode(value: &TagValue) -> Option<String> {
    let v = value.as_i64()?;

    let mut parts = vec![match v & 0x1 {
        0 => "Single Frame",
        _ => "Continuous",
    }];
    parts.extend(flags(
        v,
        &[
            (1 << 1, "Delay"),
            (1 << 2, "PC Control"),
            (1 << 4, "Exposure Bracketing"),
            (1 << 5, "Auto ISO"),
            (1 << 6, "White-Balance Bracketing"),
            (1 << 7, "IR Control"),
        ],
    ));
    Some(parts.join(", "))
}

#[cfg(test)]
mod tests {
    use tagdir_types::{
        kind::DirectoryKind,
        primitives::{ByteOrder, Primitive, PrimitiveTy},
        value::TagValue,
    };

    use crate::{describe::describe, exif::Directory, util::logger};

    #[test]
    fn type2_values() {
        logger();

        let mut dir = Directory::new(DirectoryKind::Nikon2, 0, ByteOrder::Big);
        dir.insert(
            0x0002,
            TagValue::Array {
                list: vec![Primitive::Short(0), Primitive::Short(200)],
                ty: PrimitiveTy::Short,
            },
        );
        dir.insert(
            0x000E,
            TagValue::Bytes {
                bytes: vec![0xFE, 1, 6, 0],
                ty: PrimitiveTy::Undefined,
            },
        );
        dir.insert(0x0083, TagValue::Scalar(Primitive::Byte(0x0E)));
        dir.insert(0x0089, TagValue::Scalar(Primitive::Short(0x11)));

        assert_eq!(describe(&dir, 0x0002).as_deref(), Some("ISO 200"));
        assert_eq!(describe(&dir, 0x000E).as_deref(), Some("-0.33 EV"));
        assert_eq!(describe(&dir, 0x0083).as_deref(), Some("AF, D, G, VR"));
        assert_eq!(
            describe(&dir, 0x0089).as_deref(),
            Some("Continuous, Exposure Bracketing")
        );
    }

    #[test]
    fn type1_values() {
        logger();

        let mut dir = Directory::new(DirectoryKind::Nikon1, 0, ByteOrder::Big);
        dir.insert(0x0003, TagValue::Scalar(Primitive::Short(6)));
        dir.insert(0x0007, TagValue::Scalar(Primitive::Short(5)));

        assert_eq!(describe(&dir, 0x0003).as_deref(), Some("SXGA Fine"));
        assert_eq!(describe(&dir, 0x0007).as_deref(), Some("Cloudy"));
    }
}
