//! Olympus maker note descriptors, including the equipment and camera
//! settings sub-IFDs.

use std::sync::LazyLock;

use tagdir_types::{
    tags::olympus::{
        OlympusCameraSettingsTag as Settings, OlympusEquipmentTag as Equipment, OlympusTag,
    },
    value::TagValue,
};

use super::{
    Descriptor::Value, DescriptorTable, decimal, ev, flags, lookup, lookup_first, name_of, table,
    version,
};

pub(super) static OLYMPUS: LazyLock<DescriptorTable> = LazyLock::new(|| {
    table(&[
        (OlympusTag::SpecialMode.tag_id(), Value(special_mode)),
        (
            OlympusTag::JpegQuality.tag_id(),
            Value(|v| lookup(v, &[(1, "SQ"), (2, "HQ"), (3, "SHQ"), (4, "RAW")])),
        ),
        (
            OlympusTag::Macro.tag_id(),
            Value(|v| lookup(v, &[(0, "Normal (no macro)"), (1, "Macro"), (2, "Super Macro")])),
        ),
        (
            OlympusTag::BwMode.tag_id(),
            Value(|v| lookup(v, &[(0, "Off"), (1, "On")])),
        ),
        (
            OlympusTag::DigitalZoom.tag_id(),
            Value(|v| {
                let zoom = v.as_f64()?;
                Some(match zoom == 0.0 {
                    true => "Digital zoom not used".to_owned(),
                    false => format!("{}x", decimal(zoom)),
                })
            }),
        ),
        (OlympusTag::FocalPlaneDiagonal.tag_id(), Value(millimetres)),
        (
            OlympusTag::FlashMode.tag_id(),
            Value(|v| lookup(v, &[(2, "On"), (3, "Off")])),
        ),
        (
            OlympusTag::FocusMode.tag_id(),
            Value(|v| lookup(v, &[(0, "Auto"), (1, "Manual")])),
        ),
        (
            OlympusTag::Contrast.tag_id(),
            Value(|v| lookup(v, &[(0, "High"), (1, "Normal"), (2, "Low")])),
        ),
    ])
});

pub(super) static EQUIPMENT: LazyLock<DescriptorTable> = LazyLock::new(|| {
    table(&[
        (Equipment::EquipmentVersion.tag_id(), Value(version)),
        (Equipment::FocalPlaneDiagonal.tag_id(), Value(millimetres)),
        (Equipment::MinFocalLength.tag_id(), Value(millimetres)),
        (Equipment::MaxFocalLength.tag_id(), Value(millimetres)),
    ])
});

pub(super) static CAMERA_SETTINGS: LazyLock<DescriptorTable> = LazyLock::new(|| {
    table(&[
        (Settings::CameraSettingsVersion.tag_id(), Value(version)),
        (
            Settings::PreviewImageValid.tag_id(),
            Value(|v| lookup(v, &[(0, "No"), (1, "Yes")])),
        ),
        (
            Settings::ExposureMode.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (1, "Manual"),
                        (2, "Program"),
                        (3, "Aperture-priority AE"),
                        (4, "Shutter speed priority AE"),
                        (5, "Program-shift"),
                    ],
                )
            }),
        ),
        (
            Settings::AeLock.tag_id(),
            Value(|v| lookup(v, &[(0, "Off"), (1, "On")])),
        ),
        (
            Settings::MeteringMode.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (2, "Center-weighted average"),
                        (3, "Spot"),
                        (5, "ESP"),
                        (261, "Pattern+AF"),
                        (515, "Spot+Highlight control"),
                        (1027, "Spot+Shadow control"),
                    ],
                )
            }),
        ),
        (
            Settings::ExposureShift.tag_id(),
            Value(|v| Some(ev(v.as_f64()?))),
        ),
        (
            Settings::MacroMode.tag_id(),
            Value(|v| lookup(v, &[(0, "Off"), (1, "On"), (2, "Super Macro")])),
        ),
        (
            Settings::FocusMode.tag_id(),
            Value(|v| {
                lookup_first(
                    v,
                    &[
                        (0, "Single AF"),
                        (1, "Sequential shooting AF"),
                        (2, "Continuous AF"),
                        (3, "Multi AF"),
                        (4, "Face detect"),
                        (10, "MF"),
                    ],
                )
            }),
        ),
        (Settings::FlashMode.tag_id(), Value(flash_mode)),
        (
            Settings::ImageStabilization.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0, "Off"),
                        (1, "On, Mode 1"),
                        (2, "On, Mode 2"),
                        (3, "On, Mode 3"),
                    ],
                )
            }),
        ),
    ])
});

fn millimetres(value: &TagValue) -> Option<String> {
    Some(format!("{} mm", decimal(value.as_f64()?)))
}

/// Three longs: the mode, the sequence number, and the panorama direction.
fn special_mode(value: &TagValue) -> Option<String> {
    let [mode, sequence, direction] = value.as_i64_array()?[..] else {
        return None;
    };

    let mut description = name_of(
        mode,
        &[
            (0, "Normal picture taking mode"),
            (1, "Unknown picture taking mode"),
            (2, "Fast picture taking mode"),
            (3, "Panorama picture taking mode"),
        ],
    );
    description.push_str(&format!(" / Sequence number {sequence}"));

    if mode == 3 {
        description.push_str(" / ");
        description.push_str(&name_of(
            direction,
            &[
                (1, "Left to right"),
                (2, "Right to left"),
                (3, "Bottom to top"),
                (4, "Top to bottom"),
            ],
        ));
    }

    Some(description)
}

fn flash_mode(value: &TagValue) -> Option<String> {
    let v = value.as_i64()?;
    if v == 0 {
        return Some("Off".to_owned());
    }

    let set = flags(
        v,
        &[
            (1 << 0, "On"),
            (1 << 1, "Fill-in"),
            (1 << 2, "Red-eye"),
            (1 << 3, "Slow-sync"),
            (1 << 4, "Forced On"),
            (1 << 5, "2nd Curtain"),
        ],
    );
    Some(set.join(", "))
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
    fn special_mode() {
        logger();

        let mut dir = Directory::new(DirectoryKind::Olympus, 0, ByteOrder::Big);
        dir.insert(
            0x0200,
            TagValue::Array {
                list: vec![Primitive::Long(3), Primitive::Long(2), Primitive::Long(1)],
                ty: PrimitiveTy::Long,
            },
        );
        dir.insert(0x0201, TagValue::Scalar(Primitive::Short(3)));

        assert_eq!(
            describe(&dir, 0x0200).as_deref(),
            Some("Panorama picture taking mode / Sequence number 2 / Left to right")
        );
        assert_eq!(describe(&dir, 0x0201).as_deref(), Some("SHQ"));
    }

    #[test]
    fn camera_settings() {
        logger();

        let mut dir = Directory::new(DirectoryKind::OlympusCameraSettings, 0, ByteOrder::Big);
        dir.insert(
            0x0301,
            TagValue::Array {
                list: vec![Primitive::Short(2), Primitive::Short(0)],
                ty: PrimitiveTy::Short,
            },
        );
        dir.insert(0x0400, TagValue::Scalar(Primitive::Short(0b1001)));

        assert_eq!(describe(&dir, 0x0301).as_deref(), Some("Continuous AF"));
        assert_eq!(describe(&dir, 0x0400).as_deref(), Some("On, Slow-sync"));
    }
}
