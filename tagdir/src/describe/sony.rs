use std::sync::LazyLock;

use tagdir_types::{tags::sony::SonyTag as Tag, value::TagValue};

use super::{Descriptor::Value, DescriptorTable, ev, lookup, table};

pub(super) static SONY: LazyLock<DescriptorTable> = LazyLock::new(|| {
    table(&[
        (
            Tag::Quality.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0, "RAW"),
                        (1, "Super Fine"),
                        (2, "Fine"),
                        (3, "Standard"),
                        (4, "Economy"),
                        (5, "Extra Fine"),
                        (6, "RAW + JPEG"),
                        (7, "Compressed RAW"),
                        (8, "Compressed RAW + JPEG"),
                    ],
                )
            }),
        ),
        (
            Tag::FlashExposureComp.tag_id(),
            Value(|v| Some(ev(v.as_f64()?))),
        ),
        (
            Tag::Teleconverter.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0x00, "None"),
                        (0x48, "Minolta AF 2x APO (D)"),
                        (0x50, "Minolta AF 2x APO II"),
                        (0x88, "Minolta AF 1.4x APO (D)"),
                        (0x90, "Minolta AF 1.4x APO II"),
                    ],
                )
            }),
        ),
        (Tag::WhiteBalance.tag_id(), Value(white_balance)),
        (Tag::WhiteBalance2.tag_id(), Value(white_balance)),
        (Tag::LongExposureNoiseReduction.tag_id(), Value(off_on)),
        (
            Tag::HighIsoNoiseReduction.tag_id(),
            Value(|v| lookup(v, &[(0, "Off"), (1, "Low"), (2, "Normal"), (3, "High")])),
        ),
        (
            Tag::MultiFrameNoiseReduction.tag_id(),
            Value(|v| lookup(v, &[(0, "Off"), (1, "On"), (255, "N/A")])),
        ),
        (
            Tag::ColorTemperature.tag_id(),
            Value(|v| match v.as_i64()? {
                0 => Some("Auto".to_owned()),
                kelvin => Some(format!("{kelvin} K")),
            }),
        ),
        (Tag::SceneMode.tag_id(), Value(scene_mode)),
        (
            Tag::ZoneMatching.tag_id(),
            Value(|v| lookup(v, &[(0, "ISO Setting Used"), (1, "High Key"), (2, "Low Key")])),
        ),
        (
            Tag::DynamicRangeOptimizer.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0, "Off"),
                        (1, "Standard"),
                        (2, "Advanced Auto"),
                        (3, "Auto"),
                        (8, "Advanced Lv1"),
                        (9, "Advanced Lv2"),
                        (10, "Advanced Lv3"),
                        (11, "Advanced Lv4"),
                        (12, "Advanced Lv5"),
                    ],
                )
            }),
        ),
        (
            Tag::ImageStabilization.tag_id(),
            Value(|v| lookup(v, &[(0, "Off"), (1, "On"), (0xFFFF_FFFF, "N/A")])),
        ),
        (
            Tag::ColorMode.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0, "Standard"),
                        (1, "Vivid"),
                        (2, "Portrait"),
                        (3, "Landscape"),
                        (4, "Sunset"),
                        (5, "Night View/Portrait"),
                        (6, "B&W"),
                        (7, "Adobe RGB"),
                        (12, "Neutral"),
                    ],
                )
            }),
        ),
        (
            Tag::Macro.tag_id(),
            Value(|v| lookup(v, &[(0, "Off"), (1, "On"), (2, "Close Focus"), (65535, "N/A")])),
        ),
        (Tag::ExposureMode.tag_id(), Value(exposure_mode)),
        (
            Tag::FocusMode.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[(1, "AF-S"), (2, "AF-C"), (4, "Permanent-AF"), (65535, "N/A")],
                )
            }),
        ),
        (
            Tag::AfIlluminator.tag_id(),
            Value(|v| lookup(v, &[(0, "Off"), (1, "Auto"), (65535, "N/A")])),
        ),
        (
            Tag::JpegQuality.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[(0, "Normal"), (1, "Fine"), (2, "Extra Fine"), (65535, "N/A")],
                )
            }),
        ),
        (
            Tag::ReleaseMode.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0, "Normal"),
                        (2, "Continuous"),
                        (5, "Exposure Bracketing"),
                        (6, "White Balance Bracketing"),
                        (8, "DRO Bracketing"),
                        (65535, "N/A"),
                    ],
                )
            }),
        ),
        (
            Tag::AntiBlur.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0, "Off"),
                        (1, "On (Continuous)"),
                        (2, "On (Shooting)"),
                        (65535, "N/A"),
                    ],
                )
            }),
        ),
        (
            Tag::IntelligentAuto.tag_id(),
            Value(|v| lookup(v, &[(0, "Off"), (1, "On"), (2, "Advanced")])),
        ),
    ])
});

fn off_on(value: &TagValue) -> Option<String> {
    lookup(value, &[(0, "Off"), (1, "On"), (65535, "N/A")])
}

fn white_balance(value: &TagValue) -> Option<String> {
    lookup(
        value,
        &[
            (0x00, "Auto"),
            (0x01, "Color Temperature/Color Filter"),
            (0x10, "Daylight"),
            (0x20, "Cloudy"),
            (0x30, "Shade"),
            (0x40, "Tungsten"),
            (0x50, "Flash"),
            (0x60, "Fluorescent"),
            (0x70, "Custom"),
        ],
    )
}

fn scene_mode(value: &TagValue) -> Option<String> {
    lookup(
        value,
        &[
            (0, "Standard"),
            (1, "Portrait"),
            (2, "Text"),
            (3, "Night Scene"),
            (4, "Sunset"),
            (5, "Sports"),
            (6, "Landscape"),
            (7, "Night Portrait"),
            (8, "Macro"),
            (9, "Super Macro"),
            (16, "Auto"),
            (17, "Night View/Portrait"),
        ],
    )
}

fn exposure_mode(value: &TagValue) -> Option<String> {
    lookup(
        value,
        &[
            (0, "Program AE"),
            (1, "Portrait"),
            (2, "Beach"),
            (3, "Sports"),
            (4, "Snow"),
            (5, "Landscape"),
            (6, "Auto"),
            (7, "Aperture-priority AE"),
            (8, "Shutter speed priority AE"),
            (9, "Night Scene / Twilight"),
            (10, "Hi-Speed Shutter"),
            (11, "Twilight Portrait"),
            (12, "Soft Snap/Portrait"),
            (13, "Fireworks"),
            (14, "Smile Shutter"),
            (15, "Manual"),
            (18, "High Sensitivity"),
            (19, "Macro"),
            (20, "Advanced Sports Shooting"),
            (29, "Underwater"),
            (33, "Food"),
            (34, "Sweep Panorama"),
            (65535, "N/A"),
        ],
    )
}
