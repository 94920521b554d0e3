use std::sync::LazyLock;

use tagdir_types::{tags::fujifilm::FujifilmTag as Tag, value::TagValue};

use super::{Descriptor::Value, DescriptorTable, decimal, ev, lookup, table, version};

pub(super) static FUJIFILM: LazyLock<DescriptorTable> = LazyLock::new(|| {
    table(&[
        (Tag::MakerNoteVersion.tag_id(), Value(version)),
        (
            Tag::Sharpness.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (1, "Softest"),
                        (2, "Soft"),
                        (3, "Normal"),
                        (4, "Hard"),
                        (5, "Hardest"),
                        (0x82, "Medium Soft"),
                        (0x84, "Medium Hard"),
                        (0x8000, "Film Simulation"),
                        (0xFFFF, "N/A"),
                    ],
                )
            }),
        ),
        (
            Tag::WhiteBalance.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0x000, "Auto"),
                        (0x100, "Daylight"),
                        (0x200, "Cloudy"),
                        (0x300, "Daylight Fluorescent"),
                        (0x301, "Day White Fluorescent"),
                        (0x302, "White Fluorescent"),
                        (0x400, "Incandescent"),
                        (0x500, "Flash"),
                        (0xF00, "Custom White Balance"),
                    ],
                )
            }),
        ),
        (Tag::ColorSaturation.tag_id(), Value(saturation_or_tone)),
        (Tag::Tone.tag_id(), Value(saturation_or_tone)),
        (
            Tag::Contrast.tag_id(),
            Value(|v| lookup(v, &[(0, "Normal"), (0x100, "High"), (0x300, "Low")])),
        ),
        (
            Tag::NoiseReduction.tag_id(),
            Value(|v| lookup(v, &[(0x40, "Low"), (0x80, "Normal"), (0x100, "N/A")])),
        ),
        (
            Tag::HighIsoNoiseReduction.tag_id(),
            Value(|v| lookup(v, &[(0, "Normal"), (0x100, "Strong"), (0x200, "Weak")])),
        ),
        (
            Tag::FlashMode.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0, "Auto"),
                        (1, "On"),
                        (2, "Off"),
                        (3, "Red-eye reduction"),
                        (4, "External"),
                    ],
                )
            }),
        ),
        (
            Tag::FlashExposureCompensation.tag_id(),
            Value(|v| Some(ev(v.as_f64()?))),
        ),
        (Tag::Macro.tag_id(), Value(off_on)),
        (
            Tag::FocusMode.tag_id(),
            Value(|v| lookup(v, &[(0, "Auto"), (1, "Manual")])),
        ),
        (Tag::SlowSync.tag_id(), Value(off_on)),
        (Tag::PictureMode.tag_id(), Value(picture_mode)),
        (
            Tag::AutoBracketing.tag_id(),
            Value(|v| lookup(v, &[(0, "Off"), (1, "On"), (2, "No flash & flash")])),
        ),
        (
            Tag::BlurWarning.tag_id(),
            Value(|v| lookup(v, &[(0, "No blur warning"), (1, "Blur warning")])),
        ),
        (
            Tag::FocusWarning.tag_id(),
            Value(|v| lookup(v, &[(0, "Good focus"), (1, "Out of focus")])),
        ),
        (
            Tag::AutoExposureWarning.tag_id(),
            Value(|v| lookup(v, &[(0, "AE good"), (1, "Over exposed")])),
        ),
        (
            Tag::DynamicRange.tag_id(),
            Value(|v| lookup(v, &[(1, "Standard"), (3, "Wide")])),
        ),
        (
            Tag::FilmMode.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0x000, "F0/Standard (Provia)"),
                        (0x100, "F1/Studio Portrait"),
                        (0x110, "F1a/Studio Portrait Enhanced Saturation"),
                        (0x120, "F1b/Studio Portrait Smooth Skin Tone (Astia)"),
                        (0x130, "F1c/Studio Portrait Increased Sharpness"),
                        (0x200, "F2/Fujichrome (Velvia)"),
                        (0x300, "F3/Studio Portrait Ex"),
                        (0x400, "F4/Velvia"),
                        (0x500, "Pro Neg. Std"),
                        (0x501, "Pro Neg. Hi"),
                    ],
                )
            }),
        ),
        (
            Tag::DynamicRangeSetting.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0x000, "Auto (100-400%)"),
                        (0x001, "Manual"),
                        (0x100, "Standard (100%)"),
                        (0x200, "Wide 1 (230%)"),
                        (0x201, "Wide 2 (400%)"),
                        (0x8000, "Film Simulation"),
                    ],
                )
            }),
        ),
        (Tag::MinFocalLength.tag_id(), Value(millimetres)),
        (Tag::MaxFocalLength.tag_id(), Value(millimetres)),
    ])
});

fn off_on(value: &TagValue) -> Option<String> {
    lookup(value, &[(0, "Off"), (1, "On")])
}

fn millimetres(value: &TagValue) -> Option<String> {
    Some(format!("{} mm", decimal(value.as_f64()?)))
}

fn saturation_or_tone(value: &TagValue) -> Option<String> {
    lookup(
        value,
        &[
            (0x000, "Normal"),
            (0x080, "Medium High"),
            (0x100, "High"),
            (0x180, "Medium Low"),
            (0x200, "Low"),
            (0x300, "None (B&W)"),
        ],
    )
}

fn picture_mode(value: &TagValue) -> Option<String> {
    lookup(
        value,
        &[
            (0x000, "Auto"),
            (0x001, "Portrait scene"),
            (0x002, "Landscape scene"),
            (0x003, "Macro"),
            (0x004, "Sports scene"),
            (0x005, "Night scene"),
            (0x006, "Program AE"),
            (0x007, "Natural Light"),
            (0x008, "Anti-blur"),
            (0x009, "Beach & Snow"),
            (0x00A, "Sunset"),
            (0x00B, "Museum"),
            (0x00C, "Party"),
            (0x00D, "Flower"),
            (0x00E, "Text"),
            (0x00F, "Natural Light & Flash"),
            (0x010, "Beach"),
            (0x011, "Snow"),
            (0x012, "Fireworks"),
            (0x013, "Underwater"),
            (0x100, "Aperture priority AE"),
            (0x200, "Shutter priority AE"),
            (0x300, "Manual exposure"),
        ],
    )
}
