//! Canon maker note descriptors.
//!
//! Most of the interesting values live in the split array groups (camera
//! settings, shot info, ...), which land in the Canon directory as
//! `0xC1xx`, `0xC4xx` and friends.

use std::sync::LazyLock;

use tagdir_types::{
    tags::canon::{
        CanonCameraSettingsTag as Settings, CanonFocalLengthTag as Focal,
        CanonPanoramaTag as Panorama, CanonShotInfoTag as Shot, CanonTag,
    },
    value::TagValue,
};

use super::{
    Descriptor::{Directory as Dir, Value},
    DescriptorTable, canon_ev, decimal, ev, exposure_time, flags, fnumber, lookup, name_of,
    signed16, table,
};
use crate::exif::Directory;

pub(super) static CANON: LazyLock<DescriptorTable> = LazyLock::new(|| {
    table(&[
        (CanonTag::SerialNumber.tag_id(), Value(serial_number)),
        // camera settings
        (
            Settings::MacroMode.tag_id(),
            Value(|v| lookup(v, &[(1, "Macro"), (2, "Normal")])),
        ),
        (Settings::SelfTimerDelay.tag_id(), Value(self_timer)),
        (
            Settings::Quality.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (1, "Economy"),
                        (2, "Normal"),
                        (3, "Fine"),
                        (4, "RAW"),
                        (5, "Superfine"),
                    ],
                )
            }),
        ),
        (Settings::FlashMode.tag_id(), Value(flash_mode)),
        (
            Settings::ContinuousDriveMode.tag_id(),
            Value(|v| lookup(v, &[(0, "Single shot"), (1, "Continuous")])),
        ),
        (
            Settings::FocusMode1.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0, "One-shot AF"),
                        (1, "AI Servo AF"),
                        (2, "AI Focus AF"),
                        (3, "Manual Focus"),
                        (4, "Single"),
                        (5, "Continuous"),
                        (6, "Manual Focus"),
                    ],
                )
            }),
        ),
        (
            Settings::RecordMode.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (1, "JPEG"),
                        (2, "CRW+THM"),
                        (3, "AVI+THM"),
                        (4, "TIF"),
                        (5, "TIF+JPEG"),
                        (6, "CR2"),
                        (7, "CR2+JPEG"),
                    ],
                )
            }),
        ),
        (
            Settings::ImageSize.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0, "Large"),
                        (1, "Medium"),
                        (2, "Small"),
                        (5, "Medium 1"),
                        (6, "Medium 2"),
                        (7, "Medium 3"),
                    ],
                )
            }),
        ),
        (Settings::EasyShootingMode.tag_id(), Value(easy_shooting_mode)),
        (
            Settings::DigitalZoom.tag_id(),
            Value(|v| lookup(v, &[(0, "No digital zoom"), (1, "2x"), (2, "4x"), (3, "Other")])),
        ),
        (Settings::Contrast.tag_id(), Value(low_normal_high)),
        (Settings::Saturation.tag_id(), Value(low_normal_high)),
        (Settings::Sharpness.tag_id(), Value(low_normal_high)),
        (Settings::Iso.tag_id(), Value(iso)),
        (
            Settings::MeteringMode.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0, "Default"),
                        (1, "Spot"),
                        (2, "Average"),
                        (3, "Evaluative"),
                        (4, "Partial"),
                        (5, "Center-weighted average"),
                    ],
                )
            }),
        ),
        (
            Settings::FocusType.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0, "Manual"),
                        (1, "Auto"),
                        (3, "Close-up (Macro)"),
                        (8, "Locked (Pan Mode)"),
                    ],
                )
            }),
        ),
        (
            Settings::AfPointSelected.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0x3000, "None (MF)"),
                        (0x3001, "Auto selected"),
                        (0x3002, "Right"),
                        (0x3003, "Centre"),
                        (0x3004, "Left"),
                    ],
                )
            }),
        ),
        (
            Settings::ExposureMode.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0, "Easy shooting"),
                        (1, "Program"),
                        (2, "Tv-priority"),
                        (3, "Av-priority"),
                        (4, "Manual"),
                        (5, "A-DEP"),
                    ],
                )
            }),
        ),
        (Settings::LongFocalLength.tag_id(), Dir(long_focal_length)),
        (Settings::ShortFocalLength.tag_id(), Dir(short_focal_length)),
        (
            Settings::FlashActivity.tag_id(),
            Value(|v| lookup(v, &[(0, "Flash did not fire"), (1, "Flash fired")])),
        ),
        (Settings::FlashDetails.tag_id(), Value(flash_details)),
        (
            Settings::FocusContinuous.tag_id(),
            Value(|v| lookup(v, &[(0, "Single"), (1, "Continuous"), (8, "Manual")])),
        ),
        (
            Settings::AeSetting.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0, "Normal AE"),
                        (1, "Exposure compensation"),
                        (2, "AE lock"),
                        (3, "AE lock + exposure compensation"),
                        (4, "No AE"),
                    ],
                )
            }),
        ),
        // focal length
        (
            Focal::FocalType.tag_id(),
            Value(|v| lookup(v, &[(1, "Fixed"), (2, "Zoom")])),
        ),
        // shot info
        (
            Shot::AutoIso.tag_id(),
            Value(|v| Some(format!("{:.0}", apex_iso(v.as_i64()?)))),
        ),
        (
            Shot::BaseIso.tag_id(),
            Value(|v| Some(format!("{:.0}", apex_iso(v.as_i64()?) / 32.0))),
        ),
        (Shot::TargetAperture.tag_id(), Value(aperture)),
        (Shot::TargetExposureTime.tag_id(), Value(shutter)),
        (
            Shot::ExposureCompensation.tag_id(),
            Value(|v| Some(ev(canon_ev(v.as_i64()?)))),
        ),
        (
            Shot::WhiteBalance.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0, "Auto"),
                        (1, "Sunny"),
                        (2, "Cloudy"),
                        (3, "Tungsten"),
                        (4, "Fluorescent"),
                        (5, "Flash"),
                        (6, "Custom"),
                    ],
                )
            }),
        ),
        (
            Shot::SlowShutter.tag_id(),
            Value(|v| lookup(v, &[(0, "Off"), (1, "Night Scene"), (2, "On"), (3, "None")])),
        ),
        (
            Shot::FlashBias.tag_id(),
            Value(|v| Some(ev(canon_ev(v.as_i64()?)))),
        ),
        (
            Shot::AutoExposureBracketing.tag_id(),
            Value(|v| {
                let v = signed16(v.as_i64()?);
                Some(name_of(
                    v,
                    &[
                        (-1, "On"),
                        (0, "Off"),
                        (1, "On (shot 1)"),
                        (2, "On (shot 2)"),
                        (3, "On (shot 3)"),
                    ],
                ))
            }),
        ),
        (
            Shot::SubjectDistance.tag_id(),
            Value(|v| Some(format!("{} m", decimal(v.as_i64()? as f64 / 100.0)))),
        ),
        (Shot::ApertureValue.tag_id(), Value(aperture)),
        (Shot::ShutterSpeedValue.tag_id(), Value(shutter)),
        // panorama
        (
            Panorama::PanoramaDirection.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0, "Left to right"),
                        (1, "Right to left"),
                        (2, "Bottom to top"),
                        (3, "Top to bottom"),
                        (4, "2x2 Matrix (Clockwise)"),
                    ],
                )
            }),
        ),
    ])
});

/// The upper 16 bits in hex, then the lower 16 as five decimal digits.
fn serial_number(value: &TagValue) -> Option<String> {
    let v = value.as_u32()?;
    Some(format!("{:04X}{:05}", v >> 16, v & 0xFFFF))
}

/// Stored in tenths of a second.
fn self_timer(value: &TagValue) -> Option<String> {
    match value.as_i64()? {
        0 => Some("Self timer not used".to_owned()),
        tenths => Some(format!("{} sec", decimal(tenths as f64 / 10.0))),
    }
}

fn flash_mode(value: &TagValue) -> Option<String> {
    lookup(
        value,
        &[
            (0, "No flash fired"),
            (1, "Auto"),
            (2, "On"),
            (3, "Red-eye reduction"),
            (4, "Slow-synchro"),
            (5, "Red-eye reduction (Auto)"),
            (6, "Red-eye reduction (On)"),
            (16, "External flash"),
        ],
    )
}

fn easy_shooting_mode(value: &TagValue) -> Option<String> {
    lookup(
        value,
        &[
            (0, "Full auto"),
            (1, "Manual"),
            (2, "Landscape"),
            (3, "Fast shutter"),
            (4, "Slow shutter"),
            (5, "Night"),
            (6, "B&W"),
            (7, "Sepia"),
            (8, "Portrait"),
            (9, "Sports"),
            (10, "Macro / Close-Up"),
            (11, "Pan focus"),
        ],
    )
}

/// Contrast, saturation and sharpness. `0xFFFF` means low.
fn low_normal_high(value: &TagValue) -> Option<String> {
    let v = signed16(value.as_i64()?);
    Some(name_of(v, &[(-1, "Low"), (0, "Normal"), (1, "High")]))
}

fn iso(value: &TagValue) -> Option<String> {
    let v = value.as_i64()?;

    // some bodies store the actual speed with bit 14 set
    if v & 0x4000 != 0 {
        return Some(format!("{}", v & !0x4000));
    }

    Some(name_of(
        v,
        &[
            (0, "Not specified (see ISOSpeedRatings tag)"),
            (15, "Auto"),
            (16, "50"),
            (17, "100"),
            (18, "200"),
            (19, "400"),
        ],
    ))
}

/// Focal lengths are stored in "focal units", which may be missing.
fn focal_length(directory: &Directory, tag: u16) -> Option<String> {
    let length = directory.get_i64(tag)? as f64;
    let units = directory
        .get_i64(Settings::FocalUnitsPerMm.tag_id())
        .filter(|u| *u != 0)
        .unwrap_or(1) as f64;
    Some(format!("{} mm", decimal(length / units)))
}

fn long_focal_length(directory: &Directory) -> Option<String> {
    focal_length(directory, Settings::LongFocalLength.tag_id())
}

fn short_focal_length(directory: &Directory) -> Option<String> {
    focal_length(directory, Settings::ShortFocalLength.tag_id())
}

fn flash_details(value: &TagValue) -> Option<String> {
    let set = flags(
        value.as_i64()?,
        &[
            (1 << 14, "External E-TTL"),
            (1 << 13, "Internal flash"),
            (1 << 11, "FP sync used"),
            (1 << 4, "FP sync enabled"),
        ],
    );
    Some(match set.is_empty() {
        true => "No flash details".to_owned(),
        false => set.join(", "),
    })
}

/// `exp(v / 32 * ln 2) * 100`
fn apex_iso(v: i64) -> f64 {
    (v as f64 / 32.0 * core::f64::consts::LN_2).exp() * 100.0
}

fn aperture(value: &TagValue) -> Option<String> {
    let ev = canon_ev(value.as_i64()?);
    Some(fnumber((ev * core::f64::consts::LN_2 / 2.0).exp()))
}

fn shutter(value: &TagValue) -> Option<String> {
    let ev = canon_ev(value.as_i64()?);
    exposure_time((-ev * core::f64::consts::LN_2).exp())
}
