//! Pentax maker note tags.

use super::tag_table;
use crate::kind::DirectoryKind;

tag_table!(enum PentaxTag => DirectoryKind::Pentax,
    CaptureMode = 0x0001 => {
        name: "Capture Mode",
    },
    QualityLevel = 0x0002 => {
        name: "Quality Level",
    },
    FocusMode = 0x0003 => {
        name: "Focus Mode",
    },
    FlashMode = 0x0004 => {
        name: "Flash Mode",
    },
    WhiteBalance = 0x0007 => {
        name: "White Balance",
    },
    DigitalZoom = 0x000A => {
        name: "Digital Zoom",
    },
    Sharpness = 0x000B => {
        name: "Sharpness",
    },
    Contrast = 0x000C => {
        name: "Contrast",
    },
    Saturation = 0x000D => {
        name: "Saturation",
    },
    IsoSpeed = 0x0014 => {
        name: "ISO Speed",
    },
    Colour = 0x0017 => {
        name: "Colour",
    },
    PrintImageMatchingInfo = 0x0E00 => {
        name: "Print Image Matching (PIM) Info",
    },
    TimeZone = 0x1000 => {
        name: "Time Zone",
    },
    DaylightSavings = 0x1001 => {
        name: "Daylight Savings",
    },
);
