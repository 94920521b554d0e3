//! Panasonic maker note tags.

use super::tag_table;
use crate::kind::DirectoryKind;

tag_table!(enum PanasonicTag => DirectoryKind::Panasonic,
    QualityMode = 0x0001 => {
        name: "Quality Mode",
    },
    FirmwareVersion = 0x0002 => {
        name: "Version",
    },
    WhiteBalance = 0x0003 => {
        name: "White Balance",
    },
    FocusMode = 0x0007 => {
        name: "Focus Mode",
    },
    AfAreaMode = 0x000F => {
        name: "AF Area Mode",
    },
    ImageStabilization = 0x001A => {
        name: "Image Stabilization",
    },
    MacroMode = 0x001C => {
        name: "Macro Mode",
    },
    RecordMode = 0x001F => {
        name: "Record Mode",
    },
    Audio = 0x0020 => {
        name: "Audio",
    },
    WhiteBalanceBias = 0x0023 => {
        name: "White Balance Bias",
    },
    FlashBias = 0x0024 => {
        name: "Flash Bias",
    },
    InternalSerialNumber = 0x0025 => {
        name: "Internal Serial Number",
    },
    ExifVersion = 0x0026 => {
        name: "Exif Version",
    },
    ColorEffect = 0x0028 => {
        name: "Color Effect",
    },
    UptimeCount = 0x0029 => {
        name: "Camera Uptime",
    },
    BurstMode = 0x002A => {
        name: "Burst Mode",
    },
    SequenceNumber = 0x002B => {
        name: "Sequence Number",
    },
    ContrastMode = 0x002C => {
        name: "Contrast Mode",
    },
    NoiseReduction = 0x002D => {
        name: "Noise Reduction",
    },
    SelfTimer = 0x002E => {
        name: "Self Timer",
    },
    Rotation = 0x0030 => {
        name: "Rotation",
    },
    ColorMode = 0x0032 => {
        name: "Color Mode",
    },
    BabyAge = 0x0033 => {
        name: "Baby Age",
    },
    TravelDay = 0x0036 => {
        name: "Travel Day",
    },
    LensType = 0x0051 => {
        name: "Lens Type",
    },
    LensSerialNumber = 0x0052 => {
        name: "Lens Serial Number",
    },
    AccessoryType = 0x0053 => {
        name: "Accessory Type",
    },
    MakerNoteVersion = 0x8000 => {
        name: "Makernote Version",
    },
    WbRedLevel = 0x8004 => {
        name: "White Balance Red Level",
    },
    WbGreenLevel = 0x8005 => {
        name: "White Balance Green Level",
    },
    WbBlueLevel = 0x8006 => {
        name: "White Balance Blue Level",
    },
    BabyAge2 = 0x8010 => {
        name: "Baby Age 1",
    },
);
