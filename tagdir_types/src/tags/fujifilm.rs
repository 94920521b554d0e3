//! Fujifilm maker note tags.

use super::tag_table;
use crate::kind::DirectoryKind;

tag_table!(enum FujifilmTag => DirectoryKind::Fujifilm,
    MakerNoteVersion = 0x0000 => {
        name: "Makernote Version",
    },
    SerialNumber = 0x0010 => {
        name: "Serial Number",
    },
    Quality = 0x1000 => {
        name: "Quality",
    },
    Sharpness = 0x1001 => {
        name: "Sharpness",
    },
    WhiteBalance = 0x1002 => {
        name: "White Balance",
    },
    ColorSaturation = 0x1003 => {
        name: "Color Saturation",
    },
    Tone = 0x1004 => {
        name: "Tone (Contrast)",
    },
    ColorTemperature = 0x1005 => {
        name: "Color Temperature",
    },
    Contrast = 0x1006 => {
        name: "Contrast",
    },
    WhiteBalanceFineTune = 0x100A => {
        name: "White Balance Fine Tune",
    },
    NoiseReduction = 0x100B => {
        name: "Noise Reduction",
    },
    HighIsoNoiseReduction = 0x100E => {
        name: "High ISO Noise Reduction",
    },
    FlashMode = 0x1010 => {
        name: "Flash Mode",
    },
    FlashExposureCompensation = 0x1011 => {
        name: "Flash Strength",
    },
    Macro = 0x1020 => {
        name: "Macro",
    },
    FocusMode = 0x1021 => {
        name: "Focus Mode",
    },
    FocusPixel = 0x1023 => {
        name: "Focus Pixel",
    },
    SlowSync = 0x1030 => {
        name: "Slow Sync",
    },
    PictureMode = 0x1031 => {
        name: "Picture Mode",
    },
    ExposureCount = 0x1032 => {
        name: "Exposure Count",
    },
    AutoBracketing = 0x1100 => {
        name: "Auto Bracketing",
    },
    SequenceNumber = 0x1101 => {
        name: "Sequence Number",
    },
    FinePixColor = 0x1210 => {
        name: "FinePix Color Setting",
    },
    BlurWarning = 0x1300 => {
        name: "Blur Warning",
    },
    FocusWarning = 0x1301 => {
        name: "Focus Warning",
    },
    AutoExposureWarning = 0x1302 => {
        name: "AE Warning",
    },
    DynamicRange = 0x1400 => {
        name: "Dynamic Range",
    },
    FilmMode = 0x1401 => {
        name: "Film Mode",
    },
    DynamicRangeSetting = 0x1402 => {
        name: "Dynamic Range Setting",
    },
    DevelopmentDynamicRange = 0x1403 => {
        name: "Development Dynamic Range",
    },
    MinFocalLength = 0x1404 => {
        name: "Minimum Focal Length",
    },
    MaxFocalLength = 0x1405 => {
        name: "Maximum Focal Length",
    },
    MaxApertureAtMinFocal = 0x1406 => {
        name: "Maximum Aperture at Minimum Focal Length",
    },
    MaxApertureAtMaxFocal = 0x1407 => {
        name: "Maximum Aperture at Maximum Focal Length",
    },
    FileSource = 0x8000 => {
        name: "File Source",
    },
    OrderNumber = 0x8002 => {
        name: "Order Number",
    },
    FrameNumber = 0x8003 => {
        name: "Frame Number",
    },
);
