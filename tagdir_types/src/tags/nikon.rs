//! Nikon maker note tags.
//!
//! Older Coolpix bodies write "type 1" maker notes. Everything newer writes
//! "type 2", which carries its own TIFF header.

use super::tag_table;
use crate::kind::DirectoryKind;

tag_table!(enum NikonType1Tag => DirectoryKind::Nikon1,
    Unknown1 = 0x0002 => {
        name: "Makernote Unknown 1",
    },
    Quality = 0x0003 => {
        name: "Quality",
    },
    ColorMode = 0x0004 => {
        name: "Color Mode",
    },
    ImageAdjustment = 0x0005 => {
        name: "Image Adjustment",
    },
    CcdSensitivity = 0x0006 => {
        name: "CCD Sensitivity",
    },
    WhiteBalance = 0x0007 => {
        name: "White Balance",
    },
    Focus = 0x0008 => {
        name: "Focus",
    },
    Unknown2 = 0x0009 => {
        name: "Makernote Unknown 2",
    },
    DigitalZoom = 0x000A => {
        name: "Digital Zoom",
    },
    Converter = 0x000B => {
        name: "Fisheye Converter",
    },
    Unknown3 = 0x0F00 => {
        name: "Makernote Unknown 3",
    },
);

tag_table!(enum NikonType2Tag => DirectoryKind::Nikon2,
    FirmwareVersion = 0x0001 => {
        name: "Firmware Version",
    },
    Iso = 0x0002 => {
        name: "ISO",
    },
    ColorMode = 0x0003 => {
        name: "Color Mode",
    },
    Quality = 0x0004 => {
        name: "Quality & File Format",
    },
    CameraWhiteBalance = 0x0005 => {
        name: "White Balance",
    },
    CameraSharpening = 0x0006 => {
        name: "Sharpening",
    },
    AfType = 0x0007 => {
        name: "AF Type",
    },
    FlashSyncMode = 0x0008 => {
        name: "Flash Sync Mode",
    },
    AutoFlashMode = 0x0009 => {
        name: "Auto Flash Mode",
    },
    CameraWhiteBalanceFine = 0x000B => {
        name: "White Balance Fine",
    },
    CameraWhiteBalanceRbCoefficients = 0x000C => {
        name: "White Balance RB Coefficients",
    },
    ProgramShift = 0x000D => {
        name: "Program Shift",
    },
    ExposureDifference = 0x000E => {
        name: "Exposure Difference",
    },
    PreviewIfd = 0x0011 => {
        name: "Preview IFD",
    },
    AutoFlashCompensation = 0x0012 => {
        name: "Auto Flash Compensation",
    },
    IsoRequested = 0x0013 => {
        name: "ISO",
    },
    ImageBoundary = 0x0016 => {
        name: "Image Boundary",
    },
    FlashExposureCompensation = 0x0017 => {
        name: "Flash Exposure Compensation",
    },
    FlashBracketCompensation = 0x0018 => {
        name: "Flash Bracket Compensation",
    },
    AeBracketCompensation = 0x0019 => {
        name: "AE Bracket Compensation",
    },
    SerialNumber = 0x001D => {
        name: "Camera Serial Number",
    },
    ImageAdjustment = 0x0080 => {
        name: "Image Adjustment",
    },
    CameraToneCompensation = 0x0081 => {
        name: "Tone Compensation",
    },
    Adapter = 0x0082 => {
        name: "Adapter",
    },
    LensType = 0x0083 => {
        name: "Lens Type",
    },
    Lens = 0x0084 => {
        name: "Lens",
    },
    ManualFocusDistance = 0x0085 => {
        name: "Manual Focus Distance",
    },
    DigitalZoom = 0x0086 => {
        name: "Digital Zoom",
    },
    FlashUsed = 0x0087 => {
        name: "Flash Used",
    },
    AfFocusPosition = 0x0088 => {
        name: "AF Focus Position",
    },
    ShootingMode = 0x0089 => {
        name: "Shooting Mode",
    },
    LensStops = 0x008B => {
        name: "Lens Stops",
    },
    CameraColorMode = 0x008D => {
        name: "Colour Mode",
    },
    CameraHueAdjustment = 0x0092 => {
        name: "Camera Hue Adjustment",
    },
    NoiseReduction = 0x0095 => {
        name: "Noise Reduction",
    },
    ExposureSequenceNumber = 0x00A7 => {
        name: "Exposure Sequence Number",
    },
    ImageOptimisation = 0x00A9 => {
        name: "Image Optimisation",
    },
    Saturation = 0x00AA => {
        name: "Saturation",
    },
);
