//! Sony maker note tags.

use super::tag_table;
use crate::kind::DirectoryKind;

tag_table!(enum SonyTag => DirectoryKind::Sony,
    Quality = 0x0102 => {
        name: "Image Quality",
    },
    FlashExposureComp = 0x0104 => {
        name: "Flash Exposure Compensation",
    },
    Teleconverter = 0x0105 => {
        name: "Teleconverter Model",
    },
    WhiteBalanceFineTune = 0x0112 => {
        name: "White Balance Fine Tune Value",
    },
    CameraSettings = 0x0114 => {
        name: "Camera Settings",
    },
    WhiteBalance = 0x0115 => {
        name: "White Balance",
    },
    PrintImageMatchingInfo = 0x0E00 => {
        name: "Print Image Matching Info",
    },
    PreviewImage = 0x2001 => {
        name: "Preview Image",
    },
    Rating = 0x2002 => {
        name: "Rating",
    },
    Contrast = 0x2004 => {
        name: "Contrast",
    },
    Saturation = 0x2005 => {
        name: "Saturation",
    },
    Sharpness = 0x2006 => {
        name: "Sharpness",
    },
    Brightness = 0x2007 => {
        name: "Brightness",
    },
    LongExposureNoiseReduction = 0x2008 => {
        name: "Long Exposure Noise Reduction",
    },
    HighIsoNoiseReduction = 0x2009 => {
        name: "High ISO Noise Reduction",
    },
    Hdr = 0x200A => {
        name: "HDR",
    },
    MultiFrameNoiseReduction = 0x200B => {
        name: "Multi Frame Noise Reduction",
    },
    FileFormat = 0xB000 => {
        name: "File Format",
    },
    SonyModelId = 0xB001 => {
        name: "Sony Model ID",
    },
    ColorReproduction = 0xB020 => {
        name: "Color Reproduction",
    },
    ColorTemperature = 0xB021 => {
        name: "Color Temperature",
    },
    ColorCompensationFilter = 0xB022 => {
        name: "Color Compensation Filter",
    },
    SceneMode = 0xB023 => {
        name: "Scene Mode",
    },
    ZoneMatching = 0xB024 => {
        name: "Zone Matching",
    },
    DynamicRangeOptimizer = 0xB025 => {
        name: "Dynamic Range Optimizer",
    },
    ImageStabilization = 0xB026 => {
        name: "Image Stabilisation",
    },
    LensId = 0xB027 => {
        name: "Lens ID",
    },
    ColorMode = 0xB029 => {
        name: "Color Mode",
    },
    LensSpec = 0xB02A => {
        name: "Lens Spec",
    },
    FullImageSize = 0xB02B => {
        name: "Full Image Size",
    },
    PreviewImageSize = 0xB02C => {
        name: "Preview Image Size",
    },
    Macro = 0xB040 => {
        name: "Macro",
    },
    ExposureMode = 0xB041 => {
        name: "Exposure Mode",
    },
    FocusMode = 0xB042 => {
        name: "Focus Mode",
    },
    AfMode = 0xB043 => {
        name: "AF Mode",
    },
    AfIlluminator = 0xB044 => {
        name: "AF Illuminator",
    },
    JpegQuality = 0xB047 => {
        name: "JPEG Quality",
    },
    FlashLevel = 0xB048 => {
        name: "Flash Level",
    },
    ReleaseMode = 0xB049 => {
        name: "Release Mode",
    },
    SequenceNumber = 0xB04A => {
        name: "Sequence Number",
    },
    AntiBlur = 0xB04B => {
        name: "Anti Blur",
    },
    LongExposureNoiseReductionOrFocusMode = 0xB04E => {
        name: "Long Exposure Noise Reduction",
    },
    DynamicRangeOptimizer2 = 0xB04F => {
        name: "Dynamic Range Optimizer",
    },
    IntelligentAuto = 0xB052 => {
        name: "Intelligent Auto",
    },
    WhiteBalance2 = 0xB054 => {
        name: "White Balance 2",
    },
);
