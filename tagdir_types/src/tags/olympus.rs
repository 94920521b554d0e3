//! Olympus maker note tags, plus the equipment and camera settings IFDs the
//! newer maker notes point to.

use super::tag_table;
use crate::kind::DirectoryKind;

tag_table!(enum OlympusTag => DirectoryKind::Olympus,
    SpecialMode = 0x0200 => {
        name: "Special Mode",
    },
    JpegQuality = 0x0201 => {
        name: "JPEG Quality",
    },
    Macro = 0x0202 => {
        name: "Macro",
    },
    BwMode = 0x0203 => {
        name: "BW Mode",
    },
    DigitalZoom = 0x0204 => {
        name: "DigiZoom Ratio",
    },
    FocalPlaneDiagonal = 0x0205 => {
        name: "Focal Plane Diagonal",
    },
    LensDistortionParameters = 0x0206 => {
        name: "Lens Distortion Parameters",
    },
    CameraType = 0x0207 => {
        name: "Camera Type",
    },
    PictureInfo = 0x0208 => {
        name: "Pict Info",
    },
    CameraId = 0x0209 => {
        name: "Camera Id",
    },
    ImageWidth = 0x020B => {
        name: "Image Width",
    },
    ImageHeight = 0x020C => {
        name: "Image Height",
    },
    PreCaptureFrames = 0x0300 => {
        name: "Pre Capture Frames",
    },
    SerialNumber = 0x0404 => {
        name: "Serial Number",
    },
    PrintImageMatchingInfo = 0x0E00 => {
        name: "Print Image Matching (PIM) Info",
    },
    DataDump = 0x0F00 => {
        name: "Data Dump",
    },
    ShutterSpeedValue = 0x1000 => {
        name: "Shutter Speed Value",
    },
    IsoValue = 0x1001 => {
        name: "ISO Value",
    },
    ApertureValue = 0x1002 => {
        name: "Aperture Value",
    },
    BrightnessValue = 0x1003 => {
        name: "Brightness Value",
    },
    FlashMode = 0x1004 => {
        name: "Flash Mode",
    },
    Bracket = 0x1006 => {
        name: "Bracket",
    },
    FocusMode = 0x100B => {
        name: "Focus Mode",
    },
    FocusDistance = 0x100C => {
        name: "Focus Distance",
    },
    Zoom = 0x100D => {
        name: "Zoom",
    },
    MacroFocus = 0x100E => {
        name: "Macro Focus",
    },
    SharpnessFactor = 0x100F => {
        name: "Sharpness Factor",
    },
    ColorMatrix = 0x1011 => {
        name: "Color Matrix",
    },
    BlackLevel = 0x1012 => {
        name: "Black Level",
    },
    WhiteBalance = 0x1015 => {
        name: "White Balance",
    },
    RedBias = 0x1017 => {
        name: "Red Bias",
    },
    BlueBias = 0x1018 => {
        name: "Blue Bias",
    },
    FlashBias = 0x1023 => {
        name: "Flash Bias",
    },
    Contrast = 0x1029 => {
        name: "Contrast",
    },
    EquipmentIfd = 0x2010 => {
        name: "Equipment",
    },
    CameraSettingsIfd = 0x2020 => {
        name: "Camera Settings",
    },
    RawDevelopmentIfd = 0x2030 => {
        name: "Raw Development",
    },
    ImageProcessingIfd = 0x2040 => {
        name: "Image Processing",
    },
    FocusInfoIfd = 0x2050 => {
        name: "Focus Info",
    },
);

tag_table!(enum OlympusEquipmentTag => DirectoryKind::OlympusEquipment,
    EquipmentVersion = 0x0000 => {
        name: "Equipment Version",
    },
    CameraType2 = 0x0100 => {
        name: "Camera Type 2",
    },
    SerialNumber = 0x0101 => {
        name: "Serial Number",
    },
    InternalSerialNumber = 0x0102 => {
        name: "Internal Serial Number",
    },
    FocalPlaneDiagonal = 0x0103 => {
        name: "Focal Plane Diagonal",
    },
    BodyFirmwareVersion = 0x0104 => {
        name: "Body Firmware Version",
    },
    LensType = 0x0201 => {
        name: "Lens Type",
    },
    LensSerialNumber = 0x0202 => {
        name: "Lens Serial Number",
    },
    LensModel = 0x0203 => {
        name: "Lens Model",
    },
    LensFirmwareVersion = 0x0204 => {
        name: "Lens Firmware Version",
    },
    MaxApertureAtMinFocal = 0x0205 => {
        name: "Max Aperture At Min Focal",
    },
    MaxApertureAtMaxFocal = 0x0206 => {
        name: "Max Aperture At Max Focal",
    },
    MinFocalLength = 0x0207 => {
        name: "Min Focal Length",
    },
    MaxFocalLength = 0x0208 => {
        name: "Max Focal Length",
    },
    MaxAperture = 0x020A => {
        name: "Max Aperture",
    },
    LensProperties = 0x020B => {
        name: "Lens Properties",
    },
    Extender = 0x0301 => {
        name: "Extender",
    },
    FlashType = 0x1000 => {
        name: "Flash Type",
    },
    FlashModel = 0x1001 => {
        name: "Flash Model",
    },
);

tag_table!(enum OlympusCameraSettingsTag => DirectoryKind::OlympusCameraSettings,
    CameraSettingsVersion = 0x0000 => {
        name: "Camera Settings Version",
    },
    PreviewImageValid = 0x0100 => {
        name: "Preview Image Valid",
    },
    PreviewImageStart = 0x0101 => {
        name: "Preview Image Start",
    },
    PreviewImageLength = 0x0102 => {
        name: "Preview Image Length",
    },
    ExposureMode = 0x0200 => {
        name: "Exposure Mode",
    },
    AeLock = 0x0201 => {
        name: "AE Lock",
    },
    MeteringMode = 0x0202 => {
        name: "Metering Mode",
    },
    ExposureShift = 0x0203 => {
        name: "Exposure Shift",
    },
    MacroMode = 0x0300 => {
        name: "Macro Mode",
    },
    FocusMode = 0x0301 => {
        name: "Focus Mode",
    },
    FocusProcess = 0x0302 => {
        name: "Focus Process",
    },
    AfSearch = 0x0303 => {
        name: "AF Search",
    },
    AfAreas = 0x0304 => {
        name: "AF Areas",
    },
    FlashMode = 0x0400 => {
        name: "Flash Mode",
    },
    FlashExposureComp = 0x0401 => {
        name: "Flash Exposure Comp",
    },
    WhiteBalance2 = 0x0500 => {
        name: "White Balance 2",
    },
    WhiteBalanceTemperature = 0x0501 => {
        name: "White Balance Temperature",
    },
    SceneMode = 0x0509 => {
        name: "Scene Mode",
    },
    DriveMode = 0x0600 => {
        name: "Drive Mode",
    },
    ImageStabilization = 0x0604 => {
        name: "Image Stabilization",
    },
);
