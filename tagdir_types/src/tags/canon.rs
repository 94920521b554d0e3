//! Canon maker note tags.
//!
//! Several Canon tags are arrays of shorts, where each element means
//! something different. Those are split apart after reading (see
//! [`DirectoryKind::split_rules`]) and their elements live in the
//! `0xC100..` and `0xD200..` ranges below.

use super::tag_table;
use crate::kind::DirectoryKind;

tag_table!(enum CanonTag => DirectoryKind::Canon,
    CameraSettingsArray = 0x0001 => {
        name: "Camera Settings Array",
    },
    FocalLengthArray = 0x0002 => {
        name: "Focal Length Array",
    },
    ShotInfoArray = 0x0004 => {
        name: "Shot Info Array",
    },
    PanoramaArray = 0x0005 => {
        name: "Panorama Array",
    },
    ImageType = 0x0006 => {
        name: "Image Type",
    },
    FirmwareVersion = 0x0007 => {
        name: "Firmware Version",
    },
    ImageNumber = 0x0008 => {
        name: "Image Number",
    },
    OwnerName = 0x0009 => {
        name: "Owner Name",
    },
    SerialNumber = 0x000C => {
        name: "Camera Serial Number",
    },
    CameraInfoArray = 0x000D => {
        name: "Camera Info Array",
    },
    FileLength = 0x000E => {
        name: "File Length",
    },
    CustomFunctions = 0x000F => {
        name: "Custom Functions",
    },
    ModelId = 0x0010 => {
        name: "Canon Model ID",
    },
    AfInfoArray = 0x0012 => {
        name: "AF Info Array",
    },
    SerialNumberFormat = 0x0015 => {
        name: "Serial Number Format",
    },
    AfInfoArray2 = 0x0026 => {
        name: "AF Info Array 2",
    },
    LensModel = 0x0095 => {
        name: "Lens Model",
    },
    InternalSerialNumber = 0x0096 => {
        name: "Internal Serial Number",
    },
);

tag_table!(enum CanonCameraSettingsTag => DirectoryKind::Canon,
    MacroMode = 0xC101 => {
        name: "Macro Mode",
    },
    SelfTimerDelay = 0xC102 => {
        name: "Self Timer Delay",
    },
    Quality = 0xC103 => {
        name: "Quality",
    },
    FlashMode = 0xC104 => {
        name: "Flash Mode",
    },
    ContinuousDriveMode = 0xC105 => {
        name: "Continuous Drive Mode",
    },
    FocusMode1 = 0xC107 => {
        name: "Focus Mode",
    },
    RecordMode = 0xC109 => {
        name: "Record Mode",
    },
    ImageSize = 0xC10A => {
        name: "Image Size",
    },
    EasyShootingMode = 0xC10B => {
        name: "Easy Shooting Mode",
    },
    DigitalZoom = 0xC10C => {
        name: "Digital Zoom",
    },
    Contrast = 0xC10D => {
        name: "Contrast",
    },
    Saturation = 0xC10E => {
        name: "Saturation",
    },
    Sharpness = 0xC10F => {
        name: "Sharpness",
    },
    Iso = 0xC110 => {
        name: "Iso",
    },
    MeteringMode = 0xC111 => {
        name: "Metering Mode",
    },
    FocusType = 0xC112 => {
        name: "Focus Type",
    },
    AfPointSelected = 0xC113 => {
        name: "AF Point Selected",
    },
    ExposureMode = 0xC114 => {
        name: "Exposure Mode",
    },
    LensType = 0xC116 => {
        name: "Lens Type",
    },
    LongFocalLength = 0xC117 => {
        name: "Long Focal Length",
    },
    ShortFocalLength = 0xC118 => {
        name: "Short Focal Length",
    },
    FocalUnitsPerMm = 0xC119 => {
        name: "Focal Units per mm",
    },
    MaxAperture = 0xC11A => {
        name: "Max Aperture",
    },
    MinAperture = 0xC11B => {
        name: "Min Aperture",
    },
    FlashActivity = 0xC11C => {
        name: "Flash Activity",
    },
    FlashDetails = 0xC11D => {
        name: "Flash Details",
    },
    FocusContinuous = 0xC120 => {
        name: "Focus Continuous",
    },
    AeSetting = 0xC121 => {
        name: "AE Setting",
    },
);

tag_table!(enum CanonFocalLengthTag => DirectoryKind::Canon,
    FocalType = 0xC201 => {
        name: "Focal Type",
    },
    FocalLength = 0xC202 => {
        name: "Focal Length",
    },
    FocalPlaneXSize = 0xC203 => {
        name: "Focal Plane X Size",
    },
    FocalPlaneYSize = 0xC204 => {
        name: "Focal Plane Y Size",
    },
);

tag_table!(enum CanonShotInfoTag => DirectoryKind::Canon,
    AutoIso = 0xC401 => {
        name: "Auto ISO",
    },
    BaseIso = 0xC402 => {
        name: "Base ISO",
    },
    MeasuredEv = 0xC403 => {
        name: "Measured EV",
    },
    TargetAperture = 0xC404 => {
        name: "Target Aperture",
    },
    TargetExposureTime = 0xC405 => {
        name: "Target Exposure Time",
    },
    ExposureCompensation = 0xC406 => {
        name: "Exposure Compensation",
    },
    WhiteBalance = 0xC407 => {
        name: "White Balance",
    },
    SlowShutter = 0xC408 => {
        name: "Slow Shutter",
    },
    SequenceNumber = 0xC409 => {
        name: "Sequence Number",
    },
    AfPointUsed = 0xC40E => {
        name: "AF Point Used",
    },
    FlashBias = 0xC40F => {
        name: "Flash Bias",
    },
    AutoExposureBracketing = 0xC410 => {
        name: "Auto Exposure Bracketing",
    },
    SubjectDistance = 0xC413 => {
        name: "Subject Distance",
    },
    ApertureValue = 0xC415 => {
        name: "Aperture Value",
    },
    ShutterSpeedValue = 0xC416 => {
        name: "Shutter Speed Value",
    },
);

tag_table!(enum CanonPanoramaTag => DirectoryKind::Canon,
    PanoramaFrameNumber = 0xC502 => {
        name: "Panorama Frame Number",
    },
    PanoramaDirection = 0xC505 => {
        name: "Panorama Direction",
    },
);

tag_table!(enum CanonAfInfoTag => DirectoryKind::Canon,
    NumAfPoints = 0xD200 => {
        name: "AF Point Count",
    },
    ValidAfPoints = 0xD201 => {
        name: "Valid AF Point Count",
    },
    ImageWidth = 0xD202 => {
        name: "Image Width",
    },
    ImageHeight = 0xD203 => {
        name: "Image Height",
    },
    AfImageWidth = 0xD204 => {
        name: "AF Image Width",
    },
    AfImageHeight = 0xD205 => {
        name: "AF Image Height",
    },
    AfAreaWidth = 0xD206 => {
        name: "AF Area Width",
    },
    AfAreaHeight = 0xD207 => {
        name: "AF Area Height",
    },
);
