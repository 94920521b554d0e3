//! Standard TIFF and Exif tags: IFD0 (shared with IFD1 and the TIFF
//! SubIFDs), the Exif SubIFD, GPS, and Interoperability.

use super::tag_table;
use crate::{kind::DirectoryKind, primitives::PrimitiveTy as Pt};

tag_table!(enum Ifd0Tag => DirectoryKind::Ifd0,
    NewSubfileType = 0x00FE => {
        name: "New Subfile Type",
        types: &[Pt::Long],
    },
    ImageWidth = 0x0100 => {
        name: "Image Width",
        types: &[Pt::Short, Pt::Long],
    },
    ImageHeight = 0x0101 => {
        name: "Image Height",
        types: &[Pt::Short, Pt::Long],
    },
    BitsPerSample = 0x0102 => {
        name: "Bits Per Sample",
        types: &[Pt::Short],
    },
    Compression = 0x0103 => {
        name: "Compression",
        types: &[Pt::Short],
    },
    PhotometricInterpretation = 0x0106 => {
        name: "Photometric Interpretation",
        types: &[Pt::Short],
    },
    ImageDescription = 0x010E => {
        name: "Image Description",
        types: &[Pt::Ascii],
    },
    Make = 0x010F => {
        name: "Make",
        types: &[Pt::Ascii],
    },
    Model = 0x0110 => {
        name: "Model",
        types: &[Pt::Ascii],
    },
    StripOffsets = 0x0111 => {
        name: "Strip Offsets",
        types: &[Pt::Short, Pt::Long],
    },
    Orientation = 0x0112 => {
        name: "Orientation",
        types: &[Pt::Short],
    },
    SamplesPerPixel = 0x0115 => {
        name: "Samples Per Pixel",
        types: &[Pt::Short],
    },
    RowsPerStrip = 0x0116 => {
        name: "Rows Per Strip",
        types: &[Pt::Short, Pt::Long],
    },
    StripByteCounts = 0x0117 => {
        name: "Strip Byte Counts",
        types: &[Pt::Short, Pt::Long],
    },
    XResolution = 0x011A => {
        name: "X Resolution",
        types: &[Pt::Rational],
    },
    YResolution = 0x011B => {
        name: "Y Resolution",
        types: &[Pt::Rational],
    },
    PlanarConfiguration = 0x011C => {
        name: "Planar Configuration",
        types: &[Pt::Short],
    },
    ResolutionUnit = 0x0128 => {
        name: "Resolution Unit",
        types: &[Pt::Short],
    },
    TransferFunction = 0x012D => {
        name: "Transfer Function",
        types: &[Pt::Short],
    },
    Software = 0x0131 => {
        name: "Software",
        types: &[Pt::Ascii],
    },
    DateTime = 0x0132 => {
        name: "Date/Time",
        types: &[Pt::Ascii],
    },
    Artist = 0x013B => {
        name: "Artist",
        types: &[Pt::Ascii],
    },
    WhitePoint = 0x013E => {
        name: "White Point",
        types: &[Pt::Rational],
    },
    PrimaryChromaticities = 0x013F => {
        name: "Primary Chromaticities",
        types: &[Pt::Rational],
    },
    SubIfds = 0x014A => {
        name: "Sub IFD Pointer(s)",
        types: &[Pt::Long, Pt::Ifd],
    },
    ThumbnailOffset = 0x0201 => {
        name: "Thumbnail Offset",
        types: &[Pt::Long],
    },
    ThumbnailLength = 0x0202 => {
        name: "Thumbnail Length",
        types: &[Pt::Long],
    },
    YCbCrCoefficients = 0x0211 => {
        name: "YCbCr Coefficients",
        types: &[Pt::Rational],
    },
    YCbCrSubSampling = 0x0212 => {
        name: "YCbCr Sub-Sampling",
        types: &[Pt::Short],
    },
    YCbCrPositioning = 0x0213 => {
        name: "YCbCr Positioning",
        types: &[Pt::Short],
    },
    ReferenceBlackWhite = 0x0214 => {
        name: "Reference Black/White",
        types: &[Pt::Rational],
    },
    Rating = 0x4746 => {
        name: "Rating",
        types: &[Pt::Short],
    },
    Copyright = 0x8298 => {
        name: "Copyright",
        types: &[Pt::Ascii],
    },
    ExifIfdPointer = 0x8769 => {
        name: "Exif IFD Pointer",
        types: &[Pt::Long, Pt::Ifd],
    },
    GpsIfdPointer = 0x8825 => {
        name: "GPS Info IFD Pointer",
        types: &[Pt::Long, Pt::Ifd],
    },
    WindowsTitle = 0x9C9B => {
        name: "Windows XP Title",
        types: &[Pt::Byte],
    },
    WindowsComment = 0x9C9C => {
        name: "Windows XP Comment",
        types: &[Pt::Byte],
    },
    WindowsAuthor = 0x9C9D => {
        name: "Windows XP Author",
        types: &[Pt::Byte],
    },
    WindowsKeywords = 0x9C9E => {
        name: "Windows XP Keywords",
        types: &[Pt::Byte],
    },
    WindowsSubject = 0x9C9F => {
        name: "Windows XP Subject",
        types: &[Pt::Byte],
    },
);

tag_table!(enum ExifTag => DirectoryKind::Exif,
    ExposureTime = 0x829A => {
        name: "Exposure Time",
        types: &[Pt::Rational],
    },
    FNumber = 0x829D => {
        name: "F-Number",
        types: &[Pt::Rational],
    },
    ExposureProgram = 0x8822 => {
        name: "Exposure Program",
        types: &[Pt::Short],
    },
    SpectralSensitivity = 0x8824 => {
        name: "Spectral Sensitivity",
        types: &[Pt::Ascii],
    },
    IsoSpeedRatings = 0x8827 => {
        name: "ISO Speed Ratings",
        types: &[Pt::Short],
    },
    SensitivityType = 0x8830 => {
        name: "Sensitivity Type",
        types: &[Pt::Short],
    },
    ExifVersion = 0x9000 => {
        name: "Exif Version",
        types: &[Pt::Undefined],
    },
    DateTimeOriginal = 0x9003 => {
        name: "Date/Time Original",
        types: &[Pt::Ascii],
    },
    DateTimeDigitized = 0x9004 => {
        name: "Date/Time Digitized",
        types: &[Pt::Ascii],
    },
    OffsetTime = 0x9010 => {
        name: "Time Zone",
        types: &[Pt::Ascii],
    },
    OffsetTimeOriginal = 0x9011 => {
        name: "Time Zone Original",
        types: &[Pt::Ascii],
    },
    OffsetTimeDigitized = 0x9012 => {
        name: "Time Zone Digitized",
        types: &[Pt::Ascii],
    },
    ComponentsConfiguration = 0x9101 => {
        name: "Components Configuration",
        types: &[Pt::Undefined],
    },
    CompressedBitsPerPixel = 0x9102 => {
        name: "Compressed Bits Per Pixel",
        types: &[Pt::Rational],
    },
    ShutterSpeedValue = 0x9201 => {
        name: "Shutter Speed Value",
        types: &[Pt::SRational],
    },
    ApertureValue = 0x9202 => {
        name: "Aperture Value",
        types: &[Pt::Rational],
    },
    BrightnessValue = 0x9203 => {
        name: "Brightness Value",
        types: &[Pt::SRational],
    },
    ExposureBiasValue = 0x9204 => {
        name: "Exposure Bias Value",
        types: &[Pt::SRational],
    },
    MaxApertureValue = 0x9205 => {
        name: "Max Aperture Value",
        types: &[Pt::Rational],
    },
    SubjectDistance = 0x9206 => {
        name: "Subject Distance",
        types: &[Pt::Rational],
    },
    MeteringMode = 0x9207 => {
        name: "Metering Mode",
        types: &[Pt::Short],
    },
    LightSource = 0x9208 => {
        name: "White Balance",
        types: &[Pt::Short],
    },
    Flash = 0x9209 => {
        name: "Flash",
        types: &[Pt::Short],
    },
    FocalLength = 0x920A => {
        name: "Focal Length",
        types: &[Pt::Rational],
    },
    SubjectArea = 0x9214 => {
        name: "Subject Location",
        types: &[Pt::Short],
    },
    MakerNote = 0x927C => {
        name: "Makernote",
        types: &[Pt::Undefined],
    },
    UserComment = 0x9286 => {
        name: "User Comment",
        types: &[Pt::Undefined],
    },
    SubSecTime = 0x9290 => {
        name: "Sub-Sec Time",
        types: &[Pt::Ascii],
    },
    SubSecTimeOriginal = 0x9291 => {
        name: "Sub-Sec Time Original",
        types: &[Pt::Ascii],
    },
    SubSecTimeDigitized = 0x9292 => {
        name: "Sub-Sec Time Digitized",
        types: &[Pt::Ascii],
    },
    FlashpixVersion = 0xA000 => {
        name: "FlashPix Version",
        types: &[Pt::Undefined],
    },
    ColorSpace = 0xA001 => {
        name: "Color Space",
        types: &[Pt::Short],
    },
    PixelXDimension = 0xA002 => {
        name: "Exif Image Width",
        types: &[Pt::Short, Pt::Long],
    },
    PixelYDimension = 0xA003 => {
        name: "Exif Image Height",
        types: &[Pt::Short, Pt::Long],
    },
    RelatedSoundFile = 0xA004 => {
        name: "Related Sound File",
        types: &[Pt::Ascii],
    },
    InteropIfdPointer = 0xA005 => {
        name: "Interoperability IFD Pointer",
        types: &[Pt::Long, Pt::Ifd],
    },
    FocalPlaneXResolution = 0xA20E => {
        name: "Focal Plane X Resolution",
        types: &[Pt::Rational],
    },
    FocalPlaneYResolution = 0xA20F => {
        name: "Focal Plane Y Resolution",
        types: &[Pt::Rational],
    },
    FocalPlaneResolutionUnit = 0xA210 => {
        name: "Focal Plane Resolution Unit",
        types: &[Pt::Short],
    },
    ExposureIndex = 0xA215 => {
        name: "Exposure Index",
        types: &[Pt::Rational],
    },
    SensingMethod = 0xA217 => {
        name: "Sensing Method",
        types: &[Pt::Short],
    },
    FileSource = 0xA300 => {
        name: "File Source",
        types: &[Pt::Undefined],
    },
    SceneType = 0xA301 => {
        name: "Scene Type",
        types: &[Pt::Undefined],
    },
    CfaPattern = 0xA302 => {
        name: "CFA Pattern",
        types: &[Pt::Undefined],
    },
    CustomRendered = 0xA401 => {
        name: "Custom Rendered",
        types: &[Pt::Short],
    },
    ExposureMode = 0xA402 => {
        name: "Exposure Mode",
        types: &[Pt::Short],
    },
    WhiteBalance = 0xA403 => {
        name: "White Balance Mode",
        types: &[Pt::Short],
    },
    DigitalZoomRatio = 0xA404 => {
        name: "Digital Zoom Ratio",
        types: &[Pt::Rational],
    },
    FocalLengthIn35mmFilm = 0xA405 => {
        name: "Focal Length 35",
        types: &[Pt::Short],
    },
    SceneCaptureType = 0xA406 => {
        name: "Scene Capture Type",
        types: &[Pt::Short],
    },
    GainControl = 0xA407 => {
        name: "Gain Control",
        types: &[Pt::Short],
    },
    Contrast = 0xA408 => {
        name: "Contrast",
        types: &[Pt::Short],
    },
    Saturation = 0xA409 => {
        name: "Saturation",
        types: &[Pt::Short],
    },
    Sharpness = 0xA40A => {
        name: "Sharpness",
        types: &[Pt::Short],
    },
    SubjectDistanceRange = 0xA40C => {
        name: "Subject Distance Range",
        types: &[Pt::Short],
    },
    ImageUniqueId = 0xA420 => {
        name: "Unique Image ID",
        types: &[Pt::Ascii],
    },
    CameraOwnerName = 0xA430 => {
        name: "Camera Owner Name",
        types: &[Pt::Ascii],
    },
    BodySerialNumber = 0xA431 => {
        name: "Body Serial Number",
        types: &[Pt::Ascii],
    },
    LensSpecification = 0xA432 => {
        name: "Lens Specification",
        types: &[Pt::Rational],
    },
    LensMake = 0xA433 => {
        name: "Lens Make",
        types: &[Pt::Ascii],
    },
    LensModel = 0xA434 => {
        name: "Lens Model",
        types: &[Pt::Ascii],
    },
    LensSerialNumber = 0xA435 => {
        name: "Lens Serial Number",
        types: &[Pt::Ascii],
    },
);

tag_table!(enum GpsTag => DirectoryKind::Gps,
    VersionId = 0x0000 => {
        name: "GPS Version ID",
        types: &[Pt::Byte],
    },
    LatitudeRef = 0x0001 => {
        name: "GPS Latitude Ref",
        types: &[Pt::Ascii],
    },
    Latitude = 0x0002 => {
        name: "GPS Latitude",
        types: &[Pt::Rational],
    },
    LongitudeRef = 0x0003 => {
        name: "GPS Longitude Ref",
        types: &[Pt::Ascii],
    },
    Longitude = 0x0004 => {
        name: "GPS Longitude",
        types: &[Pt::Rational],
    },
    AltitudeRef = 0x0005 => {
        name: "GPS Altitude Ref",
        types: &[Pt::Byte],
    },
    Altitude = 0x0006 => {
        name: "GPS Altitude",
        types: &[Pt::Rational],
    },
    TimeStamp = 0x0007 => {
        name: "GPS Time-Stamp",
        types: &[Pt::Rational],
    },
    Satellites = 0x0008 => {
        name: "GPS Satellites",
        types: &[Pt::Ascii],
    },
    Status = 0x0009 => {
        name: "GPS Status",
        types: &[Pt::Ascii],
    },
    MeasureMode = 0x000A => {
        name: "GPS Measure Mode",
        types: &[Pt::Ascii],
    },
    Dop = 0x000B => {
        name: "GPS DOP",
        types: &[Pt::Rational],
    },
    SpeedRef = 0x000C => {
        name: "GPS Speed Ref",
        types: &[Pt::Ascii],
    },
    Speed = 0x000D => {
        name: "GPS Speed",
        types: &[Pt::Rational],
    },
    ImgDirectionRef = 0x0010 => {
        name: "GPS Img Direction Ref",
        types: &[Pt::Ascii],
    },
    ImgDirection = 0x0011 => {
        name: "GPS Img Direction",
        types: &[Pt::Rational],
    },
    MapDatum = 0x0012 => {
        name: "GPS Map Datum",
        types: &[Pt::Ascii],
    },
    DateStamp = 0x001D => {
        name: "GPS Date Stamp",
        types: &[Pt::Ascii],
    },
    Differential = 0x001E => {
        name: "GPS Differential",
        types: &[Pt::Short],
    },
);

tag_table!(enum InteropTag => DirectoryKind::Interop,
    InteropIndex = 0x0001 => {
        name: "Interoperability Index",
        types: &[Pt::Ascii],
    },
    InteropVersion = 0x0002 => {
        name: "Interoperability Version",
        types: &[Pt::Undefined],
    },
    RelatedImageFileFormat = 0x1000 => {
        name: "Related Image File Format",
        types: &[Pt::Ascii],
    },
    RelatedImageWidth = 0x1001 => {
        name: "Related Image Width",
        types: &[Pt::Short, Pt::Long],
    },
    RelatedImageHeight = 0x1002 => {
        name: "Related Image Height",
        types: &[Pt::Short, Pt::Long],
    },
);
