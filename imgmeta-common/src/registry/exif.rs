use crate::exif::{Ifd, Tag, Type};

use super::macros;

/// Registry entry of an Exif tag
#[derive(Debug, Clone, Copy)]
pub struct ExifTagInfo {
    pub tag: Tag,
    pub ifd: Ifd,
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Declared type
    pub type_: Type,
    pub print: Print,
}

/// Interpretation used for the human readable value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Print {
    /// Same as the raw value
    Value,
    Orientation,
    ResolutionUnit,
    /// `1/60 s`
    ExposureTime,
    /// `F2.8`
    FNumber,
    /// APEX aperture as `F2.8`
    Aperture,
    /// `35.0 mm`
    FocalLength,
    ExposureProgram,
    MeteringMode,
    Flash,
    ColorSpace,
    YCbCrPositioning,
    /// Four ASCII digits as `2.30`
    Version,
    /// Character set prefix followed by text
    Comment,
    /// Windows UTF-16LE string
    Utf16,
    /// Degrees, minutes and seconds
    GpsCoordinate,
}

/// Text encodings that replace the numeric raw form of a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    None,
    Comment,
    Utf16Le,
}

impl ExifTagInfo {
    pub fn text_encoding(&self) -> TextEncoding {
        match self.print {
            Print::Comment => TextEncoding::Comment,
            Print::Utf16 => TextEncoding::Utf16Le,
            _ => TextEncoding::None,
        }
    }
}

macros::make_exif_tags![
    // IFD0
    (0x00FE, NewSubfileType, Primary, Long, "New Subfile Type", "A general indication of the kind of data contained in this subfile"),
    (0x0100, ImageWidth, Primary, Long, "Image Width", "The number of columns of image data"),
    (0x0101, ImageLength, Primary, Long, "Image Length", "The number of rows of image data"),
    (0x0102, BitsPerSample, Primary, Short, "Bits per Sample", "The number of bits per image component"),
    (0x0103, Compression, Primary, Short, "Compression", "The compression scheme used for the image data"),
    (0x0106, PhotometricInterpretation, Primary, Short, "Photometric Interpretation", "The pixel composition"),
    (0x010D, DocumentName, Primary, Ascii, "Document Name", "The name of the document from which this image was scanned"),
    (0x010E, ImageDescription, Primary, Ascii, "Image Description", "A character string giving the title of the image"),
    (0x010F, Make, Primary, Ascii, "Manufacturer", "The manufacturer of the recording equipment"),
    (0x0110, Model, Primary, Ascii, "Model", "The model name or model number of the equipment"),
    (0x0111, StripOffsets, Primary, Long, "Strip Offsets", "For each strip, the byte offset of that strip"),
    /// Image orientation and mirroring
    (0x0112, Orientation, Primary, Short, "Orientation", "The image orientation viewed in terms of rows and columns", print = Orientation),
    (0x0115, SamplesPerPixel, Primary, Short, "Samples per Pixel", "The number of components per pixel"),
    (0x0116, RowsPerStrip, Primary, Long, "Rows per Strip", "The number of rows per strip"),
    (0x0117, StripByteCounts, Primary, Long, "Strip Byte Count", "The total number of bytes in each strip"),
    (0x011A, XResolution, Primary, Rational, "X-Resolution", "The number of pixels per resolution unit in the image width direction"),
    (0x011B, YResolution, Primary, Rational, "Y-Resolution", "The number of pixels per resolution unit in the image height direction"),
    (0x011C, PlanarConfiguration, Primary, Short, "Planar Configuration", "Indicates whether pixel components are recorded in chunky or planar format"),
    (0x0128, ResolutionUnit, Primary, Short, "Resolution Unit", "The unit for measuring X-Resolution and Y-Resolution", print = ResolutionUnit),
    (0x012D, TransferFunction, Primary, Short, "Transfer Function", "A transfer function for the image"),
    /// The XMP equivalent is `Xmp.xmp.CreatorTool`
    (0x0131, Software, Primary, Ascii, "Software", "The name and version of the software or firmware used to generate the image"),
    (0x0132, DateTime, Primary, Ascii, "Date and Time", "The date and time of image creation"),
    (0x013B, Artist, Primary, Ascii, "Artist", "The name of the camera owner, photographer or image creator"),
    (0x013C, HostComputer, Primary, Ascii, "Host Computer", "The computer and/or operating system in use at the time of image creation"),
    (0x013E, WhitePoint, Primary, Rational, "White Point", "The chromaticity of the white point of the image"),
    (0x013F, PrimaryChromaticities, Primary, Rational, "Primary Chromaticities", "The chromaticity of the three primary colors of the image"),
    (0x0142, TileWidth, Primary, Long, "Tile Width", "The tile width in pixels"),
    (0x0143, TileLength, Primary, Long, "Tile Length", "The tile length (height) in pixels"),
    (0x0144, TileOffsets, Primary, Long, "Tile Offsets", "For each tile, the byte offset of that tile"),
    (0x0145, TileByteCounts, Primary, Long, "Tile Byte Counts", "For each tile, the number of (compressed) bytes in that tile"),
    (0x014A, SubIFDs, Primary, Long, "SubIFD Offsets", "Offsets to child IFDs"),
    (0x0153, SampleFormat, Primary, Short, "Sample Format", "How to interpret each data sample in a pixel"),
    (0x0211, YCbCrCoefficients, Primary, Rational, "YCbCr Coefficients", "The matrix coefficients for transformation from RGB to YCbCr"),
    (0x0212, YCbCrSubSampling, Primary, Short, "YCbCr Sub-Sampling", "The sampling ratio of chrominance components"),
    (0x0213, YCbCrPositioning, Primary, Short, "YCbCr Positioning", "The position of chrominance components in relation to the luminance component", print = YCbCrPositioning),
    (0x0214, ReferenceBlackWhite, Primary, Rational, "Reference Black/White", "The reference black point value and reference white point value"),
    (0x02BC, XMLPacket, Primary, Byte, "XML Packet", "XMP metadata embedded in a TIFF file"),
    (0x4746, Rating, Primary, Short, "Windows Rating", "Rating tag used by Windows"),
    (0x4749, RatingPercent, Primary, Short, "Windows Rating Percent", "Rating tag used by Windows, value in percent"),
    (0x8298, Copyright, Primary, Ascii, "Copyright", "Copyright information"),
    (0x83BB, IPTCNAA, Primary, Undefined, "IPTC/NAA", "IPTC-IIM data embedded in a TIFF file"),
    (0x8769, ExifTag, Primary, Long, "Exif IFD Pointer", "A pointer to the Exif IFD"),
    (0x8773, InterColorProfile, Primary, Undefined, "Inter Color Profile", "An ICC colour profile"),
    (0x8825, GPSTag, Primary, Long, "GPS Info IFD Pointer", "A pointer to the GPS Info IFD"),
    (0x9C9B, XPTitle, Primary, Byte, "Windows Title", "Title tag used by Windows, encoded in UCS2", print = Utf16),
    (0x9C9C, XPComment, Primary, Byte, "Windows Comment", "Comment tag used by Windows, encoded in UCS2", print = Utf16),
    (0x9C9D, XPAuthor, Primary, Byte, "Windows Author", "Author tag used by Windows, encoded in UCS2", print = Utf16),
    (0x9C9E, XPKeywords, Primary, Byte, "Windows Keywords", "Keywords tag used by Windows, encoded in UCS2", print = Utf16),
    (0x9C9F, XPSubject, Primary, Byte, "Windows Subject", "Subject tag used by Windows, encoded in UCS2", print = Utf16),
    (0xC4A5, PrintImageMatching, Primary, Undefined, "Print Image Matching", "Print Image Matching information"),
    (0xC612, DNGVersion, Primary, Byte, "DNG Version", "The four-tier version number of the DNG specification"),
    (0xC614, UniqueCameraModel, Primary, Ascii, "Unique Camera Model", "A unique, non-localized name for the camera model"),

    // Exif IFD
    (0x829A, ExposureTime, Exif, Rational, "Exposure Time", "Exposure time, given in seconds", print = ExposureTime),
    (0x829D, FNumber, Exif, Rational, "FNumber", "The F number", print = FNumber),
    (0x8822, ExposureProgram, Exif, Short, "Exposure Program", "The class of the program used by the camera to set exposure", print = ExposureProgram),
    (0x8824, SpectralSensitivity, Exif, Ascii, "Spectral Sensitivity", "The spectral sensitivity of each channel of the camera used"),
    /// Called PhotographicSensitivity since Exif 2.3
    (0x8827, ISOSpeedRatings, Exif, Short, "ISO Speed Ratings", "The ISO Speed and ISO Latitude of the camera or input device"),
    (0x8830, SensitivityType, Exif, Short, "Sensitivity Type", "Which parameter of ISO 12232 is used for the photographic sensitivity"),
    (0x8832, RecommendedExposureIndex, Exif, Long, "Recommended Exposure Index", "The recommended exposure index value"),
    (0x9000, ExifVersion, Exif, Undefined, "Exif Version", "The version of the Exif standard supported", print = Version),
    (0x9003, DateTimeOriginal, Exif, Ascii, "Date and Time (original)", "The date and time when the original image data was generated"),
    (0x9004, DateTimeDigitized, Exif, Ascii, "Date and Time (digitized)", "The date and time when the image was stored as digital data"),
    (0x9010, OffsetTime, Exif, Ascii, "Offset Time", "Time difference from UTC for DateTime"),
    (0x9011, OffsetTimeOriginal, Exif, Ascii, "Offset Time Original", "Time difference from UTC for DateTimeOriginal"),
    (0x9012, OffsetTimeDigitized, Exif, Ascii, "Offset Time Digitized", "Time difference from UTC for DateTimeDigitized"),
    (0x9101, ComponentsConfiguration, Exif, Undefined, "Components Configuration", "Channels of each component"),
    (0x9102, CompressedBitsPerPixel, Exif, Rational, "Compressed Bits per Pixel", "Compression mode used for a compressed image, in bits per pixel"),
    (0x9201, ShutterSpeedValue, Exif, SRational, "Shutter speed", "Shutter speed in APEX units"),
    /// Lens aperture with unit APEX
    (0x9202, ApertureValue, Exif, Rational, "Aperture", "The lens aperture in APEX units", print = Aperture),
    (0x9203, BrightnessValue, Exif, SRational, "Brightness", "The value of brightness in APEX units"),
    (0x9204, ExposureBiasValue, Exif, SRational, "Exposure Bias", "The exposure bias in APEX units"),
    (0x9205, MaxApertureValue, Exif, Rational, "Max Aperture Value", "The smallest F number of the lens in APEX units", print = Aperture),
    (0x9206, SubjectDistance, Exif, Rational, "Subject Distance", "The distance to the subject, given in meters"),
    (0x9207, MeteringMode, Exif, Short, "Metering Mode", "The metering mode", print = MeteringMode),
    (0x9208, LightSource, Exif, Short, "Light Source", "The kind of light source"),
    (0x9209, Flash, Exif, Short, "Flash", "The status of flash when the image was shot", print = Flash),
    (0x920A, FocalLength, Exif, Rational, "Focal Length", "The actual focal length of the lens, in mm", print = FocalLength),
    (0x9214, SubjectArea, Exif, Short, "Subject Area", "The location and area of the main subject in the overall scene"),
    (0x927C, MakerNote, Exif, Undefined, "Maker Note", "Manufacturer specific information"),
    (0x9286, UserComment, Exif, Undefined, "User Comment", "Keywords or comments on the image", print = Comment),
    (0x9290, SubSecTime, Exif, Ascii, "Sub-seconds Time", "Fractions of seconds for DateTime"),
    (0x9291, SubSecTimeOriginal, Exif, Ascii, "Sub-seconds Time Original", "Fractions of seconds for DateTimeOriginal"),
    (0x9292, SubSecTimeDigitized, Exif, Ascii, "Sub-seconds Time Digitized", "Fractions of seconds for DateTimeDigitized"),
    (0xA000, FlashpixVersion, Exif, Undefined, "FlashPix Version", "The FlashPix format version supported by a FPXR file", print = Version),
    (0xA001, ColorSpace, Exif, Short, "Color Space", "The color space information tag", print = ColorSpace),
    (0xA002, PixelXDimension, Exif, Long, "Pixel X Dimension", "The valid width of the meaningful image"),
    (0xA003, PixelYDimension, Exif, Long, "Pixel Y Dimension", "The valid height of the meaningful image"),
    (0xA004, RelatedSoundFile, Exif, Ascii, "Related Sound File", "The name of an audio file related to the image data"),
    (0xA005, InteroperabilityTag, Exif, Long, "Interoperability IFD Pointer", "A pointer to the Interoperability IFD"),
    (0xA20E, FocalPlaneXResolution, Exif, Rational, "Focal Plane X-Resolution", "The number of pixels in the image width direction per focal plane resolution unit"),
    (0xA20F, FocalPlaneYResolution, Exif, Rational, "Focal Plane Y-Resolution", "The number of pixels in the image height direction per focal plane resolution unit"),
    (0xA210, FocalPlaneResolutionUnit, Exif, Short, "Focal Plane Resolution Unit", "The unit for measuring the focal plane resolution", print = ResolutionUnit),
    (0xA215, ExposureIndex, Exif, Rational, "Exposure Index", "The exposure index selected on the camera or input device"),
    (0xA217, SensingMethod, Exif, Short, "Sensing Method", "The image sensor type on the camera or input device"),
    (0xA300, FileSource, Exif, Undefined, "File Source", "The image source"),
    (0xA301, SceneType, Exif, Undefined, "Scene Type", "The type of scene"),
    (0xA302, CFAPattern, Exif, Undefined, "Color Filter Array Pattern", "The color filter array geometric pattern of the image sensor"),
    (0xA401, CustomRendered, Exif, Short, "Custom Rendered", "The use of special processing on image data"),
    (0xA402, ExposureMode, Exif, Short, "Exposure Mode", "The exposure mode set when the image was shot"),
    (0xA403, WhiteBalance, Exif, Short, "White Balance", "The white balance mode set when the image was shot"),
    (0xA404, DigitalZoomRatio, Exif, Rational, "Digital Zoom Ratio", "The digital zoom ratio when the image was shot"),
    (0xA405, FocalLengthIn35mmFilm, Exif, Short, "Focal Length In 35mm Film", "The equivalent focal length assuming a 35mm film camera, in mm"),
    (0xA406, SceneCaptureType, Exif, Short, "Scene Capture Type", "The type of scene that was shot"),
    (0xA407, GainControl, Exif, Short, "Gain Control", "The degree of overall image gain adjustment"),
    (0xA408, Contrast, Exif, Short, "Contrast", "The direction of contrast processing applied by the camera"),
    (0xA409, Saturation, Exif, Short, "Saturation", "The direction of saturation processing applied by the camera"),
    (0xA40A, Sharpness, Exif, Short, "Sharpness", "The direction of sharpness processing applied by the camera"),
    (0xA40C, SubjectDistanceRange, Exif, Short, "Subject Distance Range", "The distance to the subject"),
    (0xA420, ImageUniqueID, Exif, Ascii, "Image Unique ID", "An identifier assigned uniquely to each image"),
    (0xA430, CameraOwnerName, Exif, Ascii, "Camera Owner Name", "The owner of the camera"),
    (0xA431, BodySerialNumber, Exif, Ascii, "Body Serial Number", "The serial number of the camera body"),
    (0xA432, LensSpecification, Exif, Rational, "Lens Specification", "Minimum and maximum focal length and F number of the lens"),
    (0xA433, LensMake, Exif, Ascii, "Lens Make", "The lens manufacturer"),
    (0xA434, LensModel, Exif, Ascii, "Lens Model", "The lens model name and model number"),
    (0xA435, LensSerialNumber, Exif, Ascii, "Lens Serial Number", "The serial number of the interchangeable lens"),

    // Interoperability IFD
    (0x0001, InteroperabilityIndex, Interoperability, Ascii, "Interoperability Index", "The identification of the interoperability rule"),
    (0x0002, InteroperabilityVersion, Interoperability, Undefined, "Interoperability Version", "Interoperability version", print = Version),
    (0x1000, RelatedImageFileFormat, Interoperability, Ascii, "Related Image File Format", "File format of the image file"),
    (0x1001, RelatedImageWidth, Interoperability, Long, "Related Image Width", "Image width"),
    (0x1002, RelatedImageLength, Interoperability, Long, "Related Image Length", "Image height"),

    // GPS IFD
    (0x0000, GPSVersionID, Gps, Byte, "GPS Version ID", "The version of the GPS IFD"),
    (0x0001, GPSLatitudeRef, Gps, Ascii, "GPS Latitude Reference", "Whether the latitude is north or south"),
    (0x0002, GPSLatitude, Gps, Rational, "GPS Latitude", "The latitude as degrees, minutes and seconds", print = GpsCoordinate),
    (0x0003, GPSLongitudeRef, Gps, Ascii, "GPS Longitude Reference", "Whether the longitude is east or west"),
    (0x0004, GPSLongitude, Gps, Rational, "GPS Longitude", "The longitude as degrees, minutes and seconds", print = GpsCoordinate),
    (0x0005, GPSAltitudeRef, Gps, Byte, "GPS Altitude Reference", "The altitude used as the reference altitude"),
    (0x0006, GPSAltitude, Gps, Rational, "GPS Altitude", "The altitude based on the reference, in meters"),
    (0x0007, GPSTimeStamp, Gps, Rational, "GPS Time Stamp", "The time as UTC (hour, minute, second)"),
    (0x0008, GPSSatellites, Gps, Ascii, "GPS Satellites", "The GPS satellites used for measurements"),
    (0x0009, GPSStatus, Gps, Ascii, "GPS Status", "The status of the GPS receiver"),
    (0x000A, GPSMeasureMode, Gps, Ascii, "GPS Measure Mode", "The GPS measurement mode"),
    (0x000B, GPSDOP, Gps, Rational, "GPS Data Degree of Precision", "The GPS DOP (data degree of precision)"),
    (0x000C, GPSSpeedRef, Gps, Ascii, "GPS Speed Reference", "The unit used to express the GPS receiver speed"),
    (0x000D, GPSSpeed, Gps, Rational, "GPS Speed", "The speed of GPS receiver movement"),
    (0x000E, GPSTrackRef, Gps, Ascii, "GPS Track Ref", "The reference for the direction of movement"),
    (0x000F, GPSTrack, Gps, Rational, "GPS Track", "The direction of GPS receiver movement"),
    (0x0010, GPSImgDirectionRef, Gps, Ascii, "GPS Image Direction Reference", "The reference for the direction of the image"),
    (0x0011, GPSImgDirection, Gps, Rational, "GPS Image Direction", "The direction of the image when it was captured"),
    (0x0012, GPSMapDatum, Gps, Ascii, "GPS Map Datum", "The geodetic survey data used by the GPS receiver"),
    (0x001B, GPSProcessingMethod, Gps, Undefined, "GPS Processing Method", "The name of the method used for location finding", print = Comment),
    (0x001C, GPSAreaInformation, Gps, Undefined, "GPS Area Information", "The name of the GPS area", print = Comment),
    (0x001D, GPSDateStamp, Gps, Ascii, "GPS Date Stamp", "Date relative to UTC, format YYYY:MM:DD"),
    (0x001E, GPSDifferential, Gps, Short, "GPS Differential", "Whether differential correction is applied"),

    // IFD1
    (0x0100, ThumbnailImageWidth = "ImageWidth", Thumbnail, Long, "Image Width", "The number of columns of thumbnail image data"),
    (0x0101, ThumbnailImageLength = "ImageLength", Thumbnail, Long, "Image Length", "The number of rows of thumbnail image data"),
    (0x0102, ThumbnailBitsPerSample = "BitsPerSample", Thumbnail, Short, "Bits per Sample", "The number of bits per thumbnail component"),
    (0x0103, ThumbnailCompression = "Compression", Thumbnail, Short, "Compression", "The compression scheme used for the thumbnail"),
    (0x0106, ThumbnailPhotometricInterpretation = "PhotometricInterpretation", Thumbnail, Short, "Photometric Interpretation", "The pixel composition of the thumbnail"),
    (0x0111, ThumbnailStripOffsets = "StripOffsets", Thumbnail, Long, "Strip Offsets", "For each strip, the byte offset of that strip"),
    (0x0112, ThumbnailOrientation = "Orientation", Thumbnail, Short, "Orientation", "The thumbnail orientation", print = Orientation),
    (0x0115, ThumbnailSamplesPerPixel = "SamplesPerPixel", Thumbnail, Short, "Samples per Pixel", "The number of components per pixel"),
    (0x0116, ThumbnailRowsPerStrip = "RowsPerStrip", Thumbnail, Long, "Rows per Strip", "The number of rows per strip"),
    (0x0117, ThumbnailStripByteCounts = "StripByteCounts", Thumbnail, Long, "Strip Byte Count", "The total number of bytes in each strip"),
    (0x011A, ThumbnailXResolution = "XResolution", Thumbnail, Rational, "X-Resolution", "Horizontal thumbnail resolution"),
    (0x011B, ThumbnailYResolution = "YResolution", Thumbnail, Rational, "Y-Resolution", "Vertical thumbnail resolution"),
    (0x0128, ThumbnailResolutionUnit = "ResolutionUnit", Thumbnail, Short, "Resolution Unit", "The unit for measuring the thumbnail resolution", print = ResolutionUnit),
    (0x0201, JPEGInterchangeFormat, Thumbnail, Long, "JPEG Interchange Format", "The offset to the start byte of the JPEG thumbnail"),
    (0x0202, JPEGInterchangeFormatLength, Thumbnail, Long, "JPEG Interchange Format Length", "The number of bytes of the JPEG thumbnail"),
    (0x0213, ThumbnailYCbCrPositioning = "YCbCrPositioning", Thumbnail, Short, "YCbCr Positioning", "The position of chrominance components", print = YCbCrPositioning),
];
