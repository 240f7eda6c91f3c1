use crate::xmp::XmpScalar::*;
use crate::xmp::XmpType::*;
use crate::xmp::{Namespace, XmpType};

use super::macros;

/// Registry entry of an XMP property
#[derive(Debug, Clone, Copy)]
pub struct XmpPropertyInfo {
    pub prefix: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub type_: XmpType,
}

pub static NAMESPACES: &[Namespace] = &[
    Namespace {
        prefix: "dc",
        uri: "http://purl.org/dc/elements/1.1/",
        description: "Dublin Core schema",
    },
    Namespace {
        prefix: "xmp",
        uri: "http://ns.adobe.com/xap/1.0/",
        description: "XMP Basic schema",
    },
    Namespace {
        prefix: "xmpRights",
        uri: "http://ns.adobe.com/xap/1.0/rights/",
        description: "XMP Rights Management schema",
    },
    Namespace {
        prefix: "xmpMM",
        uri: "http://ns.adobe.com/xap/1.0/mm/",
        description: "XMP Media Management schema",
    },
    Namespace {
        prefix: "xmpBJ",
        uri: "http://ns.adobe.com/xap/1.0/bj/",
        description: "XMP Basic Job Ticket schema",
    },
    Namespace {
        prefix: "xmpTPg",
        uri: "http://ns.adobe.com/xap/1.0/t/pg/",
        description: "XMP Paged-Text schema",
    },
    Namespace {
        prefix: "xmpDM",
        uri: "http://ns.adobe.com/xmp/1.0/DynamicMedia/",
        description: "XMP Dynamic Media schema",
    },
    Namespace {
        prefix: "xmpidq",
        uri: "http://ns.adobe.com/xmp/Identifier/qual/1.0/",
        description: "XMP identifier qualifier",
    },
    Namespace {
        prefix: "pdf",
        uri: "http://ns.adobe.com/pdf/1.3/",
        description: "Adobe PDF schema",
    },
    Namespace {
        prefix: "photoshop",
        uri: "http://ns.adobe.com/photoshop/1.0/",
        description: "Adobe Photoshop schema",
    },
    Namespace {
        prefix: "crs",
        uri: "http://ns.adobe.com/camera-raw-settings/1.0/",
        description: "Camera Raw schema",
    },
    Namespace {
        prefix: "tiff",
        uri: "http://ns.adobe.com/tiff/1.0/",
        description: "Exif schema for TIFF properties",
    },
    Namespace {
        prefix: "exif",
        uri: "http://ns.adobe.com/exif/1.0/",
        description: "Exif schema for Exif-specific properties",
    },
    Namespace {
        prefix: "exifEX",
        uri: "http://cipa.jp/exif/1.0/",
        description: "Exif 2.3 metadata for XMP",
    },
    Namespace {
        prefix: "aux",
        uri: "http://ns.adobe.com/exif/1.0/aux/",
        description: "Exif schema for additional Exif properties",
    },
    Namespace {
        prefix: "Iptc4xmpCore",
        uri: "http://iptc.org/std/Iptc4xmpCore/1.0/xmlns/",
        description: "IPTC Core schema",
    },
    Namespace {
        prefix: "Iptc4xmpExt",
        uri: "http://iptc.org/std/Iptc4xmpExt/2008-02-29/",
        description: "IPTC Extension schema",
    },
    Namespace {
        prefix: "lr",
        uri: "http://ns.adobe.com/lightroom/1.0/",
        description: "Adobe Lightroom schema",
    },
    Namespace {
        prefix: "digiKam",
        uri: "http://www.digikam.org/ns/1.0/",
        description: "digiKam schema",
    },
    Namespace {
        prefix: "MicrosoftPhoto",
        uri: "http://ns.microsoft.com/photo/1.0/",
        description: "Microsoft Photo schema",
    },
];

macros::make_xmp_properties![
    // Dublin Core
    ("dc", contributor, "Contributor", Bag(ProperName), "Contributors to the resource (other than the authors)"),
    ("dc", coverage, "Coverage", Scalar(Text), "The spatial or temporal topic of the resource"),
    ("dc", creator, "Creator", Seq(ProperName), "The authors of the resource, listed in order of precedence"),
    ("dc", date, "Date", Seq(Date), "Dates associated with events in the life cycle of the resource"),
    ("dc", description, "Description", LangAlt, "A textual description of the content of the resource"),
    ("dc", format, "Format", Scalar(MimeType), "The file format used when saving the resource"),
    ("dc", identifier, "Identifier", Scalar(Text), "Unique identifier of the resource"),
    ("dc", language, "Language", Bag(Locale), "Languages used in the resource"),
    ("dc", publisher, "Publisher", Bag(ProperName), "Publishers"),
    ("dc", relation, "Relation", Bag(Text), "Relationships to other documents"),
    ("dc", rights, "Rights", LangAlt, "Informal rights statement"),
    ("dc", source, "Source", Scalar(Text), "Unique identifier of the work from which this resource was derived"),
    ("dc", subject, "Subject", Bag(Text), "Descriptive phrases or keywords that specify the topic of the content"),
    ("dc", title, "Title", LangAlt, "The title of the document, or the name given to the resource"),
    ("dc", type, "Type", Bag(Text), "The nature or genre of the resource"),

    // XMP Basic
    ("xmp", Advisory, "Advisory", Bag(Text), "Properties that were edited outside the authoring application"),
    ("xmp", BaseURL, "Base URL", Scalar(Uri), "The base URL for relative URLs in the document content"),
    ("xmp", CreateDate, "Create Date", Scalar(Date), "The date and time the resource was originally created"),
    ("xmp", CreatorTool, "Creator Tool", Scalar(AgentName), "The name of the first known tool used to create the resource"),
    ("xmp", Identifier, "Identifier", Bag(Text), "Text values that unambiguously identify the resource"),
    ("xmp", Label, "Label", Scalar(Text), "A word or short phrase that identifies a document as a member of a user-defined collection"),
    ("xmp", MetadataDate, "Metadata Date", Scalar(Date), "The date and time that any metadata for this resource was last changed"),
    ("xmp", ModifyDate, "Modify Date", Scalar(Date), "The date and time the resource was last modified"),
    ("xmp", Nickname, "Nickname", Scalar(Text), "A short informal name for the resource"),
    ("xmp", Rating, "Rating", Scalar(Integer), "A number that indicates a document's status relative to other documents"),
    ("xmp", Thumbnails, "Thumbnails", Alt(Text), "Thumbnail images for the resource"),

    // XMP Rights
    ("xmpRights", Certificate, "Certificate", Scalar(Uri), "Online rights management certificate"),
    ("xmpRights", Marked, "Marked", Scalar(Boolean), "Whether this is a rights-managed resource"),
    ("xmpRights", Owner, "Owner", Bag(ProperName), "Legal owners"),
    ("xmpRights", UsageTerms, "Usage Terms", LangAlt, "Text instructions on how a resource can be legally used"),
    ("xmpRights", WebStatement, "Web Statement", Scalar(Uri), "Location of a web page describing the owner and usage rights"),

    // XMP Media Management
    ("xmpMM", DocumentID, "Document ID", Scalar(Uri), "The common identifier for all versions and renditions of a document"),
    ("xmpMM", InstanceID, "Instance ID", Scalar(Uri), "An identifier for a specific incarnation of a document"),
    ("xmpMM", OriginalDocumentID, "Original Document ID", Scalar(Uri), "The common identifier for the original resource"),
    ("xmpMM", RenditionClass, "Rendition Class", Scalar(Text), "The rendition class name for this resource"),
    ("xmpMM", VersionID, "Version ID", Scalar(Text), "The document version identifier for this resource"),

    // XMP Paged-Text
    ("xmpTPg", NPages, "Number of Pages", Scalar(Integer), "The number of pages in the document"),
    ("xmpTPg", PlateNames, "Plate Names", Seq(Text), "An ordered array of plate names"),

    // XMP Dynamic Media
    ("xmpDM", album, "Album", Scalar(Text), "The name of the album"),
    ("xmpDM", artist, "Artist", Scalar(Text), "The name of the artist or artists"),
    ("xmpDM", comment, "Comment", Scalar(Text), "A user's comments"),
    ("xmpDM", genre, "Genre", Scalar(Text), "The name of the genre"),

    // Adobe PDF
    ("pdf", Keywords, "Keywords", Scalar(Text), "Keywords"),
    ("pdf", PDFVersion, "PDF Version", Scalar(Text), "The PDF file version"),
    ("pdf", Producer, "Producer", Scalar(AgentName), "The name of the tool that created the PDF document"),

    // Photoshop
    ("photoshop", AuthorsPosition, "Authors Position", Scalar(Text), "By-line title"),
    ("photoshop", CaptionWriter, "Caption Writer", Scalar(ProperName), "Writer or editor"),
    ("photoshop", Category, "Category", Scalar(Text), "Category, limited to 3 7-bit ASCII characters"),
    ("photoshop", City, "City", Scalar(Text), "City"),
    ("photoshop", ColorMode, "Color Mode", Scalar(Integer), "The colour mode"),
    ("photoshop", Country, "Country", Scalar(Text), "Country name"),
    ("photoshop", Credit, "Credit", Scalar(Text), "Credit"),
    ("photoshop", DateCreated, "Date Created", Scalar(Date), "The date the intellectual content of the document was created"),
    ("photoshop", Headline, "Headline", Scalar(Text), "Headline"),
    ("photoshop", ICCProfile, "ICC Profile", Scalar(Text), "The colour profile"),
    ("photoshop", Instructions, "Instructions", Scalar(Text), "Special instructions"),
    ("photoshop", Source, "Source", Scalar(Text), "Source"),
    ("photoshop", State, "State", Scalar(Text), "Province or state"),
    ("photoshop", SupplementalCategories, "Supplemental Categories", Bag(Text), "Supplemental categories"),
    ("photoshop", TransmissionReference, "Transmission Reference", Scalar(Text), "Original transmission reference"),
    ("photoshop", Urgency, "Urgency", Scalar(Integer), "Urgency, valid range is 1-8"),

    // Camera Raw
    ("crs", Exposure, "Exposure", Scalar(Real), "Exposure adjustment in EV"),
    ("crs", Temperature, "Temperature", Scalar(Integer), "White balance temperature"),
    ("crs", WhiteBalance, "White Balance", Scalar(Text), "White balance setting"),

    // TIFF
    ("tiff", Artist, "Artist", Scalar(ProperName), "Camera owner, photographer or image creator"),
    ("tiff", BitsPerSample, "Bits Per Sample", Seq(Integer), "Number of bits per component in each channel"),
    ("tiff", Compression, "Compression", Scalar(Integer), "Compression scheme"),
    ("tiff", Copyright, "Copyright", LangAlt, "Copyright information"),
    ("tiff", DateTime, "Date Time", Scalar(Date), "Date and time image was last changed"),
    ("tiff", ImageDescription, "Image Description", LangAlt, "Title of the image"),
    ("tiff", ImageLength, "Image Length", Scalar(Integer), "Image height in pixels"),
    ("tiff", ImageWidth, "Image Width", Scalar(Integer), "Image width in pixels"),
    ("tiff", Make, "Make", Scalar(ProperName), "Manufacturer of recording equipment"),
    ("tiff", Model, "Model", Scalar(ProperName), "Model name or number of equipment"),
    ("tiff", Orientation, "Orientation", Scalar(Integer), "Orientation"),
    ("tiff", ResolutionUnit, "Resolution Unit", Scalar(Integer), "Unit used for XResolution and YResolution"),
    ("tiff", Software, "Software", Scalar(AgentName), "Software or firmware used to generate image"),
    ("tiff", XResolution, "X Resolution", Scalar(Rational), "Horizontal resolution in pixels per unit"),
    ("tiff", YResolution, "Y Resolution", Scalar(Rational), "Vertical resolution in pixels per unit"),

    // Exif
    ("exif", ApertureValue, "Aperture Value", Scalar(Rational), "The lens aperture in APEX units"),
    ("exif", ColorSpace, "Color Space", Scalar(Integer), "Color space information"),
    ("exif", DateTimeDigitized, "Date and Time Digitized", Scalar(Date), "Date and time when image was stored as digital data"),
    ("exif", DateTimeOriginal, "Date and Time Original", Scalar(Date), "Date and time when original image was generated"),
    ("exif", ExifVersion, "Exif Version", Scalar(Text), "Exif version number"),
    ("exif", ExposureBiasValue, "Exposure Bias Value", Scalar(Rational), "Exposure bias in APEX units"),
    ("exif", ExposureProgram, "Exposure Program", Scalar(Integer), "Class of program used for exposure"),
    ("exif", ExposureTime, "Exposure Time", Scalar(Rational), "Exposure time in seconds"),
    ("exif", FNumber, "F Number", Scalar(Rational), "F number"),
    ("exif", FocalLength, "Focal Length", Scalar(Rational), "Focal length of the lens, in millimeters"),
    ("exif", GPSAltitude, "GPS Altitude", Scalar(Rational), "GPS altitude in meters"),
    ("exif", GPSAltitudeRef, "GPS Altitude Reference", Scalar(Integer), "Whether the altitude is above or below sea level"),
    ("exif", GPSLatitude, "GPS Latitude", Scalar(GpsCoordinate), "GPS latitude"),
    ("exif", GPSLongitude, "GPS Longitude", Scalar(GpsCoordinate), "GPS longitude"),
    ("exif", GPSTimeStamp, "GPS Time Stamp", Scalar(Date), "Date and time of the GPS fix"),
    ("exif", GPSVersionID, "GPS Version ID", Scalar(Text), "GPS tag version"),
    ("exif", ISOSpeedRatings, "ISO Speed Ratings", Seq(Integer), "ISO speed and ISO latitude"),
    ("exif", MeteringMode, "Metering Mode", Scalar(Integer), "Metering mode"),
    ("exif", PixelXDimension, "Pixel X Dimension", Scalar(Integer), "Valid image width, in pixels"),
    ("exif", PixelYDimension, "Pixel Y Dimension", Scalar(Integer), "Valid image height, in pixels"),
    ("exif", UserComment, "User Comment", LangAlt, "Comments from user"),

    // Exif 2.3
    ("exifEX", BodySerialNumber, "Body Serial Number", Scalar(Text), "Serial number of the camera body"),
    ("exifEX", LensMake, "Lens Make", Scalar(ProperName), "Lens manufacturer"),
    ("exifEX", LensModel, "Lens Model", Scalar(Text), "Lens model name and number"),
    ("exifEX", PhotographicSensitivity, "Photographic Sensitivity", Scalar(Integer), "Sensitivity of the camera"),

    // Exif aux
    ("aux", Lens, "Lens", Scalar(Text), "A description of the lens used to take the photograph"),
    ("aux", SerialNumber, "Serial Number", Scalar(Text), "The serial number of the camera or camera body"),

    // IPTC Core
    ("Iptc4xmpCore", CountryCode, "Country Code", Scalar(Text), "Code of the country the content is focusing on"),
    ("Iptc4xmpCore", IntellectualGenre, "Intellectual Genre", Scalar(Text), "Describes the nature, intellectual or journalistic characteristic of an item"),
    ("Iptc4xmpCore", Location, "Location", Scalar(Text), "Name of a location the content is focusing on"),
    ("Iptc4xmpCore", Scene, "Scene Code", Bag(Text), "Describes the scene of a photo content"),
    ("Iptc4xmpCore", SubjectCode, "Subject Code", Bag(Text), "Specifies one or more subjects from the IPTC Subject-NewsCodes taxonomy"),

    // IPTC Extension
    ("Iptc4xmpExt", PersonInImage, "Person Shown", Bag(Text), "Name of a person shown in the image"),
    ("Iptc4xmpExt", Event, "Event", LangAlt, "Names or describes the specific event at which the photo was taken"),

    // Lightroom
    ("lr", hierarchicalSubject, "Hierarchical Subject", Bag(Text), "Keywords with their hierarchy, separated by '|'"),

    // digiKam
    ("digiKam", TagsList, "Tags List", Seq(Text), "The list of complete tag paths"),
    ("digiKam", ColorLabel, "Color Label", Scalar(Integer), "The color label assigned to the image"),
    ("digiKam", PickLabel, "Pick Label", Scalar(Integer), "The pick label assigned to the image"),

    // Microsoft Photo
    ("MicrosoftPhoto", LastKeywordXMP, "Last Keyword XMP", Bag(Text), "Keywords as stored by Windows Photo Gallery"),
    ("MicrosoftPhoto", Rating, "Rating", Scalar(Integer), "Rating in percent"),
];
