use crate::iptc::{DataSet, IptcType};

use super::macros;

/// Registry entry of an IPTC dataset
#[derive(Debug, Clone, Copy)]
pub struct IptcDataSetInfo {
    pub dataset: DataSet,
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub type_: IptcType,
    pub repeatable: bool,
    /// Minimum length in bytes
    pub min_len: usize,
    /// Maximum length in bytes
    pub max_len: usize,
}

macros::make_iptc_datasets![
    // Envelope record
    (1, 0, ModelVersion, "Model Version", Short, NR, 2, 2, "A binary number identifying the version of the Information Interchange Model"),
    (1, 5, Destination, "Destination", String, R, 0, 1024, "Routing information for the object"),
    (1, 20, FileFormat, "File Format", Short, NR, 2, 2, "The file format of the object data"),
    (1, 22, FileVersion, "File Version", Short, NR, 2, 2, "The version of the file format"),
    (1, 30, ServiceId, "Service ID", String, NR, 0, 10, "Identifies the provider and product"),
    (1, 40, EnvelopeNumber, "Envelope Number", String, NR, 8, 8, "A number unique for the date and the service ID"),
    (1, 50, ProductId, "Product ID", String, R, 0, 32, "Allows a provider to identify subsets of its overall service"),
    (1, 60, EnvelopePriority, "Envelope Priority", String, NR, 1, 1, "The envelope handling priority"),
    (1, 70, DateSent, "Date Sent", Date, NR, 8, 8, "The day the service sent the material"),
    (1, 80, TimeSent, "Time Sent", Time, NR, 11, 11, "The time the service sent the material"),
    (1, 90, CharacterSet, "Character Set", Undefined, NR, 0, 32, "Control functions used for the announcement, invocation or designation of coded character sets"),
    (1, 100, UNO, "Unique Name Object", String, NR, 14, 80, "Eternal, globally unique identification for the object"),
    (1, 120, ARMId, "ARM Identifier", Short, NR, 2, 2, "The Abstract Relationship Method identifier"),
    (1, 122, ARMVersion, "ARM Version", Short, NR, 2, 2, "The version of the Abstract Relationship Method"),

    // Application record 2
    (2, 0, RecordVersion, "Record Version", Short, NR, 2, 2, "The version of the Information Interchange Model, part II"),
    (2, 3, ObjectType, "Object Type", String, NR, 3, 67, "The object type as reference number and optional name"),
    (2, 4, ObjectAttribute, "Object Attribute", String, R, 4, 68, "The nature, intellectual or journalistic characteristic of an object"),
    (2, 5, ObjectName, "Object Name", String, NR, 0, 64, "A shorthand reference for the object, also known as title"),
    (2, 7, EditStatus, "Edit Status", String, NR, 0, 64, "Status of the object data, according to the practice of the provider"),
    (2, 8, EditorialUpdate, "Editorial Update", String, NR, 2, 2, "The type of update that this object provides to a previous object"),
    (2, 10, Urgency, "Urgency", String, NR, 1, 1, "The editorial urgency of content"),
    (2, 12, Subject, "Subject", String, R, 13, 236, "The subject of the object data as a subject reference"),
    (2, 15, Category, "Category", String, NR, 0, 3, "The subject of the object data, deprecated"),
    (2, 20, SuppCategory, "Supplemental Category", String, R, 0, 32, "Further refinement of the subject, deprecated"),
    (2, 22, FixtureId, "Fixture ID", String, NR, 0, 32, "Identifies object data that recurs often and predictably"),
    (2, 25, Keywords, "Keywords", String, R, 0, 64, "Keywords to express the subject of the content"),
    (2, 26, LocationCode, "Location Code", String, R, 3, 3, "Country or geographical location code"),
    (2, 27, LocationName, "Location Name", String, R, 0, 64, "Country or geographical location name"),
    (2, 30, ReleaseDate, "Release Date", Date, NR, 8, 8, "The earliest date the provider intends the object to be used"),
    (2, 35, ReleaseTime, "Release Time", Time, NR, 11, 11, "The earliest time the provider intends the object to be used"),
    (2, 37, ExpirationDate, "Expiration Date", Date, NR, 8, 8, "The latest date the provider intends the object to be used"),
    (2, 38, ExpirationTime, "Expiration Time", Time, NR, 11, 11, "The latest time the provider intends the object to be used"),
    (2, 40, SpecialInstructions, "Special Instructions", String, NR, 0, 256, "Other editorial instructions concerning the use of the object"),
    (2, 42, ActionAdvised, "Action Advised", String, NR, 2, 2, "The type of action that this object provides to a previous object"),
    (2, 45, ReferenceService, "Reference Service", String, R, 0, 10, "The service ID of a prior envelope to which the current object refers"),
    (2, 47, ReferenceDate, "Reference Date", Date, R, 8, 8, "The date of a prior envelope to which the current object refers"),
    (2, 50, ReferenceNumber, "Reference Number", String, R, 8, 8, "The envelope number of a prior envelope to which the current object refers"),
    (2, 55, DateCreated, "Date Created", Date, NR, 8, 8, "The date the intellectual content of the object was created"),
    (2, 60, TimeCreated, "Time Created", Time, NR, 11, 11, "The time the intellectual content of the object was created"),
    (2, 62, DigitizationDate, "Digital Creation Date", Date, NR, 8, 8, "The date the digital representation of the object was created"),
    (2, 63, DigitizationTime, "Digital Creation Time", Time, NR, 11, 11, "The time the digital representation of the object was created"),
    (2, 65, Program, "Program", String, NR, 0, 32, "The type of program used to originate the object data"),
    (2, 70, ProgramVersion, "Program Version", String, NR, 0, 10, "The version of the program"),
    (2, 75, ObjectCycle, "Object Cycle", String, NR, 1, 1, "Whether the object is morning, evening or both"),
    (2, 80, Byline, "By-line", String, R, 0, 32, "The name of the creator of the object"),
    (2, 85, BylineTitle, "By-line Title", String, R, 0, 32, "The job title of the creator"),
    (2, 90, City, "City", String, NR, 0, 32, "The city of origin of the object"),
    (2, 92, SubLocation, "Sub-location", String, NR, 0, 32, "The location within a city"),
    (2, 95, ProvinceState, "Province/State", String, NR, 0, 32, "The province or state of origin of the object"),
    (2, 100, CountryCode, "Country Code", String, NR, 3, 3, "The country code of the object origin"),
    (2, 101, CountryName, "Country Name", String, NR, 0, 64, "The country name of the object origin"),
    (2, 103, TransmissionReference, "Transmission Reference", String, NR, 0, 32, "A code representing the location of original transmission"),
    (2, 105, Headline, "Headline", String, NR, 0, 256, "A publishable entry providing a synopsis of the contents"),
    (2, 110, Credit, "Credit", String, NR, 0, 32, "The provider of the object, not necessarily the owner"),
    (2, 115, Source, "Source", String, NR, 0, 32, "The original owner of the intellectual content"),
    (2, 116, Copyright, "Copyright", String, NR, 0, 128, "A copyright notice for the object"),
    (2, 118, Contact, "Contact", String, R, 0, 128, "The person or organisation that can provide further background information"),
    (2, 120, Caption, "Caption", String, NR, 0, 2000, "A textual description of the object data"),
    (2, 122, Writer, "Writer", String, R, 0, 32, "The name of the person involved in writing the caption"),
    (2, 125, RasterizedCaption, "Rasterized Caption", Undefined, NR, 7360, 7360, "The rasterized caption as bitmap"),
    (2, 130, ImageType, "Image Type", String, NR, 2, 2, "The color components in the image"),
    (2, 131, ImageOrientation, "Image Orientation", String, NR, 1, 1, "The layout of the image area"),
    (2, 135, Language, "Language Identifier", String, NR, 2, 3, "The major national language of the object"),
    (2, 150, AudioType, "Audio Type", String, NR, 2, 2, "The type of audio content"),
    (2, 151, AudioRate, "Audio Rate", String, NR, 6, 6, "The sampling rate in Hertz"),
    (2, 152, AudioResolution, "Audio Resolution", String, NR, 2, 2, "The number of bits in each audio sample"),
    (2, 153, AudioDuration, "Audio Duration", String, NR, 6, 6, "The running time of the audio data"),
    (2, 154, AudioOutcue, "Audio Outcue", String, NR, 0, 64, "The content of the end of an audio object data"),
    (2, 200, PreviewFormat, "Preview Format", Short, NR, 2, 2, "The file format of the preview data"),
    (2, 201, PreviewVersion, "Preview Version", Short, NR, 2, 2, "The version of the preview file format"),
    (2, 202, Preview, "Preview Data", Undefined, NR, 0, 256000, "The object data preview"),
];
