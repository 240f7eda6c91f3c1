//! TIFF container
//!
//! The Exif data are the TIFF structure itself. XMP and IPTC are stored as
//! entries of IFD0. Writing appends a new IFD0 with its sub-IFDs to the
//! file and repoints the header. Strips and tiles are not moved.

use imgmeta_common::error::ErrorWithData;
use imgmeta_common::exif::{ByteOrder, Ifd, Tag, TagIfd};
use imgmeta_common::field;
use imgmeta_common::prelude::*;
use imgmeta_exif::{DecodeOptions, Decoded, Decoder, Datum, ExifData, Value};

const LE_MAGIC_BYTES: &[u8] = b"II*\0";
const BE_MAGIC_BYTES: &[u8] = b"MM\0*";

const XML_PACKET: TagIfd = TagIfd::new(Tag::XML_PACKET, Ifd::Primary);
const IPTC_NAA: TagIfd = TagIfd::new(Tag::IPTC_NAA, Ifd::Primary);

/// Tags describing the location and layout of the pixel data
const IMAGE_STRUCTURE_TAGS: &[u16] = &[
    0x00FE, // NewSubfileType
    0x0100, // ImageWidth
    0x0101, // ImageLength
    0x0102, // BitsPerSample
    0x0103, // Compression
    0x0106, // PhotometricInterpretation
    0x010A, // FillOrder
    0x0111, // StripOffsets
    0x0115, // SamplesPerPixel
    0x0116, // RowsPerStrip
    0x0117, // StripByteCounts
    0x011C, // PlanarConfiguration
    0x013D, // Predictor
    0x0140, // ColorMap
    0x0142, // TileWidth
    0x0143, // TileLength
    0x0144, // TileOffsets
    0x0145, // TileByteCounts
    0x014A, // SubIFDs
    0x0152, // ExtraSamples
    0x0153, // SampleFormat
    0x015B, // JPEGTables
    0x0211, // YCbCrCoefficients
    0x0212, // YCbCrSubSampling
    0x0213, // YCbCrPositioning
];

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Exif: {0}")]
    Exif(#[from] imgmeta_exif::Error),
    #[error("Tag: {0}")]
    Tag(#[from] imgmeta_common::error::TagError),
}

#[derive(Debug, Clone)]
pub struct Tiff {
    data: Vec<u8>,
    byte_order: ByteOrder,
}

/// Representation of a TIFF image
impl Tiff {
    pub fn new(data: Vec<u8>) -> std::result::Result<Self, ErrorWithData<Error>> {
        match decode(&data) {
            Ok(decoded) => Ok(Self {
                byte_order: decoded.byte_order,
                data,
            }),
            Err(err) => Err(ErrorWithData::new(err, data)),
        }
    }

    pub fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(LE_MAGIC_BYTES) || data.starts_with(BE_MAGIC_BYTES)
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// IFD0 and its sub-IFDs
    pub fn decode(&self) -> Result<Decoded> {
        decode(&self.data)
    }

    /// Exif store without the XMP and IPTC entries
    pub fn exif_data(&self) -> Result<ExifData> {
        let mut exif = ExifData::from(self.decode()?);
        exif.take(XML_PACKET);
        exif.take(IPTC_NAA);

        Ok(exif)
    }

    pub fn xmp_data(&self) -> Result<Option<Vec<u8>>> {
        self.entry_data(XML_PACKET)
    }

    pub fn iptc_data(&self) -> Result<Option<Vec<u8>>> {
        self.entry_data(IPTC_NAA)
    }

    /// Width and height from IFD0
    pub fn ifd0_dimensions(&self) -> Result<Option<(u32, u32)>> {
        let decoded = self.decode()?;
        let value = |key: TagIfd| -> Option<u32> {
            let datum = decoded.entries.iter().find(|x| x.key() == key)?;
            datum.value().ok()?.as_u32()
        };

        Ok(value(field::ImageWidth.into()).zip(value(field::ImageLength.into())))
    }

    /// Writes a new IFD0 with `exif` and the XMP and IPTC entries
    ///
    /// The previous IFD0 and its sub-IFDs stay in the file without being
    /// referenced. Following pages remain chained to the new IFD0.
    pub fn set_metadata(
        &mut self,
        exif: &ExifData,
        xmp: Option<&[u8]>,
        iptc: Option<&[u8]>,
    ) -> Result<()> {
        let decoded = self.decode()?;

        let mut exif = exif.clone();
        exif.set_byte_order(self.byte_order);
        if exif.thumbnail().is_some() {
            tracing::info!("Thumbnails are not written to TIFF files");
            exif.set_thumbnail(None);
        }

        let dropped: Vec<TagIfd> = exif
            .iter()
            .map(Datum::key)
            .filter(|x| x.ifd == Ifd::Thumbnail || is_ifd0_owned(*x))
            .collect();
        for key in dropped {
            exif.take(key);
        }

        // The image structure always comes from the file itself
        let mut extra_ifd0: Vec<Datum> = decoded
            .entries
            .into_iter()
            .filter(|x| is_image_structure(x.key()))
            .collect();
        if let Some(xmp) = xmp {
            extra_ifd0.push(Datum::new(
                XML_PACKET,
                &Value::Byte(xmp.to_vec()),
                self.byte_order,
            )?);
        }
        if let Some(iptc) = iptc {
            extra_ifd0.push(Datum::new(
                IPTC_NAA,
                &Value::Undefined(iptc.to_vec()),
                self.byte_order,
            )?);
        }

        let data = exif.encode_into(self.data.clone(), &extra_ifd0, decoded.next_ifd)?;
        tracing::debug!(
            "Appended {} bytes of IFDs",
            data.len().saturating_sub(self.data.len())
        );
        self.data = data;

        Ok(())
    }

    fn entry_data(&self, key: TagIfd) -> Result<Option<Vec<u8>>> {
        let decoded = self.decode()?;

        Ok(decoded
            .entries
            .into_iter()
            .find(|x| x.key() == key)
            .map(|x| x.data().to_vec()))
    }
}

/// IFD0 entry describing the location and layout of the pixel data
pub fn is_image_structure(key: TagIfd) -> bool {
    key.ifd == Ifd::Primary && IMAGE_STRUCTURE_TAGS.contains(&key.tag.0)
}

/// Entries of IFD0 that are not taken from the Exif store
fn is_ifd0_owned(key: TagIfd) -> bool {
    key == XML_PACKET || key == IPTC_NAA || is_image_structure(key)
}

fn decode(data: &[u8]) -> Result<Decoded> {
    let options = DecodeOptions {
        thumbnail_ifd: false,
    };

    Ok(Decoder::new(data, options).decode()?)
}

impl ImageFormat for Tiff {
    fn is_filetype(data: &[u8]) -> bool {
        Self::is_filetype(data)
    }

    fn mime_type() -> &'static str {
        "image/tiff"
    }
}

impl ImageMetadata for Tiff {
    fn exif(&self) -> Option<Vec<u8>> {
        Some(self.data.clone())
    }

    fn xmp(&self) -> Option<Vec<u8>> {
        self.xmp_data().ok().flatten()
    }

    fn iptc(&self) -> Option<Vec<u8>> {
        self.iptc_data().ok().flatten()
    }

    fn dimensions(&self) -> Option<(u32, u32)> {
        self.ifd0_dimensions().ok().flatten()
    }
}
