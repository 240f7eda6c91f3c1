use imgmeta_common::error::ErrorWithData;
use imgmeta_common::exif::TagIfd;
#[cfg(any(feature = "jpeg", feature = "png"))]
use imgmeta_common::image::RawMetadata;
use imgmeta_common::prelude::*;
use imgmeta_common::registry::Standard;
use imgmeta_exif::ExifData;
use imgmeta_iptc::IptcData;
use imgmeta_xmp::XmpData;

use crate::{CodecError, Error, Origin};

/// Image container of a session
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum Container {
    #[cfg(feature = "jpeg")]
    Jpeg(imgmeta_jpeg::Jpeg),
    #[cfg(feature = "png")]
    Png(imgmeta_png::Png),
    #[cfg(feature = "tiff")]
    Tiff(imgmeta_tiff::Tiff),
}

/// The three metadata stores of an image
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Metadata {
    pub exif: ExifData,
    pub iptc: IptcData,
    pub xmp: XmpData,
}

impl Metadata {
    fn decode(
        exif: Option<&[u8]>,
        iptc: Option<&[u8]>,
        xmp: Option<&[u8]>,
    ) -> Result<Self, CodecError> {
        Ok(Self {
            exif: exif.map(ExifData::decode).transpose()?.unwrap_or_default(),
            iptc: iptc.map(IptcData::decode).transpose()?.unwrap_or_default(),
            xmp: xmp.map(XmpData::decode).transpose()?.unwrap_or_default(),
        })
    }

    /// Standards with data to write
    pub fn present(&self) -> Vec<Standard> {
        let mut standards = Vec::new();
        if !self.exif.is_empty() || self.exif.thumbnail().is_some() {
            standards.push(Standard::Exif);
        }
        if !self.iptc.is_empty() {
            standards.push(Standard::Iptc);
        }
        if !self.xmp.is_empty() {
            standards.push(Standard::Xmp);
        }
        standards
    }

    fn encode_iptc(&self) -> Result<Option<Vec<u8>>, CodecError> {
        if self.iptc.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.iptc.encode()?))
        }
    }

    fn encode_xmp(&self) -> Result<Option<Vec<u8>>, CodecError> {
        if self.xmp.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.xmp.encode()?))
        }
    }

    #[cfg(any(feature = "jpeg", feature = "png"))]
    fn encode(&self) -> Result<RawMetadata, CodecError> {
        let exif = if self.present().contains(&Standard::Exif) {
            Some(self.exif.encode()?)
        } else {
            None
        };

        Ok(RawMetadata {
            exif,
            iptc: self.encode_iptc()?,
            xmp: self.encode_xmp()?,
        })
    }
}

impl Container {
    /// Detects the container type from the magic bytes
    pub fn new(data: Vec<u8>) -> Result<Self, ErrorWithData<Error>> {
        let cannot_open = |source: CodecError| Error::CannotOpen {
            origin: Origin::Buffer,
            source,
        };

        #[cfg(feature = "jpeg")]
        if imgmeta_jpeg::Jpeg::is_filetype(&data) {
            let jpeg = imgmeta_jpeg::Jpeg::new(data)
                .map_err(|x| x.map_err(|err| cannot_open(err.into())))?;
            return Ok(Self::Jpeg(jpeg));
        }

        #[cfg(feature = "png")]
        if imgmeta_png::Png::is_filetype(&data) {
            let png =
                imgmeta_png::Png::new(data).map_err(|x| x.map_err(|err| cannot_open(err.into())))?;
            return Ok(Self::Png(png));
        }

        #[cfg(feature = "tiff")]
        if imgmeta_tiff::Tiff::is_filetype(&data) {
            let tiff = imgmeta_tiff::Tiff::new(data)
                .map_err(|x| x.map_err(|err| cannot_open(err.into())))?;
            return Ok(Self::Tiff(tiff));
        }

        Err(ErrorWithData::new(Error::UnknownContainerType, data))
    }

    pub fn into_inner(self) -> Vec<u8> {
        match self {
            #[cfg(feature = "jpeg")]
            Self::Jpeg(jpeg) => jpeg.into_inner(),
            #[cfg(feature = "png")]
            Self::Png(png) => png.into_inner(),
            #[cfg(feature = "tiff")]
            Self::Tiff(tiff) => tiff.into_inner(),
        }
    }

    pub fn data(&self) -> &[u8] {
        match *self {
            #[cfg(feature = "jpeg")]
            Self::Jpeg(ref jpeg) => jpeg.data(),
            #[cfg(feature = "png")]
            Self::Png(ref png) => png.data(),
            #[cfg(feature = "tiff")]
            Self::Tiff(ref tiff) => tiff.data(),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match *self {
            #[cfg(feature = "jpeg")]
            Self::Jpeg(_) => imgmeta_jpeg::Jpeg::mime_type(),
            #[cfg(feature = "png")]
            Self::Png(_) => imgmeta_png::Png::mime_type(),
            #[cfg(feature = "tiff")]
            Self::Tiff(_) => imgmeta_tiff::Tiff::mime_type(),
        }
    }

    pub fn dyn_metadata(&self) -> &dyn ImageMetadata {
        match *self {
            #[cfg(feature = "jpeg")]
            Self::Jpeg(ref jpeg) => jpeg as &dyn ImageMetadata,
            #[cfg(feature = "png")]
            Self::Png(ref png) => png as &dyn ImageMetadata,
            #[cfg(feature = "tiff")]
            Self::Tiff(ref tiff) => tiff as &dyn ImageMetadata,
        }
    }

    /// Width and height in pixels
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.dyn_metadata().dimensions()
    }

    /// Whether the container has a place for metadata of this standard
    pub fn supports(&self, standard: Standard) -> bool {
        match *self {
            #[cfg(feature = "jpeg")]
            Self::Jpeg(_) => true,
            #[cfg(feature = "png")]
            Self::Png(_) => standard != Standard::Iptc,
            #[cfg(feature = "tiff")]
            Self::Tiff(_) => true,
        }
    }

    /// Exif tags that are taken from the container structure on write
    pub fn owns_exif_tag(&self, key: TagIfd) -> bool {
        match *self {
            #[cfg(feature = "tiff")]
            Self::Tiff(_) => imgmeta_tiff::is_image_structure(key),
            #[allow(unreachable_patterns)]
            _ => false,
        }
    }

    pub(crate) fn read(&self) -> Result<Metadata, CodecError> {
        match *self {
            #[cfg(feature = "jpeg")]
            Self::Jpeg(ref jpeg) => {
                let iptc = jpeg.iptc_data()?;
                Metadata::decode(jpeg.exif_data(), iptc.as_deref(), jpeg.xmp_data())
            }
            #[cfg(feature = "png")]
            Self::Png(ref png) => {
                let exif = png.exif_data(imgmeta_png::INFLATE_LIMIT);
                let xmp = png.xmp_data(imgmeta_png::INFLATE_LIMIT);
                Metadata::decode(exif.as_deref(), None, xmp.as_deref())
            }
            #[cfg(feature = "tiff")]
            Self::Tiff(ref tiff) => {
                let iptc = tiff.iptc_data()?;
                let xmp = tiff.xmp_data()?;
                let mut metadata = Metadata::decode(None, iptc.as_deref(), xmp.as_deref())?;
                metadata.exif = tiff.exif_data()?;
                Ok(metadata)
            }
        }
    }

    /// Replaces the metadata blocks
    ///
    /// The container is unchanged if an error is returned.
    pub(crate) fn write(&mut self, metadata: &Metadata) -> Result<(), CodecError> {
        match *self {
            #[cfg(feature = "jpeg")]
            Self::Jpeg(ref mut jpeg) => jpeg.set_metadata(&metadata.encode()?)?,
            #[cfg(feature = "png")]
            Self::Png(ref mut png) => png.set_metadata(&metadata.encode()?)?,
            #[cfg(feature = "tiff")]
            Self::Tiff(ref mut tiff) => {
                let xmp = metadata.encode_xmp()?;
                let iptc = metadata.encode_iptc()?;
                tiff.set_metadata(&metadata.exif, xmp.as_deref(), iptc.as_deref())?;
            }
        }

        Ok(())
    }
}
