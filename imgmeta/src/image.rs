use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use imgmeta_common::geography::Location;
use imgmeta_common::key::{ExifKey, IptcKey, Key, XmpKey};
use imgmeta_exif::ExifData;
use imgmeta_iptc::IptcData;
use imgmeta_xmp::XmpData;

use crate::container::{Container, Metadata};
use crate::preview::{self, Preview};
use crate::{CodecError, Error, ExifTag, IptcTag, Result, Tag, XmpTag};

/// Where the image data of a session come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    File(PathBuf),
    Buffer,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "'{}'", path.display()),
            Self::Buffer => f.write_str("memory buffer"),
        }
    }
}

/// Stores to copy with [`Image::copy_metadata`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyOptions {
    pub exif: bool,
    pub iptc: bool,
    pub xmp: bool,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            exif: true,
            iptc: true,
            xmp: true,
        }
    }
}

/// Metadata session for one image
///
/// Tag operations are only available after [`Image::read_metadata`]. Changes
/// are kept in memory until [`Image::write_metadata`].
///
/// ```no_run
/// let mut image = imgmeta::Image::open("photo.jpg")?;
/// image.read_metadata()?;
/// image.set_exif_tag_value("Exif.Image.Make", "Acme")?;
/// image.write_metadata()?;
/// # Ok::<(), imgmeta::Error>(())
/// ```
#[derive(Debug)]
pub struct Image {
    origin: Origin,
    container: Container,
    metadata: Option<Metadata>,
}

impl Image {
    /// Reads the file and detects the container type
    ///
    /// The file is not kept open.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let origin = Origin::File(path.as_ref().to_path_buf());
        let data = std::fs::read(path.as_ref()).map_err(|err| Error::CannotOpen {
            origin: origin.clone(),
            source: CodecError::Io(err),
        })?;

        Self::new(data, origin)
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::new(data, Origin::Buffer)
    }

    fn new(data: Vec<u8>, origin: Origin) -> Result<Self> {
        let container = Container::new(data).map_err(|err| err.into_err().at(&origin))?;
        tracing::debug!("Opened {} from {origin}", container.mime_type());

        Ok(Self {
            origin,
            container,
            metadata: None,
        })
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Whether [`Image::read_metadata`] succeeded
    pub fn has_been_read(&self) -> bool {
        self.metadata.is_some()
    }

    /// Loads the metadata stores from the image data
    ///
    /// Changes that have not been written are discarded. On failure, the
    /// session returns to the state before any metadata were read.
    pub fn read_metadata(&mut self) -> Result<()> {
        self.metadata = None;

        let metadata = self.container.read().map_err(|source| Error::ReadFailed {
            origin: self.origin.clone(),
            source,
        })?;
        self.metadata = Some(metadata);

        Ok(())
    }

    /// Writes the metadata stores back
    ///
    /// Files are replaced through a temporary file in the same directory.
    /// The image data are only updated if everything succeeded.
    pub fn write_metadata(&mut self) -> Result<()> {
        let metadata = self.metadata.as_ref().ok_or(Error::MetadataNotRead)?;

        for standard in metadata.present() {
            if !self.container.supports(standard) {
                return Err(Error::UnsupportedMetadataForFormat {
                    standard,
                    mime_type: self.container.mime_type(),
                });
            }
        }

        let write_failed = |source: CodecError| Error::WriteFailed {
            origin: self.origin.clone(),
            source,
        };

        let mut container = self.container.clone();
        container.write(metadata).map_err(write_failed)?;

        if let Origin::File(path) = &self.origin {
            replace_file(path, container.data())
                .map_err(|err| write_failed(CodecError::Io(err)))?;
        }

        tracing::debug!("Wrote {} bytes to {}", container.data().len(), self.origin);
        self.container = container;

        Ok(())
    }

    pub fn exif(&self) -> Result<&ExifData> {
        Ok(&self.metadata()?.exif)
    }

    pub fn exif_mut(&mut self) -> Result<&mut ExifData> {
        Ok(&mut self.metadata_mut()?.exif)
    }

    pub fn iptc(&self) -> Result<&IptcData> {
        Ok(&self.metadata()?.iptc)
    }

    pub fn iptc_mut(&mut self) -> Result<&mut IptcData> {
        Ok(&mut self.metadata_mut()?.iptc)
    }

    pub fn xmp(&self) -> Result<&XmpData> {
        Ok(&self.metadata()?.xmp)
    }

    pub fn xmp_mut(&mut self) -> Result<&mut XmpData> {
        Ok(&mut self.metadata_mut()?.xmp)
    }

    /// Tag of any standard by its key
    pub fn tag(&self, key: &str) -> Result<Tag> {
        self.metadata()?;

        match key.parse::<Key>()? {
            Key::Exif(_) => self.exif_tag(key).map(Tag::Exif),
            Key::Iptc(_) => self.iptc_tag(key).map(Tag::Iptc),
            Key::Xmp(_) => self.xmp_tag(key).map(Tag::Xmp),
        }
    }

    pub fn exif_keys(&self) -> Result<Vec<String>> {
        Ok(keys(self.exif()?.keys()))
    }

    pub fn exif_tag(&self, key: &str) -> Result<ExifTag> {
        let exif = self.exif()?;
        let datum = exif.get(key.parse::<ExifKey>()?)?;

        ExifTag::new(datum)
    }

    /// Sets a value from its raw string form
    ///
    /// The image structure tags of TIFF files cannot be set.
    pub fn set_exif_tag_value(&mut self, key: &str, raw_value: &str) -> Result<()> {
        let key = self.editable_exif_key(key)?;
        self.exif_mut()?.set_raw_value(key, raw_value)?;

        Ok(())
    }

    pub fn delete_exif_tag(&mut self, key: &str) -> Result<()> {
        let key = self.editable_exif_key(key)?;
        self.exif_mut()?.delete(key)?;

        Ok(())
    }

    /// Parses a key of a tag that the session may change
    fn editable_exif_key(&self, key: &str) -> Result<ExifKey> {
        self.metadata()?;
        let key = key.parse::<ExifKey>()?;
        if self.container.owns_exif_tag(key) {
            return Err(Error::InvalidValue {
                key: key.to_string(),
                reason: format!("image structure of {} files cannot be changed", self.mime_type()),
            });
        }

        Ok(key)
    }

    /// Distinct keys, also if datasets are repeated
    pub fn iptc_keys(&self) -> Result<Vec<String>> {
        Ok(keys(self.iptc()?.keys()))
    }

    pub fn iptc_tag(&self, key: &str) -> Result<IptcTag> {
        let iptc = self.iptc()?;
        let key = key.parse::<IptcKey>()?;

        IptcTag::new(key, &iptc.get(key)?)
    }

    /// Replaces all repetitions of a dataset
    ///
    /// Existing repetitions are overwritten in order, additional values are
    /// appended and leftover repetitions removed.
    pub fn set_iptc_tag_values(&mut self, key: &str, raw_values: &[impl AsRef<str>]) -> Result<()> {
        let iptc = self.iptc_mut()?;
        iptc.set_raw_values(key.parse::<IptcKey>()?, raw_values)?;

        Ok(())
    }

    /// Sets one repetition, an index equal to the number of repetitions
    /// appends
    pub fn set_iptc_tag_value(&mut self, key: &str, index: usize, raw_value: &str) -> Result<()> {
        let iptc = self.iptc_mut()?;
        iptc.set_raw_value(key.parse::<IptcKey>()?, index, raw_value)?;

        Ok(())
    }

    /// Removes all repetitions of a dataset
    pub fn delete_iptc_tag(&mut self, key: &str) -> Result<()> {
        let iptc = self.iptc_mut()?;
        iptc.delete(key.parse::<IptcKey>()?)?;

        Ok(())
    }

    pub fn delete_iptc_tag_at(&mut self, key: &str, index: usize) -> Result<()> {
        let iptc = self.iptc_mut()?;
        iptc.delete_at(key.parse::<IptcKey>()?, index)?;

        Ok(())
    }

    pub fn xmp_keys(&self) -> Result<Vec<String>> {
        Ok(keys(self.xmp()?.keys()))
    }

    pub fn xmp_tag(&self, key: &str) -> Result<XmpTag> {
        let xmp = self.xmp()?;
        let datum = xmp.get(&key.parse::<XmpKey>()?)?;

        XmpTag::new(datum)
    }

    /// Sets a text value
    ///
    /// Array properties get the text as only item, language alternatives as
    /// default.
    pub fn set_xmp_tag_text_value(&mut self, key: &str, text: &str) -> Result<()> {
        let xmp = self.xmp_mut()?;
        xmp.set_text(key.parse::<XmpKey>()?, text)?;

        Ok(())
    }

    pub fn set_xmp_tag_array_value(&mut self, key: &str, items: &[impl AsRef<str>]) -> Result<()> {
        let xmp = self.xmp_mut()?;
        let items = items.iter().map(|x| x.as_ref().to_string()).collect();
        xmp.set_array(key.parse::<XmpKey>()?, items)?;

        Ok(())
    }

    /// Sets language alternatives as pairs of language and text
    pub fn set_xmp_tag_lang_alt_value<L, T>(
        &mut self,
        key: &str,
        alternatives: impl IntoIterator<Item = (L, T)>,
    ) -> Result<()>
    where
        L: Into<String>,
        T: Into<String>,
    {
        let xmp = self.xmp_mut()?;
        let alternatives = alternatives
            .into_iter()
            .map(|(lang, text)| (lang.into(), text.into()))
            .collect();
        xmp.set_lang_alt(key.parse::<XmpKey>()?, alternatives)?;

        Ok(())
    }

    pub fn delete_xmp_tag(&mut self, key: &str) -> Result<()> {
        let xmp = self.xmp_mut()?;
        xmp.delete(&key.parse::<XmpKey>()?)?;

        Ok(())
    }

    /// Makes a namespace without registry entry usable in keys
    pub fn register_xmp_namespace(&mut self, prefix: &str, uri: &str) -> Result<()> {
        self.xmp_mut()?.register_namespace(prefix, uri)?;

        Ok(())
    }

    /// Embedded previews sorted by increasing size
    pub fn previews(&self) -> Result<Vec<Preview>> {
        Ok(preview::previews(&self.container, self.metadata()?))
    }

    pub fn preview(&self, index: usize) -> Result<Preview> {
        let mut previews = self.previews()?;
        let len = previews.len();

        if index < len {
            Ok(previews.swap_remove(index))
        } else {
            Err(Error::PreviewOutOfRange { index, len })
        }
    }

    /// Copies the selected stores into `target`
    ///
    /// Nothing is written to the target's image data.
    pub fn copy_metadata(&self, target: &mut Image, options: CopyOptions) -> Result<()> {
        let source = self.metadata()?;
        let target = target.metadata_mut()?;

        if options.exif {
            target.exif = source.exif.clone();
        }
        if options.iptc {
            target.iptc = source.iptc.clone();
        }
        if options.xmp {
            target.xmp = source.xmp.clone();
        }

        Ok(())
    }

    pub fn pixel_width(&self) -> Option<u32> {
        self.container.dimensions().map(|(width, _)| width)
    }

    pub fn pixel_height(&self) -> Option<u32> {
        self.container.dimensions().map(|(_, height)| height)
    }

    pub fn mime_type(&self) -> &'static str {
        self.container.mime_type()
    }

    /// Complete image data including all changes written so far
    pub fn raw_container_bytes(&self) -> &[u8] {
        self.container.data()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.container.into_inner()
    }

    /// Location of capture from Exif, or XMP if Exif has none
    pub fn gps_location(&self) -> Result<Option<Location>> {
        let metadata = self.metadata()?;

        Ok(metadata
            .exif
            .gps_location()
            .or_else(|| metadata.xmp.gps_location()))
    }

    /// Date of capture from Exif, XMP, or IPTC
    #[cfg(feature = "chrono")]
    pub fn date_time_original(&self) -> Result<Option<imgmeta_common::datetime::DateTime>> {
        let metadata = self.metadata()?;

        Ok(metadata
            .exif
            .date_time_original()
            .or_else(|| metadata.xmp.date_time_original())
            .or_else(|| metadata.iptc.date_time_created()))
    }

    fn metadata(&self) -> Result<&Metadata> {
        self.metadata.as_ref().ok_or(Error::MetadataNotRead)
    }

    fn metadata_mut(&mut self) -> Result<&mut Metadata> {
        self.metadata.as_mut().ok_or(Error::MetadataNotRead)
    }
}

fn keys<K: ToString>(keys: Vec<K>) -> Vec<String> {
    keys.iter().map(ToString::to_string).collect()
}

/// Replaces the file without leaving it partially written
fn replace_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(data)?;
    file.as_file().sync_all()?;
    if let Ok(metadata) = std::fs::metadata(path) {
        file.as_file().set_permissions(metadata.permissions())?;
    }
    file.persist(path).map_err(|err| err.error)?;

    Ok(())
}
