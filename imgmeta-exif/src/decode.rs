//! Reading IFD chains from a TIFF structure

use std::collections::{BTreeMap, BTreeSet};
use std::io::{Cursor, Read, Seek, SeekFrom};

use imgmeta_common::exif::{ByteOrder, Ifd, Tag, TagIfd, Type};
use imgmeta_common::math::*;

use crate::error::{Error, Result, ResultExt};
use crate::Datum;

#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
    /// Decode the IFD following IFD0 as thumbnail IFD
    ///
    /// In TIFF files the following IFD is usually another page.
    pub thumbnail_ifd: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            thumbnail_ifd: true,
        }
    }
}

/// Everything found while decoding
#[derive(Debug, Clone)]
pub struct Decoded {
    pub byte_order: ByteOrder,
    pub entries: Vec<Datum>,
    pub thumbnail: Option<Vec<u8>>,
    /// Offset of the first IFD that has not been decoded, 0 if none
    pub next_ifd: u32,
}

/// IFD entry as found in the file
#[derive(Debug, Clone, Copy)]
pub struct EntryRef {
    pub position: u32,
    pub data_type: Type,
    pub count: u32,
    /// Value or offset field, in file byte order
    pub value_offset: [u8; 4],
}

impl EntryRef {
    pub fn data_len(&self) -> Result<u32> {
        self.count
            .checked_mul(self.data_type.size())
            .e(Error::DataSizeTooLarge {
                type_: self.data_type,
                count: self.count,
            })
    }

    pub fn is_inline(&self) -> Result<bool> {
        Ok(self.data_len()? <= 4)
    }
}

pub struct Decoder<'a> {
    raw: Cursor<&'a [u8]>,
    byte_order: ByteOrder,
    options: DecodeOptions,
    entries: Vec<Datum>,
    /// Offsets at which IFDs were found
    ifd_locations: BTreeMap<Ifd, u32>,
    visited: BTreeSet<u32>,
    next_ifd: u32,
}

impl<'a> Decoder<'a> {
    pub fn new(data: &'a [u8], options: DecodeOptions) -> Self {
        Self {
            raw: Cursor::new(data),
            byte_order: ByteOrder::default(),
            options,
            entries: Vec::new(),
            ifd_locations: BTreeMap::new(),
            visited: BTreeSet::new(),
            next_ifd: 0,
        }
    }

    /// Decode all IFDs
    ///
    /// See 4.5.2 in v3.0 standard
    pub fn decode(mut self) -> Result<Decoded> {
        let ifd0_offset = self.decode_header()?;
        self.decode_ifds(ifd0_offset)?;

        let thumbnail = self.thumbnail();

        Ok(Decoded {
            byte_order: self.byte_order,
            entries: self.entries,
            thumbnail,
            next_ifd: self.next_ifd,
        })
    }

    pub fn decode_header(&mut self) -> Result<u32> {
        self.seek_start(0)?;

        self.read_byte_order()?;
        self.read_magic_42()?;

        self.read_u32().e(Error::MagicBytesEof)
    }

    pub fn read_byte_order(&mut self) -> Result<()> {
        let marker = self.read_array().e(Error::ByteOrderEof)?;
        self.byte_order = ByteOrder::from_marker(marker).e(Error::UnknownByteOrder(marker))?;

        Ok(())
    }

    pub fn read_magic_42(&mut self) -> Result<()> {
        match self.read_u16().e(Error::MagicBytesEof)? {
            42 => Ok(()),
            magic => Err(Error::MagicBytesWrong(magic)),
        }
    }

    pub fn decode_ifds(&mut self, ifd0_offset: u32) -> Result<()> {
        self.add_ifd_offset_location(Ifd::Primary, ifd0_offset);
        self.seek_start(ifd0_offset)?;
        let ifd_offset = self.decode_ifd_entries(Ifd::Primary)?;

        if ifd_offset != 0 {
            if self.options.thumbnail_ifd {
                if !self.add_ifd_offset_location(Ifd::Thumbnail, ifd_offset) {
                    self.decode_ifd_entries_error_silenced(Ifd::Thumbnail, ifd_offset);
                }
            } else {
                self.next_ifd = ifd_offset;
            }
        }

        Ok(())
    }

    /// Sometimes, not all IFD locations are actually valid
    pub fn decode_ifd_entries_error_silenced(&mut self, ifd: Ifd, ifd_offset: u32) {
        if let Err(err) = self.seek_start(ifd_offset) {
            tracing::info!("Location for IFD '{ifd:?}' does not exist: {err}");
            return;
        }

        let n_before = self.entries.len();
        match self.decode_ifd_entries(ifd) {
            Ok(next) => {
                if ifd == Ifd::Thumbnail {
                    self.next_ifd = next;
                }
            }
            Err(err) => {
                tracing::info!("Failed to load IFD '{ifd:?}': {err}");
                self.entries.truncate(n_before);
            }
        }
    }

    /// Reads all entries of an IFD and returns the offset of the next IFD
    pub fn decode_ifd_entries(&mut self, ifd: Ifd) -> Result<u32> {
        tracing::debug!("Reading number of entries in IFD '{ifd:?}'");
        let n_entries: u16 = self.read_u16().e(Error::IfdNumEntriesEof(ifd))?;
        tracing::debug!(
            "Reading IFD '{ifd:?}' with {n_entries} entries at byte {}",
            self.position()?
        );

        let mut entries = Vec::with_capacity(n_entries.into());
        for _ in 0..n_entries {
            entries.push(self.read_entry()?);
        }

        let ifd_offset = self.read_u32().e(Error::EntryEof)?;

        let mut exif_specific_ifd_offsets = Vec::new();
        for (tag, entry) in entries {
            if let Some(sub_ifd) = tag.exif_specific_ifd(ifd) {
                exif_specific_ifd_offsets.push((sub_ifd, self.byte_order.u32(entry.value_offset)));
                continue;
            }

            let key = TagIfd::new(tag, ifd);
            let located = self
                .lookup_data(&entry)
                .and_then(|data| Ok((data, entry.is_inline()?)));
            let (data, inline) = match located {
                Ok(located) => located,
                Err(err) => {
                    tracing::info!("Skipping entry '{key}' with unreadable value: {err}");
                    continue;
                }
            };
            let origin = if inline {
                None
            } else {
                Some(self.byte_order.u32(entry.value_offset))
            };

            self.entries.push(Datum::from_parts(
                key,
                entry.data_type,
                entry.count,
                data,
                self.byte_order,
                origin,
            ));
        }

        tracing::debug!("All entries in IFD '{ifd:?}' read");

        // Load entries for every found Exif specific IFD
        for (sub_ifd, offset) in exif_specific_ifd_offsets {
            let ifd_listed = self.add_ifd_offset_location(sub_ifd, offset);

            if ifd_listed {
                tracing::info!("Ignoring duplicate IFD entry");
            } else {
                tracing::debug!("Reading Exif specific IFD '{sub_ifd:?}'");
                self.decode_ifd_entries_error_silenced(sub_ifd, offset);
            }
        }

        Ok(ifd_offset)
    }

    /// Adds location of IFD, returns `true` if the IFD or offset was already
    /// seen
    pub fn add_ifd_offset_location(&mut self, ifd: Ifd, location: u32) -> bool {
        let exists = self.ifd_locations.insert(ifd, location).is_some();
        let loops = !self.visited.insert(location);

        if exists {
            tracing::info!("IFD '{ifd:?}' exists twice");
        }
        if loops {
            tracing::info!("IFD offset {location} is referenced twice");
        }

        exists || loops
    }

    /// Read a single entry from IFD
    pub fn read_entry(&mut self) -> Result<(Tag, EntryRef)> {
        let position = self.position()?;
        let tag_id = self.read_u16().e(Error::EntryEof)?;
        let data_type = self.read_u16().e(Error::EntryEof)?.into();
        let count = self.read_u32().e(Error::EntryEof)?;
        let value_offset = self.read_array().e(Error::EntryEof)?;

        Ok((
            Tag(tag_id),
            EntryRef {
                position,
                data_type,
                count,
                value_offset,
            },
        ))
    }

    pub fn lookup_data(&self, entry: &EntryRef) -> Result<Vec<u8>> {
        let len = entry.data_len()?.usize()?;

        if entry.is_inline()? {
            return Ok(entry.value_offset.get(..len).e(Error::LookupEof)?.to_vec());
        }

        let offset = self.byte_order.u32(entry.value_offset).usize()?;
        let end = offset.safe_add(len)?;
        let data = self.raw.get_ref().get(offset..end).e(Error::LookupEof)?;

        Ok(data.to_vec())
    }

    /// JPEG thumbnail referenced from IFD1
    fn thumbnail(&self) -> Option<Vec<u8>> {
        let offset = self.entry_u32(crate::field::JPEGInterchangeFormat.into())?;
        let len = self.entry_u32(crate::field::JPEGInterchangeFormatLength.into())?;

        let start = offset.usize().ok()?;
        let end = start.safe_add(len.usize().ok()?).ok()?;
        let thumbnail = self.raw.get_ref().get(start..end);
        if thumbnail.is_none() {
            tracing::info!("Thumbnail at {start}..{end} is outside of the Exif data");
        }

        thumbnail.map(<[u8]>::to_vec)
    }

    fn entry_u32(&self, key: TagIfd) -> Option<u32> {
        self.entries
            .iter()
            .find(|x| x.key() == key)
            .and_then(|x| x.value().ok())
            .and_then(|x| x.as_u32())
    }

    fn position(&self) -> Result<u32> {
        self.raw.position().u32().map_err(Into::into)
    }

    fn seek_start(&mut self, offset: u32) -> Result<()> {
        if offset.usize()? > self.raw.get_ref().len() {
            return Err(Error::OffsetTooLarge);
        }
        self.raw.seek(SeekFrom::Start(offset.into()))?;
        Ok(())
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut bytes = [0; N];
        self.raw.read_exact(&mut bytes)?;
        Ok(bytes)
    }

    fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.read_array()?;
        Ok(self.byte_order.u16(bytes))
    }

    fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.read_array()?;
        Ok(self.byte_order.u32(bytes))
    }
}
