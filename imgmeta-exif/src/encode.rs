//! Writing IFD chains
//!
//! IFDs are written in the order IFD0, Exif, Interoperability, GPS and IFD1,
//! each followed by its out-of-line values. The maker note and the thumbnail
//! go last.

use std::collections::BTreeMap;

use imgmeta_common::exif::{ByteOrder, Ifd, Tag, TagIfd, Type};
use imgmeta_common::math::*;

use crate::error::{Error, Result};
use crate::{Datum, ExifData};

const IFD_ORDER: [Ifd; 5] = [
    Ifd::Primary,
    Ifd::Exif,
    Ifd::Interoperability,
    Ifd::Gps,
    Ifd::Thumbnail,
];

/// Entry as it will be written
#[derive(Debug, Clone)]
struct Entry {
    tag: Tag,
    type_: Type,
    count: u32,
    data: Vec<u8>,
    origin: Option<u32>,
}

impl Entry {
    fn placeholder(tag: Tag) -> Self {
        Self {
            tag,
            type_: Type::Long,
            count: 1,
            data: vec![0; 4],
            origin: None,
        }
    }
}

pub(crate) struct Encoder {
    buf: Vec<u8>,
    byte_order: ByteOrder,
    ifds: BTreeMap<Ifd, Vec<Entry>>,
    thumbnail: Option<Vec<u8>>,
    /// Position of the value field for pointer and offset entries
    value_positions: BTreeMap<TagIfd, usize>,
    /// Position of the next IFD offset of each IFD
    next_positions: BTreeMap<Ifd, usize>,
    ifd_offsets: BTreeMap<Ifd, u32>,
    maker_note: Option<(usize, Entry)>,
}

impl Encoder {
    pub fn new(data: &ExifData, extra_ifd0: &[Datum]) -> Result<Self> {
        let byte_order = data.byte_order();
        let mut ifds: BTreeMap<Ifd, Vec<Entry>> = BTreeMap::new();

        for datum in data.entries().iter().chain(extra_ifd0) {
            let entry = Self::entry(datum, byte_order)?;
            ifds.entry(datum.key().ifd).or_default().push(entry);
        }

        let mut encoder = Self {
            buf: Vec::new(),
            byte_order,
            ifds,
            thumbnail: data.thumbnail().map(<[u8]>::to_vec),
            value_positions: BTreeMap::new(),
            next_positions: BTreeMap::new(),
            ifd_offsets: BTreeMap::new(),
            maker_note: None,
        };

        encoder.prepare_thumbnail();
        encoder.add_pointers();

        Ok(encoder)
    }

    /// Entry in the target byte order
    ///
    /// Byte sized values are copied as they are. Other values are decoded and
    /// encoded again if the byte order differs.
    fn entry(datum: &Datum, byte_order: ByteOrder) -> Result<Entry> {
        let same_order = datum.byte_order() == byte_order;
        if same_order || datum.type_().size() == 1 {
            return Ok(Entry {
                tag: datum.key().tag,
                type_: datum.type_(),
                count: datum.count(),
                data: datum.data().to_vec(),
                origin: datum.origin().filter(|_| same_order),
            });
        }

        let encoded = datum
            .value()?
            .encode(byte_order)
            .map_err(|err| err.with_key(datum.key()))?;

        Ok(Entry {
            tag: datum.key().tag,
            type_: encoded.type_,
            count: encoded.count,
            data: encoded.data,
            origin: None,
        })
    }

    /// The thumbnail offsets are only written together with the thumbnail
    fn prepare_thumbnail(&mut self) {
        let thumbnail_ifd = self.ifds.entry(Ifd::Thumbnail).or_default();
        let n_before = thumbnail_ifd.len();
        thumbnail_ifd.retain(|x| {
            x.tag != Tag::JPEG_INTERCHANGE_FORMAT && x.tag != Tag::JPEG_INTERCHANGE_FORMAT_LENGTH
        });
        let had_offsets = thumbnail_ifd.len() != n_before;

        if self.thumbnail.is_some() {
            thumbnail_ifd.push(Entry::placeholder(Tag::JPEG_INTERCHANGE_FORMAT));
            thumbnail_ifd.push(Entry::placeholder(Tag::JPEG_INTERCHANGE_FORMAT_LENGTH));
        } else if had_offsets {
            tracing::warn!("Dropping thumbnail offsets without thumbnail data");
        }

        if thumbnail_ifd.is_empty() {
            self.ifds.remove(&Ifd::Thumbnail);
        }
    }

    fn add_pointers(&mut self) {
        for ifd in [Ifd::Interoperability, Ifd::Gps, Ifd::Exif] {
            let has_entries = self.ifds.get(&ifd).is_some_and(|x| !x.is_empty());
            if !has_entries {
                self.ifds.remove(&ifd);
                continue;
            }
            if let Some((parent, tag)) = ifd.pointer() {
                self.ifds
                    .entry(parent)
                    .or_default()
                    .push(Entry::placeholder(tag));
            }
        }

        for entries in self.ifds.values_mut() {
            entries.sort_by_key(|x| x.tag);
        }
    }

    /// Standalone TIFF structure with header
    pub fn encode(mut self) -> Result<Vec<u8>> {
        self.buf.extend_from_slice(match self.byte_order {
            ByteOrder::LittleEndian => ByteOrder::LE_MAGIC,
            ByteOrder::BigEndian => ByteOrder::BE_MAGIC,
        });
        self.write_u32(8);

        self.write_structure(0)?;

        Ok(self.buf)
    }

    /// Appends the IFDs to an existing TIFF file and repoints its header
    ///
    /// IFD0 continues to `next_ifd` such that following pages stay reachable.
    pub fn encode_into(mut self, base: Vec<u8>, next_ifd: u32) -> Result<Vec<u8>> {
        let marker = base.get(0..2).ok_or(Error::ByteOrderEof)?;
        if marker != self.byte_order.marker() {
            return Err(Error::ByteOrderMismatch);
        }

        self.buf = base;
        self.write_structure(next_ifd)?;

        let ifd0 = self.ifd_offsets.get(&Ifd::Primary).copied().unwrap_or(0);
        self.patch_u32(4, ifd0)?;

        Ok(self.buf)
    }

    fn write_structure(&mut self, next_ifd: u32) -> Result<()> {
        // An IFD0 is always required
        self.ifds.entry(Ifd::Primary).or_default();

        for ifd in IFD_ORDER {
            if let Some(entries) = self.ifds.remove(&ifd) {
                self.write_ifd(ifd, entries)?;
            }
        }

        self.write_maker_note()?;
        self.write_thumbnail()?;

        // Pointers to sub-IFDs
        for ifd in [Ifd::Exif, Ifd::Gps, Ifd::Interoperability] {
            if let (Some(offset), Some((parent, tag))) =
                (self.ifd_offsets.get(&ifd).copied(), ifd.pointer())
            {
                let pos = self.value_position(TagIfd::new(tag, parent))?;
                self.patch_u32(pos, offset)?;
            }
        }

        // Chain of main IFDs
        let ifd0_next = match self.ifd_offsets.get(&Ifd::Thumbnail).copied() {
            Some(thumbnail_ifd) => {
                if let Some(pos) = self.next_positions.get(&Ifd::Thumbnail).copied() {
                    self.patch_u32(pos, next_ifd)?;
                }
                thumbnail_ifd
            }
            None => next_ifd,
        };
        if let Some(pos) = self.next_positions.get(&Ifd::Primary).copied() {
            self.patch_u32(pos, ifd0_next)?;
        }

        Ok(())
    }

    fn write_ifd(&mut self, ifd: Ifd, entries: Vec<Entry>) -> Result<()> {
        self.pad_even();

        let ifd_offset = self.buf.len();
        self.ifd_offsets.insert(ifd, ifd_offset.u32()?);

        let n_entries = entries.len().u16()?;
        tracing::debug!("Writing IFD '{ifd:?}' with {n_entries} entries at byte {ifd_offset}");

        checked![ifd_offset];
        let data_start = (ifd_offset + 2_usize + entries.len().safe_mul(12)? + 4_usize).check()?;
        let mut data_pos = data_start;

        self.write_u16(n_entries);
        let mut out_of_line = Vec::new();

        for entry in entries {
            let key = TagIfd::new(entry.tag, ifd);
            self.write_u16(entry.tag.0);
            self.write_u16(entry.type_.u16());
            self.write_u32(entry.count);

            let value_pos = self.buf.len();
            self.value_positions.insert(key, value_pos);

            if entry.data.len() <= 4 {
                let mut value = [0; 4];
                for (x, y) in value.iter_mut().zip(&entry.data) {
                    *x = *y;
                }
                self.buf.extend_from_slice(&value);
            } else if entry.tag == Tag::MAKER_NOTE && ifd == Ifd::Exif {
                self.write_u32(0);
                self.maker_note = Some((value_pos, entry));
            } else {
                self.write_u32(data_pos.u32()?);
                data_pos = data_pos
                    .safe_add(entry.data.len())?
                    .safe_add(padding_even(entry.data.len()))?;
                out_of_line.push(entry.data);
            }
        }

        self.next_positions.insert(ifd, self.buf.len());
        self.write_u32(0);

        debug_assert_eq!(self.buf.len(), data_start);
        for data in out_of_line {
            self.buf.extend_from_slice(&data);
            self.pad_even();
        }

        Ok(())
    }

    /// Keeps the maker note at its original offset if possible
    ///
    /// Maker notes often contain offsets relative to the start of the TIFF
    /// structure.
    fn write_maker_note(&mut self) -> Result<()> {
        let Some((value_pos, entry)) = self.maker_note.take() else {
            return Ok(());
        };

        let offset = match entry.origin {
            Some(origin) => {
                let start = origin.usize()?;
                let end = start.safe_add(entry.data.len())?;

                if self.buf.get(start..end) == Some(entry.data.as_slice()) {
                    tracing::debug!("Maker note unchanged at offset {origin}");
                    origin
                } else if self.buf.len() <= start {
                    self.buf.resize(start, 0);
                    self.buf.extend_from_slice(&entry.data);
                    origin
                } else {
                    tracing::warn!("Maker note moved from offset {origin}, internal offsets may break");
                    self.append(&entry.data)?
                }
            }
            None => self.append(&entry.data)?,
        };

        self.patch_u32(value_pos, offset)
    }

    fn write_thumbnail(&mut self) -> Result<()> {
        let Some(thumbnail) = self.thumbnail.take() else {
            return Ok(());
        };

        let offset = self.append(&thumbnail)?;
        let len = thumbnail.len().u32()?;

        let offset_pos = self.value_position(TagIfd::new(Tag::JPEG_INTERCHANGE_FORMAT, Ifd::Thumbnail))?;
        let len_pos =
            self.value_position(TagIfd::new(Tag::JPEG_INTERCHANGE_FORMAT_LENGTH, Ifd::Thumbnail))?;
        self.patch_u32(offset_pos, offset)?;
        self.patch_u32(len_pos, len)
    }

    fn append(&mut self, data: &[u8]) -> Result<u32> {
        self.pad_even();
        let offset = self.buf.len().u32()?;
        self.buf.extend_from_slice(data);
        Ok(offset)
    }

    fn value_position(&self, key: TagIfd) -> Result<usize> {
        self.value_positions
            .get(&key)
            .copied()
            .ok_or(Error::OffsetTooLarge)
    }

    fn pad_even(&mut self) {
        if padding_even(self.buf.len()) == 1 {
            self.buf.push(0);
        }
    }

    fn write_u16(&mut self, value: u16) {
        let bytes = self.byte_order.u16_bytes(value);
        self.buf.extend_from_slice(&bytes);
    }

    fn write_u32(&mut self, value: u32) {
        let bytes = self.byte_order.u32_bytes(value);
        self.buf.extend_from_slice(&bytes);
    }

    fn patch_u32(&mut self, pos: usize, value: u32) -> Result<()> {
        let end = pos.safe_add(4)?;
        let bytes = self.byte_order.u32_bytes(value);
        self.buf
            .get_mut(pos..end)
            .ok_or(Error::OffsetTooLarge)?
            .copy_from_slice(&bytes);
        Ok(())
    }
}

impl ExifData {
    /// Encodes as standalone TIFF structure, as used in JPEG `APP1` and PNG
    /// `eXIf`
    pub fn encode(&self) -> Result<Vec<u8>> {
        Encoder::new(self, &[])?.encode()
    }

    /// Appends the IFDs to the TIFF file `base`
    ///
    /// `extra_ifd0` entries are written to IFD0 in addition to the stored
    /// entries. The new IFD0 chains to `next_ifd`.
    pub fn encode_into(&self, base: Vec<u8>, extra_ifd0: &[Datum], next_ifd: u32) -> Result<Vec<u8>> {
        Encoder::new(self, extra_ifd0)?.encode_into(base, next_ifd)
    }
}
