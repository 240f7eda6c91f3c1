//! JPEG segment structure
//!
//! Segments up to the first start of scan are parsed. Everything after it,
//! entropy-coded data, further scans and trailing data, is kept as is.

mod error;
pub mod segments;

use std::io::Cursor;
use std::ops::Range;

use imgmeta_common::error::ErrorWithData;
use imgmeta_common::image::RawMetadata;
use imgmeta_common::math::*;
use imgmeta_common::prelude::*;
use imgmeta_common::read::ReadExt;
use imgmeta_iptc::irb::{self, PHOTOSHOP_HEADER};

pub use error::{Error, Result};
pub use segments::Sof;

pub const EXIF_IDENTIFIER_STRING: &[u8] = b"Exif\0\0";
pub const XMP_IDENTIFIER_STRING: &[u8] = b"http://ns.adobe.com/xap/1.0/\0";
/// Extended XMP, carried like any other segment
pub const XMP_EXTENSION_IDENTIFIER_STRING: &[u8] = b"http://ns.adobe.com/xmp/extension/\0";

/// Largest payload of a segment, the length field counts itself
pub const MAX_SEGMENT_DATA: usize = 0xFFFD;

const MARKER_START: u8 = 0xFF;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    marker: Marker,
    pos: usize,
    data: &'a [u8],
}

impl<'a> Segment<'a> {
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Position of the marker
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Payload without marker and length field
    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}

#[derive(Debug, Clone)]
struct RawSegment {
    marker: Marker,
    pos: usize,
    data: Range<usize>,
}

#[derive(Debug, Clone)]
pub struct Jpeg {
    data: Vec<u8>,
    /// Segments from start of image to the first start of scan
    segments: Vec<RawSegment>,
    /// Start of the entropy-coded data
    scan: usize,
}

/// Metadata segments owned by this crate, in the order they are inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Kind {
    Exif,
    Xmp,
    Photoshop,
}

impl Kind {
    fn of(marker: Marker, data: &[u8]) -> Option<Self> {
        match marker {
            Marker::APP1 if data.starts_with(EXIF_IDENTIFIER_STRING) => Some(Self::Exif),
            Marker::APP1 if data.starts_with(XMP_IDENTIFIER_STRING) => Some(Self::Xmp),
            Marker::APP13 if data.starts_with(PHOTOSHOP_HEADER) => Some(Self::Photoshop),
            _ => None,
        }
    }

    fn marker(self) -> Marker {
        match self {
            Self::Exif | Self::Xmp => Marker::APP1,
            Self::Photoshop => Marker::APP13,
        }
    }

    fn identifier(self) -> &'static [u8] {
        match self {
            Self::Exif => EXIF_IDENTIFIER_STRING,
            Self::Xmp => XMP_IDENTIFIER_STRING,
            Self::Photoshop => PHOTOSHOP_HEADER,
        }
    }
}

#[derive(Debug)]
struct Block {
    marker: Marker,
    data: Vec<u8>,
}

impl Block {
    fn kind(&self) -> Option<Kind> {
        Kind::of(self.marker, &self.data)
    }
}

impl Jpeg {
    pub fn new(data: Vec<u8>) -> std::result::Result<Self, ErrorWithData<Error>> {
        match Self::find_segments(&data) {
            Ok((segments, scan)) => Ok(Self {
                data,
                segments,
                scan,
            }),
            Err(err) => Err(ErrorWithData::new(err, data)),
        }
    }

    pub fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(&[MARKER_START, Marker::SOI.into(), MARKER_START])
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// List all segments up to the first start of scan in their order of
    /// appearance
    pub fn segments(&self) -> Vec<Segment<'_>> {
        self.segments
            .iter()
            .map(|x| Segment {
                marker: x.marker,
                pos: x.pos,
                data: self.data.get(x.data.clone()).unwrap_or_default(),
            })
            .collect()
    }

    /// List all segments with the given marker
    pub fn segments_marker(&self, marker: Marker) -> impl Iterator<Item = Segment<'_>> {
        self.segments().into_iter().filter(move |x| x.marker == marker)
    }

    /// Entropy-coded data and everything that follows it
    pub fn entropy_coded_data(&self) -> &[u8] {
        self.data.get(self.scan..).unwrap_or_default()
    }

    /// TIFF structure from the first Exif segment
    pub fn exif_data(&self) -> Option<&[u8]> {
        self.segments_marker(Marker::APP1)
            .find_map(|x| x.data().strip_prefix(EXIF_IDENTIFIER_STRING))
    }

    /// XMP packet from the first XMP segment
    pub fn xmp_data(&self) -> Option<&[u8]> {
        self.segments_marker(Marker::APP1)
            .find_map(|x| x.data().strip_prefix(XMP_IDENTIFIER_STRING))
    }

    /// Image resource blocks from all Photoshop segments
    ///
    /// Large resource blocks are split over several segments.
    pub fn photoshop_data(&self) -> Option<Vec<u8>> {
        let mut data: Option<Vec<u8>> = None;
        for segment in self.segments_marker(Marker::APP13) {
            if let Some(resources) = segment.data().strip_prefix(PHOTOSHOP_HEADER) {
                data.get_or_insert_with(Vec::new).extend_from_slice(resources);
            }
        }
        data
    }

    /// IPTC-IIM data from the image resources
    pub fn iptc_data(&self) -> Result<Option<Vec<u8>>> {
        let Some(data) = self.photoshop_data() else {
            return Ok(None);
        };
        let resources = irb::decode(&data)?;

        Ok(irb::iptc(&resources).map(|x| x.to_vec()))
    }

    /// Frame header of the first frame
    pub fn sof(&self) -> Result<Sof> {
        let segment = self
            .segments()
            .into_iter()
            .find(|x| x.marker.is_sof())
            .ok_or(Error::NoFrameHeader)?;

        Sof::from_data(segment.data())
    }

    /// Replaces the metadata segments
    ///
    /// Existing segments are updated in place, new ones are inserted after
    /// `APP0` and the metadata segments that precede them. Only the IPTC
    /// resource is replaced within the Photoshop segment, other image
    /// resources are kept.
    pub fn set_metadata(&mut self, metadata: &RawMetadata) -> Result<()> {
        let mut blocks: Vec<Block> = self
            .segments()
            .into_iter()
            .filter(|x| x.marker != Marker::SOI)
            .map(|x| Block {
                marker: x.marker,
                data: x.data.to_vec(),
            })
            .collect();

        put(&mut blocks, Kind::Exif, metadata.exif.as_deref());
        put(&mut blocks, Kind::Xmp, metadata.xmp.as_deref());
        put_iptc(&mut blocks, metadata.iptc.clone())?;

        let mut data = Vec::with_capacity(self.data.len());
        data.extend_from_slice(&[MARKER_START, Marker::SOI.into()]);
        for block in &blocks {
            data.extend_from_slice(&[MARKER_START, block.marker.into()]);
            if block.marker.is_standalone() {
                continue;
            }
            if block.data.len() > MAX_SEGMENT_DATA {
                return Err(Error::SegmentTooLarge(block.marker, block.data.len()));
            }
            let len = block.data.len().safe_add(2)?.u16()?;
            data.extend_from_slice(&len.to_be_bytes());
            data.extend_from_slice(&block.data);
        }
        data.extend_from_slice(self.entropy_coded_data());

        let (segments, scan) = Self::find_segments(&data)?;
        self.data = data;
        self.segments = segments;
        self.scan = scan;

        Ok(())
    }

    fn find_segments(data: &[u8]) -> Result<(Vec<RawSegment>, usize)> {
        let mut cur = Cursor::new(data);

        let soi = cur.read_array::<2>().map_err(|_| Error::NoStartOfImage)?;
        if soi != [MARKER_START, Marker::SOI.into()] {
            return Err(Error::NoStartOfImage);
        }

        let mut segments = vec![RawSegment {
            marker: Marker::SOI,
            pos: 0,
            data: 2..2,
        }];

        loop {
            let pos = cur.position().usize()?;
            let byte = cur.read_byte().map_err(|_| Error::NoStartOfScan)?;
            if byte != MARKER_START {
                return Err(Error::MarkerExpected(pos));
            }

            // Any number of fill bytes can precede a marker
            let mut marker_byte = MARKER_START;
            while marker_byte == MARKER_START {
                marker_byte = cur.read_byte().map_err(|_| Error::NoStartOfScan)?;
            }
            let marker = Marker::from(marker_byte);

            if marker == Marker::EOI {
                return Err(Error::NoStartOfScan);
            }

            if marker.is_standalone() {
                let end = cur.position().usize()?;
                segments.push(RawSegment {
                    marker,
                    pos,
                    data: end..end,
                });
                continue;
            }

            let len = cur.read_be_u16().map_err(|_| Error::SegmentEof(marker))?;
            let payload_len = len
                .checked_sub(2)
                .ok_or(Error::SegmentLength(marker, len))?;
            let start = cur.position().usize()?;
            cur.skip(payload_len.into())
                .map_err(|_| Error::SegmentEof(marker))?;
            let end = start.safe_add(payload_len.into())?;

            tracing::debug!("Segment {marker:?} at {pos} with {payload_len} bytes");
            segments.push(RawSegment {
                marker,
                pos,
                data: start..end,
            });

            if marker == Marker::SOS {
                return Ok((segments, end));
            }
        }
    }
}

/// Replaces, removes or inserts the first segment of a kind
fn put(blocks: &mut Vec<Block>, kind: Kind, payload: Option<&[u8]>) {
    let position = blocks.iter().position(|x| x.kind() == Some(kind));

    let data = payload.map(|payload| [kind.identifier(), payload].concat());

    match (position, data) {
        (Some(pos), Some(data)) => {
            if let Some(block) = blocks.get_mut(pos) {
                block.data = data;
            }
        }
        (Some(pos), None) => {
            tracing::debug!("Removing {kind:?} segment");
            blocks.remove(pos);
        }
        (None, Some(data)) => {
            let pos = insert_position(blocks, kind);
            blocks.insert(
                pos,
                Block {
                    marker: kind.marker(),
                    data,
                },
            );
        }
        (None, None) => {}
    }
}

/// Updates the IPTC resource within the Photoshop segments
///
/// Resources spread over several segments are merged and written again,
/// split into as many segments as needed.
fn put_iptc(blocks: &mut Vec<Block>, iptc: Option<Vec<u8>>) -> Result<()> {
    let positions: Vec<usize> = blocks
        .iter()
        .enumerate()
        .filter(|(_, x)| x.kind() == Some(Kind::Photoshop))
        .map(|(pos, _)| pos)
        .collect();

    if positions.is_empty() && iptc.is_none() {
        return Ok(());
    }

    let mut data = Vec::new();
    for &pos in &positions {
        if let Some(resources) = blocks
            .get(pos)
            .and_then(|x| x.data.strip_prefix(PHOTOSHOP_HEADER))
        {
            data.extend_from_slice(resources);
        }
    }

    let mut resources = irb::decode(&data)?;
    irb::replace_iptc(&mut resources, iptc);

    for &pos in positions.iter().skip(1).rev() {
        blocks.remove(pos);
    }

    let payload = if resources.is_empty() {
        None
    } else {
        Some(irb::encode(&resources)?)
    };

    put(blocks, Kind::Photoshop, payload.as_deref());
    split_photoshop(blocks);

    Ok(())
}

/// Distributes a Photoshop segment that is too large over consecutive segments
fn split_photoshop(blocks: &mut Vec<Block>) {
    let Some(pos) = blocks.iter().position(|x| x.kind() == Some(Kind::Photoshop)) else {
        return;
    };
    let Some(resources) = blocks
        .get(pos)
        .filter(|x| x.data.len() > MAX_SEGMENT_DATA)
        .and_then(|x| x.data.strip_prefix(PHOTOSHOP_HEADER))
    else {
        return;
    };

    let chunk_len = MAX_SEGMENT_DATA.saturating_sub(PHOTOSHOP_HEADER.len());
    let parts: Vec<Block> = resources
        .chunks(chunk_len)
        .map(|chunk| Block {
            marker: Marker::APP13,
            data: [PHOTOSHOP_HEADER, chunk].concat(),
        })
        .collect();
    tracing::debug!("Splitting Photoshop resources over {} segments", parts.len());

    blocks.splice(pos..=pos, parts);
}

fn insert_position(blocks: &[Block], kind: Kind) -> usize {
    blocks
        .iter()
        .take_while(|x| x.marker.is_app())
        .enumerate()
        .filter(|(_, x)| x.marker == Marker::APP0 || x.kind().is_some_and(|k| k < kind))
        .map(|(pos, _)| pos.saturating_add(1))
        .last()
        .unwrap_or(0)
}

impl ImageFormat for Jpeg {
    fn is_filetype(data: &[u8]) -> bool {
        Self::is_filetype(data)
    }

    fn mime_type() -> &'static str {
        "image/jpeg"
    }
}

impl ImageMetadata for Jpeg {
    fn exif(&self) -> Option<Vec<u8>> {
        self.exif_data().map(|x| x.to_vec())
    }

    fn xmp(&self) -> Option<Vec<u8>> {
        self.xmp_data().map(|x| x.to_vec())
    }

    fn iptc(&self) -> Option<Vec<u8>> {
        match self.iptc_data() {
            Ok(iptc) => iptc,
            Err(err) => {
                tracing::info!("Unreadable image resources: {err}");
                None
            }
        }
    }

    fn dimensions(&self) -> Option<(u32, u32)> {
        let sof = self.sof().ok()?;
        Some((sof.width.into(), sof.height.into()))
    }
}

imgmeta_common::utils::convertible_enum!(
    #[repr(u8)]
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum Marker {
        /// Temporary private use in arithmetic coding
        TEM = 0x01,
        /// Baseline DCT
        SOF0 = 0xC0,
        /// Extended sequential DCT
        SOF1 = 0xC1,
        /// Progressive DCT
        SOF2 = 0xC2,
        /// Lossless
        SOF3 = 0xC3,
        /// Define Huffman table
        DHT = 0xC4,
        SOF5 = 0xC5,
        SOF6 = 0xC6,
        SOF7 = 0xC7,
        JPG = 0xC8,
        SOF9 = 0xC9,
        SOF10 = 0xCA,
        SOF11 = 0xCB,
        /// Define arithmetic coding conditioning
        DAC = 0xCC,
        SOF13 = 0xCD,
        SOF14 = 0xCE,
        SOF15 = 0xCF,
        RST0 = 0xD0,
        RST1 = 0xD1,
        RST2 = 0xD2,
        RST3 = 0xD3,
        RST4 = 0xD4,
        RST5 = 0xD5,
        RST6 = 0xD6,
        RST7 = 0xD7,
        /// Start of image
        SOI = 0xD8,
        /// End of image
        EOI = 0xD9,
        /// Start of scan
        SOS = 0xDA,
        /// Define quantization table
        DQT = 0xDB,
        /// Define number of lines
        DNL = 0xDC,
        /// Define restart interval
        DRI = 0xDD,
        /// JFIF
        APP0 = 0xE0,
        /// Exif, XMP
        APP1 = 0xE1,
        /// ICC color profile
        APP2 = 0xE2,
        APP3 = 0xE3,
        APP4 = 0xE4,
        APP5 = 0xE5,
        APP6 = 0xE6,
        APP7 = 0xE7,
        APP8 = 0xE8,
        APP9 = 0xE9,
        APP10 = 0xEA,
        APP11 = 0xEB,
        APP12 = 0xEC,
        /// Photoshop image resources including IPTC
        APP13 = 0xED,
        /// Adobe
        APP14 = 0xEE,
        APP15 = 0xEF,
        /// Comment
        COM = 0xFE,
    }
);

impl Marker {
    /// Start of frame
    pub fn is_sof(self) -> bool {
        let byte: u8 = self.into();
        (0xC0..=0xCF).contains(&byte) && ![0xC4, 0xC8, 0xCC].contains(&byte)
    }

    pub fn is_app(self) -> bool {
        let byte: u8 = self.into();
        (0xE0..=0xEF).contains(&byte)
    }

    /// Marker without length and payload
    pub fn is_standalone(self) -> bool {
        let byte: u8 = self.into();
        byte == 0x01 || (0xD0..=0xD9).contains(&byte)
    }
}
