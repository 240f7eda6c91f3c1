use std::fmt::Debug;

imgmeta_common::utils::convertible_enum!(
    #[repr(u32)]
    #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[allow(non_camel_case_types)]
    /// Type of a chunk
    ///
    /// The value is the chunk name read as big endian [`u32`].
    pub enum ChunkType {
        /// Header
        IHDR = 0x49484452,
        /// Palette
        PLTE = 0x504C5445,
        /// Image data
        IDAT = 0x49444154,
        /// End of file
        IEND = 0x49454E44,

        /// Exif
        eXIf = 0x65584966,
        /// Embedded ICC profile
        iCCP = 0x69434350,
        /// Apple proprietary, depends on the layout of the `IDAT` chunks
        iDOT = 0x69444F54,
        /// International textual data, used for XMP
        iTXt = 0x69545874,
        /// Physical pixel dimensions
        pHYs = 0x70485973,
        /// Textual information
        tEXt = 0x74455874,
        /// Image last-modification time
        tIME = 0x74494D45,
        /// Compressed textual data
        zTXt = 0x7A545874,
    }
);

impl Debug for ChunkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.bytes();
        match std::str::from_utf8(&bytes) {
            Ok(name) if bytes.is_ascii() => f.write_str(name),
            _ => write!(f, "Unknown({bytes:x?})"),
        }
    }
}

impl ChunkType {
    /// Chunk name
    pub fn bytes(self) -> [u8; 4] {
        u32::to_be_bytes(self.into())
    }

    /// Ancillary chunks have a lowercase first letter
    pub fn is_ancillary(self) -> bool {
        self.bytes()[0].is_ascii_lowercase()
    }
}
