//! Photoshop image resource blocks
//!
//! JPEG files carry IPTC data as resource `0x0404` inside an `APP13` segment.

use std::io::Cursor;

use imgmeta_common::math::*;
use imgmeta_common::read::{ReadExt, SliceExt};

use crate::error::{Error, Result};

/// Start of the `APP13` payload
pub const PHOTOSHOP_HEADER: &[u8] = b"Photoshop 3.0\0";
pub const SIGNATURE: &[u8; 4] = b"8BIM";
/// Other signatures that are found in the wild
const OTHER_SIGNATURES: [&[u8; 4]; 4] = [b"PHUT", b"AgHg", b"DCSR", b"MeSa"];

/// IPTC-IIM data
pub const IPTC_RESOURCE: u16 = 0x0404;
/// MD5 digest of the IPTC data
pub const IPTC_DIGEST_RESOURCE: u16 = 0x0425;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub signature: [u8; 4],
    pub id: u16,
    /// Pascal string without length byte
    pub name: Vec<u8>,
    pub data: Vec<u8>,
}

impl Resource {
    pub fn new(id: u16, data: Vec<u8>) -> Self {
        Self {
            signature: *SIGNATURE,
            id,
            name: Vec::new(),
            data,
        }
    }
}

/// Reads resources, `data` starts after the Photoshop header
pub fn decode(data: &[u8]) -> Result<Vec<Resource>> {
    let mut cursor = Cursor::new(data);
    let mut resources = Vec::new();

    loop {
        let rest = data.get(cursor.position().usize()?..).unwrap_or_default();
        if rest.iter().all(|x| *x == 0) {
            break;
        }

        let signature = cursor.read_array().map_err(|_| Error::ResourceSignature)?;
        if &signature != SIGNATURE && !OTHER_SIGNATURES.contains(&&signature) {
            return Err(Error::ResourceSignature);
        }

        let id = cursor.read_be_u16()?;
        let name_len = cursor.read_byte()?;
        let name = cursor
            .slice(name_len.into())
            .map_err(|_| Error::ResourceEof(id))?;
        // Name including its length byte is padded to even size
        if name_len % 2 == 0 {
            cursor.skip(1).map_err(|_| Error::ResourceEof(id))?;
        }

        let len = cursor.read_be_u32()?.usize()?;
        let value = cursor.slice(len).map_err(|_| Error::ResourceEof(id))?;
        if len % 2 == 1 {
            // Some writers omit the padding of the last resource
            let _ = cursor.skip(1);
        }

        tracing::debug!("Image resource {id:#06x} with {len} bytes");
        resources.push(Resource {
            signature,
            id,
            name: name.to_vec(),
            data: value.to_vec(),
        });
    }

    Ok(resources)
}

pub fn encode(resources: &[Resource]) -> Result<Vec<u8>> {
    let mut data = Vec::new();

    for resource in resources {
        data.extend_from_slice(&resource.signature);
        data.extend_from_slice(&resource.id.to_be_bytes());

        let name_len = resource
            .name
            .len()
            .try_into()
            .map_err(|_| Error::ResourceTooLarge(resource.name.len()))?;
        data.push(name_len);
        data.extend_from_slice(&resource.name);
        if name_len % 2 == 0 {
            data.push(0);
        }

        let len = resource
            .data
            .len()
            .u32()
            .map_err(|_| Error::ResourceTooLarge(resource.data.len()))?;
        data.extend_from_slice(&len.to_be_bytes());
        data.extend_from_slice(&resource.data);
        if padding_even(resource.data.len()) == 1 {
            data.push(0);
        }
    }

    Ok(data)
}

/// IPTC-IIM data of the first IPTC resource
pub fn iptc(resources: &[Resource]) -> Option<&[u8]> {
    resources
        .iter()
        .find(|x| x.id == IPTC_RESOURCE && &x.signature == SIGNATURE)
        .map(|x| x.data.as_slice())
}

/// Replaces the IPTC resource or removes it for `None`
///
/// The digest resource no longer matches and is removed as well. A new IPTC
/// resource is placed where the old one was or appended.
pub fn replace_iptc(resources: &mut Vec<Resource>, iptc: Option<Vec<u8>>) {
    let n_before = resources.len();
    resources.retain(|x| x.id != IPTC_DIGEST_RESOURCE);
    if resources.len() != n_before {
        tracing::debug!("Dropping IPTC digest");
    }

    let position = resources.iter().position(|x| x.id == IPTC_RESOURCE);
    resources.retain(|x| x.id != IPTC_RESOURCE);

    if let Some(iptc) = iptc {
        let resource = Resource::new(IPTC_RESOURCE, iptc);
        match position {
            Some(pos) if pos <= resources.len() => resources.insert(pos, resource),
            _ => resources.push(resource),
        }
    }
}
