//! src/container.rs
//!
//! A [`DataContainer`] pairs a [`BinaryHeader`] with an opaque payload.
//! The wire form is simply `header bytes ++ payload`; reconstructing both
//! halves requires the header's schema, supplied out-of-band.

use crate::error::Result;
use crate::header::{BinaryHeader, HeaderEntry};

/// A binary header plus opaque payload bytes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataContainer {
    header: BinaryHeader,
    data: Vec<u8>,
}

impl DataContainer {
    /// An empty container: empty header, empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a container from its two halves.
    pub fn from_parts(header: BinaryHeader, data: Vec<u8>) -> Self {
        Self { header, data }
    }

    /// Reconstruct a container from `bytes` using `schema` to parse the
    /// header prefix; everything after the header is the payload.
    ///
    /// Fails with a format error when `bytes` is shorter than the
    /// cumulative schema width. The recovered payload length is always
    /// `bytes.len() - header.size()`.
    pub fn unpack(bytes: &[u8], schema: &[HeaderEntry]) -> Result<Self> {
        let header = BinaryHeader::from_bytes(bytes, schema)?;
        let data = bytes[header.size()..].to_vec();
        Ok(Self { header, data })
    }

    pub fn header(&self) -> &BinaryHeader {
        &self.header
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn set_header(&mut self, header: BinaryHeader) {
        self.header = header;
    }

    pub fn set_data(&mut self, data: Vec<u8>) {
        self.data = data;
    }

    /// Consume the container, yielding header and payload.
    pub fn into_parts(self) -> (BinaryHeader, Vec<u8>) {
        (self.header, self.data)
    }

    /// Serialize: `header bytes ++ payload`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.header.size() + self.data.len());
        bytes.extend_from_slice(&self.header.to_bytes());
        bytes.extend_from_slice(&self.data);
        bytes
    }
}
