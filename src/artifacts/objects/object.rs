use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Result;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::BufRead;

/// Bytes written to the object file
pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    /// Digest the object is stored under
    ///
    /// Defaults to the SHA-1 of the serialized bytes. Objects whose identity is computed
    /// over a different form than the one written to disk override this.
    fn object_id(&self) -> Result<ObjectId> {
        let content = self.serialize()?;
        hash_content(&content)
    }
}

pub fn hash_content(content: &[u8]) -> Result<ObjectId> {
    let mut hasher = Sha1::new();
    hasher.update(content);

    let oid = hasher.finalize();
    ObjectId::try_parse(format!("{oid:x}"))
}
