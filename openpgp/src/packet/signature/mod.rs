//! Signature packets.
//!
//! Signature packets are used both for certification purposes as well
//! as for document signing purposes.  See [Section 5.2 of RFC 4880]
//! for details.
//!
//!   [Section 5.2 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-5.2

use std::fmt;

use crate::KeyID;
use crate::crypto::mpi;
use crate::types::{
    HashAlgorithm,
    PublicKeyAlgorithm,
    SignatureType,
};

pub mod subpacket;

/// Holds a signature packet.
///
/// Version 3 signatures carry the creation time and the signer's key
/// id in the packet body itself; version 4 signatures carry them in
/// subpackets, so either field is `None` when the corresponding
/// subpacket was absent (for the creation time, absent from the
/// *hashed* subpacket area -- an unhashed creation time is not
/// trustworthy and is not reflected here).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// Version of the signature packet.  A version 2 body is decoded
    /// like version 3.
    pub version: u8,
    /// Type of signature.
    pub typ: SignatureType,
    /// When the signature was created, in seconds since the epoch.
    pub creation_time: Option<u32>,
    /// The id of the key that allegedly made the signature.
    pub signer_id: Option<KeyID>,
    /// Public key algorithm used to make the signature.
    pub pk_algo: PublicKeyAlgorithm,
    /// Hash algorithm the signature hash was computed with.
    pub hash_algo: HashAlgorithm,
    /// Leftmost two octets of the signature hash, for quick rejection.
    pub hash2: [u8; 2],
    /// The signature's MPIs.
    pub mpis: mpi::Signature,
    /// Byte span `(start, length)` of the hashed data of a version 4
    /// signature, relative to the start of the packet's raw bytes.
    ///
    /// A verifier re-hashes exactly these bytes (the version, type
    /// and algorithm octets plus the hashed subpacket area, as
    /// serialized on the wire), so the span is recorded against the
    /// accumulated raw packet that the end-of-packet event delivers.
    pub hashed_span: Option<(usize, usize)>,
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "v{} {} signature by {}",
               self.version, self.typ,
               match &self.signer_id {
                   Some(id) => id.to_string(),
                   None => "an unstated key".into(),
               })
    }
}

/// Holds a one-pass signature packet.
///
/// The one-pass signature packet precedes the signed data, carrying
/// enough information for the receiver to hash the data in a single
/// pass.  See [Section 5.4 of RFC 4880] for details.
///
///   [Section 5.4 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-5.4
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OnePassSig {
    /// Version of the one-pass signature packet.  Must be 3.
    pub version: u8,
    /// Type of the upcoming signature.
    pub typ: SignatureType,
    /// Hash algorithm the upcoming signature uses.
    pub hash_algo: HashAlgorithm,
    /// Public key algorithm of the upcoming signature.
    pub pk_algo: PublicKeyAlgorithm,
    /// The id of the signing key.
    pub issuer: KeyID,
    /// The raw nested flag octet, normalized to a boolean.  A zero
    /// octet means that another one-pass signature packet follows
    /// before the signed data.
    pub nested: bool,
}
