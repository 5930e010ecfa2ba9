//! Streaming parser for the OpenPGP message format.
//!
//! This crate implements the packet framing and content decoding
//! defined by [RFC 4880] (and its predecessor drafts, RFC 2440bis) as
//! a streaming, event-driven decoder: bytes are pulled from a
//! [`ByteSource`], and every parsed structure is pushed to an
//! application-supplied sink as a typed [`Event`].  This includes
//! support for unbuffered message processing: no packet is held in
//! memory longer than it takes to decode it, and literal data bodies
//! are delivered in bounded chunks.
//!
//! The parser recognizes both the old and the new packet length
//! encodings, dispatches on the packet's content tag, and recursively
//! decodes nested structures: signature subpackets, and the packet
//! sequence inside a compressed data packet.
//!
//! A non-goal of this crate is any sort of cryptographic processing.
//! It does not verify signatures, decrypt session keys, validate
//! trust, or maintain a keyring; it parses octets into structures and
//! hands them to you.  Neither does it serialize packets.  MPIs are
//! delivered as opaque big-endian integers ([`crypto::mpi::MPI`]) for
//! a cryptographic backend to consume.
//!
//! [RFC 4880]: https://tools.ietf.org/html/rfc4880
//! [`ByteSource`]: parse/trait.ByteSource.html
//! [`Event`]: parse/enum.Event.html
//!
//! # Examples
//!
//! Parse a user id packet and collect the events:
//!
//! ```rust
//! use openpgp_stream::parse::{Event, Parser, ParseOptions};
//!
//! # fn main() -> openpgp_stream::Result<()> {
//! let mut events = Vec::new();
//! let mut parser = Parser::from_bytes(b"\xcd\x05Alice",
//!                                     ParseOptions::default(),
//!                                     |e| events.push(e));
//! parser.parse()?;
//!
//! assert!(matches!(&events[1],
//!                  Event::UserID(uid) if uid.value() == b"Alice"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod crypto;
pub mod fmt;
pub mod packet;
pub mod parse;
pub mod types;

use crate::packet::Tag;
use crate::packet::signature::subpacket::SubpacketTag;
use crate::types::{
    CompressionAlgorithm,
    PublicKeyAlgorithm,
};

/// Crate result specialization.
pub type Result<T> = ::std::result::Result<T, anyhow::Error>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
/// Errors returned by this crate.
///
/// Note: This enum cannot be exhaustively matched to allow future
/// extensions.
#[non_exhaustive]
pub enum Error {
    /// A malformed packet.
    #[error("Malformed packet: {0}")]
    MalformedPacket(String),

    /// A truncated packet, or a read beyond a packet boundary.
    #[error("Truncated packet: {0}")]
    TruncatedPacket(String),

    /// Malformed MPI.
    #[error("Malformed MPI: {0}")]
    MalformedMPI(String),

    /// Unsupported packet type.
    #[error("Unsupported packet type.  Tag: {0}")]
    UnsupportedPacketType(Tag),

    /// Unsupported public key algorithm identifier.
    #[error("Unsupported public key algorithm: {0}")]
    UnsupportedPublicKeyAlgorithm(PublicKeyAlgorithm),

    /// Unsupported Compression algorithm.
    #[error("Unsupported Compression algorithm: {0}")]
    UnsupportedCompressionAlgorithm(CompressionAlgorithm),

    /// A critical signature subpacket that was routed to be skipped.
    ///
    /// An implementation that does not interpret a critical subpacket
    /// must reject the signature (see [Section 5.2.3.1 of RFC 4880]).
    ///
    /// [Section 5.2.3.1 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-5.2.3.1
    #[error("Critical signature subpacket ignored ({0})")]
    UnsupportedCriticalSubpacket(SubpacketTag),
}

/// Holds a KeyID.
///
/// A KeyID identifies a public key.  It is the low 8 bytes of the key
/// fingerprint, and easy to forge.  For more details, see [Section
/// 12.2 of RFC 4880].
///
///   [Section 12.2 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-12.2
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub enum KeyID {
    /// Lower 8 bytes of the fingerprint.
    V4([u8; 8]),
    /// Used for holding key ids with an unexpected length.  For
    /// instance, an issuer subpacket could contain the wrong number
    /// of bytes.
    Invalid(Box<[u8]>),
}

impl KeyID {
    /// Reads a key id from raw bytes.
    pub fn from_bytes(raw: &[u8]) -> KeyID {
        if raw.len() == 8 {
            let mut keyid: [u8; 8] = Default::default();
            keyid.copy_from_slice(raw);
            KeyID::V4(keyid)
        } else {
            KeyID::Invalid(raw.to_vec().into_boxed_slice())
        }
    }

    /// Returns the raw bytes of the key id.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            KeyID::V4(id) => id,
            KeyID::Invalid(raw) => raw,
        }
    }
}

impl std::fmt::Display for KeyID {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", crate::fmt::to_hex(self.as_bytes(), false))
    }
}

impl std::fmt::Debug for KeyID {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("KeyID")
            .field(&self.to_string())
            .finish()
    }
}

/// Holds a fingerprint.
///
/// A fingerprint uniquely identifies a public key.  For more details
/// about how a fingerprint is generated, see [Section 12.2 of RFC
/// 4880].
///
///   [Section 12.2 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-12.2
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub enum Fingerprint {
    /// 20 byte SHA-1 hash.
    V4([u8; 20]),
    /// Used for holding fingerprints that we don't understand.  For
    /// instance, a revocation key subpacket could carry a fingerprint
    /// of the wrong length.
    Invalid(Box<[u8]>),
}

impl Fingerprint {
    /// Reads a fingerprint from raw bytes.
    pub fn from_bytes(raw: &[u8]) -> Fingerprint {
        if raw.len() == 20 {
            let mut fp: [u8; 20] = [0; 20];
            fp.copy_from_slice(raw);
            Fingerprint::V4(fp)
        } else {
            Fingerprint::Invalid(raw.to_vec().into_boxed_slice())
        }
    }

    /// Returns the raw bytes of the fingerprint.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Fingerprint::V4(fp) => fp,
            Fingerprint::Invalid(raw) => raw,
        }
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", crate::fmt::to_hex(self.as_bytes(), false))
    }
}

impl std::fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("Fingerprint")
            .field(&self.to_string())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyid_from_bytes() {
        let id = KeyID::from_bytes(&[0xca, 0xfe, 0xba, 0xbe,
                                     0x00, 0x11, 0x22, 0x33]);
        assert_eq!(id, KeyID::V4([0xca, 0xfe, 0xba, 0xbe,
                                  0x00, 0x11, 0x22, 0x33]));
        assert_eq!(id.to_string(), "CAFEBABE00112233");

        let bad = KeyID::from_bytes(&[1, 2, 3]);
        assert!(matches!(bad, KeyID::Invalid(_)));
    }

    #[test]
    fn fingerprint_from_bytes() {
        let fp = Fingerprint::from_bytes(&[7; 20]);
        assert!(matches!(fp, Fingerprint::V4(_)));
        assert_eq!(fp.as_bytes(), &[7; 20][..]);

        assert!(matches!(Fingerprint::from_bytes(&[7; 19]),
                         Fingerprint::Invalid(_)));
    }

    #[test]
    fn error_display() {
        let e = Error::MalformedMPI("MPI format error".into());
        assert_eq!(e.to_string(), "Malformed MPI: MPI format error");
    }
}
