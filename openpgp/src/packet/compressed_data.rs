use std::fmt;

use crate::types::CompressionAlgorithm;

/// Holds the header of a Compressed Data packet.
///
/// The body of a compressed data packet is itself a sequence of
/// OpenPGP packets.  The parser emits this header, inflates the body,
/// and then parses the contained packets recursively.  See [Section
/// 5.6 of RFC 4880] for details.
///
///   [Section 5.6 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-5.6
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CompressedData {
    /// Algorithm used to compress the payload.
    pub algo: CompressionAlgorithm,
}

impl fmt::Display for CompressedData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} compressed data", self.algo)
    }
}
