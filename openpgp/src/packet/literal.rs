use std::fmt;

use crate::types::DataFormat;

/// Holds the header of a Literal Data packet.
///
/// A literal data packet wraps the actual message payload.  The
/// parser delivers the header fields first, then the body in bounded
/// chunks, so that arbitrarily large messages can be processed in
/// constant space.  See [Section 5.9 of RFC 4880] for details.
///
///   [Section 5.9 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-5.9
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    /// Format of the payload.
    pub format: DataFormat,
    /// Filename hint, at most 255 bytes.
    ///
    /// This is a hint and must not be trusted: a special value of
    /// `_CONSOLE` conventionally asks for extra-careful handling of
    /// the output.  The bytes are delivered without character-set
    /// conversion.
    pub filename: Vec<u8>,
    /// Modification time of the file, in seconds since the epoch, or
    /// zero if unknown.
    pub date: u32,
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Literal")
            .field("format", &self.format)
            .field("filename", &String::from_utf8_lossy(&self.filename))
            .field("date", &self.date)
            .finish()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} literal data \"{}\", modified {}",
               self.format,
               String::from_utf8_lossy(&self.filename),
               self.date)
    }
}
