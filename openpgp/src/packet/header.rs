//! OpenPGP packet headers.
//!
//! An OpenPGP packet starts with a packet tag octet, followed by the
//! length of the packet's body.  There are two framing styles: the
//! old format, whose tag octet encodes one of four length types, and
//! the new format, whose length is self-describing.  See [Section 4.2
//! of RFC 4880] for details.
//!
//! [Section 4.2 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-4.2

use std::fmt;

use crate::packet::Tag;

/// The reserved high bit of the packet tag octet.  Always set.
pub(crate) const CTB_ALWAYS_SET: u8 = 0x80;

/// The format bit of the packet tag octet.  Set for new-format packets.
pub(crate) const CTB_NEW_FORMAT: u8 = 0x40;

/// Mask and shift extracting the content tag from an old-format tag
/// octet.
pub(crate) const CTB_OLD_TAG_MASK: u8 = 0x3c;
pub(crate) const CTB_OLD_TAG_SHIFT: u8 = 2;

/// Mask extracting the length type from an old-format tag octet.
pub(crate) const CTB_OLD_LENGTH_TYPE_MASK: u8 = 0x03;

/// Mask extracting the content tag from a new-format tag octet.
pub(crate) const CTB_NEW_TAG_MASK: u8 = 0x3f;

/// The length type from an old-format packet tag octet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthType {
    /// The body length occupies one octet.
    OneOctet,
    /// The body length occupies two octets.
    TwoOctet,
    /// The body length occupies four octets.
    FourOctet,
    /// The packet is of indeterminate length, ending at the end of
    /// the input.
    Indeterminate,
}

impl From<u8> for LengthType {
    fn from(u: u8) -> Self {
        match u & CTB_OLD_LENGTH_TYPE_MASK {
            0 => LengthType::OneOctet,
            1 => LengthType::TwoOctet,
            2 => LengthType::FourOctet,
            _ => LengthType::Indeterminate,
        }
    }
}

impl LengthType {
    /// The number of octets the body length occupies, if it occupies
    /// any.
    pub(crate) fn octets(&self) -> Option<usize> {
        match self {
            LengthType::OneOctet => Some(1),
            LengthType::TwoOctet => Some(2),
            LengthType::FourOctet => Some(4),
            LengthType::Indeterminate => None,
        }
    }
}

/// The size of a packet's body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyLength {
    /// Packet size is fully known.
    Full(u32),
    /// The packet extends to the end of the input (old format only).
    Indeterminate,
}

impl BodyLength {
    /// Returns the declared length, treating an indeterminate length
    /// as zero, the way region bookkeeping does.
    pub(crate) fn declared(&self) -> u32 {
        match self {
            BodyLength::Full(l) => *l,
            BodyLength::Indeterminate => 0,
        }
    }
}

/// An OpenPGP packet's header.
///
/// This is what the parser delivers as its framing event before it
/// descends into the packet's body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    /// Whether the packet uses the new framing format.
    pub new_format: bool,
    /// The packet's content tag.
    pub tag: Tag,
    /// The length type from the tag octet.  Old format only.
    pub length_type: Option<LengthType>,
    /// The packet's body length.
    pub length: BodyLength,
    /// Offset of the tag octet in the input stream.
    pub position: u64,
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} format, {:?}) at offset {}",
               self.tag,
               if self.new_format { "new" } else { "old" },
               self.length, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_type_from_octet() {
        assert_eq!(LengthType::from(0x99), LengthType::TwoOctet);
        assert_eq!(LengthType::from(0x98), LengthType::OneOctet);
        assert_eq!(LengthType::from(0x9a), LengthType::FourOctet);
        assert_eq!(LengthType::from(0x9b), LengthType::Indeterminate);
    }

    #[test]
    fn old_format_tag_extraction() {
        // 0x99 = old format, tag 6 (public key), two-octet length.
        let octet = 0x99u8;
        assert_eq!(octet & CTB_ALWAYS_SET, CTB_ALWAYS_SET);
        assert_eq!(octet & CTB_NEW_FORMAT, 0);
        assert_eq!(Tag::from((octet & CTB_OLD_TAG_MASK) >> CTB_OLD_TAG_SHIFT),
                   Tag::PublicKey);
    }

    #[test]
    fn new_format_tag_extraction() {
        // 0xcd = new format, tag 13 (user id).
        let octet = 0xcdu8;
        assert_eq!(octet & CTB_NEW_FORMAT, CTB_NEW_FORMAT);
        assert_eq!(Tag::from(octet & CTB_NEW_TAG_MASK), Tag::UserID);
    }
}
