use std::fmt;

/// The OpenPGP packet tags as defined in [Section 4.3 of RFC 4880].
///
///   [Section 4.3 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-4.3
///
/// The values correspond to the serialized format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    /// Reserved Packet tag.
    Reserved,
    /// Public-Key Encrypted Session Key Packet.
    PKESK,
    /// Signature Packet.
    Signature,
    /// Symmetric-Key Encrypted Session Key Packet.
    SKESK,
    /// One-Pass Signature Packet.
    OnePassSig,
    /// Secret-Key Packet.
    SecretKey,
    /// Public-Key Packet.
    PublicKey,
    /// Secret-Subkey Packet.
    SecretSubkey,
    /// Compressed Data Packet.
    CompressedData,
    /// Symmetrically Encrypted Data Packet.
    SED,
    /// Marker Packet (Obsolete Literal Packet).
    Marker,
    /// Literal Data Packet.
    Literal,
    /// Trust Packet.
    Trust,
    /// User ID Packet.
    UserID,
    /// Public-Subkey Packet.
    PublicSubkey,
    /// User Attribute Packet.
    UserAttribute,
    /// Sym. Encrypted and Integrity Protected Data Packet.
    SEIP,
    /// Modification Detection Code Packet.
    MDC,
    /// Private or Experimental Values.
    Private(u8),
    /// Catchall.
    Unknown(u8),
}

impl From<u8> for Tag {
    fn from(u: u8) -> Self {
        use crate::packet::Tag::*;

        match u {
            0 => Reserved,
            1 => PKESK,
            2 => Signature,
            3 => SKESK,
            4 => OnePassSig,
            5 => SecretKey,
            6 => PublicKey,
            7 => SecretSubkey,
            8 => CompressedData,
            9 => SED,
            10 => Marker,
            11 => Literal,
            12 => Trust,
            13 => UserID,
            14 => PublicSubkey,
            17 => UserAttribute,
            18 => SEIP,
            19 => MDC,
            60..=63 => Private(u),
            _ => Unknown(u),
        }
    }
}

impl From<Tag> for u8 {
    fn from(t: Tag) -> u8 {
        match t {
            Tag::Reserved => 0,
            Tag::PKESK => 1,
            Tag::Signature => 2,
            Tag::SKESK => 3,
            Tag::OnePassSig => 4,
            Tag::SecretKey => 5,
            Tag::PublicKey => 6,
            Tag::SecretSubkey => 7,
            Tag::CompressedData => 8,
            Tag::SED => 9,
            Tag::Marker => 10,
            Tag::Literal => 11,
            Tag::Trust => 12,
            Tag::UserID => 13,
            Tag::PublicSubkey => 14,
            Tag::UserAttribute => 17,
            Tag::SEIP => 18,
            Tag::MDC => 19,
            Tag::Private(u) => u,
            Tag::Unknown(u) => u,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Tag::Reserved =>
                f.write_str("Reserved - a packet tag MUST NOT have this value"),
            Tag::PKESK =>
                f.write_str("PKESK (Public-Key Encrypted Session Key Packet)"),
            Tag::Signature => f.write_str("Signature Packet"),
            Tag::SKESK =>
                f.write_str("SKESK (Symmetric-Key Encrypted Session Key Packet)"),
            Tag::OnePassSig => f.write_str("One-Pass Signature Packet"),
            Tag::SecretKey => f.write_str("Secret-Key Packet"),
            Tag::PublicKey => f.write_str("Public-Key Packet"),
            Tag::SecretSubkey => f.write_str("Secret-Subkey Packet"),
            Tag::CompressedData => f.write_str("Compressed Data Packet"),
            Tag::SED =>
                f.write_str("SED (Symmetrically Encrypted Data Packet)"),
            Tag::Marker => f.write_str("Marker Packet"),
            Tag::Literal => f.write_str("Literal Data Packet"),
            Tag::Trust => f.write_str("Trust Packet"),
            Tag::UserID => f.write_str("User ID Packet"),
            Tag::PublicSubkey => f.write_str("Public-Subkey Packet"),
            Tag::UserAttribute => f.write_str("User Attribute Packet"),
            Tag::SEIP =>
                f.write_str("SEIP (Symmetrically Encrypted Integrity Protected Data Packet)"),
            Tag::MDC =>
                f.write_str("MDC (Modification Detection Code Packet)"),
            Tag::Private(u) =>
                f.write_fmt(format_args!("Private/Experimental Packet {}", u)),
            Tag::Unknown(u) =>
                f.write_fmt(format_args!("Unknown Packet {}", u)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        for t in 0..=63u8 {
            let tag = Tag::from(t);
            assert_eq!(u8::from(tag), t);
        }
    }

    #[test]
    fn unknown_tags() {
        assert_eq!(Tag::from(15), Tag::Unknown(15));
        assert_eq!(Tag::from(61), Tag::Private(61));
    }
}
