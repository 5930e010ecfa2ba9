//! Packet-related types.
//!
//! OpenPGP data is structured as a sequence of packets ([Section 4 of
//! RFC 4880]).  This module holds one type per packet this crate
//! decodes, plus the packet [`Tag`] and [`Header`] types that
//! describe the framing around a packet's body.
//!
//! [Section 4 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-4

mod tag;
pub use self::tag::Tag;
pub mod header;
pub use self::header::{BodyLength, Header, LengthType};

pub mod key;
pub use self::key::{Key, SecretKey};
pub mod signature;
pub use self::signature::{OnePassSig, Signature};

mod compressed_data;
pub use self::compressed_data::CompressedData;
mod literal;
pub use self::literal::Literal;
mod trust;
pub use self::trust::Trust;
mod userid;
pub use self::userid::UserID;
mod user_attribute;
pub use self::user_attribute::UserAttribute;
