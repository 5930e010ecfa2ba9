use std::fmt;

/// Holds a User Attribute packet.
///
/// A User Attribute packet holds one or more attribute subpackets,
/// the only standardized one being an image.  The packet is delivered
/// as opaque data; decomposing the attribute subpackets is left to
/// the application.  See [Section 5.12 of RFC 4880] for details.
///
///   [Section 5.12 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-5.12
#[derive(PartialEq, Eq, Hash, Clone)]
pub struct UserAttribute {
    value: Vec<u8>,
}

impl From<Vec<u8>> for UserAttribute {
    fn from(u: Vec<u8>) -> Self {
        UserAttribute {
            value: u,
        }
    }
}

impl fmt::Debug for UserAttribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("UserAttribute")
            .field("value", &crate::fmt::to_hex(&self.value, true))
            .finish()
    }
}

impl UserAttribute {
    /// Gets the user attribute packet's raw, unparsed value.
    pub fn value(&self) -> &[u8] {
        self.value.as_slice()
    }
}
