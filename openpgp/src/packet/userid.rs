use std::fmt;

/// Holds a User ID packet.
///
/// The body of a User ID packet is a free-form string of printable
/// UTF-8, by convention of the form `Name (Comment) <address>`.  This
/// crate performs no character-set conversion or validation; the
/// bytes are delivered as found on the wire.  See [Section 5.11 of
/// RFC 4880] for details.
///
///   [Section 5.11 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-5.11
#[derive(PartialEq, Eq, Hash, Clone)]
pub struct UserID {
    value: Vec<u8>,
}

impl From<Vec<u8>> for UserID {
    fn from(u: Vec<u8>) -> Self {
        UserID {
            value: u,
        }
    }
}

impl From<&str> for UserID {
    fn from(u: &str) -> Self {
        u.as_bytes().to_vec().into()
    }
}

impl fmt::Display for UserID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let userid = String::from_utf8_lossy(&self.value[..]);
        write!(f, "{}", userid)
    }
}

impl fmt::Debug for UserID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("UserID")
            .field("value", &String::from_utf8_lossy(&self.value))
            .finish()
    }
}

impl UserID {
    /// Gets the user id packet's value.
    pub fn value(&self) -> &[u8] {
        self.value.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let uid = UserID::from("Alice <alice@example.org>");
        assert_eq!(uid.to_string(), "Alice <alice@example.org>");
        assert_eq!(uid.value(), b"Alice <alice@example.org>");
    }
}
