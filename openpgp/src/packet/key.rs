//! Key packets.
//!
//! Key material comes in four packets: the primary public key (tag
//! 6), a public subkey (tag 14), and their secret counterparts (tags
//! 5 and 7), all sharing one body layout.  See [Section 5.5 of RFC
//! 4880] for details.
//!
//! [Section 5.5 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-5.5

use std::fmt;

use crate::crypto::mpi;
use crate::types::PublicKeyAlgorithm;

/// Holds a public key or public subkey packet.
///
/// Versions 2 and 3 carry an expiration as a number of days of
/// validity; version 4 moved expiration into signature subpackets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Key {
    /// Version of the key packet.  2, 3 and 4 are recognized.
    pub version: u8,
    /// When the key was created, in seconds since the epoch.
    pub creation_time: u32,
    /// Number of days of validity.  Versions 2 and 3 only.
    pub days_valid: Option<u16>,
    /// Public key algorithm of this key.
    pub pk_algo: PublicKeyAlgorithm,
    /// The key's public material.
    pub mpis: mpi::PublicKey,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "v{} {} key, created {}",
               self.version, self.pk_algo, self.creation_time)
    }
}

/// Holds a secret key or secret subkey packet.
///
/// The body embeds a complete public key, followed by the secret
/// material.  Only unencrypted secret keys (`s2k_usage` of zero) are
/// decoded by this crate.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SecretKey {
    /// The public half of the key.
    pub public: Key,
    /// The string-to-key usage octet.  Zero means unencrypted.
    pub s2k_usage: u8,
    /// The key's secret material.
    pub mpis: mpi::SecretKeyMaterial,
    /// Checksum over the secret material, as found on the wire.  Not
    /// validated.
    pub checksum: u16,
}
