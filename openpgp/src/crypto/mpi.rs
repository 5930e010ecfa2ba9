//! Multiprecision Integers.
//!
//! Cryptographic objects in OpenPGP are made up of multiprecision
//! integers (MPIs), defined in [Section 3.2 of RFC 4880]: a two-octet
//! big-endian bit count, followed by the minimum number of big-endian
//! magnitude octets.  This module holds the parsed form: the
//! magnitude bytes of a single integer ([`MPI`]), and the
//! per-algorithm groupings of integers that make up public keys,
//! secret keys, and signatures.
//!
//! The integers are opaque to this crate; a cryptographic backend
//! turns them into bignums.
//!
//! [Section 3.2 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-3.2

use std::fmt;

/// Holds a single MPI.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MPI {
    /// Integer value as big-endian.
    value: Box<[u8]>,
}

impl From<Vec<u8>> for MPI {
    fn from(v: Vec<u8>) -> Self {
        Self::new(&v)
    }
}

impl MPI {
    /// Creates a new MPI.
    ///
    /// This function takes care of leading zeros.
    pub fn new(value: &[u8]) -> Self {
        let mut leading_zeros = 0;
        for b in value {
            leading_zeros += b.leading_zeros() as usize;
            if *b != 0 {
                break;
            }
        }

        let offset = leading_zeros / 8;
        let value = Vec::from(&value[offset..]).into_boxed_slice();

        MPI {
            value,
        }
    }

    /// Returns the length of the MPI in bits.
    pub fn bits(&self) -> usize {
        self.value.len() * 8
            - self.value.get(0).map(|&b| b.leading_zeros() as usize)
                  .unwrap_or(0)
    }

    /// Returns the value of this MPI.
    pub fn value(&self) -> &[u8] {
        &self.value
    }
}

impl fmt::Debug for MPI {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_fmt(format_args!(
            "{} bits: {}", self.bits(),
            crate::fmt::to_hex(&*self.value, true)))
    }
}

/// A public key.
///
/// Provides a typed and structured way of storing multiple MPIs (and
/// the occasional elliptic curve) in packets.
///
/// Note: This enum cannot be exhaustively matched to allow future
/// extensions.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum PublicKey {
    /// RSA public key.
    RSA {
        /// Public exponent
        e: MPI,
        /// Public modulo N = pq.
        n: MPI,
    },

    /// NIST DSA public key.
    DSA {
        /// Prime of the ring Zp.
        p: MPI,
        /// Order of `g` in Zp.
        q: MPI,
        /// Public generator of Zp.
        g: MPI,
        /// Public key g^x mod p.
        y: MPI,
    },

    /// Elgamal public key.
    Elgamal {
        /// Prime of the ring Zp.
        p: MPI,
        /// Generator of Zp.
        g: MPI,
        /// Public key g^x mod p.
        y: MPI,
    },
}

/// A secret key.
///
/// Provides a typed and structured way of storing the secret half of
/// a key's MPIs.  Only unencrypted secret key material is represented
/// here; this crate does not decode encrypted key packets.
///
/// Note: This enum cannot be exhaustively matched to allow future
/// extensions.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum SecretKeyMaterial {
    /// RSA secret key.
    RSA {
        /// Secret exponent, inverse of e in Phi(N).
        d: MPI,
        /// Smaller secret prime.
        p: MPI,
        /// Larger secret prime.
        q: MPI,
        /// Inverse of p mod q.
        u: MPI,
    },
}

/// A cryptographic signature.
///
/// Provides a typed and structured way of storing the MPIs of a
/// signature packet.
///
/// Note: This enum cannot be exhaustively matched to allow future
/// extensions.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Signature {
    /// RSA signature.
    RSA {
        /// Signature m^d mod N.
        s: MPI,
    },

    /// NIST's DSA signature.
    DSA {
        /// `r` value.
        r: MPI,
        /// `s` value.
        s: MPI,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mpi_strips_leading_zeros() {
        let mpi = MPI::new(&[0x00, 0x00, 0x01, 0x02]);
        assert_eq!(mpi.value(), &[0x01, 0x02]);
        assert_eq!(mpi.bits(), 9);
    }

    #[test]
    fn mpi_bits() {
        assert_eq!(MPI::new(&[]).bits(), 0);
        assert_eq!(MPI::new(&[0x01]).bits(), 1);
        assert_eq!(MPI::new(&[0x80]).bits(), 8);
        assert_eq!(MPI::new(&[0x17, 0x00]).bits(), 13);
    }

    #[test]
    fn mpi_debug() {
        let mpi = MPI::new(&[0xca, 0xfe, 0xba, 0xbe]);
        assert_eq!(format!("{:?}", mpi), "32 bits: CAFE BABE");
    }
}
