//! Cryptographic data types.
//!
//! This crate does not implement any cryptography.  This module holds
//! the data types that cryptographic material is parsed into, for a
//! backend of the application's choosing to consume.

pub mod mpi;
