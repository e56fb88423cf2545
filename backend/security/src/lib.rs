//! Request authentication for the interactions endpoint.
//!
//! Every inbound request is signed by the platform over
//! `timestamp || raw body` with its Ed25519 key; we hold the public half.

pub mod signature;

pub use signature::{
    SIGNATURE_HEADER, SignatureError, TIMESTAMP_HEADER, public_key_is_well_formed, try_verify,
    verify,
};
