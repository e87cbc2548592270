//! Cryptography adapters - Implementations of the `Encrypter` port.

mod argon2_encrypter;

pub use argon2_encrypter::Argon2Encrypter;
