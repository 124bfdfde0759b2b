//! Peppered Argon2id credential hashing.

pub mod hasher;

pub use hasher::PasswordHasher;
