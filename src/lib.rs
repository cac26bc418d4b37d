//! # Meridian Client
//!
//! Account key material generation for the Meridian network client.
//!
//! The crate generates an Ed25519 account key pair and its derived on-network
//! identifier, and writes them as flat files into an existing directory:
//! PEM containers for both keys plus the account hash in raw and hex form.
//!
//! ## Example
//!
//! ```rust,ignore
//! use meridian_client::keygen;
//!
//! let resolved = keygen::generate_key_files(std::path::Path::new("./keys"))?;
//! println!("Keys successfully created in directory: {}", resolved.display());
//! ```
//!
//! The operation is synchronous and sub-second. It has no rollback: rerun
//! the command to regenerate all artifacts after a failure.

pub mod account;
pub mod crypto;
pub mod error;
pub mod keygen;

// Re-exports for convenience
pub use account::{AccountHash, ACCOUNT_HASH_LENGTH};
pub use crypto::{PublicKey, SigningKey, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH};
pub use error::{Error, Result};
pub use keygen::{
    generate_key_files, write_key_files, ACCOUNT_HASH_FILENAME, ACCOUNT_HASH_HEX_FILENAME,
    PRIVATE_KEY_FILENAME, PUBLIC_KEY_FILENAME,
};
