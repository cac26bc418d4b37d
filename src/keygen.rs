//! Account key material generation.
//!
//! Produces four artifacts in a caller-supplied directory that must already
//! exist and be writable:
//!
//! ```text
//! account-private.pem   PKCS#8 PEM private key (mode 0600 on Unix)
//! account-public.pem    SPKI PEM public key
//! account-hash          raw account hash bytes
//! account-hash-hex      lowercase hex of the account hash
//! ```
//!
//! Existing files under these names are overwritten. Each artifact is
//! written to a temp file and renamed into place, so a crash mid-write never
//! leaves a truncated file under a final name. There is no rollback:
//! artifacts committed before a failure stay on disk, and rerunning the
//! command regenerates all four.
//!
//! Concurrent invocations against the same directory are last-writer-wins
//! per file; callers must not race two keygens into one target.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::account::AccountHash;
use crate::crypto::SigningKey;
use crate::error::{Error, Result};

/// File name of the PEM-encoded private key artifact.
pub const PRIVATE_KEY_FILENAME: &str = "account-private.pem";
/// File name of the PEM-encoded public key artifact.
pub const PUBLIC_KEY_FILENAME: &str = "account-public.pem";
/// File name of the raw account hash artifact.
pub const ACCOUNT_HASH_FILENAME: &str = "account-hash";
/// File name of the hex-text account hash artifact.
pub const ACCOUNT_HASH_HEX_FILENAME: &str = "account-hash-hex";

/// Generate a fresh key pair and write all four artifacts into `directory`.
///
/// Returns the resolved absolute path of the directory on success, for the
/// caller to report. The directory is re-checked for writability before any
/// artifact is touched, so an invalid target never receives partial output.
pub fn generate_key_files(directory: &Path) -> Result<PathBuf> {
    let key = SigningKey::generate()?;
    write_key_files(directory, &key)
}

/// Serialize an existing key pair's artifacts into `directory`.
///
/// The deterministic lower half of [`generate_key_files`]: given the same
/// key, the artifact bytes are identical on every call.
pub fn write_key_files(directory: &Path, key: &SigningKey) -> Result<PathBuf> {
    let directory = ensure_writable_dir(directory)?;

    let public_key = key.public_key();
    let account_hash = AccountHash::from_public_key(&public_key);
    debug!(
        key = %public_key.fingerprint(),
        account_hash = %account_hash,
        "derived account identifiers"
    );

    let private_pem = key.to_pem()?;
    let public_pem = public_key.to_pem()?;

    atomic_write(
        &directory.join(PRIVATE_KEY_FILENAME),
        private_pem.as_bytes(),
        FileMode::Private,
    )?;
    atomic_write(
        &directory.join(PUBLIC_KEY_FILENAME),
        public_pem.as_bytes(),
        FileMode::Public,
    )?;
    atomic_write(
        &directory.join(ACCOUNT_HASH_FILENAME),
        account_hash.as_bytes(),
        FileMode::Public,
    )?;
    atomic_write(
        &directory.join(ACCOUNT_HASH_HEX_FILENAME),
        account_hash.to_hex().as_bytes(),
        FileMode::Public,
    )?;

    info!(directory = %directory.display(), "account key material written");
    Ok(directory)
}

/// Check that `directory` is an existing, writable directory and resolve it
/// to an absolute path. The writability probe creates and removes a scratch
/// file rather than trusting permission bits, which lie under ACLs and on
/// read-only mounts.
fn ensure_writable_dir(directory: &Path) -> Result<PathBuf> {
    let invalid = |source: io::Error| Error::InvalidDirectory {
        path: directory.to_path_buf(),
        source,
    };

    let resolved = fs::canonicalize(directory).map_err(invalid)?;
    if !resolved.is_dir() {
        return Err(invalid(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a directory",
        )));
    }

    let probe = resolved.join(".keygen-probe");
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&probe)
        .map_err(invalid)?;
    fs::remove_file(&probe).map_err(invalid)?;

    Ok(resolved)
}

enum FileMode {
    /// Owner read/write only where the platform supports it.
    Private,
    Public,
}

/// Write `content` to `path` via a temp file in the same directory and an
/// atomic rename. On rename failure the temp file is cleaned up so no stale
/// artifact is left behind.
fn atomic_write(path: &Path, content: &[u8], mode: FileMode) -> Result<()> {
    let write_err = |at: &Path, source: io::Error| Error::Write {
        path: at.to_path_buf(),
        source,
    };

    let tmp_path = tmp_sibling(path);
    fs::write(&tmp_path, content).map_err(|e| {
        error!(path = %tmp_path.display(), error = %e, "artifact write failed");
        write_err(&tmp_path, e)
    })?;

    #[cfg(unix)]
    if let FileMode::Private = mode {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&tmp_path, fs::Permissions::from_mode(0o600))
            .map_err(|e| write_err(&tmp_path, e))?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    fs::rename(&tmp_path, path).map_err(|e| {
        error!(
            from = %tmp_path.display(),
            to = %path.display(),
            error = %e,
            "artifact rename failed"
        );
        let _ = fs::remove_file(&tmp_path);
        write_err(path, e)
    })?;

    debug!(path = %path.display(), bytes = content.len(), "artifact written");
    Ok(())
}

// Filenames like "account-hash" have no extension, so build the temp name
// from the whole file name instead of `with_extension`.
fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_creates_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("artifact");

        atomic_write(&path, b"first", FileMode::Public).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"first");

        atomic_write(&path, b"second", FileMode::Public).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("artifact");

        atomic_write(&path, b"data", FileMode::Public).unwrap();
        assert!(!tmp_sibling(&path).exists());
    }

    #[test]
    fn test_tmp_sibling_keeps_directory() {
        let path = Path::new("/some/dir/account-hash");
        assert_eq!(tmp_sibling(path), Path::new("/some/dir/account-hash.tmp"));
    }

    #[test]
    fn test_ensure_writable_dir_rejects_missing_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = ensure_writable_dir(&missing).unwrap_err();
        assert!(matches!(err, Error::InvalidDirectory { .. }));
    }

    #[test]
    fn test_ensure_writable_dir_rejects_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a-file");
        fs::write(&file, b"x").unwrap();
        let err = ensure_writable_dir(&file).unwrap_err();
        assert!(matches!(err, Error::InvalidDirectory { .. }));
    }

    #[test]
    fn test_ensure_writable_dir_resolves_and_cleans_probe() {
        let dir = TempDir::new().unwrap();
        let resolved = ensure_writable_dir(dir.path()).unwrap();
        assert!(resolved.is_absolute());
        assert!(!resolved.join(".keygen-probe").exists());
    }
}
