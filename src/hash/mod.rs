//! # Hash Module
//!
//! Content digests for provenance subjects. Only one algorithm is supported:
//! SHA-256, recorded under the `sha256` key of a subject's digest set.
//!
//! ## Examples
//!
//! ```
//! use gha_provenance::hash::calculate_hash;
//!
//! let hash = calculate_hash(b"abc");
//! assert_eq!(
//!     hash,
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

use crate::error::Result;
use crate::in_toto::DigestSet;
use crate::utils::safe_open_file;
use sha2::{Digest, Sha256};
use std::io::Read;
use std::path::Path;

/// Digest-set key for subject content hashes.
pub const SHA256: &str = "sha256";

/// Digest-set key for git commit identifiers.
pub const SHA1: &str = "sha1";

/// Calculate the SHA-256 hash of `data` as lowercase hex (64 characters).
pub fn calculate_hash(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Calculate the SHA-256 hash of a file.
///
/// The file is streamed in chunks and the handle is released before returning.
/// Symbolic links are followed.
///
/// # Examples
///
/// ```no_run
/// use gha_provenance::hash::calculate_file_hash;
/// use std::path::Path;
///
/// let hash = calculate_file_hash(Path::new("dist/app.tar.gz"))?;
/// assert_eq!(hash.len(), 64);
/// # Ok::<(), gha_provenance::error::Error>(())
/// ```
pub fn calculate_file_hash(path: impl AsRef<Path>) -> Result<String> {
    let file = safe_open_file(path.as_ref())?;
    hash_reader::<Sha256, _>(file)
}

/// Build a single-entry digest set.
pub fn digest_set(alg: &str, digest: &str) -> DigestSet {
    DigestSet::from([(alg.to_string(), digest.to_string())])
}

/// Hash a file and wrap the result in a `sha256` digest set.
pub fn file_digest_set(path: impl AsRef<Path>) -> Result<DigestSet> {
    Ok(digest_set(SHA256, &calculate_file_hash(path)?))
}

/// Internal helper to hash data from a reader using streaming
fn hash_reader<D: Digest, R: Read>(mut reader: R) -> Result<String> {
    let mut hasher = D::new();
    let mut buffer = [0; 8192];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::safe_create_file;
    use std::fs::OpenOptions;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_hash_known_values() {
        assert_eq!(
            calculate_hash(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            calculate_hash(b"hello world"),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_hash_idempotence() {
        let data = b"build output";
        assert_eq!(calculate_hash(data), calculate_hash(data));
    }

    #[test]
    fn test_one_byte_change_changes_hash() {
        assert_ne!(calculate_hash(b"artifact-1"), calculate_hash(b"artifact-2"));
    }

    #[test]
    fn test_file_hash_matches_in_memory_hash() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("test.txt");
        std::fs::write(&file_path, b"hello world")?;

        assert_eq!(calculate_file_hash(&file_path)?, calculate_hash(b"hello world"));
        Ok(())
    }

    #[test]
    fn test_file_hash_changes() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("test_changes.txt");

        // Test with initial content
        {
            let mut file = safe_create_file(&file_path, false)?;
            file.write_all(b"initial content")?;
        }
        let hash1 = calculate_file_hash(&file_path)?;

        // Test after appending content
        {
            let mut file = OpenOptions::new().append(true).open(&file_path)?;
            file.write_all(b" with more data")?;
        }
        let hash2 = calculate_file_hash(&file_path)?;

        assert_ne!(hash1, hash2);

        // Back to the initial content
        {
            let mut file = safe_create_file(&file_path, false)?;
            file.write_all(b"initial content")?;
        }
        let hash3 = calculate_file_hash(&file_path)?;

        assert_eq!(hash1, hash3);

        Ok(())
    }

    #[test]
    fn test_large_file_hashing() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("large_file.bin");

        // Spans many read buffers, with a partial final chunk.
        let data: Vec<u8> = (0..(3 * 8192 + 17)).map(|i| (i % 251) as u8).collect();
        std::fs::write(&file_path, &data)?;

        assert_eq!(calculate_file_hash(&file_path)?, calculate_hash(&data));
        Ok(())
    }

    #[test]
    fn test_file_not_found_error() {
        let dir = tempdir().unwrap();
        let result = calculate_file_hash(dir.path().join("nonexistent.bin"));
        assert!(result.is_err());
    }

    #[test]
    fn test_digest_sets() -> Result<()> {
        let set = digest_set(SHA1, "abc123");
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("sha1").map(String::as_str), Some("abc123"));

        let dir = tempdir()?;
        let file_path = dir.path().join("a.bin");
        std::fs::write(&file_path, b"abc")?;
        let set = file_digest_set(&file_path)?;
        assert_eq!(
            set.get(SHA256).map(String::as_str),
            Some("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );

        Ok(())
    }
}
