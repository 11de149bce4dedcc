use std::fmt;

use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

use crate::core::model::{FileRecord, HashAlgorithm};

/// Name of a selected hash, as recorded in pack metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashFormat {
    Sha1,
    Md5,
    Murmur2,
}

impl HashFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            HashFormat::Sha1 => "sha1",
            HashFormat::Md5 => "md5",
            HashFormat::Murmur2 => "murmur2",
        }
    }

    fn rank(self) -> u8 {
        match self {
            HashFormat::Sha1 => 2,
            HashFormat::Md5 => 1,
            HashFormat::Murmur2 => 0,
        }
    }
}

impl fmt::Display for HashFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single hash a file is verified against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestHash {
    pub value: String,
    pub format: HashFormat,
}

impl BestHash {
    /// Check `bytes` against this hash.
    ///
    /// Returns `None` for murmur2, which needs the catalog's normalised
    /// fingerprinting and is computed outside this crate.
    pub fn verify(&self, bytes: &[u8]) -> Option<bool> {
        let actual = match self.format {
            HashFormat::Sha1 => hex::encode(Sha1::digest(bytes)),
            HashFormat::Md5 => hex::encode(Md5::digest(bytes)),
            HashFormat::Murmur2 => return None,
        };
        Some(actual.eq_ignore_ascii_case(self.value.trim()))
    }
}

/// Pick the most trustworthy hash for `file`: SHA-1, then MD5, then the
/// murmur2 fingerprint. Among equal algorithms the first reported wins.
pub fn best_hash(file: &FileRecord) -> BestHash {
    let mut best = BestHash {
        value: file.package_fingerprint.to_string(),
        format: HashFormat::Murmur2,
    };

    for hash in &file.hashes {
        let format = match hash.algorithm {
            HashAlgorithm::Sha1 => HashFormat::Sha1,
            HashAlgorithm::Md5 => HashFormat::Md5,
            HashAlgorithm::Other(_) => continue,
        };
        if format.rank() > best.format.rank() {
            best = BestHash {
                value: hash.value.clone(),
                format,
            };
        }
    }

    best
}

impl FileRecord {
    pub fn best_hash(&self) -> BestHash {
        best_hash(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::file::fixtures::JEI_FILE;
    use crate::core::model::FileHash;

    fn file_with(hashes: &[(u32, &str)]) -> FileRecord {
        let mut file: FileRecord = serde_json::from_str(JEI_FILE).unwrap();
        file.hashes = hashes
            .iter()
            .map(|(algo, value)| FileHash {
                value: value.to_string(),
                algorithm: HashAlgorithm::from(*algo),
            })
            .collect();
        file
    }

    #[test]
    fn sha1_beats_md5_regardless_of_order() {
        for hashes in [
            vec![(2, "md5value"), (1, "sha1value")],
            vec![(1, "sha1value"), (2, "md5value")],
        ] {
            let best = file_with(&hashes).best_hash();
            assert_eq!(best.value, "sha1value");
            assert_eq!(best.format.as_str(), "sha1");
        }
    }

    #[test]
    fn md5_alone_is_used() {
        let best = file_with(&[(2, "md5value")]).best_hash();
        assert_eq!(best.value, "md5value");
        assert_eq!(best.format.as_str(), "md5");
    }

    #[test]
    fn fingerprint_is_the_fallback() {
        let best = file_with(&[]).best_hash();
        assert_eq!(best.value, "3089143260");
        assert_eq!(best.format.as_str(), "murmur2");

        let best = file_with(&[(7, "mystery")]).best_hash();
        assert_eq!(best.format, HashFormat::Murmur2);
    }

    #[test]
    fn first_of_duplicate_algorithm_wins() {
        let best = file_with(&[(1, "first"), (2, "md5value"), (1, "second")]).best_hash();
        assert_eq!(best.value, "first");
    }

    #[test]
    fn verify_checks_content() {
        let sha1 = BestHash {
            value: "A9993E364706816ABA3E25717850C26C9CD0D89D".into(),
            format: HashFormat::Sha1,
        };
        assert_eq!(sha1.verify(b"abc"), Some(true));
        assert_eq!(sha1.verify(b"abd"), Some(false));

        let md5 = BestHash {
            value: "900150983cd24fb0d6963f7d28e17f72".into(),
            format: HashFormat::Md5,
        };
        assert_eq!(md5.verify(b"abc"), Some(true));

        let murmur = BestHash {
            value: "12345".into(),
            format: HashFormat::Murmur2,
        };
        assert_eq!(murmur.verify(b"abc"), None);
    }
}
