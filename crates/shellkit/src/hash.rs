//! String hashing.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use md5::{Digest as _, Md5};
use ring::digest::{digest as ring_digest, SHA1_FOR_LEGACY_USE_ONLY, SHA256, SHA384, SHA512};
use shellkit_core::{DigestFormat, HashAlgorithm, HashResult};

/// Compute the raw digest of some bytes.
#[must_use]
pub fn digest(algorithm: HashAlgorithm, data: &[u8]) -> Vec<u8> {
    match algorithm {
        HashAlgorithm::Md5 => Md5::digest(data).to_vec(),
        HashAlgorithm::Sha1 => ring_digest(&SHA1_FOR_LEGACY_USE_ONLY, data).as_ref().to_vec(),
        HashAlgorithm::Sha256 => ring_digest(&SHA256, data).as_ref().to_vec(),
        HashAlgorithm::Sha384 => ring_digest(&SHA384, data).as_ref().to_vec(),
        HashAlgorithm::Sha512 => ring_digest(&SHA512, data).as_ref().to_vec(),
    }
}

/// Render a digest as text
#[must_use]
pub fn render(bytes: &[u8], format: DigestFormat) -> String {
    match format {
        DigestFormat::Hex => hex::encode(bytes),
        DigestFormat::Base64 => STANDARD.encode(bytes),
    }
}

/// Hash the UTF-8 bytes of a string.
#[must_use]
pub fn hash_string(input: &str, algorithm: HashAlgorithm, format: DigestFormat) -> HashResult {
    HashResult {
        algorithm,
        hash: render(&digest(algorithm, input.as_bytes()), format),
        input: input.to_string(),
    }
}
