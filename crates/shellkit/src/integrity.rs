//! Subresource-integrity (SRI) hashes for local files and remote URLs.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use shellkit_core::{HashAlgorithm, IntegrityRecord, Result, SriAlgorithm, ToolError};
use shellkit_net::Fetcher;
use std::path::Path;
use tracing::debug;

use crate::hash::digest;

const fn hash_algorithm(algorithm: SriAlgorithm) -> HashAlgorithm {
    match algorithm {
        SriAlgorithm::Sha256 => HashAlgorithm::Sha256,
        SriAlgorithm::Sha384 => HashAlgorithm::Sha384,
        SriAlgorithm::Sha512 => HashAlgorithm::Sha512,
    }
}

/// Build the integrity record for bytes that came from `source`.
#[must_use]
pub fn integrity_for_bytes(bytes: &[u8], algorithm: SriAlgorithm, source: &str) -> IntegrityRecord {
    let raw = digest(hash_algorithm(algorithm), bytes);
    let integrity = format!("{algorithm}-{}", STANDARD.encode(&raw));
    let tag = html_tag(source, &integrity);

    IntegrityRecord {
        algorithm,
        hash: hex::encode(&raw),
        source: source.to_string(),
        integrity,
        tag,
    }
}

/// Hash a local file.
pub fn integrity_for_file(path: &Path, algorithm: SriAlgorithm) -> Result<IntegrityRecord> {
    let bytes = std::fs::read(path).map_err(|e| ToolError::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "hashing local file");
    Ok(integrity_for_bytes(&bytes, algorithm, &path.display().to_string()))
}

/// Hash a local path or an http(s) URL.
pub async fn integrity_for_source(
    source: &str,
    algorithm: SriAlgorithm,
    fetcher: &Fetcher,
) -> Result<IntegrityRecord> {
    if Fetcher::is_remote(source) {
        let bytes = fetcher.get_bytes(source).await?;
        Ok(integrity_for_bytes(&bytes, algorithm, source))
    } else {
        integrity_for_file(Path::new(source), algorithm)
    }
}

/// HTML snippet referencing `source` with the integrity attribute.
///
/// Scripts get a `<script>` element and stylesheets a `<link>` element.
/// Anything else only gets the attributes to paste into a tag by hand.
#[must_use]
pub fn html_tag(source: &str, integrity: &str) -> String {
    let src = source.replace('\\', "/");
    let without_query = src.split(&['?', '#'][..]).next().unwrap_or(&src).to_ascii_lowercase();

    if without_query.ends_with(".js") || without_query.ends_with(".mjs") {
        format!(r#"<script src="{src}" integrity="{integrity}" crossorigin="anonymous"></script>"#)
    } else if without_query.ends_with(".css") {
        format!(r#"<link rel="stylesheet" href="{src}" integrity="{integrity}" crossorigin="anonymous">"#)
    } else {
        format!(r#"integrity="{integrity}" crossorigin="anonymous""#)
    }
}
