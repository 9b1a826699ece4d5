//! Volume naming for volume-backed caches
//!
//! A volume cache without an explicit name gets a name derived from the
//! image being built, so repeated builds of the same image share a cache.
//! Nothing here creates or inspects volumes.

use crate::cache::spec::{CacheFormat, CacheRole, CacheSpec};
use sha2::{Digest, Sha256};

/// Prefix of every derived cache volume name
pub const VOLUME_PREFIX: &str = "pack-cache";

/// Number of digest bytes kept in derived names
const DIGEST_BYTES: usize = 6;

/// Derive the default volume name for an image and role.
///
/// Format: `pack-cache-{sanitized ref}-{digest}.{role}`
pub fn default_volume_name(image_ref: &str, role: CacheRole) -> String {
    let digest = Sha256::digest(image_ref.as_bytes());
    format!(
        "{}-{}-{}.{}",
        VOLUME_PREFIX,
        sanitize_ref(image_ref),
        hex::encode(&digest[..DIGEST_BYTES]),
        role
    )
}

/// Replace characters that are not valid in volume names
fn sanitize_ref(image_ref: &str) -> String {
    image_ref
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

impl CacheSpec {
    /// Volume this spec resolves to for the given image, if volume-backed
    pub fn volume_name(&self, role: CacheRole, image_ref: &str) -> Option<String> {
        match self.format {
            CacheFormat::Volume if self.name.is_empty() => {
                Some(default_volume_name(image_ref, role))
            }
            CacheFormat::Volume => Some(self.name.clone()),
            CacheFormat::Image => None,
        }
    }
}
