//! Stability and provenance policy for individual versions.
use crate::model::{KeyFlag, Version};

/// Keyword that marks a version as approved for the running architecture.
pub const STABLE_FLAG: KeyFlag = KeyFlag::ArchStable;

/// A version is stable when its local key flags carry `ARCHSTABLE`, or, with
/// no local flags at all, when its system key flags do.
///
/// Local flags reflect the user's keyword configuration and replace the
/// system flags outright when present, even if they drop the keyword.
pub fn is_stable(version: &Version) -> bool {
    match (&version.local_key_flags, &version.system_key_flags) {
        (Some(local), _) => local.contains(&STABLE_FLAG),
        (None, Some(system)) => system.contains(&STABLE_FLAG),
        (None, None) => false,
    }
}

/// Whether a version from the main tree is eligible to represent its package.
pub fn in_scope(version: &Version) -> bool {
    version.overlay().is_none() && is_stable(version)
}
