//! Canonical file names for role artifacts.

/// Prefix shared by every role artifact file name.
pub const BUNDLE_FILE_PREFIX: &str = "NAB_Bundle_";

/// Extension of role artifact files (without the dot).
pub const BUNDLE_FILE_EXTENSION: &str = "xml";

/// Replace every character outside `[A-Za-z0-9_-]` with `_`.
///
/// Works per `char`, so a multi-byte character yields a single underscore.
#[must_use]
pub fn sanitize(role_name: &str) -> String {
    role_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Canonical artifact file name for a role: `NAB_Bundle_<sanitized>.xml`.
///
/// Many-to-one: `"Ops Admin"` and `"Ops/Admin"` both map to
/// `NAB_Bundle_Ops_Admin.xml`. Collisions are not detected here.
#[must_use]
pub fn canonical_name(role_name: &str) -> String {
    format!(
        "{BUNDLE_FILE_PREFIX}{}.{BUNDLE_FILE_EXTENSION}",
        sanitize(role_name)
    )
}
