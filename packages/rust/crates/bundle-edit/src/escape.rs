//! Escaping of role names for embedding in attribute values.

/// Substitutions applied in order. `&` must stay first so the ampersands
/// introduced by later entries are not escaped again.
const ENTITIES: [(char, &str); 5] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&apos;"),
];

/// Escape `text` for use inside a double-quoted attribute value.
///
/// Existing entity references are not recognised: `&amp;` becomes `&amp;amp;`.
#[must_use]
pub fn escape(text: &str) -> String {
    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(*from, to))
}
