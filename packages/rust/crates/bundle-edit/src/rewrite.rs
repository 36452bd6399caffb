//! Identity rewrite and disabled marker.
//!
//! Both transforms are textual: they apply to every occurrence of their
//! pattern anywhere in the document, nested elements included.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::types::Rewrite;

/// Opening token of the root element that receives the disabled marker.
pub const ROOT_ELEMENT_TOKEN: &str = "<Bundle";

/// Attribute inserted by [`mark_disabled`], including its trailing space.
pub const DISABLED_ATTRIBUTE: &str = r#"disabled="true" "#;

/// `displayName="…"`, whitespace, `name="…"`, in that order.
static IDENTITY_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(displayName=")[^"]*(")(\s+)(name=")[^"]*(")"#)
        .unwrap_or_else(|err| panic!("invalid IDENTITY_PAIR regex: {err}"))
});

/// Root element token followed by at least one whitespace character.
static ROOT_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}\s+", regex::escape(ROOT_ELEMENT_TOKEN)))
        .unwrap_or_else(|err| panic!("invalid ROOT_OPEN regex: {err}"))
});

/// Replace both values of every `displayName`/`name` pair with `new_name_escaped`.
///
/// The value is inserted literally; callers escape it first with
/// [`crate::escape`]. Whitespace between the two attributes is preserved.
#[must_use]
pub fn rewrite_identity(content: &str, new_name_escaped: &str) -> Rewrite {
    let mut count = 0;
    let modified = IDENTITY_PAIR.replace_all(content, |caps: &Captures<'_>| {
        count += 1;
        format!(
            "{}{new_name_escaped}{}{}{}{new_name_escaped}{}",
            &caps[1], &caps[2], &caps[3], &caps[4], &caps[5]
        )
    });

    Rewrite {
        modified: modified.into_owned(),
        count,
    }
}

/// Insert `disabled="true" ` right after every `<Bundle` + whitespace.
///
/// An existing `disabled` attribute is left as is.
#[must_use]
pub fn mark_disabled(content: &str) -> Rewrite {
    let mut count = 0;
    let modified = ROOT_OPEN.replace_all(content, |caps: &Captures<'_>| {
        count += 1;
        format!("{}{DISABLED_ATTRIBUTE}", &caps[0])
    });

    Rewrite {
        modified: modified.into_owned(),
        count,
    }
}
