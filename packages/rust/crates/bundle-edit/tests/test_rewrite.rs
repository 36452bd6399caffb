//! Tests for the public rewrite pipeline: escape -> identity -> disabled.

use bundle_edit::{
    DISABLED_ATTRIBUTE, ROOT_ELEMENT_TOKEN, canonical_name, escape, mark_disabled,
    rewrite_identity,
};

const ADMIN_DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Bundle displayName="Admin" name="Admin" type="ROLE">
  <Permissions>
    <Permission id="read"/>
  </Permissions>
</Bundle>
"#;

#[test]
fn test_escaped_name_in_identity() {
    let rewrite = rewrite_identity(ADMIN_DOC, &escape("Ops <Lead> & 'Co'"));

    assert_eq!(rewrite.count, 1);
    assert!(rewrite.modified.contains(
        r#"displayName="Ops &lt;Lead&gt; &amp; &apos;Co&apos;" name="Ops &lt;Lead&gt; &amp; &apos;Co&apos;""#
    ));
}

#[test]
fn test_rewrite_touches_only_identity_values() {
    let rewrite = rewrite_identity(ADMIN_DOC, "SuperAdmin");
    let expected = ADMIN_DOC.replace(
        r#"displayName="Admin" name="Admin""#,
        r#"displayName="SuperAdmin" name="SuperAdmin""#,
    );
    assert_eq!(rewrite.modified, expected);
}

#[test]
fn test_disabled_copy_keeps_identity() {
    let rewrite = mark_disabled(ADMIN_DOC);

    assert!(rewrite.matched());
    assert!(rewrite.modified.contains(&format!(
        "{ROOT_ELEMENT_TOKEN} {DISABLED_ATTRIBUTE}displayName=\"Admin\" name=\"Admin\""
    )));
    assert_eq!(rewrite.modified.len(), ADMIN_DOC.len() + DISABLED_ATTRIBUTE.len());
}

#[test]
fn test_rewrite_without_root_token_is_unchanged() {
    let doc = "<Role name=\"x\"/>";
    let rewrite = mark_disabled(doc);
    assert!(!rewrite.matched());
    assert_eq!(rewrite.modified, doc);
}

#[test]
fn test_canonical_name_matches_artifact_alphabet() {
    for name in ["Admin", "Super Admin", "R&D", "a/b\\c", "x.y:z"] {
        let file = canonical_name(name);
        assert!(file.starts_with("NAB_Bundle_"));
        assert!(file.ends_with(".xml"));
        let stem = &file["NAB_Bundle_".len()..file.len() - ".xml".len()];
        assert!(!stem.is_empty());
        assert!(
            stem.bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
        );
    }
}
