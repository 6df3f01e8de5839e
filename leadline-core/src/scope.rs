// Copyright 2026 the Leadline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-pair scope identifiers for generated style rules.
//!
//! Every pointing injects keyframe and pointer rules into the document. Two
//! pointings running concurrently between different element pairs must never
//! share rule names, while repeated pointings between the *same* pair must
//! reuse the same scope (and therefore the same rules). Both properties
//! follow from deriving the identifier purely from the pair's structural
//! identity, with no randomness and no counters.
//!
//! A structural path is the chain of [`NodeIdentity`] steps from the
//! document root down to the element; the document node itself contributes
//! no identity text. The host walks the ancestor chain and hands the path
//! over as data.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Separator between the source path and the target path.
///
/// Two hyphens cannot be produced by [`scope_id`]'s single-hyphen filler
/// substitution, so distinct source/target splits cannot alias each other.
const PAIR_SEPARATOR: &str = "--";

/// One ancestor step of a structural path: the element's tag, plus its id
/// when present, else its class list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeIdentity {
    /// Tag name (any case; identifiers are lower-cased as a whole).
    pub tag: String,
    /// The `id` attribute, when present and non-empty.
    pub id: Option<String>,
    /// Class list, consulted only when `id` is absent.
    pub classes: Vec<String>,
}

impl NodeIdentity {
    /// Creates an identity with neither id nor classes.
    #[must_use]
    pub fn tag(tag: &str) -> Self {
        Self {
            tag: String::from(tag),
            id: None,
            classes: Vec::new(),
        }
    }

    /// Creates an identity carrying an id.
    #[must_use]
    pub fn with_id(tag: &str, id: &str) -> Self {
        Self {
            tag: String::from(tag),
            id: Some(String::from(id)),
            classes: Vec::new(),
        }
    }

    /// Creates an identity carrying a class list.
    #[must_use]
    pub fn with_classes(tag: &str, classes: &[&str]) -> Self {
        Self {
            tag: String::from(tag),
            id: None,
            classes: classes.iter().map(|c| String::from(*c)).collect(),
        }
    }

    /// Writes this step's identity text: `tag`, then `#id` when present,
    /// else `.class` per class.
    fn write_identity(&self, out: &mut String) {
        out.push_str(&self.tag);
        match &self.id {
            Some(id) => {
                out.push('#');
                out.push_str(id);
            }
            None => {
                for class in &self.classes {
                    out.push('.');
                    out.push_str(class);
                }
            }
        }
    }
}

impl fmt::Display for NodeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = String::new();
        self.write_identity(&mut text);
        f.write_str(&text)
    }
}

/// Derives the scope identifier for a (source, target) structural pair.
///
/// Each path's steps are joined root-to-leaf with the descendant combinator
/// `>`, the two paths are concatenated with the `--` pair separator, the
/// result is lower-cased, and every character unsafe in an identifier
/// (`#`, `.`, `>`, whitespace) is substituted with a single `-` filler.
///
/// Deterministic: the identical pair always yields the identical
/// identifier. Distinct pairs yield distinct identifiers except by genuine
/// coincidence of structure.
#[must_use]
pub fn scope_id(source_path: &[NodeIdentity], target_path: &[NodeIdentity]) -> String {
    let mut raw = String::new();
    write_path(source_path, &mut raw);
    raw.push_str(PAIR_SEPARATOR);
    write_path(target_path, &mut raw);

    let mut id = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '#' | '.' | '>' => id.push('-'),
            c if c.is_whitespace() => id.push('-'),
            c => id.extend(c.to_lowercase()),
        }
    }
    id
}

fn write_path(path: &[NodeIdentity], out: &mut String) {
    for (i, step) in path.iter().enumerate() {
        if i > 0 {
            out.push('>');
        }
        step.write_identity(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample_pair() -> (Vec<NodeIdentity>, Vec<NodeIdentity>) {
        let source = vec![
            NodeIdentity::tag("html"),
            NodeIdentity::tag("body"),
            NodeIdentity::with_id("div", "menu"),
            NodeIdentity::with_classes("span", &["item", "active"]),
        ];
        let target = vec![
            NodeIdentity::tag("html"),
            NodeIdentity::tag("body"),
            NodeIdentity::with_id("div", "content"),
        ];
        (source, target)
    }

    #[test]
    fn identical_pair_is_deterministic() {
        let (source, target) = sample_pair();
        assert_eq!(
            scope_id(&source, &target),
            scope_id(&source, &target),
            "same pair must reuse the same scope"
        );
    }

    #[test]
    fn distinct_pairs_get_distinct_scopes() {
        let (source, target) = sample_pair();
        let other_source = vec![
            NodeIdentity::tag("html"),
            NodeIdentity::tag("body"),
            NodeIdentity::with_id("div", "sidebar"),
        ];
        assert_ne!(scope_id(&source, &target), scope_id(&other_source, &target));
    }

    #[test]
    fn swapped_roles_get_distinct_scopes() {
        let (source, target) = sample_pair();
        assert_ne!(scope_id(&source, &target), scope_id(&target, &source));
    }

    #[test]
    fn shifted_pair_boundary_cannot_alias() {
        // source a>b / target c versus source a / target b>c: a shared
        // single-char separator would collapse both to a-b-c.
        let a = vec![NodeIdentity::tag("a"), NodeIdentity::tag("b")];
        let b = vec![NodeIdentity::tag("c")];
        let c = vec![NodeIdentity::tag("a")];
        let d = vec![NodeIdentity::tag("b"), NodeIdentity::tag("c")];
        assert_ne!(scope_id(&a, &b), scope_id(&c, &d));
    }

    #[test]
    fn identifier_is_lower_cased_and_substituted() {
        let source = vec![NodeIdentity::with_id("DIV", "Menu")];
        let target = vec![NodeIdentity::with_classes("span", &["A", "b"])];
        assert_eq!(scope_id(&source, &target), "div-menu--span-a-b");
    }

    #[test]
    fn id_wins_over_classes() {
        let mut step = NodeIdentity::with_classes("div", &["x"]);
        step.id = Some(String::from("y"));
        let id = scope_id(&[step], &[NodeIdentity::tag("p")]);
        assert_eq!(id, "div-y--p", "classes are ignored when an id exists");
    }
}
