use std::cell::Cell;

use codemap::SpanLoc;

use crate::ast::{ExtendRule, FileInfo, Selector, Visibility};

use super::RulesetPaths;

/// Identifies one extend for the lifetime of a single resolution run
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExtendId(u32);

/// Hands out monotonically increasing [`ExtendId`]s
#[derive(Debug, Default)]
pub struct ExtendIds {
    next: u32,
}

impl ExtendIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> ExtendId {
        let id = ExtendId(self.next);
        self.next += 1;
        id
    }
}

/// An `:extend()` relationship bound to the selectors that declared it
///
/// Extensions are created either by cloning an [`ExtendRule`] found in the
/// tree, or by chaining two existing extensions together. Once created, the
/// only thing that changes is whether it has matched anything.
#[derive(Debug)]
pub struct Extension {
    /// The selector being searched for
    pub selector: Selector,
    pub option: String,
    pub allow_before: bool,
    pub allow_after: bool,
    pub object_id: ExtendId,

    /// This extension's own id followed by the ids of every extension it was
    /// derived from
    pub parent_ids: Vec<ExtendId>,

    /// The replacement for each match
    pub self_selectors: Vec<Selector>,
    pub first_extend_on_this_selector_path: bool,

    /// The ruleset that receives selectors created by chaining
    pub ruleset: Option<RulesetPaths>,
    pub index: usize,
    pub file_info: Option<FileInfo>,
    pub visibility: Visibility,
    has_found_matches: Cell<bool>,
}

impl Extension {
    pub fn new(
        selector: Selector,
        option: impl Into<String>,
        index: usize,
        file_info: Option<FileInfo>,
        visibility: Visibility,
        ids: &mut ExtendIds,
    ) -> Self {
        let option = option.into();
        let matches_anywhere = matches!(option.as_str(), "all" | "!all");
        let object_id = ids.next_id();

        Self {
            selector,
            option,
            allow_before: matches_anywhere,
            allow_after: matches_anywhere,
            object_id,
            parent_ids: vec![object_id],
            self_selectors: Vec::new(),
            first_extend_on_this_selector_path: false,
            ruleset: None,
            index,
            file_info,
            visibility,
            has_found_matches: Cell::new(false),
        }
    }

    pub fn from_rule(rule: &ExtendRule, ids: &mut ExtendIds) -> Self {
        Self::new(
            rule.selector.clone(),
            rule.option.clone(),
            rule.index,
            rule.file_info.clone(),
            rule.visibility,
            ids,
        )
    }

    /// The declaration this extension would have been parsed from
    pub fn to_rule(&self) -> ExtendRule {
        ExtendRule {
            selector: self.selector.clone(),
            option: self.option.clone(),
            index: self.index,
            file_info: self.file_info.clone(),
            visibility: self.visibility,
        }
    }

    pub fn has_found_matches(&self) -> bool {
        self.has_found_matches.get()
    }

    pub fn mark_matched(&self) {
        self.has_found_matches.set(true);
    }

    /// Whether this extension was written in the stylesheet, as opposed to
    /// being produced by chaining
    pub fn is_original(&self) -> bool {
        self.parent_ids.len() == 1
    }

    pub fn location(&self) -> Option<SpanLoc> {
        self.file_info
            .as_ref()
            .map(|file_info| file_info.location(self.index))
    }

    /// Binds this extension to the selector path that declared it.
    ///
    /// The selectors of the path are flattened into one selector. Each nested
    /// selector is separated from its parent by at least a descendant
    /// combinator.
    pub fn find_self_selectors(&mut self, path: &[Selector]) {
        let mut elements = Vec::new();

        for (i, selector) in path.iter().enumerate() {
            let mut selector_elements = selector.elements.iter();

            if i > 0 {
                if let Some(first) = selector_elements.next() {
                    elements.push(first.with_combinator(first.combinator.or_descendant()));
                }
            }

            elements.extend(selector_elements.cloned());
        }

        let mut self_selector = Selector::new(elements);
        self_selector.index = self.index;
        self_selector.file_info = self.file_info.clone();
        self_selector.visibility = self.visibility;

        self.self_selectors = vec![self_selector];
    }
}

#[cfg(test)]
mod test {
    use crate::ast::{Combinator, Element, Selector, Visibility};

    use super::{ExtendIds, Extension};

    fn class(combinator: Combinator, name: &str) -> Element {
        Element::keyword(combinator, name)
    }

    #[test]
    fn all_option_allows_partial_matches() {
        let mut ids = ExtendIds::new();
        for option in ["all", "!all"] {
            let extension =
                Extension::new(Selector::default(), option, 0, None, Visibility::default(), &mut ids);
            assert!(extension.allow_before && extension.allow_after);
        }

        let extension =
            Extension::new(Selector::default(), "", 0, None, Visibility::default(), &mut ids);
        assert!(!extension.allow_before && !extension.allow_after);
    }

    #[test]
    fn fresh_extensions_are_their_own_parent() {
        let mut ids = ExtendIds::new();
        let a = Extension::new(Selector::default(), "", 0, None, Visibility::default(), &mut ids);
        let b = Extension::new(Selector::default(), "", 0, None, Visibility::default(), &mut ids);

        assert_ne!(a.object_id, b.object_id);
        assert_eq!(a.parent_ids, vec![a.object_id]);
        assert!(a.is_original());
    }

    #[test]
    fn self_selectors_flatten_the_path() {
        let mut ids = ExtendIds::new();
        let mut extension =
            Extension::new(Selector::default(), "", 0, None, Visibility::default(), &mut ids);

        let path = vec![
            Selector::new(vec![class(Combinator::None, ".a")]),
            Selector::new(vec![
                class(Combinator::None, ".b"),
                class(Combinator::None, ".c"),
            ]),
            Selector::new(vec![class(Combinator::Child, ".d")]),
        ];
        extension.find_self_selectors(&path);

        assert_eq!(extension.self_selectors.len(), 1);
        let combinators: Vec<Combinator> = extension.self_selectors[0]
            .elements
            .iter()
            .map(|el| el.combinator)
            .collect();
        assert_eq!(
            combinators,
            vec![
                Combinator::None,
                Combinator::Descendant,
                Combinator::None,
                Combinator::Child
            ]
        );

        // the tree itself is left alone
        assert_eq!(path[1].elements[0].combinator, Combinator::None);
    }
}
