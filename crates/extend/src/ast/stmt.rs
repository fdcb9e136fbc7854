use std::rc::Rc;

use crate::extend::{Extension, RulesetPaths};

use super::{FileInfo, Selector, SelectorPath, Visibility};

/// An `:extend()` as written in the stylesheet, either attached to a selector
/// (`.a:extend(.b) {}`) or as a rule of its own (`&:extend(.b);`)
#[derive(Clone, Debug, PartialEq)]
pub struct ExtendRule {
    pub selector: Selector,

    /// The raw modifier, e.g. `all`
    pub option: String,
    pub index: usize,
    pub file_info: Option<FileInfo>,
    pub visibility: Visibility,
}

impl ExtendRule {
    pub fn new(selector: Selector, option: impl Into<String>, index: usize) -> Self {
        Self {
            selector,
            option: option.into(),
            index,
            file_info: None,
            visibility: Visibility::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Ruleset {
    pub selectors: Vec<Selector>,
    pub rules: Vec<Stmt>,

    /// Resolved selector paths, shared with any extends that target this ruleset
    pub paths: RulesetPaths,
    pub root: bool,

    /// Set when the body contains a bare `&:extend()` that applies to every
    /// selector of this ruleset
    pub extend_on_every_path: bool,

    /// Extends discovered in this scope. Only used on the root.
    pub all_extends: Vec<Rc<Extension>>,
}

impl Ruleset {
    /// A top-level ruleset whose paths are its own selectors
    pub fn new(selectors: Vec<Selector>, rules: Vec<Stmt>) -> Self {
        let paths = selectors
            .iter()
            .map(|selector| vec![selector.clone()])
            .collect();

        Self::with_paths(selectors, rules, paths)
    }

    pub fn with_paths(selectors: Vec<Selector>, rules: Vec<Stmt>, paths: Vec<SelectorPath>) -> Self {
        Self {
            selectors,
            rules,
            paths: RulesetPaths::new(paths),
            root: false,
            extend_on_every_path: false,
            all_extends: Vec::new(),
        }
    }

    pub fn root(rules: Vec<Stmt>) -> Self {
        Self {
            root: true,
            ..Self::with_paths(Vec::new(), rules, Vec::new())
        }
    }
}

#[derive(Clone, Debug)]
pub struct Media {
    pub features: String,
    pub rules: Vec<Stmt>,
    pub all_extends: Vec<Rc<Extension>>,
    pub visibility: Visibility,
}

impl Media {
    pub fn new(features: impl Into<String>, rules: Vec<Stmt>) -> Self {
        Self {
            features: features.into(),
            rules,
            all_extends: Vec::new(),
            visibility: Visibility::default(),
        }
    }
}

/// Any at-rule other than `@media`, e.g. `@supports` or `@document`
#[derive(Clone, Debug)]
pub struct AtRule {
    pub name: String,
    pub value: Option<String>,
    pub rules: Vec<Stmt>,
    pub all_extends: Vec<Rc<Extension>>,
    pub visibility: Visibility,
}

impl AtRule {
    pub fn new(name: impl Into<String>, value: Option<String>, rules: Vec<Stmt>) -> Self {
        Self {
            name: name.into(),
            value,
            rules,
            all_extends: Vec::new(),
            visibility: Visibility::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
}

/// A mixin body is only a template, so nothing inside it is ever extended
#[derive(Clone, Debug)]
pub struct MixinDefinition {
    pub name: String,
    pub params: Vec<String>,
    pub rules: Vec<Stmt>,
}

#[derive(Clone, Debug)]
pub enum Stmt {
    Ruleset(Ruleset),
    Media(Media),
    AtRule(AtRule),
    Declaration(Declaration),
    MixinDefinition(MixinDefinition),
    Extend(ExtendRule),
    Comment(String),
}

impl Stmt {
    pub fn declaration(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Declaration(Declaration {
            name: name.into(),
            value: value.into(),
        })
    }
}
