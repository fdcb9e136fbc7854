use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};

use crate::ast::SelectorPath;

/// The selector paths of a ruleset
///
/// Extends hold a second handle to the paths of the ruleset that declared
/// them, obtained through [`RulesetPaths::share`], so that chaining can append
/// paths to a ruleset it isn't currently visiting. Paths are only ever
/// appended.
///
/// Cloning copies the paths. A cloned tree never observes extends resolved in
/// the tree it was cloned from.
#[derive(Debug, Default)]
pub struct RulesetPaths(Rc<RefCell<Vec<SelectorPath>>>);

impl Clone for RulesetPaths {
    fn clone(&self) -> Self {
        Self::new(self.0.borrow().clone())
    }
}

impl PartialEq for RulesetPaths {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for RulesetPaths {}

impl RulesetPaths {
    pub fn new(paths: Vec<SelectorPath>) -> Self {
        Self(Rc::new(RefCell::new(paths)))
    }

    /// A second handle to the same paths
    pub fn share(&self) -> Self {
        Self(Rc::clone(&self.0))
    }

    pub fn borrow(&self) -> Ref<'_, Vec<SelectorPath>> {
        self.0.borrow()
    }

    pub fn push(&self, path: SelectorPath) {
        self.0.borrow_mut().push(path);
    }

    pub fn extend(&self, paths: impl IntoIterator<Item = SelectorPath>) {
        self.0.borrow_mut().extend(paths);
    }
}
