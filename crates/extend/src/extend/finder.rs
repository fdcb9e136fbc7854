use std::{mem, rc::Rc};

use crate::{
    ast::{AtRule, Declaration, ExtendRule, Media, MixinDefinition, Ruleset, Stmt},
    error::ExtendResult,
    visitor::{walk_ruleset, TreeVisitor, VisitArgs},
};

use super::{ExtendIds, Extension};

/// Collects every `:extend()` in the tree.
///
/// Extends found inside `@media` or another at-rule belong to that at-rule;
/// all others belong to the root.
#[derive(Debug)]
pub struct ExtendFinder<'a> {
    ids: &'a mut ExtendIds,
    all_extends_stack: Vec<Vec<Rc<Extension>>>,
    found_extends: bool,
}

impl<'a> ExtendFinder<'a> {
    pub fn new(ids: &'a mut ExtendIds) -> Self {
        Self {
            ids,
            all_extends_stack: vec![Vec::new()],
            found_extends: false,
        }
    }

    /// Whether the last run found any extend at all
    pub fn found_extends(&self) -> bool {
        self.found_extends
    }

    pub fn run(&mut self, root: &mut Ruleset) -> ExtendResult<()> {
        walk_ruleset(self, root)?;

        if let Some(root_extends) = self.all_extends_stack.first_mut() {
            root.all_extends = mem::take(root_extends);
        }

        Ok(())
    }

    fn push_scope(&mut self) {
        self.all_extends_stack.push(Vec::new());
    }

    fn pop_scope(&mut self) -> Vec<Rc<Extension>> {
        // the root scope is never popped
        if self.all_extends_stack.len() > 1 {
            self.all_extends_stack.pop().unwrap_or_default()
        } else {
            Vec::new()
        }
    }
}

impl TreeVisitor for ExtendFinder<'_> {
    fn visit_declaration(&mut self, _: &mut Declaration, args: &mut VisitArgs) -> ExtendResult<()> {
        args.visit_deeper = false;
        Ok(())
    }

    fn visit_mixin_definition(
        &mut self,
        _: &mut MixinDefinition,
        args: &mut VisitArgs,
    ) -> ExtendResult<()> {
        args.visit_deeper = false;
        Ok(())
    }

    fn visit_ruleset(&mut self, ruleset: &mut Ruleset, _: &mut VisitArgs) -> ExtendResult<()> {
        if ruleset.root {
            return Ok(());
        }

        // `&:extend(.a);` applies to every selector of the ruleset
        let all_selectors_extend_list: Vec<&ExtendRule> = ruleset
            .rules
            .iter()
            .filter_map(|rule| match rule {
                Stmt::Extend(extend) => Some(extend),
                _ => None,
            })
            .collect();

        if !all_selectors_extend_list.is_empty() {
            ruleset.extend_on_every_path = true;
        }

        let paths = ruleset.paths.borrow();

        for selector_path in paths.iter() {
            let Some(selector) = selector_path.last() else {
                continue;
            };

            let extend_list = selector
                .extend_list
                .iter()
                .chain(all_selectors_extend_list.iter().copied());

            for (j, rule) in extend_list.enumerate() {
                self.found_extends = true;

                let mut extension = Extension::from_rule(rule, self.ids);
                extension.find_self_selectors(selector_path);
                extension.ruleset = Some(ruleset.paths.share());
                extension.first_extend_on_this_selector_path = j == 0;

                if let Some(scope) = self.all_extends_stack.last_mut() {
                    scope.push(Rc::new(extension));
                }
            }
        }

        Ok(())
    }

    fn visit_media(&mut self, media: &mut Media, _: &mut VisitArgs) -> ExtendResult<()> {
        media.all_extends = Vec::new();
        self.push_scope();
        Ok(())
    }

    fn visit_media_out(&mut self, media: &mut Media) -> ExtendResult<()> {
        media.all_extends = self.pop_scope();
        Ok(())
    }

    fn visit_at_rule(&mut self, at_rule: &mut AtRule, _: &mut VisitArgs) -> ExtendResult<()> {
        at_rule.all_extends = Vec::new();
        self.push_scope();
        Ok(())
    }

    fn visit_at_rule_out(&mut self, at_rule: &mut AtRule) -> ExtendResult<()> {
        at_rule.all_extends = self.pop_scope();
        Ok(())
    }
}
