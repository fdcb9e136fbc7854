use std::{mem, rc::Rc};

use codemap::SpanLoc;
use indexmap::IndexSet;

use crate::{
    ast::{AtRule, Declaration, Media, MixinDefinition, Ruleset},
    error::ExtendResult,
    serializer,
    visitor::{walk_ruleset, TreeVisitor, VisitArgs},
    Options,
};

use super::{extend_selector, find_match, ExtendFinder, ExtendIds, Extension};

/// Applies every `:extend()` in a tree to the selector paths of its rulesets.
///
/// A run first collects all extends, then resolves extends of extends, and
/// finally walks the tree once more, appending a new path to each ruleset for
/// every place an extend's selector matches one of its existing paths.
#[derive(Debug)]
pub struct ExtendProcessor<'a> {
    pub(super) options: &'a Options<'a>,
    pub(super) ids: ExtendIds,
    all_extends_stack: Vec<Vec<Rc<Extension>>>,

    /// `(index, selector)` of every extend already reported as unmatched
    extend_indices: IndexSet<(usize, String)>,
}

impl<'a> ExtendProcessor<'a> {
    pub fn new(options: &'a Options<'a>) -> Self {
        Self {
            options,
            ids: ExtendIds::new(),
            all_extends_stack: Vec::new(),
            extend_indices: IndexSet::new(),
        }
    }

    pub fn run(&mut self, root: &mut Ruleset) -> ExtendResult<()> {
        self.extend_indices.clear();

        let mut finder = ExtendFinder::new(&mut self.ids);
        finder.run(root)?;

        if !finder.found_extends() {
            return Ok(());
        }

        let root_extends = mem::take(&mut root.all_extends);
        let chained = self.do_extend_chaining(&root_extends, &root_extends, 0)?;

        let mut all_extends = root_extends;
        all_extends.extend(chained);

        self.all_extends_stack = vec![all_extends.clone()];
        let result = walk_ruleset(self, root);
        self.all_extends_stack.clear();
        result?;

        self.check_extends_for_non_matched(&all_extends);

        Ok(())
    }

    /// Warns once about every extend written in the stylesheet that never
    /// matched anything. Extends produced by chaining are not reported.
    pub fn check_extends_for_non_matched(&mut self, extends: &[Rc<Extension>]) {
        for extend in extends {
            if extend.has_found_matches() || !extend.is_original() {
                continue;
            }

            let selector = serializer::selector_to_css(&extend.selector)
                .unwrap_or_else(|_| "_unknown_".to_owned());

            let message = format!("extend '{}' has no matches", selector);
            if self.extend_indices.insert((extend.index, selector)) {
                self.warn(extend.location(), &message);
            }
        }
    }

    /// The extends reported as unmatched so far, in the order they were
    /// reported
    pub fn warned_extends(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.extend_indices
            .iter()
            .map(|(index, selector)| (*index, selector.as_str()))
    }

    fn warn(&self, location: Option<SpanLoc>, message: &str) {
        if self.options.quiet {
            return;
        }

        self.options.logger.warn(location, message);
    }

    /// Makes `own` plus everything visible from the enclosing scope the
    /// active set of extends
    fn push_scope(&mut self, own: Vec<Rc<Extension>>) -> ExtendResult<()> {
        let mut all_extends = own.clone();
        if let Some(inherited) = self.all_extends_stack.last() {
            all_extends.extend(inherited.iter().cloned());
        }

        let chained = self.do_extend_chaining(&all_extends, &own, 0)?;
        all_extends.extend(chained);

        self.all_extends_stack.push(all_extends);

        Ok(())
    }

    fn pop_scope(&mut self) {
        self.all_extends_stack.pop();
    }
}

impl TreeVisitor for ExtendProcessor<'_> {
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
        // extends declared with `&:extend()` were already applied while chaining
        if ruleset.root || ruleset.extend_on_every_path {
            return Ok(());
        }

        let Some(all_extends) = self.all_extends_stack.last() else {
            return Ok(());
        };

        let mut selectors_to_add = Vec::new();

        {
            let paths = ruleset.paths.borrow();

            for extend in all_extends {
                for selector_path in paths.iter() {
                    // paths with their own extends were handled while chaining
                    if selector_path
                        .last()
                        .map_or(false, |selector| !selector.extend_list.is_empty())
                    {
                        continue;
                    }

                    let matches = find_match(extend, selector_path);
                    if matches.is_empty() {
                        continue;
                    }

                    extend.mark_matched();

                    for self_selector in extend.self_selectors.iter().filter(|sel| !sel.is_empty()) {
                        selectors_to_add.push(extend_selector(
                            &matches,
                            selector_path,
                            self_selector,
                            true,
                        ));
                    }
                }
            }
        }

        ruleset.paths.extend(selectors_to_add);

        Ok(())
    }

    fn visit_media(&mut self, media: &mut Media, _: &mut VisitArgs) -> ExtendResult<()> {
        self.push_scope(mem::take(&mut media.all_extends))
    }

    fn visit_media_out(&mut self, _: &mut Media) -> ExtendResult<()> {
        self.pop_scope();
        Ok(())
    }

    fn visit_at_rule(&mut self, at_rule: &mut AtRule, _: &mut VisitArgs) -> ExtendResult<()> {
        self.push_scope(mem::take(&mut at_rule.all_extends))
    }

    fn visit_at_rule_out(&mut self, _: &mut AtRule) -> ExtendResult<()> {
        self.pop_scope();
        Ok(())
    }
}
