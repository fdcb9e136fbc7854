use std::{rc::Rc, slice};

use crate::{
    error::{ExtendError, ExtendResult},
    serializer,
};

use super::{extend_selector, find_match, ExtendProcessor, Extension, RulesetPaths};

impl ExtendProcessor<'_> {
    /// Resolves extends of extends.
    ///
    /// Given `.a:extend(.b) {}` and `.b:extend(.c) {}`, `.a` should end up
    /// extending `.c` as well. Every extend in `extends` is compared against
    /// the selectors that declared each extend in `targets`, and each match
    /// yields a new extend of the target's selector. New extends are fed back
    /// in until no more are produced.
    ///
    /// Returns only the newly created extends. Fails once a round past the
    /// configured limit still produces new extends.
    pub fn do_extend_chaining(
        &mut self,
        extends: &[Rc<Extension>],
        targets: &[Rc<Extension>],
        iteration: usize,
    ) -> ExtendResult<Vec<Rc<Extension>>> {
        let mut chained = Vec::new();
        let mut sources = extends.to_vec();
        let mut iteration = iteration;

        loop {
            let extends_to_add = self.chain_once(&sources, targets);

            if extends_to_add.is_empty() {
                break;
            }

            if iteration > self.options.chain_limit {
                return Err(circular_reference(&extends_to_add[0]));
            }

            chained.extend(extends_to_add.iter().cloned());
            sources = extends_to_add;
            iteration += 1;
        }

        Ok(chained)
    }

    fn chain_once(
        &mut self,
        extends: &[Rc<Extension>],
        targets: &[Rc<Extension>],
    ) -> Vec<Rc<Extension>> {
        let mut extends_to_add = Vec::new();

        for extend in extends {
            for target in targets {
                // already part of this chain
                if extend.parent_ids.contains(&target.object_id) {
                    continue;
                }

                let Some(target_self_selector) = target.self_selectors.first() else {
                    continue;
                };
                let selector_path = slice::from_ref(target_self_selector);

                let matches = find_match(extend, selector_path);
                if matches.is_empty() {
                    continue;
                }

                extend.mark_matched();

                for self_selector in extend.self_selectors.iter().filter(|sel| !sel.is_empty()) {
                    let mut new_selector =
                        extend_selector(&matches, selector_path, self_selector, true);

                    let mut new_extend = Extension::new(
                        target.selector.clone(),
                        target.option.clone(),
                        0,
                        target.file_info.clone(),
                        target.visibility,
                        &mut self.ids,
                    );
                    new_extend.ruleset = target.ruleset.as_ref().map(RulesetPaths::share);
                    new_extend.parent_ids.extend(&target.parent_ids);
                    new_extend.parent_ids.extend(&extend.parent_ids);

                    // the new path carries its own extend, which keeps the main
                    // pass from extending it a second time
                    if let Some(last) = new_selector.last_mut() {
                        last.extend_list = vec![new_extend.to_rule()];
                    }

                    // `:extend(.a, .b)` creates several extends for the same
                    // path, so only the first one adds the path
                    if target.first_extend_on_this_selector_path {
                        new_extend.first_extend_on_this_selector_path = true;
                        if let Some(ruleset) = &target.ruleset {
                            ruleset.push(new_selector.clone());
                        }
                    }

                    new_extend.self_selectors = new_selector;
                    extends_to_add.push(Rc::new(new_extend));
                }
            }
        }

        extends_to_add
    }
}

fn circular_reference(extend: &Extension) -> Box<ExtendError> {
    let selector = extend
        .self_selectors
        .first()
        .and_then(|selector| serializer::selector_to_css(selector).ok())
        .unwrap_or_else(|| "{unable to calculate}".to_owned());
    let target = serializer::selector_to_css(&extend.selector)
        .unwrap_or_else(|_| "{unable to calculate}".to_owned());

    ExtendError::circular(selector, target)
}
