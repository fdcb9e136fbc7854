use crate::ast::{Combinator, ElementValue, Selector};

use super::Extension;

/// One place an extension's selector was found inside a selector path
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExtendMatch {
    /// The selector of the path the match starts in
    pub path_index: usize,

    /// The element the match starts at
    pub index: usize,

    /// The selector of the path the match ends in
    pub end_path_index: usize,

    /// The element just past the end of the match
    pub end_path_element_index: usize,

    /// The number of elements matched
    pub length: usize,

    /// The combinator in front of the first matched element. It is kept in
    /// front of the replacement.
    pub initial_combinator: Combinator,
}

#[derive(Debug)]
struct PotentialMatch {
    path_index: usize,
    index: usize,
    matched: usize,
    initial_combinator: Combinator,
}

/// Finds every place `extension.selector` occurs in `haystack`.
///
/// A match may cross from one selector of the path into the next. Matches
/// never overlap and are returned in the order they appear.
pub fn find_match(extension: &Extension, haystack: &[Selector]) -> Vec<ExtendMatch> {
    let needle = &extension.selector.elements;
    let mut potential_matches: Vec<PotentialMatch> = Vec::new();
    let mut matches = Vec::new();

    if needle.is_empty() {
        return matches;
    }

    for (path_index, selector) in haystack.iter().enumerate() {
        for (element_index, element) in selector.elements.iter().enumerate() {
            // without `all`, a match may only start at the very first element
            if extension.allow_before || (path_index == 0 && element_index == 0) {
                potential_matches.push(PotentialMatch {
                    path_index,
                    index: element_index,
                    matched: 0,
                    initial_combinator: element.combinator,
                });
            }

            // each nested selector is joined to its parent by a space once
            // the path is flattened
            let target_combinator = if element_index == 0 {
                element.combinator.or_descendant()
            } else {
                element.combinator
            };

            let mut i = 0;
            while i < potential_matches.len() {
                let potential = &mut potential_matches[i];
                let needle_element = &needle[potential.matched];

                let mut is_valid = element_values_equal(&needle_element.value, &element.value)
                    && (potential.matched == 0 || needle_element.combinator == target_combinator);

                let mut is_finished = false;
                if is_valid {
                    potential.matched += 1;
                    is_finished = potential.matched == needle.len();

                    let has_trailing_elements = element_index + 1 < selector.elements.len()
                        || path_index + 1 < haystack.len();
                    if is_finished && !extension.allow_after && has_trailing_elements {
                        is_valid = false;
                    }
                }

                if !is_valid {
                    potential_matches.remove(i);
                    continue;
                }

                if is_finished {
                    matches.push(ExtendMatch {
                        path_index: potential.path_index,
                        index: potential.index,
                        end_path_index: path_index,
                        end_path_element_index: element_index + 1,
                        length: needle.len(),
                        initial_combinator: potential.initial_combinator,
                    });
                    // matches may not overlap, so start looking again from scratch
                    potential_matches.clear();
                    break;
                }

                i += 1;
            }
        }
    }

    matches
}

/// Structural equality between two element values
pub fn element_values_equal(a: &ElementValue, b: &ElementValue) -> bool {
    match (a, b) {
        (ElementValue::Keyword(a), ElementValue::Keyword(b)) => a == b,
        (ElementValue::Attribute(a), ElementValue::Attribute(b)) => {
            if a.op != b.op || a.key != b.key {
                return false;
            }

            match (&a.value, &b.value) {
                (Some(a), Some(b)) => a.resolved() == b.resolved(),
                (None, None) => true,
                _ => false,
            }
        }
        (ElementValue::Selector(a), ElementValue::Selector(b)) => {
            if a.elements.len() != b.elements.len() {
                return false;
            }

            a.elements
                .iter()
                .zip(&b.elements)
                .enumerate()
                .all(|(i, (a, b))| {
                    let combinators_equal = if i == 0 {
                        a.combinator.or_descendant() == b.combinator.or_descendant()
                    } else {
                        a.combinator == b.combinator
                    };

                    combinators_equal && element_values_equal(&a.value, &b.value)
                })
        }
        _ => false,
    }
}
