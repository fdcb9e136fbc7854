use crate::ast::{Element, Selector, SelectorPath};

use super::ExtendMatch;

/// Builds a copy of `selector_path` with every match replaced by `replacement`.
///
/// The first replacement element takes over the combinator in front of the
/// match. Everything outside of the matches is kept as is. Every selector of
/// the result is a new node with its visibility forced to `is_visible`.
pub fn extend_selector(
    matches: &[ExtendMatch],
    selector_path: &[Selector],
    replacement: &Selector,
    is_visible: bool,
) -> SelectorPath {
    let mut current_path_index = 0;
    let mut current_element_index = 0;
    let mut path: SelectorPath = Vec::new();

    let Some((first_replacement, rest_replacement)) = replacement.elements.split_first() else {
        return derive_all(selector_path.to_vec(), is_visible);
    };

    for (match_index, m) in matches.iter().enumerate() {
        let Some(selector) = selector_path.get(m.path_index) else {
            continue;
        };

        let first_element: Element = first_replacement.with_combinator(m.initial_combinator);

        // the previous match ended partway through a selector that comes
        // before this one, so finish copying that selector first
        if m.path_index > current_path_index && current_element_index > 0 {
            if let Some(last) = path.last_mut() {
                last.elements
                    .extend(remaining(selector_path, current_path_index, current_element_index));
            }
            current_element_index = 0;
            current_path_index += 1;
        }

        let mut new_elements: Vec<Element> = selector
            .elements
            .get(current_element_index..m.index)
            .unwrap_or_default()
            .to_vec();
        new_elements.push(first_element);
        new_elements.extend(rest_replacement.iter().cloned());

        if current_path_index == m.path_index && match_index > 0 {
            if let Some(last) = path.last_mut() {
                last.elements.extend(new_elements);
            }
        } else {
            if m.path_index > current_path_index {
                path.extend(
                    selector_path[current_path_index..m.path_index]
                        .iter()
                        .cloned(),
                );
            }

            path.push(Selector::new(new_elements));
        }

        current_path_index = m.end_path_index;
        current_element_index = m.end_path_element_index;

        if let Some(current) = selector_path.get(current_path_index) {
            if current_element_index >= current.elements.len() {
                current_element_index = 0;
                current_path_index += 1;
            }
        }
    }

    if current_path_index < selector_path.len() && current_element_index > 0 {
        if let Some(last) = path.last_mut() {
            last.elements
                .extend(remaining(selector_path, current_path_index, current_element_index));
        }
        current_path_index += 1;
    }

    path.extend(
        selector_path
            .get(current_path_index..)
            .unwrap_or_default()
            .iter()
            .cloned(),
    );

    derive_all(path, is_visible)
}

fn remaining(
    selector_path: &[Selector],
    path_index: usize,
    element_index: usize,
) -> impl Iterator<Item = Element> + '_ {
    selector_path
        .get(path_index)
        .and_then(|selector| selector.elements.get(element_index..))
        .unwrap_or_default()
        .iter()
        .cloned()
}

fn derive_all(path: SelectorPath, is_visible: bool) -> SelectorPath {
    path.into_iter()
        .map(|mut selector| {
            if is_visible {
                selector.visibility.ensure_visibility();
            } else {
                selector.visibility.ensure_invisibility();
            }
            selector
        })
        .collect()
}
