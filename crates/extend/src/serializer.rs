use crate::{
    ast::{Attribute, AttributeValue, Combinator, Element, ElementValue, Selector},
    error::{ExtendError, ExtendResult},
};

/// Renders a single selector as it would appear in CSS output
pub fn selector_to_css(selector: &Selector) -> ExtendResult<String> {
    let mut serializer = Serializer::new();
    serializer.write_selector(selector, true)?;
    Ok(serializer.finish())
}

/// Renders a selector path, joining nested selectors with the implicit
/// descendant combinator
pub fn path_to_css(path: &[Selector]) -> ExtendResult<String> {
    let mut serializer = Serializer::new();
    for (i, selector) in path.iter().enumerate() {
        serializer.write_selector(selector, i == 0)?;
    }
    Ok(serializer.finish())
}

struct Serializer {
    buffer: String,
}

impl Serializer {
    fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    fn write_combinator(&mut self, combinator: Combinator) {
        match combinator {
            Combinator::None => {}
            Combinator::Descendant => self.buffer.push(' '),
            Combinator::Child | Combinator::NextSibling | Combinator::FollowingSibling => {
                self.buffer.push(' ');
                self.buffer.push_str(combinator.as_str());
                self.buffer.push(' ');
            }
        }
    }

    fn write_attribute(&mut self, attr: &Attribute) {
        self.buffer.push('[');
        self.buffer.push_str(&attr.key);

        if let Some(value) = &attr.value {
            self.buffer.push_str(attr.op.into());
            match value {
                AttributeValue::Keyword(value) => self.buffer.push_str(value),
                AttributeValue::Quoted { value, quote } => {
                    self.buffer.push(*quote);
                    self.buffer.push_str(value);
                    self.buffer.push(*quote);
                }
            }
        }

        if let Some(cif) = &attr.cif {
            self.buffer.push(' ');
            self.buffer.push_str(cif);
        }

        self.buffer.push(']');
    }

    fn write_element(&mut self, element: &Element) -> ExtendResult<()> {
        self.write_combinator(element.combinator);

        match &element.value {
            ElementValue::Keyword(value) => self.buffer.push_str(value),
            ElementValue::Attribute(attr) => self.write_attribute(attr),
            ElementValue::Selector(selector) => {
                self.buffer.push('(');
                self.write_selector(selector, true)?;
                self.buffer.push(')');
            }
            ElementValue::Variable(name) => {
                return Err(ExtendError::render(format!(
                    "variable @{{{}}} was never evaluated",
                    name
                )))
            }
        }

        Ok(())
    }

    /// A selector nested inside a path begins with an implicit space unless it
    /// already starts with a combinator.
    fn write_selector(&mut self, selector: &Selector, is_first: bool) -> ExtendResult<()> {
        if !is_first
            && selector
                .elements
                .first()
                .map_or(false, |el| el.combinator == Combinator::None)
        {
            self.buffer.push(' ');
        }

        for element in &selector.elements {
            self.write_element(element)?;
        }

        Ok(())
    }

    fn finish(self) -> String {
        self.buffer.trim().to_owned()
    }
}
