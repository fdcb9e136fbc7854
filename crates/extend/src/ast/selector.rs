use crate::{error::ExtendResult, serializer};

use super::{ExtendRule, FileInfo, Visibility};

/// The relation between an element and the element before it.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Combinator {
    /// No combinator was written, so the element is part of the same compound
    /// selector as the previous one.
    ///
    /// `''`
    #[default]
    None,

    /// `' '`
    Descendant,

    /// Matches the right-hand selector if it's a direct child of the left-hand
    /// selector in the DOM tree.
    ///
    /// `'>'`
    Child,

    /// Matches the right-hand selector if it's immediately adjacent to the
    /// left-hand selector in the DOM tree.
    ///
    /// `'+'`
    NextSibling,

    /// Matches the right-hand selector if it comes after the left-hand selector
    /// in the DOM tree.
    ///
    /// `'~'`
    FollowingSibling,
}

impl Combinator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::FollowingSibling => "~",
        }
    }

    /// An element that starts a nested selector has an implicit space before
    /// it once the path is flattened, so a missing combinator reads as a
    /// descendant combinator in that position.
    pub const fn or_descendant(self) -> Self {
        match self {
            Self::None => Self::Descendant,
            other => other,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AttributeOp {
    /// \[attr\]
    #[default]
    Any,

    /// [attr=value]
    Equals,

    /// [attr~=value]
    Include,

    /// [attr|=value]
    Dash,

    /// [attr^=value]
    Prefix,

    /// [attr$=value]
    Suffix,

    /// [attr*=value]
    Contains,
}

impl From<AttributeOp> for &'static str {
    #[inline]
    fn from(op: AttributeOp) -> Self {
        match op {
            AttributeOp::Any => "",
            AttributeOp::Equals => "=",
            AttributeOp::Include => "~=",
            AttributeOp::Dash => "|=",
            AttributeOp::Prefix => "^=",
            AttributeOp::Suffix => "$=",
            AttributeOp::Contains => "*=",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AttributeValue {
    Keyword(String),
    Quoted { value: String, quote: char },
}

impl AttributeValue {
    /// The value with any quotes stripped
    pub fn resolved(&self) -> &str {
        match self {
            Self::Keyword(value) | Self::Quoted { value, .. } => value,
        }
    }
}

/// An attribute selector, e.g. `[type="text" i]`
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    pub key: String,
    pub op: AttributeOp,
    pub value: Option<AttributeValue>,

    /// Case-sensitivity flag
    pub cif: Option<String>,
}

impl Attribute {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            op: AttributeOp::Any,
            value: None,
            cif: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, op: AttributeOp, value: AttributeValue) -> Self {
        self.op = op;
        self.value = Some(value);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ElementValue {
    /// Plain selector text, e.g. `.a`, `#b`, `div` or `:hover`
    Keyword(String),
    Attribute(Attribute),

    /// A parenthesized selector
    Selector(Box<Selector>),

    /// An interpolated variable that was never evaluated. It matches nothing
    /// and cannot be rendered.
    Variable(String),
}

/// One compound-selector token
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub combinator: Combinator,
    pub value: ElementValue,
    pub is_variable: bool,
    pub index: usize,
    pub file_info: Option<FileInfo>,
    pub visibility: Visibility,
}

impl Element {
    pub fn new(combinator: Combinator, value: ElementValue) -> Self {
        Self {
            combinator,
            value,
            is_variable: false,
            index: 0,
            file_info: None,
            visibility: Visibility::default(),
        }
    }

    pub fn keyword(combinator: Combinator, value: impl Into<String>) -> Self {
        Self::new(combinator, ElementValue::Keyword(value.into()))
    }

    /// A copy of this element placed after a different combinator
    #[must_use]
    pub fn with_combinator(&self, combinator: Combinator) -> Self {
        Self {
            combinator,
            ..self.clone()
        }
    }
}

/// An ordered sequence of elements
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selector {
    pub elements: Vec<Element>,

    /// `:extend()`s written directly on this selector
    pub extend_list: Vec<ExtendRule>,
    pub index: usize,
    pub file_info: Option<FileInfo>,
    pub visibility: Visibility,
}

/// The fully nested chain of selectors that produces one output selector
pub type SelectorPath = Vec<Selector>;

impl Selector {
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_extend(mut self, extend: ExtendRule) -> Self {
        self.extend_list.push(extend);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn to_css(&self) -> ExtendResult<String> {
        serializer::selector_to_css(self)
    }
}
