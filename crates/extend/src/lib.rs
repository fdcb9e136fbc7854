/*!
This crate resolves the `:extend()` pseudo-class of [LESS](https://lesscss.org/)
stylesheets.

It operates on an already parsed and evaluated tree. For every `:extend()` it
finds, the selectors that declared the extend are added to each ruleset whose
selectors match the extended selector, exactly as `lessc` does. Extends of
extends are followed transitively, extends inside `@media` only apply within
that `@media` block, and extends that match nothing are reported through the
configured [`Logger`].

## Use as library
```
use less_extend::ast::{Combinator, Element, ExtendRule, Ruleset, Selector, Stmt};

fn class(name: &str) -> Selector {
    Selector::new(vec![Element::keyword(Combinator::None, name)])
}

fn main() -> Result<(), Box<less_extend::Error>> {
    // .a:extend(.b) {}
    // .b { color: red; }
    let mut root = Ruleset::root(vec![
        Stmt::Ruleset(Ruleset::new(
            vec![class(".a").with_extend(ExtendRule::new(class(".b"), "", 0))],
            Vec::new(),
        )),
        Stmt::Ruleset(Ruleset::new(
            vec![class(".b")],
            vec![Stmt::declaration("color", "red")],
        )),
    ]);

    less_extend::process_extends(&mut root, &less_extend::Options::default())?;

    let Stmt::Ruleset(b) = &root.rules[1] else { unreachable!() };
    let paths = b
        .paths
        .borrow()
        .iter()
        .map(|path| less_extend::serializer::path_to_css(path))
        .collect::<Result<Vec<_>, _>>()?;
    assert_eq!(paths, [".b", ".a"]);
    Ok(())
}
```
*/

#![warn(clippy::all, clippy::cargo, clippy::dbg_macro)]
#![deny(missing_debug_implementations)]
#![allow(
    clippy::use_self,
    renamed_and_removed_lints,
    clippy::unknown_clippy_lints,
    clippy::single_match,
    clippy::new_without_default,
    clippy::single_match_else,
    clippy::multiple_crate_versions,
    clippy::wrong_self_convention,
    clippy::unwrap_or_default,
    clippy::manual_unwrap_or_default,
    unknown_lints,
)]

pub use crate::error::{
    ExtendError as Error, ExtendResult as Result, PublicExtendErrorKind as ErrorKind,
};
pub use crate::extend::ExtendProcessor;
pub use crate::logger::{Logger, NullLogger, StdLogger};
pub use crate::options::Options;

pub use codemap;

use crate::ast::Ruleset;

pub mod ast;
pub mod extend;
pub mod serializer;
pub mod visitor;

mod error;
mod logger;
mod options;

/// Applies every `:extend()` in the tree rooted at `root`.
///
/// Matching rulesets gain new selector paths in place. Every extend is
/// detached from the tree once resolution finishes.
///
/// ```
/// # use less_extend::ast::Ruleset;
/// let mut root = Ruleset::root(Vec::new());
/// less_extend::process_extends(&mut root, &less_extend::Options::default()).unwrap();
/// ```
pub fn process_extends(root: &mut Ruleset, options: &Options) -> Result<()> {
    ExtendProcessor::new(options).run(root)
}
