use crate::{
    ast::{AtRule, Declaration, Media, MixinDefinition, Ruleset, Stmt},
    error::ExtendResult,
};

/// Controls traversal from inside a `visit_*` hook
#[derive(Debug)]
pub struct VisitArgs {
    /// Set to `false` to skip the children of the node being visited
    pub visit_deeper: bool,
}

impl VisitArgs {
    fn new() -> Self {
        Self { visit_deeper: true }
    }
}

/// Per-node callbacks for a depth-first walk of the tree
///
/// `visit_*` hooks run before a node's children, `*_out` hooks after them.
/// Every hook defaults to doing nothing.
#[allow(unused_variables)]
pub trait TreeVisitor {
    fn visit_ruleset(&mut self, ruleset: &mut Ruleset, args: &mut VisitArgs) -> ExtendResult<()> {
        Ok(())
    }

    fn visit_ruleset_out(&mut self, ruleset: &mut Ruleset) -> ExtendResult<()> {
        Ok(())
    }

    fn visit_media(&mut self, media: &mut Media, args: &mut VisitArgs) -> ExtendResult<()> {
        Ok(())
    }

    fn visit_media_out(&mut self, media: &mut Media) -> ExtendResult<()> {
        Ok(())
    }

    fn visit_at_rule(&mut self, at_rule: &mut AtRule, args: &mut VisitArgs) -> ExtendResult<()> {
        Ok(())
    }

    fn visit_at_rule_out(&mut self, at_rule: &mut AtRule) -> ExtendResult<()> {
        Ok(())
    }

    fn visit_declaration(
        &mut self,
        declaration: &mut Declaration,
        args: &mut VisitArgs,
    ) -> ExtendResult<()> {
        Ok(())
    }

    fn visit_mixin_definition(
        &mut self,
        mixin: &mut MixinDefinition,
        args: &mut VisitArgs,
    ) -> ExtendResult<()> {
        Ok(())
    }
}

pub fn walk_ruleset<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    ruleset: &mut Ruleset,
) -> ExtendResult<()> {
    let mut args = VisitArgs::new();
    visitor.visit_ruleset(ruleset, &mut args)?;

    if args.visit_deeper {
        walk_body(visitor, &mut ruleset.rules)?;
    }

    visitor.visit_ruleset_out(ruleset)
}

pub fn walk_stmt<V: TreeVisitor + ?Sized>(visitor: &mut V, stmt: &mut Stmt) -> ExtendResult<()> {
    match stmt {
        Stmt::Ruleset(ruleset) => walk_ruleset(visitor, ruleset),
        Stmt::Media(media) => {
            let mut args = VisitArgs::new();
            visitor.visit_media(media, &mut args)?;
            if args.visit_deeper {
                walk_body(visitor, &mut media.rules)?;
            }
            visitor.visit_media_out(media)
        }
        Stmt::AtRule(at_rule) => {
            let mut args = VisitArgs::new();
            visitor.visit_at_rule(at_rule, &mut args)?;
            if args.visit_deeper {
                walk_body(visitor, &mut at_rule.rules)?;
            }
            visitor.visit_at_rule_out(at_rule)
        }
        Stmt::MixinDefinition(mixin) => {
            let mut args = VisitArgs::new();
            visitor.visit_mixin_definition(mixin, &mut args)?;
            if args.visit_deeper {
                walk_body(visitor, &mut mixin.rules)?;
            }
            Ok(())
        }
        Stmt::Declaration(declaration) => {
            visitor.visit_declaration(declaration, &mut VisitArgs::new())
        }
        Stmt::Extend(..) | Stmt::Comment(..) => Ok(()),
    }
}

fn walk_body<V: TreeVisitor + ?Sized>(visitor: &mut V, body: &mut [Stmt]) -> ExtendResult<()> {
    for stmt in body {
        walk_stmt(visitor, stmt)?;
    }

    Ok(())
}
