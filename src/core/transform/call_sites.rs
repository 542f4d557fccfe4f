//! Call-site collection for imported i18n bindings.
//!
//! A call site is a call expression with no arguments whose callee is a
//! reference to the import, e.g. `useI18n()` or the inner call of
//! `withI18n()(Component)`. Calls that already pass arguments are left to
//! the author.

use std::collections::{HashMap, HashSet};

use swc_common::Span;
use swc_ecma_ast::{
    ArrowExpr, BlockStmt, CallExpr, Callee, CatchClause, Constructor, Expr, FnExpr, ForHead,
    ForInStmt, ForOfStmt, ForStmt, Function, Ident, Module, ParamOrTsParamProp, SetterProp,
    TsParamPropParam, VarDeclKind, VarDeclOrExpr,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::scope::{HoistedVars, ScopeStack, extract_binding_names, lexical_names, var_decl_names};

/// Collects zero-argument calls of tracked bindings, respecting shadowing.
pub struct CallSiteCollector<'a> {
    scopes: ScopeStack<'a>,
    tracked: &'a HashSet<String>,
    calls: HashMap<String, Vec<Span>>,
}

impl<'a> CallSiteCollector<'a> {
    pub fn new(tracked: &'a HashSet<String>) -> Self {
        Self {
            scopes: ScopeStack::new(tracked),
            tracked,
            calls: HashMap::new(),
        }
    }

    /// Walk the module and return call spans keyed by local binding name.
    pub fn collect(mut self, module: &Module) -> HashMap<String, Vec<Span>> {
        module.visit_with(&mut self);
        self.calls
    }

    fn with_scope<F>(&mut self, names: Vec<String>, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.scopes.enter(names);
        f(self);
        self.scopes.exit();
    }
}

/// Strip parentheses: `(useI18n)()` calls the same binding.
fn unwrap_parens(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_parens(&paren.expr),
        _ => expr,
    }
}

impl Visit for CallSiteCollector<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if node.args.is_empty()
            && let Callee::Expr(callee) = &node.callee
            && let Expr::Ident(ident) = unwrap_parens(callee)
        {
            let name = ident.sym.as_str();
            if self.tracked.contains(name) && !self.scopes.is_shadowed(name) {
                self.calls
                    .entry(name.to_string())
                    .or_default()
                    .push(node.span);
            }
        }

        node.visit_children_with(self);
    }

    fn visit_fn_expr(&mut self, node: &FnExpr) {
        // A named function expression binds its own name inside its body
        let names = node
            .ident
            .as_ref()
            .map(|ident| vec![ident.sym.to_string()])
            .unwrap_or_default();
        self.with_scope(names, |this| node.function.visit_with(this));
    }

    fn visit_function(&mut self, node: &Function) {
        let mut names: Vec<String> = node
            .params
            .iter()
            .flat_map(|param| extract_binding_names(&param.pat))
            .collect();
        if let Some(body) = &node.body {
            names.extend(HoistedVars::in_block(body));
        }
        self.with_scope(names, |this| node.visit_children_with(this));
    }

    fn visit_arrow_expr(&mut self, node: &ArrowExpr) {
        let mut names: Vec<String> = node.params.iter().flat_map(extract_binding_names).collect();
        names.extend(HoistedVars::in_arrow_body(&node.body));
        self.with_scope(names, |this| node.visit_children_with(this));
    }

    fn visit_constructor(&mut self, node: &Constructor) {
        let mut names: Vec<String> = node
            .params
            .iter()
            .flat_map(|param| match param {
                ParamOrTsParamProp::Param(param) => extract_binding_names(&param.pat),
                ParamOrTsParamProp::TsParamProp(prop) => match &prop.param {
                    TsParamPropParam::Ident(ident) => vec![ident.id.sym.to_string()],
                    TsParamPropParam::Assign(assign) => extract_binding_names(&assign.left),
                },
            })
            .collect();
        if let Some(body) = &node.body {
            names.extend(HoistedVars::in_block(body));
        }
        self.with_scope(names, |this| node.visit_children_with(this));
    }

    fn visit_setter_prop(&mut self, node: &SetterProp) {
        let mut names = extract_binding_names(&node.param);
        if let Some(body) = &node.body {
            names.extend(HoistedVars::in_block(body));
        }
        self.with_scope(names, |this| node.visit_children_with(this));
    }

    fn visit_block_stmt(&mut self, node: &BlockStmt) {
        let names = lexical_names(&node.stmts);
        self.with_scope(names, |this| node.visit_children_with(this));
    }

    fn visit_catch_clause(&mut self, node: &CatchClause) {
        let names = node
            .param
            .as_ref()
            .map(extract_binding_names)
            .unwrap_or_default();
        self.with_scope(names, |this| node.visit_children_with(this));
    }

    fn visit_for_stmt(&mut self, node: &ForStmt) {
        let names = match &node.init {
            Some(VarDeclOrExpr::VarDecl(decl)) if decl.kind != VarDeclKind::Var => {
                var_decl_names(decl)
            }
            _ => Vec::new(),
        };
        self.with_scope(names, |this| node.visit_children_with(this));
    }

    fn visit_for_in_stmt(&mut self, node: &ForInStmt) {
        let names = loop_head_names(&node.left);
        self.with_scope(names, |this| node.visit_children_with(this));
    }

    fn visit_for_of_stmt(&mut self, node: &ForOfStmt) {
        let names = loop_head_names(&node.left);
        self.with_scope(names, |this| node.visit_children_with(this));
    }
}

fn loop_head_names(head: &ForHead) -> Vec<String> {
    match head {
        ForHead::VarDecl(decl) if decl.kind != VarDeclKind::Var => var_decl_names(decl),
        _ => Vec::new(),
    }
}

/// Every identifier spelled anywhere in the module.
///
/// Used to keep generated identifiers from colliding with existing ones.
#[derive(Default)]
pub struct IdentifierCollector {
    pub names: HashSet<String>,
}

impl IdentifierCollector {
    pub fn collect(module: &Module) -> HashSet<String> {
        let mut collector = Self::default();
        module.visit_with(&mut collector);
        collector.names
    }
}

impl Visit for IdentifierCollector {
    fn visit_ident(&mut self, node: &Ident) {
        self.names.insert(node.sym.to_string());
    }
}
