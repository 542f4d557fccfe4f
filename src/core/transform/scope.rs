//! Lexical scope tracking for imported bindings.
//!
//! Only names that could shadow a tracked import are recorded. A reference is
//! to the import when no enclosing scope redeclares its name.
//!
//! ```ignore
//! import {useI18n} from '@shopify/react-i18n';
//! function A() { useI18n(); }            // import
//! function B(useI18n) { useI18n(); }     // parameter, not the import
//! ```

use std::collections::HashSet;

use swc_ecma_ast::{
    ArrowExpr, BlockStmt, BlockStmtOrExpr, ClassDecl, Constructor, Decl, FnDecl, Function,
    ObjectPatProp, Pat, Stmt, VarDecl, VarDeclKind,
};
use swc_ecma_visit::{Visit, VisitWith};

/// Stack of declared-name scopes, innermost last.
pub struct ScopeStack<'a> {
    /// Names worth tracking; declarations of any other name are ignored.
    tracked: &'a HashSet<String>,
    scopes: Vec<HashSet<String>>,
}

impl<'a> ScopeStack<'a> {
    /// Create a stack with the module scope, where the imports live.
    pub fn new(tracked: &'a HashSet<String>) -> Self {
        Self {
            tracked,
            scopes: vec![HashSet::new()],
        }
    }

    /// Enter a scope declaring `names`.
    pub fn enter<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = String>,
    {
        let scope = names
            .into_iter()
            .filter(|name| self.tracked.contains(name))
            .collect();
        self.scopes.push(scope);
    }

    /// Exit the current scope. Keeps the module scope.
    pub fn exit(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// True if an inner scope redeclares `name`.
    pub fn is_shadowed(&self, name: &str) -> bool {
        self.scopes.iter().skip(1).any(|scope| scope.contains(name))
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}

/// Extract all binding names from a pattern.
pub fn extract_binding_names(pat: &Pat) -> Vec<String> {
    match pat {
        Pat::Ident(ident) => vec![ident.id.sym.to_string()],
        Pat::Object(obj) => obj
            .props
            .iter()
            .flat_map(|prop| match prop {
                ObjectPatProp::KeyValue(kv) => extract_binding_names(&kv.value),
                ObjectPatProp::Assign(assign) => vec![assign.key.sym.to_string()],
                ObjectPatProp::Rest(rest) => extract_binding_names(&rest.arg),
            })
            .collect(),
        Pat::Array(arr) => arr
            .elems
            .iter()
            .flatten()
            .flat_map(extract_binding_names)
            .collect(),
        Pat::Assign(assign) => extract_binding_names(&assign.left),
        Pat::Rest(rest) => extract_binding_names(&rest.arg),
        _ => vec![],
    }
}

/// Names declared by a variable declaration.
pub fn var_decl_names(decl: &VarDecl) -> Vec<String> {
    decl.decls
        .iter()
        .flat_map(|declarator| extract_binding_names(&declarator.name))
        .collect()
}

/// Block-scoped names declared directly in a list of statements:
/// `let`, `const`, `class` and (module code being strict) `function`.
pub fn lexical_names(stmts: &[Stmt]) -> Vec<String> {
    let mut names = Vec::new();
    for stmt in stmts {
        let Stmt::Decl(decl) = stmt else {
            continue;
        };
        match decl {
            Decl::Var(var) if var.kind != VarDeclKind::Var => {
                names.extend(var_decl_names(var));
            }
            Decl::Fn(FnDecl { ident, .. }) | Decl::Class(ClassDecl { ident, .. }) => {
                names.push(ident.sym.to_string());
            }
            _ => {}
        }
    }
    names
}

/// `var` declarations hoisted to the enclosing function.
///
/// Walks nested blocks and loops but stops at nested functions, which own
/// their own `var`s.
#[derive(Default)]
pub struct HoistedVars {
    pub names: Vec<String>,
}

impl HoistedVars {
    pub fn in_block(block: &BlockStmt) -> Vec<String> {
        let mut collector = Self::default();
        block.visit_with(&mut collector);
        collector.names
    }

    pub fn in_arrow_body(body: &BlockStmtOrExpr) -> Vec<String> {
        match body {
            BlockStmtOrExpr::BlockStmt(block) => Self::in_block(block),
            BlockStmtOrExpr::Expr(_) => Vec::new(),
        }
    }
}

impl Visit for HoistedVars {
    fn visit_var_decl(&mut self, node: &VarDecl) {
        if node.kind == VarDeclKind::Var {
            self.names.extend(var_decl_names(node));
        }
        node.visit_children_with(self);
    }

    fn visit_function(&mut self, _: &Function) {}

    fn visit_arrow_expr(&mut self, _: &ArrowExpr) {}

    fn visit_constructor(&mut self, _: &Constructor) {}
}
