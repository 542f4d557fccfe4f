//! Text edits applied to the original source.
//!
//! The transform splices generated code into the untouched source text
//! instead of re-printing the AST, so formatting and comments survive.

use anyhow::{Result, bail};
use swc_common::Spanned;
use swc_ecma_ast::{Expr, Lit, ModuleItem, Stmt};

use crate::core::parsers::jsx::ParsedJSX;

/// Replace `start..end` (byte offsets) with `text`. Equal offsets insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl TextEdit {
    pub fn insert(at: usize, text: String) -> Self {
        Self {
            start: at,
            end: at,
            text,
        }
    }

    pub fn replace(start: usize, end: usize, text: String) -> Self {
        Self { start, end, text }
    }
}

/// Apply non-overlapping edits to `source`.
pub fn apply_edits(source: &str, mut edits: Vec<TextEdit>) -> Result<String> {
    // Later edits first so earlier offsets stay valid
    edits.sort_by(|a, b| b.start.cmp(&a.start).then(b.end.cmp(&a.end)));

    let mut output = source.to_string();
    let mut limit = source.len();
    for edit in edits {
        if edit.start > edit.end || edit.end > limit {
            bail!(
                "Overlapping or out-of-range edit at {}..{}",
                edit.start,
                edit.end
            );
        }
        if !output.is_char_boundary(edit.start) || !output.is_char_boundary(edit.end) {
            bail!("Edit at {}..{} splits a character", edit.start, edit.end);
        }
        output.replace_range(edit.start..edit.end, &edit.text);
        limit = edit.start;
    }
    Ok(output)
}

/// True for directive prologue entries such as `"use client";`.
fn is_directive(item: &ModuleItem) -> bool {
    matches!(
        item,
        ModuleItem::Stmt(Stmt::Expr(stmt)) if matches!(&*stmt.expr, Expr::Lit(Lit::Str(_)))
    )
}

/// Byte offset where generated imports go: before the first module item that
/// is not part of the directive prologue. Shebangs are not module items, so
/// they stay on the first line.
pub fn import_insertion_offset(parsed: &ParsedJSX) -> usize {
    parsed
        .module
        .body
        .iter()
        .find(|item| !is_directive(item))
        .map(|item| parsed.offset(item.span().lo))
        .unwrap_or_else(|| parsed.offset(parsed.source_file.end_pos))
}

/// Leading whitespace of the line containing byte offset `at`.
pub fn line_indent(source: &str, at: usize) -> &str {
    let line_start = source[..at].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line = &source[line_start..];
    let indent_len = line
        .char_indices()
        .find(|(_, c)| *c != ' ' && *c != '\t')
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    &line[..indent_len]
}
