use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{BytePos, FileName, Globals, Loc, SourceFile, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

/// A parsed module together with the source file it came from.
///
/// Spans in `module` are positions inside `source_file`; use
/// [`ParsedJSX::offset`] to turn them into byte offsets of the original text.
pub struct ParsedJSX {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    pub source_file: Arc<SourceFile>,
}

impl ParsedJSX {
    /// Byte offset of `pos` in the original source text.
    pub fn offset(&self, pos: BytePos) -> usize {
        (pos.0 - self.source_file.start_pos.0) as usize
    }

    /// Line/column lookup for diagnostics.
    pub fn loc(&self, pos: BytePos) -> Loc {
        self.source_map.lookup_char_pos(pos)
    }
}

/// Pick the swc syntax for a file based on its extension.
///
/// `.tsx` parses as TSX, `.ts`/`.mts`/`.cts` as plain TypeScript (so generic
/// arrow functions and type assertions keep working), everything else as
/// ECMAScript with JSX enabled. Decorators are accepted everywhere, since
/// `withI18n` is commonly applied as a class decorator.
pub fn syntax_for_path(file_path: &Path) -> Syntax {
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    match extension {
        "tsx" => Syntax::Typescript(TsSyntax {
            tsx: true,
            decorators: true,
            ..Default::default()
        }),
        "ts" | "mts" | "cts" => Syntax::Typescript(TsSyntax {
            tsx: false,
            decorators: true,
            ..Default::default()
        }),
        _ => Syntax::Es(EsSyntax {
            jsx: true,
            decorators: true,
            decorators_before_export: true,
            ..Default::default()
        }),
    }
}

/// Parse a JS/JSX/TS/TSX source string into an AST.
///
/// Accepts a shared SourceMap for thread-safe parallel parsing.
pub fn parse_jsx_source(
    code: String,
    file_path: &Path,
    source_map: Arc<SourceMap>,
) -> Result<ParsedJSX> {
    use swc_common::GLOBALS;

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.to_path_buf()).into(), code);

        let syntax = syntax_for_path(file_path);
        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path.display(), e.kind()))?;

        Ok(ParsedJSX {
            module,
            source_map,
            source_file,
        })
    })
}
