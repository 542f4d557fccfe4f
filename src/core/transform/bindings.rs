//! Import binding collection.
//!
//! Finds the local names under which the i18n hook/decorator is imported:
//! `import {useI18n, withI18n as translate} from '@shopify/react-i18n'`
//! yields `useI18n -> useI18n` and `withI18n -> translate`.

use swc_ecma_ast::{ImportSpecifier, Module, ModuleDecl, ModuleExportName, ModuleItem};

/// An imported i18n call name and the local identifier bound to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nBinding {
    /// Name exported by the package (`useI18n`).
    pub imported: String,
    /// Name the file refers to it by.
    pub local: String,
}

/// Collect i18n bindings from the module's import declarations, in source order.
///
/// Only named specifiers count; default and namespace imports of the package
/// are not rewritten. Type-only imports are skipped as they have no runtime
/// binding.
pub fn collect_i18n_bindings(
    module: &Module,
    package: &str,
    call_names: &[String],
) -> Vec<I18nBinding> {
    let mut bindings = Vec::new();

    for item in &module.body {
        let ModuleItem::ModuleDecl(ModuleDecl::Import(import)) = item else {
            continue;
        };
        if import.type_only || import.src.value.as_str() != Some(package) {
            continue;
        }

        for specifier in &import.specifiers {
            let ImportSpecifier::Named(named) = specifier else {
                continue;
            };
            if named.is_type_only {
                continue;
            }

            let local = named.local.sym.to_string();
            let imported = named
                .imported
                .as_ref()
                .map(|name| match name {
                    ModuleExportName::Ident(ident) => ident.sym.to_string(),
                    ModuleExportName::Str(s) => s.value.to_string_lossy().to_string(),
                })
                .unwrap_or_else(|| local.clone());

            if call_names.iter().any(|name| name == &imported) {
                bindings.push(I18nBinding { imported, local });
            }
        }
    }

    bindings
}
