//! Component list → one merged source snippet.
//!
//! Each template is split into import groups (keyed by package) and body
//! lines. Imports are unioned per package and emitted sorted, one statement
//! per package in catalog order; bodies follow after a blank line, one block
//! per component separated by blank lines.

use std::collections::BTreeSet;
use std::sync::Arc;

use indexmap::IndexSet;
use tracing::debug;

use suggest_core::ComponentId;

use crate::catalog::ComponentCatalog;

/// Import names and body lines extracted from one template.
#[derive(Debug, Default, PartialEq, Eq)]
struct ParsedSnippet {
    /// One set per catalog package, same index as `ComponentCatalog::packages`.
    imports: Vec<BTreeSet<String>>,
    body: Vec<String>,
}

/// Stateless snippet builder over a shared catalog.
#[derive(Debug, Clone)]
pub struct SnippetAssembler {
    catalog: Arc<ComponentCatalog>,
}

impl SnippetAssembler {
    pub fn new(catalog: Arc<ComponentCatalog>) -> Self {
        Self { catalog }
    }

    /// Merge the templates of `components` into a single snippet.
    ///
    /// Duplicates are ignored after their first occurrence and components
    /// without a template are skipped. An empty list yields an empty string.
    pub fn assemble(&self, components: &[ComponentId]) -> String {
        if components.is_empty() {
            return String::new();
        }

        let packages = self.catalog.packages();
        let mut imports: Vec<BTreeSet<String>> = vec![BTreeSet::new(); packages.len()];
        let mut body: Vec<String> = Vec::new();

        let unique: IndexSet<ComponentId> = components.iter().copied().collect();
        for id in &unique {
            let Some(template) = self.catalog.snippet(*id) else {
                debug!(component = %id, "No template for component, skipping");
                continue;
            };

            let parsed = parse_snippet(template, packages);
            for (merged, names) in imports.iter_mut().zip(parsed.imports) {
                merged.extend(names);
            }

            if !body.is_empty() {
                body.push(String::new());
            }
            body.extend(parsed.body);
        }

        // Templates may render an icon without importing it.
        if let Some(icon_imports) = imports.last_mut() {
            let joined = body.join("\n");
            for icon in self.catalog.icons() {
                if joined.contains(icon.as_str()) {
                    icon_imports.insert(icon.clone());
                }
            }
        }

        let mut lines: Vec<String> = packages
            .iter()
            .zip(&imports)
            .filter(|(_, names)| !names.is_empty())
            .map(|(package, names)| import_statement(package, names))
            .collect();
        lines.push(String::new());
        lines.extend(body);

        debug!(
            components = unique.len(),
            lines = lines.len(),
            "Snippet assembled"
        );
        lines.join("\n")
    }
}

fn import_statement(package: &str, names: &BTreeSet<String>) -> String {
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    format!("import {{ {} }} from '{}';", names.join(", "), package)
}

/// Split a template into per-package imports and non-blank body lines.
///
/// Import lines naming an unknown package are dropped.
fn parse_snippet(template: &str, packages: &[String]) -> ParsedSnippet {
    let mut parsed = ParsedSnippet {
        imports: vec![BTreeSet::new(); packages.len()],
        body: Vec::new(),
    };

    for line in template.lines().filter(|l| !l.trim().is_empty()) {
        if !line.starts_with("import") {
            parsed.body.push(line.to_string());
            continue;
        }

        let Some(index) = packages.iter().position(|p| names_package(line, p)) else {
            continue;
        };
        if let Some(group) = brace_group(line) {
            parsed.imports[index].extend(
                group
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string),
            );
        }
    }

    parsed
}

fn names_package(line: &str, package: &str) -> bool {
    line.contains(&format!("'{package}'")) || line.contains(&format!("\"{package}\""))
}

/// Text between the first `{` and the next `}`.
fn brace_group(line: &str) -> Option<&str> {
    let start = line.find('{')? + 1;
    let len = line[start..].find('}')?;
    Some(&line[start..start + len])
}
