//! Text templating for emitted code.
//!
//! Rendering a plan into source text is split into two halves: the target
//! decides *what* goes into each placeholder (see `target`), and a
//! [`TemplateEngine`] does the substitution. The renderer only depends on the
//! trait, so the planning pipeline can be exercised with any engine.
//!
//! The built-in [`PlaceholderEngine`] understands `${name}` placeholders.
//! Names must start with a letter or underscore. Text that does not match the
//! placeholder syntax is copied through unchanged, and a placeholder without
//! a binding is an error rather than an empty string.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Placeholder name to substituted text.
pub type Bindings = BTreeMap<&'static str, String>;

/// Pure function from a template and its bindings to text.
pub trait TemplateEngine: Send + Sync {
    fn render(&self, template: &str, bindings: &Bindings) -> Result<String>;
}

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
});

/// `${name}` substitution engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderEngine;

impl TemplateEngine for PlaceholderEngine {
    fn render(&self, template: &str, bindings: &Bindings) -> Result<String> {
        let mut rendered = String::with_capacity(template.len());
        let mut last = 0;

        for captures in PLACEHOLDER.captures_iter(template) {
            let whole = captures.get(0).expect("group 0 always matches");
            let name = &captures[1];
            let value = bindings.get(name).ok_or_else(|| Error::Template {
                message: "Template refers to an unbound placeholder".to_string(),
                variable: Some(name.to_string()),
            })?;

            rendered.push_str(&template[last..whole.start()]);
            rendered.push_str(value);
            last = whole.end();
        }

        rendered.push_str(&template[last..]);
        Ok(rendered)
    }
}

/// Names of the placeholders a template uses, in order of first appearance.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for captures in PLACEHOLDER.captures_iter(template) {
        let name = &captures[1];
        if !names.iter().any(|existing| existing == name) {
            names.push(name.to_string());
        }
    }
    names
}
