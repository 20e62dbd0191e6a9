//! Helm template placeholder substitution
//!
//! Connector files shipped inside a Helm chart still carry Go template syntax
//! until the chart is rendered. Sanitizing drops control-only lines and swaps
//! every remaining `{{ ... }}` expression for a plain placeholder so the rest
//! of the document can be parsed as ordinary YAML.

use std::sync::LazyLock;

use regex::Regex;

/// Text substituted for each template expression
pub const PLACEHOLDER: &str = "PLACEHOLDER";

/// A line holding nothing but a template action (conditionals, loops,
/// includes, comments, variable assignments).
static CONTROL_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\{\{-?\s*(?:if|else|end|with|range|define|template|toYaml|nindent|indent|tpl|\$|/\*|#|block|include).*?\}\}\s*$",
    )
    .unwrap()
});

static TEMPLATE_EXPR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{-?\s*[^{}]+?-?\}\}").unwrap());

/// Returns true when the text contains any template expression.
pub fn has_template_syntax(content: &str) -> bool {
    TEMPLATE_EXPR.is_match(content)
}

/// Remove control-only lines and replace template expressions with
/// [`PLACEHOLDER`]. Line endings of kept lines are preserved.
pub fn sanitize(content: &str) -> String {
    let mut out = String::with_capacity(content.len());

    for line in content.split_inclusive('\n') {
        let stripped = line.trim();
        if stripped.is_empty() {
            out.push_str(line);
        } else if CONTROL_LINE.is_match(stripped) {
            continue;
        } else {
            out.push_str(&replace_expressions(line));
        }
    }

    out
}

fn replace_expressions(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut last = 0;

    for m in TEMPLATE_EXPR.find_iter(line) {
        out.push_str(&line[last..m.start()]);
        out.push_str(placeholder_for(&line[..m.start()], &line[m.end()..]));
        last = m.end();
    }
    out.push_str(&line[last..]);

    out
}

/// Pick the substitution text so the surrounding YAML stays well formed.
fn placeholder_for(before: &str, after: &str) -> &'static str {
    let last_char = before.trim_end().chars().last();
    let next_char = after.trim_start().chars().next();

    match last_char {
        Some(q @ ('"' | '\'' | '`')) if next_char == Some(q) => PLACEHOLDER,
        Some(':' | '-') => " PLACEHOLDER",
        _ => PLACEHOLDER,
    }
}
