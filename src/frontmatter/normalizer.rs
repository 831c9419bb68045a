//! Line classifier that drops denied fields from a frontmatter block.

use crate::config::DeniedField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    /// Inside a dropped block field; indented and blank lines belong to it
    SkipChildren,
}

/// Non-empty and not starting with whitespace
fn is_top_level(line: &str) -> bool {
    line.chars().next().is_some_and(|c| !c.is_whitespace())
}

/// Return the lines of `frontmatter` that survive the deny list, in order.
pub fn strip_denied_fields<'a>(frontmatter: &'a str, deny: &[DeniedField]) -> Vec<&'a str> {
    let mut state = State::Normal;
    let mut kept = Vec::new();

    for line in frontmatter.split('\n') {
        if state == State::SkipChildren {
            if !is_top_level(line) {
                continue;
            }
            state = State::Normal;
        }

        match deny.iter().find(|field| field.matches(line)) {
            Some(field) if field.children => state = State::SkipChildren,
            Some(_) => {}
            None => kept.push(line),
        }
    }

    kept
}
