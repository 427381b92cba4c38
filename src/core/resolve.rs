//! Name → identifier resolution.
//!
//! Resolution is an exact, case-sensitive scan of a freshly fetched list.
//! The first match in remote order wins. Close names only ever show up as
//! hints on the not-found error.

use crate::error::{Error, Result};
use crate::model::{EntityKind, Named};
use crate::utils::token;

const SUGGEST_THRESHOLD: u8 = 70;
const MAX_SUGGESTIONS: usize = 3;

/// First element whose name equals `name` exactly.
pub fn find_by_name<'a, T: Named>(items: &'a [T], name: &str) -> Option<&'a T> {
    items.iter().find(|item| item.name() == name)
}

/// Resolves `name` within `items` or returns the not-found error for `kind`.
///
/// `scope` names the parent the list was fetched from (project name for
/// sections/tasks, workspace name for projects/users).
pub fn resolve<'a, T: Named>(
    items: &'a [T],
    name: &str,
    kind: EntityKind,
    scope: Option<&str>,
) -> Result<&'a T> {
    if let Some(found) = find_by_name(items, name) {
        log::debug!("resolved {} '{}' -> {}", kind.label(), name, found.gid());
        return Ok(found);
    }

    let mut err = not_found(kind, name, scope.map(str::to_string));
    let suggestions = suggest(items, name);
    if !suggestions.is_empty() {
        let quoted: Vec<String> = suggestions.iter().map(|s| format!("'{}'", s)).collect();
        err = err.with_hint(format!("Did you mean {}?", quoted.join(", ")));
    }
    Err(err)
}

fn not_found(kind: EntityKind, name: &str, scope: Option<String>) -> Error {
    match kind {
        EntityKind::Workspace => Error::workspace_not_found(name),
        EntityKind::Project => Error::project_not_found(name, scope),
        EntityKind::Section => Error::section_not_found(name, scope),
        EntityKind::Task => Error::task_not_found(name, scope),
        EntityKind::User => Error::user_not_found(name, scope),
    }
}

/// Names from `items` that score close to `name`, best first.
fn suggest<T: Named>(items: &[T], name: &str) -> Vec<String> {
    let mut scored: Vec<(u8, &str)> = items
        .iter()
        .map(|item| (token::token_set_ratio(name, item.name()), item.name()))
        .filter(|(score, _)| *score >= SUGGEST_THRESHOLD)
        .collect();

    // stable sort keeps remote order among equal scores
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    let mut names: Vec<String> = Vec::new();
    for (_, candidate) in scored {
        if !names.iter().any(|n| n == candidate) {
            names.push(candidate.to_string());
        }
        if names.len() == MAX_SUGGESTIONS {
            break;
        }
    }
    names
}
