//! Unique name resolution for new data sources
//!
//! When a data source is provisioned from a plugin template its name starts
//! out as the plugin's display name, which often collides with an existing
//! record. Collisions are resolved by appending or bumping a `-<digit>`
//! suffix until the name is free.
//!
//! Suffix detection only looks at the second-to-last character, so `foo-9`
//! is bumped to `foo-10`, but `foo-10` is not recognised as suffixed and
//! becomes `foo-10-1`.

use std::collections::HashSet;

/// Whether `name` matches any existing name, ignoring case
pub fn name_exists<S: AsRef<str>>(existing: &[S], name: &str) -> bool {
    let wanted = name.to_lowercase();
    existing
        .iter()
        .any(|candidate| candidate.as_ref().to_lowercase() == wanted)
}

/// Find a name, derived from `name`, that does not collide with `existing`
///
/// Returns `name` unchanged when it is already free. There is no iteration
/// cap: each step either appends `-1` or bumps the trailing digit, and the
/// existing set is finite.
pub fn find_new_name<S: AsRef<str>>(existing: &[S], name: &str) -> String {
    let taken: HashSet<String> = existing
        .iter()
        .map(|candidate| candidate.as_ref().to_lowercase())
        .collect();

    let mut name = name.to_string();

    while taken.contains(&name.to_lowercase()) {
        if has_dash_suffix(&name) {
            let next = name
                .pop()
                .and_then(|last| last.to_digit(10))
                .map_or(1, |digit| digit + 1);
            name.push_str(&next.to_string());
        } else {
            name.push_str("-1");
        }
    }

    name
}

/// True when the character before the last one is `-`
fn has_dash_suffix(name: &str) -> bool {
    name.chars().rev().nth(1) == Some('-')
}
