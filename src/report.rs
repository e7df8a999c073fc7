//! Report rendering for duplicate groups.
//!
//! Filters the finder's digest map down to groups with more than one member
//! (optionally restricted by a path-suffix extension filter) and renders
//! them as display lines: a header per group, then one tab-indented line per
//! member path in lexicographic order.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::hash::Digest;

/// Render duplicate groups as display lines.
///
/// Groups with fewer than two members are dropped. When `extension` is set,
/// a group survives only if its representative member - the first path in
/// discovery order - ends with the given suffix. Checking the representative
/// only mirrors long-standing behavior; content hashing makes mixed-content
/// groups impossible, though mixed *names* within a group are still allowed.
///
/// Member lines within a group are sorted lexicographically, and groups are
/// ordered by their smallest member path, so output is deterministic
/// regardless of discovery order. An empty group set renders zero lines.
#[must_use]
pub fn render_report(
    groups: &HashMap<Digest, Vec<PathBuf>>,
    extension: Option<&str>,
    show_digest: bool,
) -> Vec<String> {
    let mut surviving: Vec<(&Digest, Vec<String>)> = groups
        .iter()
        .filter(|(_, paths)| paths.len() > 1)
        .filter(|(_, paths)| {
            extension.map_or(true, |ext| paths[0].to_string_lossy().ends_with(ext))
        })
        .map(|(digest, paths)| {
            let mut names: Vec<String> =
                paths.iter().map(|p| p.display().to_string()).collect();
            names.sort();
            (digest, names)
        })
        .collect();
    surviving.sort_by(|(_, a), (_, b)| a[0].cmp(&b[0]));

    let mut lines = Vec::new();
    for (digest, names) in surviving {
        if show_digest {
            lines.push(format!("These files have the same hash ({digest}):"));
        } else {
            lines.push("These files have the same hash:".to_string());
        }
        for name in names {
            lines.push(format!("\t{name}"));
        }
    }
    lines
}
