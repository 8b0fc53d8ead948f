//! Line-oriented merging of asset paths into the build manifest.
//!
//! The manifest is hand-maintained YAML, but only one nesting shape matters here:
//! a `flutter:` block containing an `assets:` list. Editing is deliberately done
//! with an indentation scanner instead of a structured parser so that every
//! unrelated line survives byte-for-byte. The input is assumed minimally
//! well-formed; an `assets:` marker dedented below its parent block is out of
//! scope.

use std::collections::BTreeSet;

use crate::models::MergeOutcome;

/// Marker opening the block the asset list nests under.
const SECTION_MARKER: &str = "flutter:";
/// Marker opening the asset list itself.
const LIST_MARKER: &str = "assets:";
/// Sibling setting emitted when a brand new section block is appended.
const DEFAULT_SECTION_SETTING: &str = "  uses-material-design: true";
/// Entry prefix used when the whole section is synthesized at the document end.
const SYNTHESIZED_ENTRY_PREFIX: &str = "    - ";

#[derive(Debug, Default)]
struct DiscoveredList {
    section_index: Option<usize>,
    list_index: Option<usize>,
    entry_indent: usize,
    entry_prefix: String,
    existing: BTreeSet<String>,
}

/// Merge candidate asset paths into a manifest document.
///
/// The document is scanned fully before any mutation decision is made: the first
/// `flutter:` marker, the first `assets:` marker after it, and every entry already
/// declared in the list are discovered in one pass. Candidates already present are
/// only counted; missing ones are spliced in at the end of the list, in
/// lexicographic order so the output is independent of how the candidates were
/// gathered. When the markers are absent the missing sections are created rather
/// than treated as an error.
///
/// An empty candidate set is a no-op returning the input unchanged.
pub fn merge_asset_paths(lines: &[String], candidates: &BTreeSet<String>) -> MergeOutcome {
    let discovered = discover_list(lines);

    let mut added = 0;
    let mut already_present = 0;
    let mut missing: Vec<&str> = Vec::new();
    for candidate in candidates {
        if discovered.existing.contains(candidate) {
            already_present += 1;
        } else {
            missing.push(candidate);
            added += 1;
        }
    }

    if missing.is_empty() {
        return MergeOutcome {
            lines: lines.to_vec(),
            added,
            already_present,
        };
    }

    let lines = match (discovered.section_index, discovered.list_index) {
        (None, _) => append_new_section(lines, &missing),
        (Some(section_index), None) => splice_new_list(lines, section_index, &missing),
        (Some(_), Some(list_index)) => {
            extend_existing_list(lines, &discovered, list_index, &missing)
        }
    };

    MergeOutcome {
        lines,
        added,
        already_present,
    }
}

/// Single top-to-bottom scan locating the markers and the declared entries.
fn discover_list(lines: &[String]) -> DiscoveredList {
    let mut found = DiscoveredList::default();
    let mut in_list = false;

    for (index, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        let indent = leading_spaces(line);

        if found.section_index.is_none() {
            if trimmed.starts_with(SECTION_MARKER) {
                found.section_index = Some(index);
            }
            continue;
        }

        if found.list_index.is_none() {
            if trimmed.starts_with(LIST_MARKER) && !trimmed.starts_with('#') {
                found.list_index = Some(index);
                found.entry_indent = indent + 2;
                found.entry_prefix = format!("{}- ", " ".repeat(found.entry_indent));
                in_list = true;
            }
            continue;
        }

        if in_list {
            if trimmed.is_empty() || indent < found.entry_indent {
                in_list = false;
                continue;
            }
            if let Some(rest) = trimmed.strip_prefix('-') {
                let entry = rest.trim();
                if !entry.is_empty() {
                    found.existing.insert(entry.to_string());
                }
            }
        }
    }

    found
}

/// Append a fresh section block, list marker and entries at the document end.
fn append_new_section(lines: &[String], missing: &[&str]) -> Vec<String> {
    let mut out = lines.to_vec();
    out.push(String::new());
    out.push(SECTION_MARKER.to_string());
    out.push(DEFAULT_SECTION_SETTING.to_string());
    out.push(format!("  {LIST_MARKER}"));
    out.extend(
        missing
            .iter()
            .map(|path| format!("{SYNTHESIZED_ENTRY_PREFIX}{path}")),
    );
    out
}

/// Splice a new list marker and entries immediately after the section marker line.
fn splice_new_list(lines: &[String], section_index: usize, missing: &[&str]) -> Vec<String> {
    let list_indent = " ".repeat(leading_spaces(&lines[section_index]) + 2);
    let entry_prefix = format!("{list_indent}  - ");

    let mut out = Vec::with_capacity(lines.len() + missing.len() + 1);
    out.extend(lines[..=section_index].iter().cloned());
    out.push(format!("{list_indent}{LIST_MARKER}"));
    out.extend(missing.iter().map(|path| format!("{entry_prefix}{path}")));
    out.extend(lines[section_index + 1..].iter().cloned());
    out
}

/// Splice new entries at the end of the existing list section.
fn extend_existing_list(
    lines: &[String],
    discovered: &DiscoveredList,
    list_index: usize,
    missing: &[&str],
) -> Vec<String> {
    let insert_at = end_of_list(lines, list_index, discovered.entry_indent);

    let mut out = Vec::with_capacity(lines.len() + missing.len());
    out.extend(lines[..insert_at].iter().cloned());
    out.extend(
        missing
            .iter()
            .map(|path| format!("{}{path}", discovered.entry_prefix)),
    );
    out.extend(lines[insert_at..].iter().cloned());
    out
}

/// Index of the first line outside the list section starting just after its marker.
///
/// A blank line or a dedent ends the section. Within it, entry lines and comment
/// lines continue the section; any other line ends it.
fn end_of_list(lines: &[String], list_index: usize, entry_indent: usize) -> usize {
    let mut index = list_index + 1;
    while index < lines.len() {
        let line = &lines[index];
        let trimmed = line.trim();
        if trimmed.is_empty() || leading_spaces(line) < entry_indent {
            break;
        }
        if trimmed.starts_with('-') || trimmed.starts_with('#') {
            index += 1;
        } else {
            break;
        }
    }
    index
}

fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}
