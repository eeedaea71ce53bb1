//! CLI output formatting.
//!
//! Every command has a `format_*` function that returns lines (pure, testable)
//! and a `print_*` wrapper that writes them to stdout.
//!
//! # Output Format
//!
//! ## Resolve
//!
//! ```text
//! Breakpoint: lg
//!     Size: 800x600
//!     Aspect padding: 75%
//! ```
//!
//! ## Sources
//!
//! ```text
//! 001 (min-width:768px) b.jpg?format=webp [image/webp]
//! 002 (min-width:0px) a.jpg?format=webp [image/webp]
//! ```
//!
//! ## Check
//!
//! ```text
//! xs    0px    a.jpg 400x300
//! sm    576px  → xs
//! md    768px  b.jpg 800x600
//! lg    992px  → md
//! ```

use crate::breakpoints::BreakpointName;
use crate::resolve::{BreakpointEntry, ResolvedDimensions, SourceCandidate};

fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Resolved size at a breakpoint. `padding` is omitted when not computed.
pub fn format_resolution(
    breakpoint: Option<BreakpointName>,
    dims: ResolvedDimensions,
    padding: Option<&str>,
) -> Vec<String> {
    let name = breakpoint.map_or("unknown (xs fallback)", BreakpointName::as_str);
    let mut lines = vec![
        format!("Breakpoint: {name}"),
        format!("{}Size: {}x{}", indent(1), dims.width, dims.height),
    ];
    if let Some(p) = padding {
        lines.push(format!("{}Aspect padding: {p}", indent(1)));
    }
    lines
}

/// Source candidates in the order the browser will test them.
pub fn format_sources(candidates: &[SourceCandidate]) -> Vec<String> {
    candidates
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let mut line = format!(
                "{} (min-width:{}px) {}",
                format_index(i + 1),
                c.min_width_px,
                c.url
            );
            if !c.mime_type.is_empty() {
                line.push_str(&format!(" [{}]", c.mime_type));
            }
            line
        })
        .collect()
}

/// Per-breakpoint overview: own descriptor, or the breakpoint it inherits from.
pub fn format_check(entries: &[BreakpointEntry]) -> Vec<String> {
    let mut inherited: Option<BreakpointName> = None;
    entries
        .iter()
        .map(|entry| {
            let head = format!("{:<5} {:<6}", entry.name.as_str(), format!("{}px", entry.min_width_px));
            match &entry.descriptor {
                Some(d) => {
                    inherited = Some(entry.name);
                    format!("{head} {} {}x{}", d.url, d.width, d.height)
                }
                None => match inherited {
                    Some(from) => format!("{head} → {from}"),
                    None => format!("{head} (missing)"),
                },
            }
        })
        .collect()
}

pub fn print_resolution(
    breakpoint: Option<BreakpointName>,
    dims: ResolvedDimensions,
    padding: Option<&str>,
) {
    for line in format_resolution(breakpoint, dims, padding) {
        println!("{}", line);
    }
}

pub fn print_sources(candidates: &[SourceCandidate]) {
    for line in format_sources(candidates) {
        println!("{}", line);
    }
}

pub fn print_check(entries: &[BreakpointEntry]) {
    for line in format_check(entries) {
        println!("{}", line);
    }
}
