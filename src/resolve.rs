//! Breakpoint resolution and responsive source selection.
//!
//! Given the per-breakpoint image descriptors of one picture, decides:
//!
//! - which width/height the picture has at the active breakpoint
//!   ([`resolve_dimensions`]),
//! - which `<source>` candidates to offer, and in what order
//!   ([`build_source_candidates`]),
//! - how much vertical space to reserve before the image loads
//!   ([`compute_aspect_padding`]).
//!
//! All functions here are pure: no I/O, no viewport probing, no capability
//! detection. Whatever the caller knows about the runtime (active breakpoint,
//! WebP support) comes in as plain arguments.
//!
//! ## Fallback Rule
//!
//! Only xs is required to carry a descriptor. Any other breakpoint may be
//! empty, in which case it inherits from the nearest smaller breakpoint that
//! has one:
//!
//! ```text
//! xs: a.jpg   sm: -   md: b.jpg   lg: -   xl: -   xxl: -
//!  └─ xs, sm ─┘        └──── md, lg, xl, xxl ────┘
//! ```
//!
//! ## Source Order
//!
//! Candidates are emitted largest breakpoint first. Browsers take the first
//! `<source>` whose `media` matches, and every `min-width` condition below the
//! viewport matches, so the largest one must come first to win.

use crate::breakpoints::BreakpointName;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// One image asset targeted at a single breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageDescriptor {
    /// Base URL, without any format query.
    pub url: String,
    /// Intrinsic width in pixels.
    pub width: u32,
    /// Intrinsic height in pixels.
    pub height: u32,
}

/// A breakpoint, its threshold, and the image it carries (if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointEntry {
    pub name: BreakpointName,
    pub min_width_px: u32,
    pub descriptor: Option<ImageDescriptor>,
}

/// Effective intrinsic size at the active breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedDimensions {
    pub width: u32,
    pub height: u32,
}

impl From<&ImageDescriptor> for ResolvedDimensions {
    fn from(d: &ImageDescriptor) -> Self {
        Self {
            width: d.width,
            height: d.height,
        }
    }
}

/// One `<source>` offered to the browser's source selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceCandidate {
    /// Threshold for the `(min-width: Npx)` media condition.
    pub min_width_px: u32,
    /// `srcset` value.
    pub url: String,
    /// `type` value; empty means no type constraint.
    pub mime_type: String,
}

pub const WEBP_QUERY: &str = "?format=webp";
pub const WEBP_MIME: &str = "image/webp";

/// Check that `entries` is a well-formed breakpoint list.
///
/// Well-formed means: exactly one entry per breakpoint in canonical order,
/// thresholds strictly increasing, and an xs descriptor present.
fn validate_entries(entries: &[BreakpointEntry]) -> Result<&ImageDescriptor, ResolveError> {
    let in_order = entries.len() == BreakpointName::ALL.len()
        && entries
            .iter()
            .zip(BreakpointName::ALL)
            .all(|(entry, name)| entry.name == name);
    if !in_order {
        let got: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        return Err(ResolveError::InvalidInput(format!(
            "entries must cover xs, sm, md, lg, xl, xxl in order, got [{}]",
            got.join(", ")
        )));
    }

    if let Some(pair) = entries
        .windows(2)
        .find(|pair| pair[0].min_width_px >= pair[1].min_width_px)
    {
        return Err(ResolveError::InvalidInput(format!(
            "threshold for {} ({}px) must be greater than {} ({}px)",
            pair[1].name, pair[1].min_width_px, pair[0].name, pair[0].min_width_px
        )));
    }

    entries[0]
        .descriptor
        .as_ref()
        .ok_or_else(|| ResolveError::InvalidInput("xs must have an image descriptor".into()))
}

/// Resolve the picture's width/height at the active breakpoint.
///
/// Walks from `active` down toward xs and returns the first descriptor found.
/// An unknown viewport (`None`) resolves straight to xs.
///
/// # Examples
/// ```
/// # use picture_frame::breakpoints::{BreakpointName, BreakpointTable};
/// # use picture_frame::resolve::{ImageDescriptor, resolve_dimensions};
/// let entries = BreakpointTable::default().entries(|name| match name {
///     BreakpointName::Xs => Some(ImageDescriptor { url: "a.jpg".into(), width: 400, height: 300 }),
///     BreakpointName::Md => Some(ImageDescriptor { url: "b.jpg".into(), width: 800, height: 600 }),
///     _ => None,
/// });
/// let dims = resolve_dimensions(Some(BreakpointName::Lg), &entries).unwrap();
/// assert_eq!((dims.width, dims.height), (800, 600));
/// ```
pub fn resolve_dimensions(
    active: Option<BreakpointName>,
    entries: &[BreakpointEntry],
) -> Result<ResolvedDimensions, ResolveError> {
    let xs = validate_entries(entries)?;

    let Some(active) = active else {
        return Ok(xs.into());
    };

    let descriptor = entries[..=active.index()]
        .iter()
        .rev()
        .find_map(|entry| entry.descriptor.as_ref())
        .unwrap_or(xs);
    Ok(descriptor.into())
}

/// Build the `<source>` list, largest breakpoint first.
///
/// Breakpoints without a descriptor are skipped. With `wants_webp`, every URL
/// gets [`WEBP_QUERY`] appended and the type is [`WEBP_MIME`]; otherwise URLs
/// are left alone and the type is empty.
pub fn build_source_candidates(
    entries: &[BreakpointEntry],
    wants_webp: bool,
) -> Result<Vec<SourceCandidate>, ResolveError> {
    validate_entries(entries)?;

    let candidates = entries
        .iter()
        .rev()
        .filter_map(|entry| {
            let descriptor = entry.descriptor.as_ref()?;
            let (url, mime_type) = if wants_webp {
                (format!("{}{WEBP_QUERY}", descriptor.url), WEBP_MIME.to_string())
            } else {
                (descriptor.url.clone(), String::new())
            };
            Some(SourceCandidate {
                min_width_px: entry.min_width_px,
                url,
                mime_type,
            })
        })
        .collect();
    Ok(candidates)
}

/// Height-to-width ratio as a CSS percentage, e.g. `"56.25%"` for 800x450.
///
/// Used as `padding-bottom` to reserve the picture's box before it loads.
/// A zero width is rejected rather than rendered as `inf%`.
pub fn compute_aspect_padding(dimensions: ResolvedDimensions) -> Result<String, ResolveError> {
    if dimensions.width == 0 {
        return Err(ResolveError::InvalidInput(format!(
            "cannot compute aspect padding for zero width ({}x{})",
            dimensions.width, dimensions.height
        )));
    }
    let percent = (dimensions.height as f64 / dimensions.width as f64) * 100.0;
    Ok(format!("{percent}%"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    // =========================================================================
    // resolve_dimensions tests
    // =========================================================================

    #[test]
    fn resolves_to_largest_defined_at_or_below_active() {
        let entries = entries_with(&[
            (BreakpointName::Xs, "a.jpg", 400, 300),
            (BreakpointName::Md, "b.jpg", 800, 600),
        ]);
        let dims = resolve_dimensions(Some(BreakpointName::Lg), &entries).unwrap();
        assert_eq!(dims, ResolvedDimensions { width: 800, height: 600 });
    }

    #[test]
    fn exact_match_wins_over_smaller() {
        let entries = entries_with(&[
            (BreakpointName::Xs, "a.jpg", 400, 300),
            (BreakpointName::Md, "b.jpg", 800, 600),
            (BreakpointName::Xl, "c.jpg", 1600, 900),
        ]);
        let dims = resolve_dimensions(Some(BreakpointName::Xl), &entries).unwrap();
        assert_eq!((dims.width, dims.height), (1600, 900));
    }

    #[test]
    fn unknown_viewport_resolves_to_xs() {
        let entries = entries_with(&[
            (BreakpointName::Xs, "a.jpg", 400, 300),
            (BreakpointName::Md, "b.jpg", 800, 600),
            (BreakpointName::Xxl, "c.jpg", 2000, 1000),
        ]);
        let dims = resolve_dimensions(None, &entries).unwrap();
        assert_eq!((dims.width, dims.height), (400, 300));
    }

    #[test]
    fn xs_only_is_absorbing_for_every_breakpoint() {
        let entries = entries_with(&[(BreakpointName::Xs, "a.jpg", 400, 300)]);
        for name in BreakpointName::ALL {
            let dims = resolve_dimensions(Some(name), &entries).unwrap();
            assert_eq!((dims.width, dims.height), (400, 300), "at {name}");
        }
    }

    #[test]
    fn fallback_is_monotonic_across_all_breakpoints() {
        let defined = [
            (BreakpointName::Xs, "a.jpg", 400, 300),
            (BreakpointName::Sm, "b.jpg", 600, 400),
            (BreakpointName::Lg, "c.jpg", 1000, 500),
        ];
        let entries = entries_with(&defined);
        for active in BreakpointName::ALL {
            let expected = defined
                .iter()
                .rev()
                .find(|(name, ..)| *name <= active)
                .map(|&(_, _, w, h)| (w, h))
                .unwrap();
            let dims = resolve_dimensions(Some(active), &entries).unwrap();
            assert_eq!((dims.width, dims.height), expected, "at {active}");
        }
    }

    #[test]
    fn larger_descriptors_do_not_leak_downward() {
        let entries = entries_with(&[
            (BreakpointName::Xs, "a.jpg", 400, 300),
            (BreakpointName::Xl, "b.jpg", 1600, 900),
        ]);
        let dims = resolve_dimensions(Some(BreakpointName::Md), &entries).unwrap();
        assert_eq!((dims.width, dims.height), (400, 300));
    }

    #[test]
    fn missing_xs_descriptor_is_rejected() {
        let entries = entries_with(&[(BreakpointName::Md, "b.jpg", 800, 600)]);
        let err = resolve_dimensions(Some(BreakpointName::Md), &entries).unwrap_err();
        assert!(err.to_string().contains("xs"));
    }

    #[test]
    fn missing_xs_is_rejected_even_for_unknown_viewport() {
        let entries = entries_with(&[]);
        assert!(resolve_dimensions(None, &entries).is_err());
    }

    #[test]
    fn incomplete_coverage_is_rejected() {
        let mut entries = entries_with(&[(BreakpointName::Xs, "a.jpg", 400, 300)]);
        entries.pop();
        let err = resolve_dimensions(Some(BreakpointName::Sm), &entries).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidInput(_)));
    }

    #[test]
    fn out_of_order_entries_are_rejected() {
        let mut entries = entries_with(&[(BreakpointName::Xs, "a.jpg", 400, 300)]);
        entries.swap(2, 3);
        assert!(resolve_dimensions(Some(BreakpointName::Xs), &entries).is_err());
    }

    #[test]
    fn non_increasing_thresholds_are_rejected() {
        let mut entries = entries_with(&[(BreakpointName::Xs, "a.jpg", 400, 300)]);
        entries[3].min_width_px = entries[2].min_width_px;
        assert!(resolve_dimensions(Some(BreakpointName::Lg), &entries).is_err());
    }

    // =========================================================================
    // build_source_candidates tests
    // =========================================================================

    #[test]
    fn candidates_are_largest_first_and_skip_empty() {
        let entries = entries_with(&[
            (BreakpointName::Xs, "a.jpg", 400, 300),
            (BreakpointName::Md, "b.jpg", 800, 600),
            (BreakpointName::Xl, "c.jpg", 1600, 900),
        ]);
        let candidates = build_source_candidates(&entries, false).unwrap();

        let widths: Vec<u32> = candidates.iter().map(|c| c.min_width_px).collect();
        assert_eq!(widths, vec![1200, 768, 0]);
        let urls: Vec<&str> = candidates.iter().map(|c| c.url.as_str()).collect();
        assert_eq!(urls, vec!["c.jpg", "b.jpg", "a.jpg"]);
    }

    #[test]
    fn candidates_strictly_decrease_when_all_defined() {
        let all: Vec<_> = BreakpointName::ALL
            .into_iter()
            .map(|name| (name, "x.jpg", 100, 100))
            .collect();
        let candidates = build_source_candidates(&entries_with(&all), true).unwrap();
        assert_eq!(candidates.len(), 6);
        assert!(
            candidates
                .windows(2)
                .all(|pair| pair[0].min_width_px > pair[1].min_width_px)
        );
    }

    #[test]
    fn webp_appends_format_query_and_mime() {
        let entries = entries_with(&[
            (BreakpointName::Xs, "a.jpg", 400, 300),
            (BreakpointName::Lg, "b.jpg", 1000, 500),
        ]);
        let candidates = build_source_candidates(&entries, true).unwrap();
        assert_eq!(candidates[0].url, "b.jpg?format=webp");
        assert_eq!(candidates[1].url, "a.jpg?format=webp");
        assert!(candidates.iter().all(|c| c.mime_type == "image/webp"));
    }

    #[test]
    fn without_webp_urls_are_untouched_and_mime_empty() {
        let entries = entries_with(&[
            (BreakpointName::Xs, "a.jpg", 400, 300),
            (BreakpointName::Lg, "b.jpg", 1000, 500),
        ]);
        let candidates = build_source_candidates(&entries, false).unwrap();
        assert_eq!(candidates[0].url, "b.jpg");
        assert!(candidates.iter().all(|c| c.mime_type.is_empty()));
    }

    #[test]
    fn candidates_require_xs() {
        let entries = entries_with(&[(BreakpointName::Lg, "b.jpg", 1000, 500)]);
        assert!(build_source_candidates(&entries, false).is_err());
    }

    // =========================================================================
    // compute_aspect_padding tests
    // =========================================================================

    #[test]
    fn aspect_padding_16_by_9() {
        let dims = ResolvedDimensions { width: 800, height: 450 };
        assert_eq!(compute_aspect_padding(dims).unwrap(), "56.25%");
    }

    #[test]
    fn aspect_padding_whole_number_has_no_fraction() {
        let dims = ResolvedDimensions { width: 400, height: 300 };
        assert_eq!(compute_aspect_padding(dims).unwrap(), "75%");
    }

    #[test]
    fn aspect_padding_portrait_exceeds_hundred() {
        let dims = ResolvedDimensions { width: 400, height: 500 };
        assert_eq!(compute_aspect_padding(dims).unwrap(), "125%");
    }

    #[test]
    fn aspect_padding_zero_width_is_rejected() {
        let dims = ResolvedDimensions { width: 0, height: 450 };
        let err = compute_aspect_padding(dims).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidInput(_)));
    }
}
