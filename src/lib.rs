//! # picture-frame
//!
//! Responsive image selection for breakpoint-based layouts. Given one image
//! described per viewport breakpoint (xs through xxl), decides which intrinsic
//! size applies at the current viewport, which `<source>` list to offer the
//! browser, and how much space to reserve before the image arrives. Then
//! renders the matching `<picture>` markup.
//!
//! # Pipeline
//!
//! ```text
//! config.toml ─→ BreakpointTable ─┐
//! image.json  ─→ ImageSet ────────┼─→ entries ─→ resolve ─→ render ─→ HTML
//! viewport / WebP probe ─→ Capabilities ┘
//! ```
//!
//! The resolver in the middle is a set of pure functions: everything it needs
//! is an argument, nothing is probed from inside. Capabilities are measured
//! once by the caller and handed in.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`breakpoints`] | Ordered breakpoint names and the pixel threshold table |
//! | [`resolve`] | Dimension fallback, source candidates, aspect padding |
//! | [`image_set`] | JSON document describing one responsive image |
//! | [`render`] | `<picture>` markup with Maud |
//! | [`config`] | `config.toml` loading, merging, and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Only xs Is Required
//!
//! Authors supply images for the breakpoints where the art actually changes.
//! Every other breakpoint inherits from the nearest smaller one, so xs is the
//! floor that always exists. A set without xs is rejected at resolution time
//! rather than rendered with a zero size.
//!
//! ## No Empty Sources
//!
//! A breakpoint without its own image produces no `<source>` at all. An empty
//! `srcset` is not a meaningful candidate, and the smaller breakpoint's source
//! already matches that viewport.
//!
//! ## Fail Fast on Degenerate Sizes
//!
//! Aspect padding for a zero-width image is an error, not `inf%`. Layout
//! defects like that are hard to spot on screen and cheap to catch here.

pub mod breakpoints;
pub mod config;
pub mod image_set;
pub mod output;
pub mod render;
pub mod resolve;

#[cfg(test)]
pub(crate) mod test_helpers;
