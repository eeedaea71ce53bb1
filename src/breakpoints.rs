//! Named viewport breakpoints and their pixel thresholds.
//!
//! The breakpoint set is closed and ordered from the smallest viewport to the
//! largest:
//!
//! ```text
//! xs < sm < md < lg < xl < xxl
//! ```
//!
//! Every per-breakpoint list in the crate (threshold table, descriptor list,
//! source candidates) follows this order. [`BreakpointName::ALL`] is the single
//! place it is written down.
//!
//! ## Threshold Table
//!
//! [`BreakpointTable`] maps each name to the minimum viewport width (in CSS
//! pixels) at which it applies. It is loaded once from the `[breakpoints]`
//! section of `config.toml` and passed around as an immutable value.
//!
//! | Name | Default min-width |
//! |------|-------------------|
//! | xs   | 0                 |
//! | sm   | 576               |
//! | md   | 768               |
//! | lg   | 992               |
//! | xl   | 1200              |
//! | xxl  | 1400              |

use crate::resolve::{BreakpointEntry, ImageDescriptor, ResolveError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed, ordered viewport breakpoints.
///
/// The derived `Ord` follows declaration order, so `Xs < Sm < ... < Xxl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakpointName {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl BreakpointName {
    /// All breakpoints, smallest viewport first.
    pub const ALL: [BreakpointName; 6] = [
        BreakpointName::Xs,
        BreakpointName::Sm,
        BreakpointName::Md,
        BreakpointName::Lg,
        BreakpointName::Xl,
        BreakpointName::Xxl,
    ];

    /// Position in [`Self::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BreakpointName::Xs => "xs",
            BreakpointName::Sm => "sm",
            BreakpointName::Md => "md",
            BreakpointName::Lg => "lg",
            BreakpointName::Xl => "xl",
            BreakpointName::Xxl => "xxl",
        }
    }
}

impl fmt::Display for BreakpointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BreakpointName {
    type Err = ResolveError;

    /// Parse a breakpoint name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BreakpointName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ResolveError::InvalidInput(format!(
                    "unknown breakpoint '{s}' (expected one of xs, sm, md, lg, xl, xxl)"
                ))
            })
    }
}

/// Minimum viewport width, in CSS pixels, for each breakpoint.
///
/// Doubles as the `[breakpoints]` config section. Values must be strictly
/// increasing in [`BreakpointName::ALL`] order; see [`Self::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BreakpointTable {
    pub xs: u32,
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
    pub xl: u32,
    pub xxl: u32,
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self {
            xs: 0,
            sm: 576,
            md: 768,
            lg: 992,
            xl: 1200,
            xxl: 1400,
        }
    }
}

impl BreakpointTable {
    /// Threshold for a single breakpoint.
    pub fn min_width(&self, name: BreakpointName) -> u32 {
        match name {
            BreakpointName::Xs => self.xs,
            BreakpointName::Sm => self.sm,
            BreakpointName::Md => self.md,
            BreakpointName::Lg => self.lg,
            BreakpointName::Xl => self.xl,
            BreakpointName::Xxl => self.xxl,
        }
    }

    /// Check that thresholds strictly increase from xs to xxl.
    ///
    /// Source candidates are emitted largest-first for "first match wins"
    /// selection, which only works if no two breakpoints share a threshold.
    pub fn validate(&self) -> Result<(), String> {
        for pair in BreakpointName::ALL.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            if self.min_width(lower) >= self.min_width(upper) {
                return Err(format!(
                    "breakpoints.{upper} ({}) must be greater than breakpoints.{lower} ({})",
                    self.min_width(upper),
                    self.min_width(lower),
                ));
            }
        }
        Ok(())
    }

    /// The breakpoint active at a given viewport width.
    ///
    /// Returns the largest breakpoint whose threshold is at or below `width`.
    /// A width below the xs threshold is an unknown viewport (`None`).
    pub fn breakpoint_for_width(&self, width: u32) -> Option<BreakpointName> {
        BreakpointName::ALL
            .into_iter()
            .rev()
            .find(|&name| self.min_width(name) <= width)
    }

    /// Build the canonical entry list, one entry per breakpoint in order.
    ///
    /// `descriptor_for` is asked once per name; returning `None` leaves that
    /// breakpoint without an image.
    pub fn entries<F>(&self, mut descriptor_for: F) -> Vec<BreakpointEntry>
    where
        F: FnMut(BreakpointName) -> Option<ImageDescriptor>,
    {
        BreakpointName::ALL
            .into_iter()
            .map(|name| BreakpointEntry {
                name,
                min_width_px: self.min_width(name),
                descriptor: descriptor_for(name),
            })
            .collect()
    }
}
