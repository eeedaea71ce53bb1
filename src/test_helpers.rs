//! Shared test utilities for the picture-frame test suite.
//!
//! Builders for the descriptor lists and image sets that most tests need,
//! so individual tests only spell out the breakpoints they care about.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let entries = entries_with(&[
//!     (BreakpointName::Xs, "a.jpg", 400, 300),
//!     (BreakpointName::Md, "b.jpg", 800, 600),
//! ]);
//! let set = image_set_with(&[(BreakpointName::Xs, "a.jpg", 400, 300)]);
//! ```

use crate::breakpoints::{BreakpointName, BreakpointTable};
use crate::image_set::ImageSet;
use crate::resolve::{BreakpointEntry, ImageDescriptor};

/// `(breakpoint, url, width, height)` shorthand used by the builders below.
pub type Spec<'a> = (BreakpointName, &'a str, u32, u32);

pub fn descriptor(url: &str, width: u32, height: u32) -> ImageDescriptor {
    ImageDescriptor {
        url: url.to_string(),
        width,
        height,
    }
}

fn lookup(specs: &[Spec<'_>], name: BreakpointName) -> Option<ImageDescriptor> {
    specs
        .iter()
        .find(|(n, ..)| *n == name)
        .map(|&(_, url, w, h)| descriptor(url, w, h))
}

/// Full entry list against the default thresholds. Unlisted breakpoints are empty.
pub fn entries_with(specs: &[Spec<'_>]) -> Vec<BreakpointEntry> {
    BreakpointTable::default().entries(|name| lookup(specs, name))
}

/// An image set with `alt = "test image"` and everything else defaulted.
pub fn image_set_with(specs: &[Spec<'_>]) -> ImageSet {
    let mut set = ImageSet {
        alt: "test image".to_string(),
        ..ImageSet::default()
    };
    for name in BreakpointName::ALL {
        *set.descriptor_mut(name) = lookup(specs, name);
    }
    set
}
