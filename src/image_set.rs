//! The image-set document: one responsive picture described as JSON.
//!
//! An image set carries the per-breakpoint descriptors plus the presentational
//! options the renderer needs:
//!
//! ```json
//! {
//!   "alt": "Harbour at dusk",
//!   "class_name": "hero",
//!   "lazy": true,
//!   "dimensions_fit": false,
//!   "xs": { "url": "/img/harbour-400.jpg", "width": 400, "height": 300 },
//!   "md": { "url": "/img/harbour-800.jpg", "width": 800, "height": 600 }
//! }
//! ```
//!
//! Only `xs` is required for resolution to succeed, but that is checked by the
//! resolver, not at parse time, so `check` can report it with context.
//! `lazy` and `dimensions_fit` fall back to the `[render]` config section when
//! omitted. Unknown keys are rejected to catch typos early.

use crate::breakpoints::{BreakpointName, BreakpointTable};
use crate::resolve::{BreakpointEntry, ImageDescriptor};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageSetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageSet {
    /// Alternative text for the rendered `<img>`.
    #[serde(default)]
    pub alt: String,
    /// Extra class added to the wrapper element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Render a low-quality placeholder and defer the full picture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lazy: Option<bool>,
    /// Size the wrapper from the intrinsic dimensions instead of reserving
    /// space with aspect padding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions_fit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xs: Option<ImageDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sm: Option<ImageDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md: Option<ImageDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lg: Option<ImageDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xl: Option<ImageDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xxl: Option<ImageDescriptor>,
}

impl ImageSet {
    /// Read and parse an image-set JSON file.
    pub fn load(path: &Path) -> Result<Self, ImageSetError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn descriptor(&self, name: BreakpointName) -> Option<&ImageDescriptor> {
        match name {
            BreakpointName::Xs => self.xs.as_ref(),
            BreakpointName::Sm => self.sm.as_ref(),
            BreakpointName::Md => self.md.as_ref(),
            BreakpointName::Lg => self.lg.as_ref(),
            BreakpointName::Xl => self.xl.as_ref(),
            BreakpointName::Xxl => self.xxl.as_ref(),
        }
    }

    pub fn descriptor_mut(&mut self, name: BreakpointName) -> &mut Option<ImageDescriptor> {
        match name {
            BreakpointName::Xs => &mut self.xs,
            BreakpointName::Sm => &mut self.sm,
            BreakpointName::Md => &mut self.md,
            BreakpointName::Lg => &mut self.lg,
            BreakpointName::Xl => &mut self.xl,
            BreakpointName::Xxl => &mut self.xxl,
        }
    }

    /// Entry list for the resolver, thresholds taken from `table`.
    pub fn entries(&self, table: &BreakpointTable) -> Vec<BreakpointEntry> {
        table.entries(|name| self.descriptor(name).cloned())
    }
}
