//! HTML rendering of a responsive picture.
//!
//! Turns an [`ImageSet`] into static markup using the resolver's decisions:
//!
//! ```text
//! div.responsive-image            ← reserves space (aspect padding) or fixed size
//! ├── picture.placeholder         ← lazy only: xs image at low quality
//! │   ├── source srcset="a.jpg?format=jpg&quality=10"
//! │   └── img
//! └── picture                     ← sources largest breakpoint first
//!     ├── source media="(min-width:768px)"  srcset="b.jpg"
//!     ├── source media="(min-width:0px)"    srcset="a.jpg"
//!     └── img loading="lazy"
//! ```
//!
//! Runtime facts (active breakpoint, WebP support) are probed once by the
//! caller and passed in as [`Capabilities`]. Deciding *when* a lazy picture
//! becomes visible belongs to the page's own script; the markup only flags it
//! with `data-lazy` and `loading="lazy"`.
//!
//! Uses [maud](https://maud.lambda.xyz/) so all interpolated URLs and alt text
//! are escaped.

use crate::breakpoints::BreakpointName;
use crate::config::PictureConfig;
use crate::image_set::ImageSet;
use crate::resolve::{
    ResolveError, ResolvedDimensions, build_source_candidates, compute_aspect_padding,
    resolve_dimensions,
};
use maud::{Markup, html};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// What the caller knows about the viewing environment, computed once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Active breakpoint, `None` when the viewport is unknown.
    pub breakpoint: Option<BreakpointName>,
    /// Whether the browser accepts WebP.
    pub webp: bool,
}

/// Render the complete responsive picture for one image set.
pub fn render_picture(
    set: &ImageSet,
    caps: Capabilities,
    config: &PictureConfig,
) -> Result<Markup, RenderError> {
    let entries = set.entries(&config.breakpoints);
    let dims = resolve_dimensions(caps.breakpoint, &entries)?;
    let candidates = build_source_candidates(&entries, caps.webp)?;

    let lazy = set.lazy.unwrap_or(config.render.lazy);
    let dimensions_fit = set.dimensions_fit.unwrap_or(config.render.dimensions_fit);
    let style = wrapper_style(dims, dimensions_fit)?;

    let mut class = String::from("responsive-image");
    if let Some(extra) = set.class_name.as_deref().filter(|c| !c.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    if dimensions_fit {
        class.push_str(" dimensions-fit");
    }

    // The resolver already rejected a set without xs.
    let fallback_src = set.xs.as_ref().map(|d| d.url.as_str()).unwrap_or_default();

    Ok(html! {
        div class=(class) style=(style) data-lazy[lazy] {
            @if lazy {
                picture class="placeholder" {
                    source srcset=(format!("{}{}", fallback_src, config.placeholder.query()));
                    img alt=(set.alt) width=(dims.width) height=(dims.height) aria-hidden="true";
                }
            }
            picture {
                @for candidate in &candidates {
                    source
                        media=(format!("(min-width:{}px)", candidate.min_width_px))
                        srcset=(candidate.url)
                        type=[non_empty(&candidate.mime_type)];
                }
                img
                    src=(fallback_src)
                    alt=(set.alt)
                    width=(dims.width)
                    height=(dims.height)
                    loading=[lazy.then_some("lazy")];
            }
        }
    })
}

/// Inline style for the wrapper.
///
/// Always exposes the resolved size as custom properties; adds aspect padding
/// unless the wrapper is sized from the intrinsic dimensions.
fn wrapper_style(dims: ResolvedDimensions, dimensions_fit: bool) -> Result<String, ResolveError> {
    let mut style = format!(
        "--image-width: {}px; --image-height: {}px;",
        dims.width, dims.height
    );
    if !dimensions_fit {
        style.push_str(&format!(
            " padding-bottom: {};",
            compute_aspect_padding(dims)?
        ));
    }
    Ok(style)
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}
