//! Deterministic local paths for discovered resources
//!
//! Every path is a total function of the resource kind and its ordinal
//! within that kind's scan, or, for assets found inside CSS, of the
//! resource's final path segment (`data:` references inside CSS are named
//! by their stylesheet and position instead). No collision resolution is performed:
//! two distinct sources that produce the same path overwrite each other
//! in the archive.

use crate::resources::ResourceKind;
use crate::utils::{ASSET_DIR, basename_of, extension_of};

/// A discovered resource slot, named by its position in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSlot<'a> {
    /// `i`-th `<link rel="stylesheet">`
    Stylesheet { index: usize },
    /// Reference carried by the `i`-th `<img>` (src, srcset candidate or data attribute)
    Image { index: usize, source: &'a str },
    /// `i`-th `<script src>`
    Script { index: usize },
    /// `source_index`-th `<source>` child of the `video`-th `<video>`
    VideoSource {
        video: usize,
        source_index: usize,
        source: &'a str,
    },
    /// `src` attribute of the `i`-th `<video>` itself
    Video { index: usize, source: &'a str },
    /// `poster` attribute of the `i`-th `<video>`
    VideoPoster { index: usize, source: &'a str },
    /// `url(...)` reference found inside a stylesheet
    CssAsset { source: &'a str },
    /// `index`-th `data:` reference inside the stylesheet whose file stem is `stylesheet`
    CssInlineAsset {
        stylesheet: &'a str,
        index: usize,
        source: &'a str,
    },
}

impl AssetSlot<'_> {
    /// Local archive path for this slot
    #[must_use]
    pub fn local_path(&self) -> String {
        format!("{ASSET_DIR}/{}", self.file_name())
    }

    /// File name inside the asset directory
    ///
    /// For CSS assets this is also the reference written back into the
    /// stylesheet, since stylesheets sit in the same directory.
    #[must_use]
    pub fn file_name(&self) -> String {
        match *self {
            AssetSlot::Stylesheet { index } => format!("style{index}.css"),
            AssetSlot::Image { index, source } => {
                format!("image{index}.{}", extension_of(source))
            }
            AssetSlot::Script { index } => format!("script{index}.js"),
            AssetSlot::VideoSource {
                video,
                source_index,
                source,
            } => format!("video{video}_{source_index}.{}", extension_of(source)),
            AssetSlot::Video { index, source } => {
                format!("video{index}.{}", extension_of(source))
            }
            AssetSlot::VideoPoster { index, source } => {
                format!("video{index}_poster.{}", extension_of(source))
            }
            AssetSlot::CssAsset { source } => basename_of(source),
            AssetSlot::CssInlineAsset {
                stylesheet,
                index,
                source,
            } => format!("{stylesheet}_inline{index}.{}", extension_of(source)),
        }
    }

    /// Resource kind recorded for this slot
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        match self {
            AssetSlot::Stylesheet { .. } => ResourceKind::Stylesheet,
            AssetSlot::Image { .. } => ResourceKind::Image,
            AssetSlot::Script { .. } => ResourceKind::Script,
            AssetSlot::VideoSource { .. } | AssetSlot::Video { .. } => ResourceKind::Video,
            AssetSlot::VideoPoster { .. } => ResourceKind::VideoPoster,
            AssetSlot::CssAsset { .. } | AssetSlot::CssInlineAsset { .. } => {
                ResourceKind::CssAsset
            }
        }
    }
}
