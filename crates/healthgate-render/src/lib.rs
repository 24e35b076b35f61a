//! Rendering utilities for CI surfaces (Markdown, console, GitHub Actions).
//!
//! Renderers consume a flattened renderable model rather than the report
//! envelope directly, and must losslessly surface every determination.

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod model;
mod text;

pub use gha::{render_github_annotations, render_github_outputs};
pub use markdown::render_markdown;
pub use model::{
    RenderableCategory, RenderableData, RenderableDetermination, RenderableOutcome,
    RenderableReport, RenderableVerdict,
};
pub use text::render_text;
