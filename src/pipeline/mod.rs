//! The two generation stages: background request, then text composition.
//! Each stage is a single linear pass; ordering between them belongs to the
//! workflow that invokes them.

pub mod background;
pub mod compositor;
pub mod font;

pub use background::{build_generation_request, build_prompt, request_background};
pub use compositor::{compose_cover, render_cover};
pub use font::CoverFont;
