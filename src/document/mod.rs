//! The derived Document Model and its offset mapping.
//!
//! The [`RenderTree`](crate::tree::RenderTree) is authoritative; the
//! [`Document`] is a normalized, derived view rebuilt from it after every
//! edit. All cursor arithmetic happens in the Document's flat-text char
//! coordinate space.

mod offsets;
mod segment;

#[allow(clippy::module_inception)]
mod document;

pub use document::Document;
pub use offsets::{from_flat_offset, to_flat_offset};
pub use segment::Segment;
