//! Praxis curriculum document processing.
//!
//! This crate parses the hand-authored Markdown dialect of the praxis
//! curriculum (a roadmap of levels and projects, per-project `SPEC.md`
//! documents, and master spec documents) and renders the derived checklist
//! files. Parsing is regex-based and deliberately permissive: lines that match
//! no expected pattern are skipped, since the source documents are prose mixed
//! with structured bullets.

pub mod cursor;
pub mod features;
pub mod layout;
pub mod model;
pub mod render;
pub mod roadmap;
pub mod slug;
pub mod split;
pub mod status;

pub use cursor::*;
pub use features::*;
pub use layout::*;
pub use model::*;
pub use render::*;
pub use roadmap::*;
pub use slug::*;
pub use split::*;
pub use status::*;
