//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line scan** (`scan`): each source line is offered to the installed
//!    [`BlockRecognizer`]s. Lines they claim are removed from the body; the
//!    rest is grouped into contiguous body regions.
//!
//! 2. **Tree construction** (`tree`): each body region is parsed as
//!    CommonMark and folded into `BlockNode`s.
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Document`, `BlockNode`, `BlockKind`)
//! - **`recognizer`**: The block recognizer hook and its per-parse state
//! - **`scan`**: `LineScanner` driving recognizers over the source lines
//! - **`tree`**: `parse_body` turning CommonMark events into blocks
//! - **`walk`**: `Walk`, a lazy pre-order traversal with early exit
//!
//! ## Key Invariants
//!
//! - Claimed lines never reach the body parser
//! - All block nodes store absolute byte spans into the source
//! - Containers hold blocks, leaves hold inlines

pub mod recognizer;
pub mod scan;
pub mod tree;
pub mod types;
pub mod walk;

pub use recognizer::{BlockRecognizer, BlockState, OpenBlock};
pub use scan::{LineScanner, Region};
pub use tree::parse_body;
pub use types::{BlockKind, BlockNode, Document};
pub use walk::Walk;
