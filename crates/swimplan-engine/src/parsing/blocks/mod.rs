//! # Block Parsing
//!
//! Two-phase block parsing over normalized plan text.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line gets a `LineType` from
//!    local facts only (leading character, `xN` prefix, `S1 :` label)
//!
//! 2. **Block Construction** (`builder`): lines are grouped on blank lines
//!    (`raw`) and a `BlockAssembler` turns each group into a `SwimBlock`
//!
//! ## Modules
//!
//! - **`classify`**: `classify_line` produces a `ClassifiedLine` for each line
//! - **`raw`**: `split_into_raw_blocks` and `Total : ...` filtering
//! - **`sub_detail`**: `#` lines, distance refinement vs. annotation
//! - **`builder`**: `BlockAssembler` state machine for block construction
//! - **`post`**: standalone `xN` merging and equipment union
//!
//! ## Key Invariants
//!
//! - An exercise line stays pending until the next exercise or the end of its block
//! - Only `Total : ...` lines and empty blocks are ever discarded

pub mod builder;
pub mod classify;
pub mod post;
pub mod raw;
pub mod sub_detail;

pub use builder::BlockAssembler;
pub use classify::{ClassifiedLine, LineType, classify_line};
pub use post::merge_standalone_repetitions;
pub use raw::{RawBlock, split_into_raw_blocks};
pub use sub_detail::{SubDetail, parse_sub_detail};
