//! bacap_parser reads BlazeandCave's Advancements Pack style datapacks into a typed model
//!
//! Note: Reading is tolerant at the file level, a malformed advancement is logged and skipped so
//! that one bad file cannot take down a whole pack<br>
//! Structural problems (no `pack.mcmeta`, no `data` folder, missing reward namespace) do fail the
//! read because nothing useful can be decoded without them<br>
//! Reward functions are never executed, their command text is decoded against a fixed set of
//! patterns instead

mod datapack;
pub use datapack::*;
pub mod data;
pub mod error;
pub mod json;
mod parser;
pub use parser::Parser;
pub mod patterns;
