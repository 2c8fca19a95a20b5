//! Typed views over the pieces of a pack's `data` folder

pub mod adv_type;
pub mod advancement;
pub mod functions;
pub mod tab;
