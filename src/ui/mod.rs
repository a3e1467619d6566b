//! UI panel rendering subsystem
//!
//! - Header panel (theme selector, debug trace, pointer readout)
//! - Root panel (page containers and the hover target)
//! - Input handling (pointer-move forwarding)

pub mod header;
pub mod root_panel;
pub mod input;
