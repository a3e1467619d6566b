//! Input handling subsystem.
//!
//! - Pointer-move forwarding into the pointer event source

pub mod pointer_input;
