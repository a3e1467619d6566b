//! Low-level rendering for the cursor indicator.

pub mod dot_ring_renderer;
