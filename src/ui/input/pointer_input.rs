//! Pointer input forwarding.
//!
//! egui collects raw window events per frame. This module replays the pointer
//! moves into the application's `PointerEvents` source, which is what every
//! mounted `PointerTracker` listens to.

use eframe::egui;
use dotring::PointerEvents;

/// Dispatches this frame's pointer-move events in arrival order.
///
/// # Returns
/// The number of pointer-move events forwarded
pub fn forward_pointer_moves(ctx: &egui::Context, events: &PointerEvents) -> usize {
    // Collect first so listeners never run while the input lock is held
    let moves: Vec<egui::Pos2> = ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::PointerMoved(pos) => Some(*pos),
                _ => None,
            })
            .collect()
    });

    for pos in &moves {
        events.dispatch((*pos).into());
    }
    moves.len()
}

/// Returns true while the pointer is over the window.
pub fn pointer_inside(ctx: &egui::Context) -> bool {
    ctx.input(|i| i.pointer.has_pointer())
}
