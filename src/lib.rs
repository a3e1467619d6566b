pub mod events;
pub mod pointer;
pub mod hover;
pub mod indicator;
pub mod region;
pub mod root_view;
pub mod style;
pub mod theme;
pub mod settings;

// Export event plumbing
pub use events::{EventSource, PointerEvents, Subscription};

// Export the tracker and the shared hover state
pub use pointer::{PointerPosition, PointerTracker, PositionHandle};
pub use hover::{CursorVariant, HoverStateStore, VariantSetter, HOVERED};

// Export indicator model and styling
pub use indicator::{class_name, IndicatorElement, IndicatorFrame, Placement, DOT_CLASS, RING_CLASS};
pub use style::{IndicatorStyle, StylePatch, StyleSheet};

// Export view composition
pub use region::{HoverRegion, HoverTransition};
pub use root_view::{RegionId, RootView};

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, with_alpha};

// Export configuration
pub use settings::CursorSettings;
