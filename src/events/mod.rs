pub mod gesture;
pub mod layout;

pub use gesture::wire_gesture_handlers;
pub use layout::{wire_layout_handlers, LayoutWiring};
