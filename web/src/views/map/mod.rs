pub mod icons;
pub mod responder_map;
pub mod responder_marker;
pub mod responder_popup;
pub mod user_marker;

pub use responder_map::ResponderMap;
