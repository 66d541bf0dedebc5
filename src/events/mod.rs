pub mod keyboard;
pub mod scroll;

pub use keyboard::wire_escape;
pub use scroll::wire_coalesced_scroll;
