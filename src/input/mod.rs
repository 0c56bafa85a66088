pub mod events;
pub mod handler;

// Re-export the essential types
pub use events::{InputEvent, KeyCode, MapEvent, MouseButton};
pub use handler::{Action, InputHandler};
