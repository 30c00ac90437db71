//! Application-Layer: Controller, State, Events und Command-Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
pub mod state;

pub use command_log::CommandLog;
pub use controller::CarouselController;
pub use events::{CarouselCommand, CarouselIntent};
pub use render_scene::{CardScene, CardVisual};
pub use state::CarouselState;
