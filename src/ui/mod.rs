//! UI-Schicht: Input-Sammlung und egui-Darstellung.

pub mod carousel_view;
pub mod input;
pub mod menu;
pub mod options_window;
pub mod status;

pub use carousel_view::paint_card_scene;
pub use input::InputState;
pub use menu::render_menu;
pub use options_window::show_options_window;
pub use status::render_status_bar;
