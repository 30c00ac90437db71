//! CarouselIntent- und CarouselCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::CarouselCommand;
pub use intent::CarouselIntent;
