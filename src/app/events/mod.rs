//! Intent- und Command-Events der Zeichensitzung.

mod command;
mod intent;

pub use command::DrawCommand;
pub use intent::DrawIntent;
