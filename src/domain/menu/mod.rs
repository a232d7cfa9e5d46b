mod choice;
#[allow(clippy::module_inception)]
mod menu;

pub use choice::Choice;
pub use menu::Menu;
