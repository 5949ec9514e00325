//! Interactive password screen.

mod app;
mod input;
mod screen;
mod text;

pub use input::*;
pub use screen::gen_main_screen;
pub use text::*;

/// Run interactive mode.
pub fn run() {
    gen_main_screen();
}
