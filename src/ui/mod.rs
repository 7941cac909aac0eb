pub mod layout;
mod picture;
mod quiz;

pub use layout::{calculate_quiz_chunks, centered_rect};
pub use picture::picture_lines;
pub use quiz::{INPUT_PLACEHOLDER, draw_quit_confirmation, draw_quiz};
