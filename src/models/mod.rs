//! Plain data types shared across the crate.

mod question;
mod screen;

pub use question::QuestionRecord;
pub use screen::Screen;
