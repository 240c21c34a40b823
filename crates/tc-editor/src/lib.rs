pub mod editor;
pub mod history;
pub mod input;
pub mod shortcuts;
pub mod tools;

pub use editor::{ControlState, EditorState, Effects};
pub use history::History;
