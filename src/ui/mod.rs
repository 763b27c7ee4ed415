pub mod board;
pub mod dialogs;
pub mod drag;
pub mod theme;
pub mod toolbar;
