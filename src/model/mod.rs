pub mod column;
pub mod project;
pub mod store;
pub mod validation;

pub use column::ColumnView;
pub use project::{Project, ProjectStatus};
pub use store::ProjectStore;
