use chrono::{DateTime, Local};
use egui::Color32;
use uuid::Uuid;

/// The two board columns a project can live in. A project is always in
/// exactly one of these; there is no intermediate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Finished => "Finished",
        }
    }

    /// Accent color for the column header and card edge.
    pub fn accent(self) -> Color32 {
        match self {
            ProjectStatus::Active => Color32::from_rgb(80, 140, 220),
            ProjectStatus::Finished => Color32::from_rgb(52, 168, 83),
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single project card on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Number of people assigned. Bounded to 1..=5 at input time.
    pub people: u32,
    pub status: ProjectStatus,
    pub created: DateTime<Local>,
}

impl Project {
    /// Create a new project. New projects always start out `Active`;
    /// only `ProjectStore::add_project` should call this.
    pub(crate) fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
            created: Local::now(),
        }
    }

    /// "1 person" / "n people" for the card footer.
    pub fn people_label(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} people", self.people)
        }
    }
}
