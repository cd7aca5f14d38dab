mod availability_page;
mod card;
mod details;
mod filters;
mod list;
mod profile_editor;

pub use availability_page::AvailabilityPage;
pub use card::TutorCard;
pub use details::TutorDetailsPage;
pub use filters::TutorFiltersPanel;
pub use list::TutorsPage;
pub use profile_editor::TutorProfileEditorPage;
