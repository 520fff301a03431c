pub mod course;
pub mod profile;
pub mod scorer;

pub use course::{Course, InputMethod, MarksDetails};
pub use profile::MarksProfile;
pub use scorer::CourseScorer;
