mod course_groups;
mod overcommitment;
mod stats;
pub mod views;

pub use course_groups::group_selections_by_course;
pub use overcommitment::{find_overcommitted_candidates, OVERCOMMITMENT_THRESHOLD};
pub use stats::compute_selection_stats;
