pub mod point_filter;
pub mod summarizer;

pub use point_filter::{PointFilter, VacancyFilter};
pub use summarizer::Summarizer;
