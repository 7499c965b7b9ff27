pub mod building;
pub mod point;
pub mod region;
pub mod summary;

pub use building::BuildingRecord;
pub use point::PresampledPoint;
pub use region::{Region, Selection};
pub use summary::{SummaryMeasure, SummaryRow};
