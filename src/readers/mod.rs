pub mod building_reader;
pub mod point_store;

pub use building_reader::{BuildingReader, ColumnMapping};
pub use point_store::PointStore;
