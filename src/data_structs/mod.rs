pub mod schema;
pub mod table;

pub use schema::{SampleField, SampleRoster, CALL_FIXED_COLUMNS};
pub use table::AnnotationTable;
