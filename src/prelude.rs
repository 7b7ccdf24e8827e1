//! Commonly used vartab types and entry points.

pub use crate::data_structs::schema::{
    SampleField,
    SampleRoster,
    CALL_FIXED_COLUMNS,
};
pub use crate::data_structs::table::AnnotationTable;
pub use crate::error::{Result, VartabError};
#[cfg(feature = "compression")]
pub use crate::io::compression::Compression;
pub use crate::io::{read_call_table, read_vep_table, TableWriter};
