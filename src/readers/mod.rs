pub mod record;
pub mod source;

pub use record::parse_record;
pub use source::MeasurementFile;
