pub mod aggregation;
mod records;
mod reports;

pub use records::RecordService;
pub use reports::ReportService;
