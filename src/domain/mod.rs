pub mod company;
pub mod day;
pub mod events;
pub mod report;
pub mod roster;

pub use company::{CompanyDirectory, CompanyDraft, DiscardingDirectory, DraftField};
pub use day::CalendarDay;
pub use events::{EventRecord, EventStore};
pub use report::{ExportFormat, MethodShare, TrendPoint, TrendSeries};
