pub mod inquiries;
pub mod overview;
pub mod thread;

pub use inquiries::Inquiries;
pub use overview::ScoutingOverview;
pub use thread::InquiryThread;
