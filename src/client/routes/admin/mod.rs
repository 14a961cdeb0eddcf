pub mod audit;
pub mod fees;
pub mod overview;
pub mod payments;

pub use audit::AuditLogs;
pub use fees::FeeSchedules;
pub use overview::AdminOverview;
pub use payments::FederationPayments;
