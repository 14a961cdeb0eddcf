pub mod prelude;

pub mod audit_log;
pub mod compliance_document;
pub mod embassy_verification;
pub mod federation_letter;
pub mod federation_payment;
pub mod fee_schedule;
pub mod pitchpass_user;
pub mod player;
pub mod scouting_inquiry;
pub mod scouting_message;
pub mod token_account;
pub mod token_transaction;
pub mod upload_slot;
pub mod video;
