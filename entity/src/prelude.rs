pub use super::audit_log::Entity as AuditLog;
pub use super::compliance_document::Entity as ComplianceDocument;
pub use super::embassy_verification::Entity as EmbassyVerification;
pub use super::federation_letter::Entity as FederationLetter;
pub use super::federation_payment::Entity as FederationPayment;
pub use super::fee_schedule::Entity as FeeSchedule;
pub use super::pitchpass_user::Entity as PitchpassUser;
pub use super::player::Entity as Player;
pub use super::scouting_inquiry::Entity as ScoutingInquiry;
pub use super::scouting_message::Entity as ScoutingMessage;
pub use super::token_account::Entity as TokenAccount;
pub use super::token_transaction::Entity as TokenTransaction;
pub use super::upload_slot::Entity as UploadSlot;
pub use super::video::Entity as Video;
