pub mod lookup;
pub mod verifications;

pub use lookup::EmbassyLookup;
pub use verifications::Verifications;
