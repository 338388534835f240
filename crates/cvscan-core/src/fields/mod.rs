pub mod contact;
pub mod experience;
pub mod skills;

pub use contact::{extract_contact_info, ContactInfo};
pub use experience::estimate_experience;
pub use skills::match_skills;
