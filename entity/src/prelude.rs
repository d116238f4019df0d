pub use super::camp::Entity as Camp;
pub use super::speaker::Entity as Speaker;
pub use super::talk::Entity as Talk;
