pub mod messages;
pub mod roster;
