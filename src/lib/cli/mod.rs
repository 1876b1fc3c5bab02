pub mod command;
pub mod typedef;
