pub mod command;
mod helper;
pub mod typedef;
