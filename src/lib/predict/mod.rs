pub mod command;
mod helper;
pub mod typedef;

pub use helper::parse_prediction_payload;
