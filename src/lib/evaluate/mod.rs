pub mod command;
mod helper;
pub mod typedef;

#[cfg(test)]
mod tests;
