//! Huemix library exports for testing

pub mod audio;
pub mod core;
pub mod session;
pub mod tui;

#[cfg(test)]
pub mod test_support;
