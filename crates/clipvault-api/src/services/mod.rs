pub mod signing;
pub mod upload;
