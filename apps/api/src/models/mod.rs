pub mod role;
pub mod upload;
