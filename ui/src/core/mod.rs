pub mod history;
pub mod platform;
pub mod theme;
pub mod upload;
