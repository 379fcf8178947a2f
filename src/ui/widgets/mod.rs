pub mod controls;
pub mod sky;
