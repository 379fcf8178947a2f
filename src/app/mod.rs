pub mod controls;
pub mod events;
pub mod icon;
pub mod state;
