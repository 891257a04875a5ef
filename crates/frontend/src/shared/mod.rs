pub mod api;
pub mod components;
pub mod data;
pub mod icons;
pub mod toast;
