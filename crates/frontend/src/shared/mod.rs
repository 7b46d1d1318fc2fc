pub mod components;
pub mod confirm;
pub mod date_utils;
pub mod icons;
pub mod modal;
pub mod page_frame;
pub mod page_standard;
