pub mod components;
pub mod config;
pub mod page_data;
pub mod page_frame;
pub mod selection;
