pub mod api_utils;
pub mod components;
pub mod export;
pub mod format;
pub mod locale;
pub mod page_frame;
pub mod page_standard;
