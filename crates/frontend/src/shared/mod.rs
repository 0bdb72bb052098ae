pub mod data;
pub mod date_utils;
pub mod file_utils;
pub mod icons;
pub mod list_utils;
