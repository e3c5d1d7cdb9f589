//! UIコンポーネント

pub mod error_banner;
pub mod header;
pub mod processing_status;
pub mod results_display;
pub mod selected_files;
pub mod upload_area;
