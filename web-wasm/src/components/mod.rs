pub mod header;
pub mod file_upload;
pub mod image_preview;
pub mod caption_display;
pub mod report_display;
pub mod generate_button;
pub mod features;
