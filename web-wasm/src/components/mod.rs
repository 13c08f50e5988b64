pub mod filter_panel;
pub mod header;
pub mod home_button;
pub mod limit_control;
pub mod notice_toast;
pub mod pagination;
pub mod record_gallery;
pub mod upload_area;
