pub mod auth_button;
pub mod dashboard;
pub mod detail_modal;
pub mod handlers;
pub mod header;
pub mod history;
pub mod preview_area;
pub mod results;
pub mod stats_chart;
pub mod upload_page;
pub mod upload_section;
pub mod utils;
