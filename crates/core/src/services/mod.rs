pub mod chart_service;
pub mod diff_service;
pub mod export_service;
pub mod fetch_service;
pub mod insight_service;
pub mod presenter_service;
pub mod projection_service;
