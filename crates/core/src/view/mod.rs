pub mod charts;
pub mod notifier;
pub mod renderer;
pub mod scheduler;
pub mod stock_page;
pub mod view_model;
