pub mod ancillary;
pub mod chart;
pub mod filter;
pub mod fragment;
pub mod holding;
pub mod notification;
pub mod settings;
pub mod snapshot;
pub mod stock;
pub mod trade;
