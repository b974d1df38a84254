pub mod analytics;
pub mod chart;
pub mod event;
pub mod holding;
pub mod portfolio;
pub mod price;
pub mod selection;
pub mod settings;
