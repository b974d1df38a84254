pub mod analytics_service;
pub mod chart_service;
pub mod generator_service;
pub mod portfolio_service;
