pub mod balance_service;
pub mod gas_service;
pub mod price_service;
