pub mod entry_service;
pub mod price_service;
