pub mod order;
pub mod payment_method;
pub mod service;
pub mod site_settings;
