pub mod orders;
pub mod payment_methods;
pub mod services;
pub mod site_settings;
