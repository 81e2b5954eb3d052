pub mod customization;
pub mod domain;
pub mod system;
