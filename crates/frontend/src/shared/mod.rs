pub mod components;
pub mod defaults;
pub mod export;
pub mod i18n;
pub mod storage;
pub mod toast;
