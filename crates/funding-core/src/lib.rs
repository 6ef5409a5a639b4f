pub mod currency;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;
