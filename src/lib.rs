// Library exports for integration tests and reusable components

#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod ui;

pub mod api;
pub mod categories;
pub mod models;
