pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
pub mod routing;
