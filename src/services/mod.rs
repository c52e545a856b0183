pub mod admin_service;
pub mod auth_service;
