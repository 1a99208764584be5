pub mod diff_service;
pub mod endpoints;
pub mod env_resolver;
pub mod shape_checker;
pub mod validator;
