// Application layer - Use cases and repository ports
pub mod dashboard_repository;
pub mod split_service;
