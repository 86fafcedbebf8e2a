pub mod auth_state_repository;
