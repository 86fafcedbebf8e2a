pub mod treatment_repository;
