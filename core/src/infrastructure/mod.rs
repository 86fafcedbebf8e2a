pub mod authentication;
pub mod db;
pub mod object_storage;
pub mod review;
pub mod symptom;
pub mod treatment;
