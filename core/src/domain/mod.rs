pub mod authentication;
pub mod common;
pub mod health;
pub mod review;
pub mod storage;
pub mod symptom;
pub mod treatment;
