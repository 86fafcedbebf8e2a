pub mod authentication;
pub mod health;
pub mod review;
pub mod server;
pub mod symptom;
pub mod treatment;
