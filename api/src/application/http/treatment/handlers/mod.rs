pub mod create_treatment;
pub mod delete_treatment;
pub mod get_treatment;
pub mod get_treatment_rating;
pub mod get_treatments;
pub mod update_treatment;
pub mod upload_treatment_image;
