pub mod create_review;
pub mod delete_review;
pub mod get_review;
pub mod get_reviews;
pub mod update_review;
