pub mod get_me;
pub mod login;
pub mod logout;
pub mod update_email;
pub mod update_password;
pub mod update_username;
