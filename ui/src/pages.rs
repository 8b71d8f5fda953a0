pub mod about;
pub mod business;
pub mod contact;
pub mod hidden;
pub mod home;
pub mod not_found;
pub mod sections;
