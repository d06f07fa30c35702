pub mod home;
pub mod research;
pub mod feed;
pub mod portfolio;
pub mod trading;
pub mod legal;
pub mod not_found;
