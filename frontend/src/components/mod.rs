pub mod history;
pub mod home;
pub mod offline_notice;
pub mod result;
pub mod scan;
