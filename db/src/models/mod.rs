pub mod account;
pub mod admin;
pub mod course;
pub mod instructor;
pub mod key;
pub mod role;
pub mod student;
