pub mod add;
pub mod init;
pub mod list;
mod tailwind;
