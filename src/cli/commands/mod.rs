pub mod check;
mod command_result;
pub mod helper;
pub mod init;
pub mod transform;

pub use command_result::*;
