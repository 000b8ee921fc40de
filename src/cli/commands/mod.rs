mod command_result;
pub mod helper;
pub mod init;
pub mod parse;
pub mod sync;

pub use command_result::*;
