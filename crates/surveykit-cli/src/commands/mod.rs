pub mod init;
pub mod retype;
pub mod score;
pub mod take;
pub mod validate;
