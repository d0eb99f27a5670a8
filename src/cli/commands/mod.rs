pub mod form;
pub mod helper;
pub mod init;
pub mod options;
pub mod query;
pub mod resolve;
pub mod select;
pub mod validate;
