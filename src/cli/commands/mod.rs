pub mod add;
pub mod config;
pub mod cycle;
pub mod del;
pub mod export;
pub mod init;
pub mod mode;
pub mod reset;
pub mod set;
pub mod show;
