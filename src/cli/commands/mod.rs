pub mod config;
pub mod init;
pub mod load;
pub mod report;
pub mod run;
pub mod stats;
