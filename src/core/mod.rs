pub mod builder;
pub mod executor;
pub mod logs;
pub mod reader;
pub mod replay;
