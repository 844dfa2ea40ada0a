pub mod logs;
pub mod replay;
