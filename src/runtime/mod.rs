//! Application lifecycle
//!
//! - `lifetime`: 启动准备（配置、存储、LinkStore）
//! - `modes`: 运行模式入口

pub mod lifetime;
pub mod modes;
