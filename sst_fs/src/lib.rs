#![cfg_attr(docsrs, feature(doc_cfg))]

//! Buffered asynchronous file access for SSTable components
//! SSTable 组件的缓冲异步文件访问

pub mod consts;
mod fs;
mod reader;
mod sink;

pub use fs::{open_read, open_write};
pub use reader::FileReader;
pub use sink::FileSink;
