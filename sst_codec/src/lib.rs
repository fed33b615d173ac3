#![cfg_attr(docsrs, feature(doc_cfg))]

//! Wire codec for SSTable component files
//! SSTable 组件文件的二进制编解码

mod disk;
mod error;
mod frame;
mod int;
mod record;
mod stream;

pub use disk::{DiskArray, DiskHash, DiskString};
pub use error::{Error, Result};
pub use frame::{Decode, Elem, Encode, check_buf_size};
pub use int::{Int, Len};
pub use stream::{Sink, Src};
