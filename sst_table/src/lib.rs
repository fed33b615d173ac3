#![cfg_attr(docsrs, feature(doc_cfg))]

//! SSTable component reader/writer core
//! SSTable 组件读写核心
//!
//! An SSTable is a set of sibling files jointly describing one immutable
//! batch of sorted key/value data. This crate decodes each metadata
//! component from bytes into records and serializes them back, preserving
//! the exact disk format.
//! SSTable 是一组兄弟文件，共同描述一批不可变的有序键值数据。
//! 本 crate 在字节与内存记录之间往返转换各元数据组件，保持盘上格式不变。

mod component;
mod error;
mod stats;
mod summary;
mod table;
mod types;

pub use component::{Component, Format, Version};
pub use error::{Error, Result};
pub use stats::{Metadata, MetadataType, Statistics};
pub use summary::{Summary, SummaryHeader};
pub use table::{DataSrc, SSTable};
pub use types::{
  Bin, CompactionMetadata, EhElem, EstimatedHistogram, Filter, IndexEntry, ReplayPosition,
  StatsMetadata, StreamingHistogram, SummaryEntry, ValidationMetadata,
};
