//! Component kinds, versions and formats with their filename pieces
//! 组件种类、版本与格式及其文件名要素

use crate::{Error, Result};

/// The sibling files jointly comprising one SSTable
/// 共同组成一个 SSTable 的兄弟文件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
  Index,
  CompressionInfo,
  Data,
  Toc,
  Summary,
  Digest,
  Crc,
  Filter,
  Statistics,
}

impl Component {
  pub const ALL: [Self; 9] = [
    Self::Index,
    Self::CompressionInfo,
    Self::Data,
    Self::Toc,
    Self::Summary,
    Self::Digest,
    Self::Crc,
    Self::Filter,
    Self::Statistics,
  ];

  /// Fixed filename suffix
  /// 固定文件名后缀
  pub const fn suffix(self) -> &'static str {
    match self {
      Self::Index => "Index.db",
      Self::CompressionInfo => "CompressionInfo.db",
      Self::Data => "Data.db",
      Self::Toc => "TOC.txt",
      Self::Summary => "Summary.db",
      Self::Digest => "Digest.sha1",
      Self::Crc => "CRC.db",
      Self::Filter => "Filter.db",
      Self::Statistics => "Statistics.db",
    }
  }

  /// Reverse of [`suffix`](Self::suffix)
  /// [`suffix`](Self::suffix) 的反查
  pub fn from_suffix(s: &str) -> Result<Self> {
    Self::ALL
      .into_iter()
      .find(|c| c.suffix() == s)
      .ok_or_else(|| Error::ReverseMap(s.into()))
  }
}

/// On-disk format version
/// 盘上格式版本
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Version {
  #[default]
  La,
}

impl Version {
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::La => "la",
    }
  }

  pub fn from_name(s: &str) -> Result<Self> {
    match s {
      "la" => Ok(Self::La),
      _ => Err(Error::ReverseMap(s.into())),
    }
  }
}

/// SSTable family
/// SSTable 家族
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Format {
  #[default]
  Big,
}

impl Format {
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Big => "big",
    }
  }

  pub fn from_name(s: &str) -> Result<Self> {
    match s {
      "big" => Ok(Self::Big),
      _ => Err(Error::ReverseMap(s.into())),
    }
  }
}
