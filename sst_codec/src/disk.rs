//! Length-prefixed on-disk containers
//! 带长度前缀的盘上容器

use std::{collections::HashMap, hash::Hash, marker::PhantomData};

use crate::{Decode, Elem, Encode, Len, Result, Sink, Src, check_buf_size};

/// `(len: S, bytes)`, length and payload contiguous on disk
/// `(len: S, bytes)`，长度与内容在盘上连续
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskString<S> {
  pub value: Box<[u8]>,
  _len: PhantomData<S>,
}

impl<S> DiskString<S> {
  #[inline]
  pub fn new(value: impl Into<Box<[u8]>>) -> Self {
    Self {
      value: value.into(),
      _len: PhantomData,
    }
  }

  #[inline]
  pub fn as_bytes(&self) -> &[u8] {
    &self.value
  }
}

impl<S> Default for DiskString<S> {
  fn default() -> Self {
    Self::new([])
  }
}

impl<S> From<&str> for DiskString<S> {
  fn from(s: &str) -> Self {
    Self::new(s.as_bytes())
  }
}

impl<S: Len> Decode for DiskString<S> {
  async fn decode<R: Src>(r: &mut R) -> Result<Self> {
    let len = S::decode(r).await?.to_len();
    let buf = r.read_exactly(len).await?;
    check_buf_size(&buf, len)?;
    Ok(Self::new(buf))
  }
}

impl<S: Len> Encode for DiskString<S> {
  async fn encode<W: Sink>(&self, w: &mut W) -> Result<()> {
    S::from_len(self.value.len())?.encode(w).await?;
    Ok(w.write_all(&self.value).await?)
  }
}

impl<S: Len> Elem for DiskString<S> {}

/// `(len: S, elements)`; integer elements are packed big-endian, the rest
/// are framed one by one
/// `(len: S, elements)`；整数元素打包大端存储，其余逐个编解码
#[derive(Debug, Clone, PartialEq)]
pub struct DiskArray<S, T> {
  pub li: Vec<T>,
  _len: PhantomData<S>,
}

impl<S, T> DiskArray<S, T> {
  #[inline]
  pub fn new(li: impl Into<Vec<T>>) -> Self {
    Self {
      li: li.into(),
      _len: PhantomData,
    }
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.li.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.li.is_empty()
  }
}

impl<S, T> Default for DiskArray<S, T> {
  fn default() -> Self {
    Self::new(Vec::new())
  }
}

impl<S: Len, T: Elem> Decode for DiskArray<S, T> {
  async fn decode<R: Src>(r: &mut R) -> Result<Self> {
    let n = S::decode(r).await?.to_len();
    Ok(Self::new(T::decode_seq(r, n).await?))
  }
}

impl<S: Len, T: Elem> Encode for DiskArray<S, T> {
  async fn encode<W: Sink>(&self, w: &mut W) -> Result<()> {
    S::from_len(self.li.len())?.encode(w).await?;
    T::encode_seq(&self.li, w).await
  }
}

/// `(len: S, entries)`, each entry a key then a value; write order is the
/// map's iteration order
/// `(len: S, entries)`，每项先键后值；写出顺序即哈希表的迭代顺序
#[derive(Debug, Clone, PartialEq)]
pub struct DiskHash<S, K: Eq + Hash, V> {
  pub map: HashMap<K, V>,
  _len: PhantomData<S>,
}

impl<S, K: Eq + Hash, V> DiskHash<S, K, V> {
  #[inline]
  pub fn new(map: HashMap<K, V>) -> Self {
    Self {
      map,
      _len: PhantomData,
    }
  }
}

impl<S, K: Eq + Hash, V> Default for DiskHash<S, K, V> {
  fn default() -> Self {
    Self::new(HashMap::new())
  }
}

impl<S: Len, K: Decode + Eq + Hash, V: Decode> Decode for DiskHash<S, K, V> {
  async fn decode<R: Src>(r: &mut R) -> Result<Self> {
    let n = S::decode(r).await?.to_len();
    let mut map = HashMap::with_capacity(n);
    for _ in 0..n {
      let key = K::decode(r).await?;
      let value = V::decode(r).await?;
      map.insert(key, value);
    }
    Ok(Self::new(map))
  }
}

impl<S: Len, K: Encode + Eq + Hash, V: Encode> Encode for DiskHash<S, K, V> {
  async fn encode<W: Sink>(&self, w: &mut W) -> Result<()> {
    S::from_len(self.map.len())?.encode(w).await?;
    for (k, v) in &self.map {
      k.encode(w).await?;
      v.encode(w).await?;
    }
    Ok(())
  }
}
