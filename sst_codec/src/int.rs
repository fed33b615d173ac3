//! Fixed-width big-endian integers and length-prefix widths
//! 定宽大端整数与长度前缀位宽

use crate::{Decode, Encode, Error, Result};

/// Unsigned integer with a big-endian wire image
/// 带大端线上表示的无符号整数
pub trait Int: Copy {
  const SIZE: usize;

  /// Decode from the first `SIZE` bytes; caller has validated the length
  /// 从前 `SIZE` 字节解码；调用方已校验长度
  fn from_be_buf(buf: &[u8]) -> Self;

  /// Append the big-endian image
  /// 追加大端表示
  fn put_be(self, out: &mut Vec<u8>);
}

macro_rules! int {
  ($($t:ty),+) => {
    $(
      impl Int for $t {
        const SIZE: usize = size_of::<$t>();

        #[inline]
        fn from_be_buf(buf: &[u8]) -> Self {
          let mut be = [0u8; size_of::<$t>()];
          be.copy_from_slice(&buf[..size_of::<$t>()]);
          Self::from_be_bytes(be)
        }

        #[inline]
        fn put_be(self, out: &mut Vec<u8>) {
          out.extend_from_slice(&self.to_be_bytes());
        }
      }
    )+
  };
}

int!(u8, u16, u32, u64);

/// Width of a length prefix: 16 bits for short strings, 32 bits for long
/// strings and counted containers
/// 长度前缀位宽：短串 16 位，长串与计数容器 32 位
pub trait Len: Int + Decode + Encode {
  /// Element count carried by the prefix
  /// 前缀承载的元素个数
  fn to_len(self) -> usize;

  /// Narrow a count into the prefix width
  /// 将计数收窄到前缀位宽
  fn from_len(n: usize) -> Result<Self>;
}

macro_rules! len {
  ($($t:ty),+) => {
    $(
      impl Len for $t {
        #[inline]
        fn to_len(self) -> usize {
          self as usize
        }

        #[inline]
        fn from_len(n: usize) -> Result<Self> {
          if n > <$t>::MAX as usize {
            return Err(Error::Overflow {
              value: n,
              width: <$t>::BITS,
            });
          }
          Ok(n as $t)
        }
      }
    )+
  };
}

len!(u16, u32);
