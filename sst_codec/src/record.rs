//! Declarative records: list the fields once, the codec follows
//! 声明式记录：字段只列一次，编解码随之导出

/// Declares a record struct and derives [`Decode`](crate::Decode) and
/// [`Encode`](crate::Encode) traversing the fields in declaration order,
/// plus per-element array framing.
/// 声明记录结构体并按字段声明顺序导出编解码实现，同时提供数组元素编解码。
#[macro_export]
macro_rules! record {
  (
    $(#[$meta:meta])*
    $vis:vis struct $name:ident {
      $(
        $(#[$fmeta:meta])*
        $fvis:vis $field:ident: $ty:ty,
      )+
    }
  ) => {
    $(#[$meta])*
    $vis struct $name {
      $(
        $(#[$fmeta])*
        $fvis $field: $ty,
      )+
    }

    impl $crate::Decode for $name {
      async fn decode<R: $crate::Src>(r: &mut R) -> $crate::Result<Self> {
        $(let $field = <$ty as $crate::Decode>::decode(r).await?;)+
        Ok(Self { $($field,)+ })
      }
    }

    impl $crate::Encode for $name {
      async fn encode<W: $crate::Sink>(&self, w: &mut W) -> $crate::Result<()> {
        $($crate::Encode::encode(&self.$field, w).await?;)+
        Ok(())
      }
    }

    impl $crate::Elem for $name {}
  };
}
