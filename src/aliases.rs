//! Named vector types for each supported dimension and scalar kind.
//!
//! The suffix names the scalar kind: `h` for [`f16`], `f` for `f32`, `d` for
//! `f64`, `sb`/`b` for `i8`/`u8`, `s`/`us` for `i16`/`u16`, `i`/`ui` for
//! `i32`/`u32` and `l`/`ul` for `i64`/`u64`.

use crate::vector::Vector;
use half::f16;

/// A 2-dimensional vector.
pub type Vector2<T> = Vector<T, 2>;

/// A 3-dimensional vector.
pub type Vector3<T> = Vector<T, 3>;

/// A 4-dimensional vector.
pub type Vector4<T> = Vector<T, 4>;

/// An 8-dimensional vector.
pub type Vector8<T> = Vector<T, 8>;

/// A 16-dimensional vector.
pub type Vector16<T> = Vector<T, 16>;

macro_rules! define_kind_aliases {
    ($($suffix:ident => $t:ident),+ $(,)?) => {
        pastey::paste! {
            $(
                #[doc = "A 2-dimensional vector of `" $t "` components."]
                pub type [<Vector2 $suffix>] = Vector<$t, 2>;

                #[doc = "A 3-dimensional vector of `" $t "` components."]
                pub type [<Vector3 $suffix>] = Vector<$t, 3>;

                #[doc = "A 4-dimensional vector of `" $t "` components."]
                pub type [<Vector4 $suffix>] = Vector<$t, 4>;

                #[doc = "An 8-dimensional vector of `" $t "` components."]
                pub type [<Vector8 $suffix>] = Vector<$t, 8>;

                #[doc = "A 16-dimensional vector of `" $t "` components."]
                pub type [<Vector16 $suffix>] = Vector<$t, 16>;
            )+
        }
    };
}

define_kind_aliases!(
    h => f16,
    f => f32,
    d => f64,
    sb => i8,
    b => u8,
    s => i16,
    us => u16,
    i => i32,
    ui => u32,
    l => i64,
    ul => u64,
);
