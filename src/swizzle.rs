//! Named swizzles for 2-, 3- and 4-dimensional vectors.
//!
//! Every combination of two, three or four component letters is available
//! as a method, e.g. `v.zx()`, `v.xxy()` or `v.wzyx()`. Letters may repeat.

use crate::vector::Vector;

macro_rules! impl_swizzles {
    (@two $all:tt; $($a:ident = $ai:literal),+) => {
        $(impl_swizzles!(@two_last $all; $a = $ai);)+
    };
    (@two_last [$($b:ident = $bi:literal),+]; $a:ident = $ai:literal) => {
        pastey::paste! {
            $(
                #[inline]
                pub fn [<$a $b>](&self) -> Vector<T, 2> {
                    Vector::from_array([self[$ai], self[$bi]])
                }
            )+
        }
    };

    (@three $all:tt; $($a:ident = $ai:literal),+) => {
        $(impl_swizzles!(@three_mid $all; $all; $a = $ai);)+
    };
    (@three_mid [$($b:ident = $bi:literal),+]; $all:tt; $a:ident = $ai:literal) => {
        $(impl_swizzles!(@three_last $all; $a = $ai, $b = $bi);)+
    };
    (@three_last [$($c:ident = $ci:literal),+]; $a:ident = $ai:literal, $b:ident = $bi:literal) => {
        pastey::paste! {
            $(
                #[inline]
                pub fn [<$a $b $c>](&self) -> Vector<T, 3> {
                    Vector::from_array([self[$ai], self[$bi], self[$ci]])
                }
            )+
        }
    };

    (@four $all:tt; $($a:ident = $ai:literal),+) => {
        $(impl_swizzles!(@four_second $all; $all; $a = $ai);)+
    };
    (@four_second [$($b:ident = $bi:literal),+]; $all:tt; $a:ident = $ai:literal) => {
        $(impl_swizzles!(@four_third $all; $all; $a = $ai, $b = $bi);)+
    };
    (
        @four_third [$($c:ident = $ci:literal),+]; $all:tt;
        $a:ident = $ai:literal, $b:ident = $bi:literal
    ) => {
        $(impl_swizzles!(@four_last $all; $a = $ai, $b = $bi, $c = $ci);)+
    };
    (
        @four_last [$($d:ident = $di:literal),+];
        $a:ident = $ai:literal, $b:ident = $bi:literal, $c:ident = $ci:literal
    ) => {
        pastey::paste! {
            $(
                #[inline]
                pub fn [<$a $b $c $d>](&self) -> Vector<T, 4> {
                    Vector::from_array([self[$ai], self[$bi], self[$ci], self[$di]])
                }
            )+
        }
    };

    ($n:literal; $($c:ident = $i:literal),+) => {
        impl<T: Copy> Vector<T, $n> {
            impl_swizzles!(@two [$($c = $i),+]; $($c = $i),+);
            impl_swizzles!(@three [$($c = $i),+]; $($c = $i),+);
            impl_swizzles!(@four [$($c = $i),+]; $($c = $i),+);
        }
    };
}

impl_swizzles!(2; x = 0, y = 1);
impl_swizzles!(3; x = 0, y = 1, z = 2);
impl_swizzles!(4; x = 0, y = 1, z = 2, w = 3);
