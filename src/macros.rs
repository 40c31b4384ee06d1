//! Utility macros.

/// Implements a binary operator for all four combinations of owned and
/// borrowed operands. The body receives both operands by reference.
macro_rules! impl_binop {
    (
        $op:ident, $method:ident,
        [$($generics:tt)*],
        $tl:ty, $tr:ty, $to:ty,
        |$lhs:ident, $rhs:ident| $body:block
    ) => {
        impl<'a, $($generics)*> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<$($generics)*> ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl<'a, $($generics)*> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl<$($generics)*> ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }
    };
}

/// Implements a unary operator for owned and borrowed operands.
macro_rules! impl_unary_op {
    ($op:ident, $method:ident, [$($generics:tt)*], $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl<$($generics)*> ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl<$($generics)*> ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                ::std::ops::$op::$method(&self)
            }
        }
    };
}

/// Implements a formatting trait for vectors by formatting each component
/// with the caller's formatter and joining them as `(c0, c1, ...)`.
macro_rules! impl_component_fmt {
    ($($fmt_trait:ident),+) => {
        $(
            impl<T: ::std::fmt::$fmt_trait, const N: usize> ::std::fmt::$fmt_trait
                for $crate::vector::Vector<T, N>
            {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str("(")?;
                    for (idx, component) in self.iter().enumerate() {
                        if idx > 0 {
                            f.write_str(", ")?;
                        }
                        ::std::fmt::$fmt_trait::fmt(component, f)?;
                    }
                    f.write_str(")")
                }
            }
        )+
    };
}
