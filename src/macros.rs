//! Utility macros.

macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl<'a> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                ::std::ops::$op::$method(&self)
            }
        }
    };
}

macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                ::std::ops::$op::$method(self, &rhs);
            }
        }
    };
}

/// Implements the arithmetic operators for a vector type in terms of its
/// [`Arithmetic`](crate::ops::Arithmetic) implementation. Division is left
/// out since it can fail.
macro_rules! impl_arithmetic_ops {
    ($t:ty, $s:ty) => {
        impl_binop!(Add, add, $t, $t, $t, |a, b| {
            $crate::ops::Arithmetic::added(a, b)
        });

        impl_binop!(Sub, sub, $t, $t, $t, |a, b| {
            $crate::ops::Arithmetic::subtracted(a, b)
        });

        impl_binop!(Mul, mul, $t, $s, $t, |a, b| {
            $crate::ops::Arithmetic::multiplied(a, *b)
        });

        impl_binop!(Mul, mul, $s, $t, $t, |a, b| {
            $crate::ops::Arithmetic::multiplied(b, *a)
        });

        impl_binop_assign!(AddAssign, add_assign, $t, $t, |a, b| {
            $crate::ops::Arithmetic::add(a, b);
        });

        impl_binop_assign!(SubAssign, sub_assign, $t, $t, |a, b| {
            $crate::ops::Arithmetic::subtract(a, b);
        });

        impl_binop_assign!(MulAssign, mul_assign, $t, $s, |a, b| {
            $crate::ops::Arithmetic::multiply(a, *b);
        });

        impl_unary_op!(Neg, neg, $t, $t, |val| {
            $crate::ops::Arithmetic::multiplied(val, -<$s as ::num_traits::One>::one())
        });
    };
}

/// Implements indexing by component for a vector type. Out of bounds
/// indices panic.
macro_rules! impl_component_index {
    ($t:ty, $s:ty) => {
        impl ::std::ops::Index<usize> for $t {
            type Output = $s;

            #[inline]
            fn index(&self, idx: usize) -> &Self::Output {
                &$crate::ops::Vector::raw(self)[idx]
            }
        }

        impl ::std::ops::IndexMut<usize> for $t {
            #[inline]
            fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
                &mut $crate::ops::Vector::raw_mut(self)[idx]
            }
        }
    };
}

/// Implements [`Display`](std::fmt::Display) as `Name(x, y, ...)`.
macro_rules! impl_display {
    ($t:ty, $name:literal) => {
        impl ::std::fmt::Display for $t {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, concat!($name, "("))?;
                for (idx, component) in $crate::ops::Vector::raw(self).iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{component}")?;
                }
                write!(f, ")")
            }
        }
    };
}

macro_rules! impl_abs_diff_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident| $body:block) => {
        impl ::approx::AbsDiffEq for $t {
            type Epsilon = f64;

            fn default_epsilon() -> Self::Epsilon {
                <f64 as ::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                $body
            }
        }
    };
}

macro_rules! impl_relative_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident, $arg4:ident| $body:block) => {
        impl ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                <f64 as ::approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                let $arg4 = max_relative;
                $body
            }
        }
    };
}
