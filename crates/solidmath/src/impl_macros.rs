/// Implements a binary operator for owned and borrowed combinations of
/// operands by forwarding to the `&T op &T` implementation.
macro_rules! impl_forward_bin_ops_to_ref {
    () => {};

    (
        impl $trait:ident for $type:ty { fn $func:ident() }
        $($remainder:tt)*
    ) => {
        impl_forward_bin_ops_to_ref! {
            impl $trait<$type> for $type { fn $func() -> $type }
            $($remainder)*
        }
    };

    (
        impl $trait:ident<$rhs:ty> for $type:ty { fn $func:ident() -> $ret:ty }
        $($remainder:tt)*
    ) => {
        impl $trait<$rhs> for $type {
            type Output = $ret;

            fn $func(self, rhs: $rhs) -> $ret {
                $trait::$func(&self, &rhs)
            }
        }
        impl<'a> $trait<$rhs> for &'a $type {
            type Output = $ret;

            fn $func(self, rhs: $rhs) -> $ret {
                $trait::$func(self, &rhs)
            }
        }
        impl<'a> $trait<&'a $rhs> for $type {
            type Output = $ret;

            fn $func(self, rhs: &'a $rhs) -> $ret {
                $trait::$func(&self, rhs)
            }
        }
        impl_forward_bin_ops_to_ref! { $($remainder)* }
    };
}

/// Implements arithmetic for a scalar newtype wrapping a [`crate::Float`] in
/// base units: addition and subtraction with itself, negation, scaling by a
/// float, division by a float, summation, and approximate comparison.
macro_rules! impl_scalar_unit {
    ($type:ident) => {
        impl std::ops::Add for $type {
            type Output = $type;

            fn add(self, rhs: $type) -> $type {
                $type(self.0 + rhs.0)
            }
        }
        impl std::ops::Sub for $type {
            type Output = $type;

            fn sub(self, rhs: $type) -> $type {
                $type(self.0 - rhs.0)
            }
        }
        impl std::ops::Neg for $type {
            type Output = $type;

            fn neg(self) -> $type {
                $type(-self.0)
            }
        }
        impl std::ops::Mul<$crate::Float> for $type {
            type Output = $type;

            fn mul(self, rhs: $crate::Float) -> $type {
                $type(self.0 * rhs)
            }
        }
        impl std::ops::Mul<$type> for $crate::Float {
            type Output = $type;

            fn mul(self, rhs: $type) -> $type {
                $type(self * rhs.0)
            }
        }
        impl std::ops::Div<$crate::Float> for $type {
            type Output = $type;

            fn div(self, rhs: $crate::Float) -> $type {
                $type(self.0 / rhs)
            }
        }
        impl std::ops::Div for $type {
            type Output = $crate::Float;

            fn div(self, rhs: $type) -> $crate::Float {
                self.0 / rhs.0
            }
        }
        impl std::ops::AddAssign for $type {
            fn add_assign(&mut self, rhs: $type) {
                self.0 += rhs.0;
            }
        }
        impl std::ops::SubAssign for $type {
            fn sub_assign(&mut self, rhs: $type) {
                self.0 -= rhs.0;
            }
        }
        impl std::iter::Sum for $type {
            fn sum<I: Iterator<Item = $type>>(iter: I) -> $type {
                $type(iter.map(|x| x.0).sum())
            }
        }
        impl num_traits::Zero for $type {
            fn zero() -> Self {
                $type(0.0)
            }

            fn is_zero(&self) -> bool {
                self.0 == 0.0
            }
        }
        impl approx::AbsDiffEq for $type {
            type Epsilon = $crate::Float;

            fn default_epsilon() -> Self::Epsilon {
                $crate::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                approx::AbsDiffEq::abs_diff_eq(&self.0, &other.0, epsilon)
            }
        }
    };
}
