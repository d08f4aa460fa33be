//! Integer perturbations applied by `fault_int!`.

/// Integer types a fault site can perturb.
///
/// Arithmetic wraps, so perturbing `u8::MAX` upward yields `0` rather than
/// panicking in debug builds.
pub trait FaultInt: Copy {
    /// `self - 1`, wrapping.
    fn decremented(self) -> Self;
    /// `self + 1`, wrapping.
    fn incremented(self) -> Self;
    /// Bitwise complement.
    fn inverted(self) -> Self;
}

macro_rules! impl_fault_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FaultInt for $ty {
                #[inline]
                fn decremented(self) -> Self {
                    self.wrapping_sub(1)
                }

                #[inline]
                fn incremented(self) -> Self {
                    self.wrapping_add(1)
                }

                #[inline]
                fn inverted(self) -> Self {
                    !self
                }
            }
        )*
    };
}

impl_fault_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
