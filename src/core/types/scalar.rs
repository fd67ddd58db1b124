//! 스칼라 → f32 축소 변환

use half::f16;

/// f32 로 축소 변환 가능한 수치 스칼라
///
/// 변환은 IEEE-754 최근접 반올림을 따른다. f32 범위를 벗어나는 값은
/// ±inf 로 포화되고 NaN 은 NaN 으로 유지된다.
pub trait Scalar: Copy {
    fn to_f32(self) -> f32;
}

macro_rules! impl_scalar_as {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn to_f32(self) -> f32 {
                    self as f32
                }
            }
        )*
    };
}

impl_scalar_as!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Scalar for f16 {
    #[inline]
    fn to_f32(self) -> f32 {
        // f16 → f32 는 항상 정확함
        f16::to_f32(self)
    }
}
