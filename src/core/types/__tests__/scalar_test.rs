use crate::core::types::Scalar;
use half::f16;

#[test]
fn 정수_스칼라_변환_테스트() {
    assert_eq!(3i32.to_f32(), 3.0);
    assert_eq!((-7i64).to_f32(), -7.0);
    assert_eq!(255u8.to_f32(), 255.0);
    assert_eq!(42usize.to_f32(), 42.0);
}

#[test]
fn 큰_정수는_최근접_반올림() {
    // 2^24 + 1 은 f32 로 표현 불가, 짝수 쪽인 2^24 로 반올림
    let v = (1i64 << 24) + 1;
    assert_eq!(v.to_f32(), 16_777_216.0);
    assert_eq!(u64::MAX.to_f32(), 18_446_744_073_709_551_616.0);
}

#[test]
fn f64_범위_초과는_무한대로_포화() {
    assert_eq!(1e39f64.to_f32(), f32::INFINITY);
    assert_eq!((-1e39f64).to_f32(), f32::NEG_INFINITY);
    assert_eq!(f64::MAX.to_f32(), f32::INFINITY);
}

#[test]
fn f64_범위_내_값은_가장_가까운_f32() {
    assert_eq!(0.1f64.to_f32(), 0.1f32);
    assert_eq!(std::f64::consts::PI.to_f32(), std::f32::consts::PI);
    assert_eq!(1.5f64.to_f32(), 1.5f32);
}

#[test]
fn nan_전파_테스트() {
    assert!(f64::NAN.to_f32().is_nan());
    assert!(f32::NAN.to_f32().is_nan());
    assert!(f16::NAN.to_f32().is_nan());
}

#[test]
fn f16_변환은_정확함() {
    let h = f16::from_f32(0.333);
    assert_eq!(h.to_f32(), Scalar::to_f32(h));
    assert_eq!(Scalar::to_f32(f16::from_f32(2.5)), 2.5);
    assert_eq!(Scalar::to_f32(f16::INFINITY), f32::INFINITY);
}
