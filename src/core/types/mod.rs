pub mod packed_buffer;
pub mod scalar;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

pub use packed_buffer::{PackedBuffer, PackedBuffer16, PackedBuffer2, PackedBuffer3, PackedBuffer4};
pub use scalar::Scalar;

/// 2-튜플
pub type Tuple2<T> = (T, T);
/// 3-튜플
pub type Tuple3<T> = (T, T, T);
/// 4-튜플
pub type Tuple4<T> = (T, T, T, T);
/// 4개의 열(column) 튜플로 이루어진 4×4 행렬
pub type Matrix4x4<T> = (Tuple4<T>, Tuple4<T>, Tuple4<T>, Tuple4<T>);
