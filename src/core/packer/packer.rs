//! 튜플 → f32 버퍼 변환
//!
//! 네 가지 변환 모두 상태가 없는 순수 함수이며 입력 순서만으로
//! 출력 순서가 결정된다.

use crate::core::types::{
    Matrix4x4, PackedBuffer16, PackedBuffer2, PackedBuffer3, PackedBuffer4, Scalar, Tuple2,
    Tuple3, Tuple4,
};

/// `[t.0, t.1]`
pub fn from_tuple2<T: Scalar>(t: Tuple2<T>) -> PackedBuffer2 {
    PackedBuffer2::new([t.0.to_f32(), t.1.to_f32()])
}

/// `[t.0, t.1, t.2]`
pub fn from_tuple3<T: Scalar>(t: Tuple3<T>) -> PackedBuffer3 {
    PackedBuffer3::new([t.0.to_f32(), t.1.to_f32(), t.2.to_f32()])
}

/// `[t.0, t.1, t.2, t.3]`
pub fn from_tuple4<T: Scalar>(t: Tuple4<T>) -> PackedBuffer4 {
    PackedBuffer4::new(tuple4_to_array(t))
}

/// 열 우선(column-major) 4×4 입력을 행 우선(row-major)으로 평탄화
///
/// `m.0..m.3` 은 열이며 `output[r * 4 + c] == m.c.r` 이다.
/// 즉 결과는 입력의 전치(transpose)를 행 단위로 나열한 것이다.
pub fn from_tuple4x4<T: Scalar>(m: Matrix4x4<T>) -> PackedBuffer16 {
    let columns = matrix_columns(m);

    let mut out = [0.0f32; 16];
    for r in 0..4 {
        for c in 0..4 {
            out[r * 4 + c] = columns[c][r];
        }
    }
    PackedBuffer16::new(out)
}

/// 열 순서 그대로 평탄화 (`output[c * 4 + r] == m.c.r`)
pub(crate) fn from_tuple4x4_column_major<T: Scalar>(m: Matrix4x4<T>) -> PackedBuffer16 {
    let columns = matrix_columns(m);

    let mut out = [0.0f32; 16];
    for (c, column) in columns.iter().enumerate() {
        out[c * 4..c * 4 + 4].copy_from_slice(column);
    }
    PackedBuffer16::new(out)
}

/// 16원소 버퍼의 4×4 전치
pub fn transpose16(buffer: &PackedBuffer16) -> PackedBuffer16 {
    let src = buffer.as_slice();
    let mut out = [0.0f32; 16];
    for r in 0..4 {
        for c in 0..4 {
            out[c * 4 + r] = src[r * 4 + c];
        }
    }
    PackedBuffer16::new(out)
}

#[inline]
fn tuple4_to_array<T: Scalar>(t: Tuple4<T>) -> [f32; 4] {
    [t.0.to_f32(), t.1.to_f32(), t.2.to_f32(), t.3.to_f32()]
}

#[inline]
fn matrix_columns<T: Scalar>(m: Matrix4x4<T>) -> [[f32; 4]; 4] {
    [
        tuple4_to_array(m.0),
        tuple4_to_array(m.1),
        tuple4_to_array(m.2),
        tuple4_to_array(m.3),
    ]
}
