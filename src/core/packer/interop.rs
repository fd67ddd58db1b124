//! nalgebra 타입 → 튜플 변환

use super::packer::{from_tuple2, from_tuple3, from_tuple4, from_tuple4x4};
use crate::core::types::{
    Matrix4x4, PackedBuffer16, PackedBuffer2, PackedBuffer3, PackedBuffer4, Scalar, Tuple2,
    Tuple3, Tuple4,
};
use nalgebra as na;

pub fn vector2_to_tuple<T: Scalar + na::Scalar>(v: &na::Vector2<T>) -> Tuple2<T> {
    (v[0], v[1])
}

pub fn vector3_to_tuple<T: Scalar + na::Scalar>(v: &na::Vector3<T>) -> Tuple3<T> {
    (v[0], v[1], v[2])
}

pub fn vector4_to_tuple<T: Scalar + na::Scalar>(v: &na::Vector4<T>) -> Tuple4<T> {
    (v[0], v[1], v[2], v[3])
}

/// nalgebra 행렬의 열들을 순서대로 튜플 열로 옮김
pub fn matrix4_to_columns<T: Scalar + na::Scalar>(m: &na::Matrix4<T>) -> Matrix4x4<T> {
    let col = |c: usize| (m[(0, c)], m[(1, c)], m[(2, c)], m[(3, c)]);
    (col(0), col(1), col(2), col(3))
}

pub fn pack_vector2<T: Scalar + na::Scalar>(v: &na::Vector2<T>) -> PackedBuffer2 {
    from_tuple2(vector2_to_tuple(v))
}

pub fn pack_vector3<T: Scalar + na::Scalar>(v: &na::Vector3<T>) -> PackedBuffer3 {
    from_tuple3(vector3_to_tuple(v))
}

pub fn pack_vector4<T: Scalar + na::Scalar>(v: &na::Vector4<T>) -> PackedBuffer4 {
    from_tuple4(vector4_to_tuple(v))
}

/// `from_tuple4x4(matrix4_to_columns(m))`
///
/// nalgebra 는 열 우선 저장이므로 결과는 행렬을 행 단위로 읽은 순서가 된다.
pub fn pack_matrix4<T: Scalar + na::Scalar>(m: &na::Matrix4<T>) -> PackedBuffer16 {
    from_tuple4x4(matrix4_to_columns(m))
}
