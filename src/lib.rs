//! float32_array 라이브러리
//!
//! 2/3/4 성분 튜플과 4×4 행렬 튜플을 그래픽 API 용 f32 연속 버퍼로 패킹

pub mod core;

// 핵심 모듈들 재수출
pub use crate::core::{
    // 튜플 및 버퍼 타입
    Matrix4x4, PackedBuffer, PackedBuffer16, PackedBuffer2, PackedBuffer3, PackedBuffer4,
    Scalar, Tuple2, Tuple3, Tuple4,
    // 변환 함수
    from_tuple2, from_tuple3, from_tuple4, from_tuple4x4, transpose16,
    // 구성
    MatrixLayout, Packer, PackerConfig,
    // 경계 검증
    try_from_columns, try_from_slice2, try_from_slice3, try_from_slice4,
    // nalgebra 연동
    pack_matrix4, pack_vector2, pack_vector3, pack_vector4,
};

// 편의 타입 별칭들
pub type Vec2Buffer = PackedBuffer2;
pub type Vec3Buffer = PackedBuffer3;
pub type Vec4Buffer = PackedBuffer4;
pub type Mat4Buffer = PackedBuffer16;
