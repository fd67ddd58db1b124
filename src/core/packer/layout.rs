//! 행렬 평탄화 규약 및 패커 구성

use super::packer::{from_tuple2, from_tuple3, from_tuple4, from_tuple4x4, from_tuple4x4_column_major};
use crate::core::types::{
    Matrix4x4, PackedBuffer16, PackedBuffer2, PackedBuffer3, PackedBuffer4, Scalar, Tuple2,
    Tuple3, Tuple4,
};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// 4×4 행렬 출력 규약
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixLayout {
    /// 열 입력을 전치하여 행 단위로 나열 (`from_tuple4x4` 와 동일)
    #[default]
    RowMajor,
    /// 열 입력을 그대로 나열
    ColumnMajor,
}

/// 패커 구성
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PackerConfig {
    /// 4×4 행렬 출력 규약
    pub matrix_layout: MatrixLayout,
}

impl PackerConfig {
    /// JSON 문자열에서 구성 로드. 누락된 필드는 기본값
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PackerConfig = serde_json::from_str(json)
            .map_err(|e| anyhow::anyhow!("패커 구성 파싱 실패: {}", e))?;
        log::trace!("packer config loaded: {:?}", config);
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// 구성을 가진 패커
///
/// 상태가 없고 `Copy` 이므로 스레드 간에 자유롭게 공유할 수 있다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Packer {
    pub config: PackerConfig,
}

impl Packer {
    pub fn new(config: PackerConfig) -> Self {
        Self { config }
    }

    pub fn with_layout(matrix_layout: MatrixLayout) -> Self {
        Self::new(PackerConfig { matrix_layout })
    }

    pub fn pack2<T: Scalar>(&self, t: Tuple2<T>) -> PackedBuffer2 {
        from_tuple2(t)
    }

    pub fn pack3<T: Scalar>(&self, t: Tuple3<T>) -> PackedBuffer3 {
        from_tuple3(t)
    }

    pub fn pack4<T: Scalar>(&self, t: Tuple4<T>) -> PackedBuffer4 {
        from_tuple4(t)
    }

    pub fn pack4x4<T: Scalar>(&self, m: Matrix4x4<T>) -> PackedBuffer16 {
        match self.config.matrix_layout {
            MatrixLayout::RowMajor => from_tuple4x4(m),
            MatrixLayout::ColumnMajor => from_tuple4x4_column_major(m),
        }
    }
}
