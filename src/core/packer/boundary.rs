//! 동적 형상 입력의 경계 검증
//!
//! 타입으로 arity 를 보장할 수 없는 입력(슬라이스 등)을 받아 형상을 먼저
//! 확인한 뒤 타입이 있는 변환으로 넘긴다. 형상이 틀리면 부분 버퍼 없이 즉시 실패한다.

use super::packer::{from_tuple2, from_tuple3, from_tuple4, from_tuple4x4};
use crate::core::types::{PackedBuffer16, PackedBuffer2, PackedBuffer3, PackedBuffer4, Scalar};
use anyhow::{bail, Result};

fn check_arity<T>(values: &[T], expected: usize, what: &str) -> Result<()> {
    if values.len() != expected {
        log::debug!(
            "rejected {}: expected {} components, got {}",
            what,
            expected,
            values.len()
        );
        bail!(
            "{} 는 성분이 정확히 {}개여야 함 (입력: {}개)",
            what,
            expected,
            values.len()
        );
    }
    Ok(())
}

pub fn try_from_slice2<T: Scalar>(values: &[T]) -> Result<PackedBuffer2> {
    check_arity(values, 2, "tuple2")?;
    Ok(from_tuple2((values[0], values[1])))
}

pub fn try_from_slice3<T: Scalar>(values: &[T]) -> Result<PackedBuffer3> {
    check_arity(values, 3, "tuple3")?;
    Ok(from_tuple3((values[0], values[1], values[2])))
}

pub fn try_from_slice4<T: Scalar>(values: &[T]) -> Result<PackedBuffer4> {
    check_arity(values, 4, "tuple4")?;
    Ok(from_tuple4((values[0], values[1], values[2], values[3])))
}

/// 열 슬라이스 4개로부터 4×4 행렬 변환 (`from_tuple4x4` 와 같은 규약)
pub fn try_from_columns<T: Scalar>(columns: &[&[T]]) -> Result<PackedBuffer16> {
    check_arity(columns, 4, "matrix4x4")?;
    for (i, column) in columns.iter().enumerate() {
        check_arity(column, 4, &format!("matrix4x4 column {}", i))?;
    }

    let col = |i: usize| {
        let c = columns[i];
        (c[0], c[1], c[2], c[3])
    };
    Ok(from_tuple4x4((col(0), col(1), col(2), col(3))))
}
