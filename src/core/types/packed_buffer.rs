//! GPU 업로드용 f32 연속 버퍼

use byteorder::{LittleEndian, WriteBytesExt};
use half::f16;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

/// 고정 길이 f32 버퍼
///
/// 메모리 표현은 `[f32; N]` 과 동일하므로 그대로 정점 속성이나
/// 유니폼 데이터로 넘길 수 있다. 호출마다 새로 만들어져 호출자가 소유한다.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct PackedBuffer<const N: usize>(pub(crate) [f32; N]);

pub type PackedBuffer2 = PackedBuffer<2>;
pub type PackedBuffer3 = PackedBuffer<3>;
pub type PackedBuffer4 = PackedBuffer<4>;
pub type PackedBuffer16 = PackedBuffer<16>;

impl<const N: usize> PackedBuffer<N> {
    pub const LEN: usize = N;

    pub fn new(values: [f32; N]) -> Self {
        Self(values)
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn into_inner(self) -> [f32; N] {
        self.0
    }

    /// 네이티브 엔디언 바이트 뷰 (복사 없음)
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.0[..])
    }

    /// 리틀 엔디언 직렬화
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(N * std::mem::size_of::<f32>());
        for &value in &self.0 {
            // Vec 에 대한 쓰기는 실패하지 않음
            let _ = bytes.write_f32::<LittleEndian>(value);
        }
        bytes
    }

    /// half-float 정점 속성용 f16 비트 패턴
    pub fn to_f16_bits(&self) -> [u16; N] {
        self.0.map(|v| f16::from_f32(v).to_bits())
    }

    /// 비트 단위 동일성 (NaN 도 비트가 같으면 같다고 본다)
    pub fn bit_eq(&self, other: &Self) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl<const N: usize> Deref for PackedBuffer<N> {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.0
    }
}

impl<const N: usize> AsRef<[f32]> for PackedBuffer<N> {
    fn as_ref(&self) -> &[f32] {
        &self.0
    }
}

impl<const N: usize> From<PackedBuffer<N>> for [f32; N] {
    fn from(buffer: PackedBuffer<N>) -> Self {
        buffer.0
    }
}

impl<const N: usize> From<[f32; N]> for PackedBuffer<N> {
    fn from(values: [f32; N]) -> Self {
        Self(values)
    }
}

// serde 는 제네릭 길이 배열을 지원하지 않으므로 시퀀스로 직접 처리
impl<const N: usize> Serialize for PackedBuffer<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

struct PackedBufferVisitor<const N: usize>(PhantomData<[f32; N]>);

impl<'de, const N: usize> Visitor<'de> for PackedBufferVisitor<N> {
    type Value = PackedBuffer<N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a sequence of exactly {} f32 values", N)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut values = [0.0f32; N];
        for (i, slot) in values.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        if seq.next_element::<f32>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }
        Ok(PackedBuffer(values))
    }
}

impl<'de, const N: usize> Deserialize<'de> for PackedBuffer<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(PackedBufferVisitor::<N>(PhantomData))
    }
}
