//! # 패킹 핵심 모듈
//!
//! 고정 크기 수치 튜플을 GPU 가 바로 읽을 수 있는 f32 연속 버퍼로 변환

pub mod types;
pub mod packer;

// 주요 타입들 재수출
pub use types::*;
pub use packer::*;
