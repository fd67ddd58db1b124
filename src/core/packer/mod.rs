pub mod packer;
pub mod layout;
pub mod boundary;
pub mod interop;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

// 재수출
pub use packer::{from_tuple2, from_tuple3, from_tuple4, from_tuple4x4, transpose16};
pub use layout::{MatrixLayout, Packer, PackerConfig};
pub use boundary::*;
pub use interop::*;
