#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use plantmath_linalg as linalg;

#[doc(inline)]
pub use plantmath_system as system;
