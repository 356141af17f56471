//! Wide SIMD vectors built from native registers.
//!
//! A [`Vector`] spans one or more hardware registers of a single element category, operations on it build lazy [`Expr`]
//! trees which are evaluated register by register once they are converted back into a vector.
//!
//! Currently no runtime dynamic dispatch is supported, the default backend is decided at compile time:
//! - with the `force-scalar` feature, the portable [`Scalar`] backend is always used
//! - on x86_64 with the `avx2` target feature, [`Avx2`] is used
//! - on any other x86_64 target, [`Sse2`] is used
//! - everywhere else, [`Scalar`] is used
//!
//! Every backend available to the target can still be named explicitly, e.g. `Int32<2, Scalar>`.
#![cfg_attr(not(test), no_std)]

#[cfg(not(target_pointer_width = "64"))]
compile_error!("Only 64-bit architectures are supported");

mod error;
mod element;
mod backend;
mod category;
mod vector;
mod mask;
pub mod expr;
mod cast;
mod any;

mod int;
mod uint;
mod float;

pub use error::*;
pub use element::SimdElement;
pub use backend::*;
pub use category::{
    TypeTag, CmpOp, Family, Category, DataCategory, MaskCategory,
    Int8Family, Int16Family, Int32Family, Int64Family, Float32Family, Float64Family,
    I8, U8, I16, U16, I32, U32, I64, U64, F32, F64,
    MaskI8, MaskI16, MaskI32, MaskI64, MaskF32, MaskF64,
};
pub use vector::Vector;
pub use expr::{Expr, Payload, Operand};
pub use cast::*;
pub use any::*;

pub use int::*;
pub use uint::*;
pub use float::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "force-scalar")] {
        /// Backend used when none is given
        pub type DefBackend = Scalar;
    } else if #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))] {
        /// Backend used when none is given
        pub type DefBackend = Avx2;
    } else if #[cfg(target_arch = "x86_64")] {
        /// Backend used when none is given
        pub type DefBackend = Sse2;
    } else {
        /// Backend used when none is given
        pub type DefBackend = Scalar;
    }
}

pub const DEF_BACKEND_TYPE : BackendType = <DefBackend as Backend>::TYPE;

/// Number of native registers of the default backend needed to hold `bits` bits.
///
/// # Panics
///
/// Fails to evaluate if `bits` is not a multiple of the register size.
pub const fn registers_for_bits(bits: usize) -> usize {
    let reg_bits = <DefBackend as Backend>::REGISTER_BYTES * 8;
    assert!(bits % reg_bits == 0, "vector size needs to be a multiple of the native register size");
    bits / reg_bits
}

/// Check if a backend is compiled into this build
///
/// #Note
///
/// Currently, no dynamic detection has been implemented, so values returned depend on the machine the binary was compiled for
pub fn has_backend(backend: BackendType) -> bool {
    match backend {
        BackendType::Scalar => true,
        BackendType::SSE => cfg!(target_arch = "x86_64"),
        BackendType::AVX2 => cfg!(all(target_arch = "x86_64", target_feature = "avx2")),
    }
}

/// Fail with [`Error::BackendUnavailable`] if a backend is not compiled into this build
pub fn require_backend(backend: BackendType) -> Result<()> {
    if has_backend(backend) {
        Ok(())
    } else {
        log::debug!("backend {} requested, but not compiled in", backend);
        Err(Error::BackendUnavailable(backend))
    }
}

/// Log the default backend and its native register layout
pub fn log_backend_info() {
    type D = DefBackend;
    log::info!("SIMD backend: {} ({}-bit registers)", DEF_BACKEND_TYPE, <D as Backend>::REGISTER_BYTES * 8);
    log::info!(
        "lanes per register: {} x 8-bit, {} x 16-bit, {} x 32-bit, {} x 64-bit",
        <<D as Backend>::I8Reg as NativeRegister>::LANES,
        <<D as Backend>::I16Reg as NativeRegister>::LANES,
        <<D as Backend>::I32Reg as NativeRegister>::LANES,
        <<D as Backend>::I64Reg as NativeRegister>::LANES,
    );
    for backend in BackendType::ALL {
        log::debug!("backend {} available: {}", backend, has_backend(backend));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_backend_is_available() {
        assert!(has_backend(DEF_BACKEND_TYPE));
        assert!(has_backend(BackendType::Scalar));
    }

    #[test]
    fn require_backend_matches_has_backend() {
        for backend in BackendType::ALL {
            match require_backend(backend) {
                Ok(()) => assert!(has_backend(backend)),
                Err(err) => {
                    assert!(!has_backend(backend));
                    assert_eq!(err, Error::BackendUnavailable(backend));
                },
            }
        }
        assert_eq!(require_backend(DEF_BACKEND_TYPE), Ok(()));
    }

    #[test]
    fn lane_aliases_match_their_width() {
        assert_eq!(i32x8::LANES, 8);
        assert_eq!(u8x64::LANES, 64);
        assert_eq!(f64x4::LANES, 4);
        assert_eq!(mask_f32x16::LANES, 16);
        assert_eq!(mask_i16x16::NUM_BITS, 256);
    }
}
