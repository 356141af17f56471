#![allow(non_camel_case_types)]

use crate::{Vector, DefBackend, F32, F64, MaskF32, MaskF64, registers_for_bits};

pub type Float32<const V: usize, B = DefBackend> = Vector<F32, V, B>;
pub type Float64<const V: usize, B = DefBackend> = Vector<F64, V, B>;

pub type MaskFloat32<const V: usize, B = DefBackend> = Vector<MaskF32, V, B>;
pub type MaskFloat64<const V: usize, B = DefBackend> = Vector<MaskF64, V, B>;

pub type f32x8  = Float32<{ registers_for_bits(256) }>;
pub type f32x16 = Float32<{ registers_for_bits(512) }>;

pub type f64x4  = Float64<{ registers_for_bits(256) }>;
pub type f64x8  = Float64<{ registers_for_bits(512) }>;

pub type mask_f32x8  = MaskFloat32<{ registers_for_bits(256) }>;
pub type mask_f32x16 = MaskFloat32<{ registers_for_bits(512) }>;

pub type mask_f64x4  = MaskFloat64<{ registers_for_bits(256) }>;
pub type mask_f64x8  = MaskFloat64<{ registers_for_bits(512) }>;
