#![allow(non_camel_case_types)]

use crate::{Vector, DefBackend, I8, I16, I32, I64, MaskI8, MaskI16, MaskI32, MaskI64, registers_for_bits};

pub type Int8<const V: usize, B = DefBackend>  = Vector<I8 , V, B>;
pub type Int16<const V: usize, B = DefBackend> = Vector<I16, V, B>;
pub type Int32<const V: usize, B = DefBackend> = Vector<I32, V, B>;
pub type Int64<const V: usize, B = DefBackend> = Vector<I64, V, B>;

pub type MaskInt8<const V: usize, B = DefBackend>  = Vector<MaskI8 , V, B>;
pub type MaskInt16<const V: usize, B = DefBackend> = Vector<MaskI16, V, B>;
pub type MaskInt32<const V: usize, B = DefBackend> = Vector<MaskI32, V, B>;
pub type MaskInt64<const V: usize, B = DefBackend> = Vector<MaskI64, V, B>;

pub type i8x32  = Int8<{ registers_for_bits(256) }>;
pub type i8x64  = Int8<{ registers_for_bits(512) }>;

pub type i16x16 = Int16<{ registers_for_bits(256) }>;
pub type i16x32 = Int16<{ registers_for_bits(512) }>;

pub type i32x8  = Int32<{ registers_for_bits(256) }>;
pub type i32x16 = Int32<{ registers_for_bits(512) }>;

pub type i64x4  = Int64<{ registers_for_bits(256) }>;
pub type i64x8  = Int64<{ registers_for_bits(512) }>;

pub type mask_i8x32  = MaskInt8<{ registers_for_bits(256) }>;
pub type mask_i8x64  = MaskInt8<{ registers_for_bits(512) }>;

pub type mask_i16x16 = MaskInt16<{ registers_for_bits(256) }>;
pub type mask_i16x32 = MaskInt16<{ registers_for_bits(512) }>;

pub type mask_i32x8  = MaskInt32<{ registers_for_bits(256) }>;
pub type mask_i32x16 = MaskInt32<{ registers_for_bits(512) }>;

pub type mask_i64x4  = MaskInt64<{ registers_for_bits(256) }>;
pub type mask_i64x8  = MaskInt64<{ registers_for_bits(512) }>;
