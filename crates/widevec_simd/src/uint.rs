#![allow(non_camel_case_types)]

use crate::{Vector, DefBackend, U8, U16, U32, U64, registers_for_bits};

pub type Uint8<const V: usize, B = DefBackend>  = Vector<U8 , V, B>;
pub type Uint16<const V: usize, B = DefBackend> = Vector<U16, V, B>;
pub type Uint32<const V: usize, B = DefBackend> = Vector<U32, V, B>;
pub type Uint64<const V: usize, B = DefBackend> = Vector<U64, V, B>;

pub type u8x32  = Uint8<{ registers_for_bits(256) }>;
pub type u8x64  = Uint8<{ registers_for_bits(512) }>;

pub type u16x16 = Uint16<{ registers_for_bits(256) }>;
pub type u16x32 = Uint16<{ registers_for_bits(512) }>;

pub type u32x8  = Uint32<{ registers_for_bits(256) }>;
pub type u32x16 = Uint32<{ registers_for_bits(512) }>;

pub type u64x4  = Uint64<{ registers_for_bits(256) }>;
pub type u64x8  = Uint64<{ registers_for_bits(512) }>;
