use criterion::{criterion_main, criterion_group, Criterion, black_box};

use widevec_simd::*;

const ELEMS : usize = 4096;

fn saxpy_benchmark(c: &mut Criterion) {
    let x : Vec<f32> = (0..ELEMS).map(|i| i as f32 * 0.5).collect();
    let y : Vec<f32> = (0..ELEMS).map(|i| 1.0 - i as f32).collect();
    let mut out = vec![0.0f32; ELEMS];

    c.bench_function("saxpy f32x16: 4096 elements", |b| b.iter(|| {
        let a = f32x16::splat(black_box(2.0));
        for ((x, y), out) in x.chunks_exact(f32x16::LANES).zip(y.chunks_exact(f32x16::LANES)).zip(out.chunks_exact_mut(f32x16::LANES)) {
            let res : f32x16 = (a * f32x16::load(x) + f32x16::load(y)).into();
            res.store(out);
        }
        black_box(&out);
    }));

    c.bench_function("saxpy f32x16 scalar backend: 4096 elements", |b| b.iter(|| {
        let a = Float32::<4, Scalar>::splat(black_box(2.0));
        for ((x, y), out) in x.chunks_exact(16).zip(y.chunks_exact(16)).zip(out.chunks_exact_mut(16)) {
            let res : Float32<4, Scalar> = (a * Float32::<4, Scalar>::load(x) + Float32::<4, Scalar>::load(y)).into();
            res.store(out);
        }
        black_box(&out);
    }));
}

fn select_benchmark(c: &mut Criterion) {
    let vals : Vec<i32> = (0..ELEMS as i32).map(|i| (i * 7919) % 1000 - 500).collect();
    let mut out = vec![0i32; ELEMS];

    c.bench_function("clamp i32x8 through select: 4096 elements", |b| b.iter(|| {
        let lo = i32x8::splat(black_box(-100));
        let hi = i32x8::splat(black_box(100));
        for (src, out) in vals.chunks_exact(i32x8::LANES).zip(out.chunks_exact_mut(i32x8::LANES)) {
            let v = i32x8::load(src);
            let v : i32x8 = v.cmp_lt(lo).select(lo, v).into();
            let v : i32x8 = v.cmp_gt(hi).select(hi, v).into();
            v.store(out);
        }
        black_box(&out);
    }));
}

criterion_group!(benches, saxpy_benchmark, select_benchmark);
criterion_main!(benches);
