use std::{env, io::Write, process::ExitCode};

use log::{error, info, warn};
use widevec_simd::*;

const LOG_TARGET : &str = "Main";

/// Vectors of 512 bits on the scalar backend
type ScalarF32 = Float32<4, Scalar>;
type ScalarI32 = Int32<4, Scalar>;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {} - {}", record.level(), record.target(), record.args()))
        .init();

    if let Some(name) = env::args().nth(1) {
        if let Err(err) = check_requested_backend(&name) {
            error!(target: LOG_TARGET, "{err}");
            return ExitCode::FAILURE;
        }
    }

    log_backend_info();

    match self_check() {
        0 => {
            info!(target: LOG_TARGET, "{} backend agrees with the scalar backend", DEF_BACKEND_TYPE);
            ExitCode::SUCCESS
        },
        mismatches => {
            error!(target: LOG_TARGET, "{mismatches} lanes differ between the {} and scalar backends", DEF_BACKEND_TYPE);
            ExitCode::FAILURE
        },
    }
}

/// Make sure the backend named on the command line is the one this build uses
fn check_requested_backend(name: &str) -> Result<()> {
    let backend = name.parse::<BackendType>()?;
    require_backend(backend)?;
    if backend != DEF_BACKEND_TYPE {
        warn!(target: LOG_TARGET, "{backend} is available, but {} is the default backend of this build", DEF_BACKEND_TYPE);
    }
    Ok(())
}

/// Evaluate the same expressions on the default and scalar backends, returning the number of mismatching lanes
fn self_check() -> usize {
    let xs : Vec<f32> = (0..f32x16::LANES).map(|i| i as f32 * 0.75 - 4.0).collect();
    let ys : Vec<f32> = (0..f32x16::LANES).map(|i| 3.0 - i as f32 * 0.5).collect();

    let native = {
        let (x, y) = (f32x16::load(&xs), f32x16::load(&ys));
        let res : f32x16 = x.cmp_lt(y).select(x * y - x, y + y).into();
        u32x16::from_any(&res)
    };
    let scalar = {
        let (x, y) = (ScalarF32::load(&xs), ScalarF32::load(&ys));
        let res : ScalarF32 = x.cmp_lt(y).select(x * y - x, y + y).into();
        Uint32::<4, Scalar>::from_any(&res)
    };
    let mut mismatches = count_mismatches(|lane| native.extract(lane), |lane| scalar.extract(lane), f32x16::LANES);

    let is : Vec<i32> = (0..i32x16::LANES as i32).map(|i| i * 0x0101_0101 - 7).collect();
    let native = {
        let v = i32x16::load(&is);
        let res : i32x16 = (v * v ^ !v).into();
        res
    };
    let scalar = {
        let v = ScalarI32::load(&is);
        let res : ScalarI32 = (v * v ^ !v).into();
        res
    };
    mismatches += count_mismatches(|lane| native.extract(lane), |lane| scalar.extract(lane), i32x16::LANES);

    info!(target: LOG_TARGET, "compared {} lanes", f32x16::LANES + i32x16::LANES);
    mismatches
}

fn count_mismatches<T: PartialEq>(native: impl Fn(usize) -> T, scalar: impl Fn(usize) -> T, lanes: usize) -> usize {
    (0..lanes).filter(|&lane| native(lane) != scalar(lane)).count()
}
