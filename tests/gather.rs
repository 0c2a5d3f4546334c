//! Indexed-load tests: every lane must read exactly the element its index names.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rvv_hal::simd::{dp, sp};
use rvv_hal::Error;

#[test]
fn test_gather_single_random_indices() {
    let mut rng = StdRng::seed_from_u64(12345);
    let n = sp::VInt2::LANES;

    let src: Vec<f32> = (0..4096).map(|_| rng.random_range(-1.0e3..1.0e3)).collect();

    for _ in 0..500 {
        let indices: Vec<i32> = (0..n)
            .map(|_| rng.random_range(0..src.len() as i32))
            .collect();
        let vi2 = sp::VInt2::from_slice(&indices);

        let gathered = unsafe { sp::vgather_vf_p_vi2(src.as_ptr(), vi2) };
        let checked = sp::checked_gather_vf(&src, vi2).unwrap();

        for (lane, &index) in indices.iter().enumerate() {
            assert_eq!(gathered.lane(lane), src[index as usize], "index {index}");
        }
        assert_eq!(gathered, checked);
    }
}

#[test]
fn test_gather_double_random_indices() {
    let mut rng = StdRng::seed_from_u64(12345);
    let n = dp::VInt::LANES;

    let src: Vec<f64> = (0..4096).map(|_| rng.random_range(-1.0e6..1.0e6)).collect();

    for _ in 0..500 {
        let indices: Vec<i32> = (0..n)
            .map(|_| rng.random_range(0..src.len() as i32))
            .collect();
        let vi = dp::VInt::from_slice(&indices);

        let gathered = unsafe { dp::vgather_vd_p_vi(src.as_ptr(), vi) };
        for (lane, &index) in indices.iter().enumerate() {
            assert_eq!(gathered.lane(lane), src[index as usize], "index {index}");
        }
        assert_eq!(dp::checked_gather_vd(&src, vi), Ok(gathered));
    }
}

#[test]
fn test_gather_all_lanes_same_index() {
    let src = [3.0f32, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
    let g = unsafe { sp::vgather_vf_p_vi2(src.as_ptr(), sp::vcast_vi2_i(5)) };
    assert_eq!(g, sp::vcast_vf_f(9.0));

    let src = [2.0f64, 7.0, 1.0, 8.0];
    let g = unsafe { dp::vgather_vd_p_vi(src.as_ptr(), dp::vcast_vi_i(3)) };
    assert_eq!(g, dp::vcast_vd_d(8.0));
}

#[test]
fn test_gather_double_from_offset_base() {
    // the base pointer need not be the start of an allocation
    let n = dp::VDouble::LANES;
    let src: Vec<f64> = (0..32 + 3 * n).map(|i| i as f64).collect();
    let base = unsafe { src.as_ptr().add(32) };
    let vi = dp::VInt::from_array(std::array::from_fn(|i| i as i32 * 3));
    let g = unsafe { dp::vgather_vd_p_vi(base, vi) };
    for i in 0..n {
        assert_eq!(g.lane(i), (32 + i * 3) as f64);
    }
}

#[test]
fn test_checked_gather_reports_first_bad_lane() {
    let src = vec![0.0f32; 16];
    let mut indices = [0i32; sp::VInt2::LANES];
    let last = indices.len() - 1;
    indices[last] = 16;
    indices[0] = -5;

    let err = sp::checked_gather_vf(&src, sp::VInt2::from_array(indices)).unwrap_err();
    assert_eq!(
        err,
        Error::IndexOutOfBounds {
            lane: 0,
            index: -5,
            len: 16
        }
    );
    println!("{err}");
    assert!(err.to_string().contains("index -5 at lane 0"));
}
