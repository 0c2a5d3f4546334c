//! Flat precision view; only built with `--features rvv-sp` or `--features rvv-dp`.
#![cfg(any(feature = "rvv-sp", feature = "rvv-dp"))]

use rvv_hal::simd::hal::*;

#[test]
fn test_configuration_is_reexported() {
    assert_eq!(VECTLENSP, 2 * VECTLENDP);
    assert!(ISANAME.starts_with("RISC-V Vector Extension"));
    assert_eq!(vavailability_i(0), -1);
    assert!(INFINITY.is_infinite() && INFINITYF.is_infinite());
}

#[cfg(feature = "rvv-sp")]
#[test]
fn test_single_precision_view() {
    assert_eq!(VFloat::LANES, VECTLENSP);

    let x = vcast_vf_f(2.5);
    let o: VOpMask = veq_vo_vf_vf(vrint_vf_vf(x), vcast_vf_f(3.0));
    assert!(vtestallones_i_vo32(o));

    let m: VMask = vreinterpret_vm_vf(x);
    assert_eq!(vreinterpret_vf_vm(m), x);
}

#[cfg(feature = "rvv-dp")]
#[test]
fn test_double_precision_view() {
    assert_eq!(VDouble::LANES, VECTLENDP);

    let x = vcast_vd_d(-2.5);
    let o: VOpMask = veq_vo_vd_vd(vrint_vd_vd(x), vcast_vd_d(-3.0));
    assert!(vtestallones_i_vo64(o));

    let m: VMask = vreinterpret_vm_vd(x);
    assert_eq!(vcastu_vi_vm(m), vcast_vi_i((x.lane(0).to_bits() >> 32) as i32));
}
