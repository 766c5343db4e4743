use super::*;
use crate::common::{MAX_POINTS, SpectrumError};
use core::f32::consts::PI;
use std::vec;

#[test]
fn test_new_rejects_undersized_storage() {
    let mut storage = vec![0.0f32; MAX_POINTS / 4 - 1];
    assert_eq!(
        SineTable::new(&mut storage).err(),
        Some(SpectrumError::BufferTooSmall)
    );
}

#[test]
fn test_two_point_base_case() {
    let mut storage = vec![0.0f32; MAX_POINTS / 4];
    let table = SineTable::new(&mut storage).unwrap();

    assert_eq!(table.sin(2, 0), 0.0);
    assert_eq!(table.cos(2, 0), 1.0);
}

#[test]
fn test_quarter_point_is_exact() {
    let mut storage = vec![0.0f32; MAX_POINTS / 4];
    let table = SineTable::new(&mut storage).unwrap();

    for shift in 2..=14 {
        let len = 1usize << shift;
        assert_eq!(table.sin(len, len / 4), 1.0);
        assert_eq!(table.cos(len, 0), 1.0);
    }
}

#[test]
fn test_lookup_matches_direct_trig() {
    let mut storage = vec![0.0f32; MAX_POINTS / 4];
    let table = SineTable::new(&mut storage).unwrap();

    for shift in 1..=14 {
        let len = 1usize << shift;
        let step = if len > 128 { len / 128 } else { 1 };
        for i in (0..len / 2).step_by(step) {
            let angle = 2.0 * PI * i as f32 / len as f32;
            assert!(
                (table.sin(len, i) - angle.sin()).abs() < 1e-5,
                "sin mismatch at len = {}, i = {}",
                len,
                i
            );
            assert!(
                (table.cos(len, i) - angle.cos()).abs() < 1e-5,
                "cos mismatch at len = {}, i = {}",
                len,
                i
            );
        }
    }
}
