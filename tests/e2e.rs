mod common;

use common::synthetic_image::{checkerboard_u8, vertical_step_u8};
use edge_bridge::{convert_to_grayscale, detect_edges, process_frame, CannyParams};

fn edge_count(edges: &[u8]) -> usize {
    edges.iter().filter(|&&b| b == 255).count()
}

#[test]
fn output_is_same_length_and_binary() {
    let width = 64usize;
    let height = 48usize;
    let buffer = checkerboard_u8(width, height, 8);

    let edges = detect_edges(&buffer, width, height, CannyParams::default());

    assert_eq!(edges.len(), buffer.len());
    assert!(
        edges.iter().all(|&b| b == 0 || b == 255),
        "edge map must be binary"
    );
}

#[test]
fn detection_is_deterministic() {
    let width = 40usize;
    let height = 30usize;
    let buffer = checkerboard_u8(width, height, 5);

    let first = detect_edges(&buffer, width, height, CannyParams::default());
    let second = detect_edges(&buffer, width, height, CannyParams::default());

    assert_eq!(first, second, "identical inputs must give identical output");
}

#[test]
fn checkerboard_produces_edges() {
    let width = 64usize;
    let height = 64usize;
    let buffer = checkerboard_u8(width, height, 16);

    let edges = detect_edges(&buffer, width, height, CannyParams::default());

    assert!(
        edge_count(&edges) > 0,
        "high-contrast cell boundaries must be detected"
    );
}

#[test]
fn step_edge_is_detected() {
    let width = 32usize;
    let height = 32usize;
    let buffer = vertical_step_u8(width, height);

    let edges = detect_edges(&buffer, width, height, CannyParams::default());

    assert!(edge_count(&edges) > 0, "step boundary must be detected");
}

#[test]
fn permissive_thresholds_never_lose_edges() {
    let width = 64usize;
    let height = 64usize;
    let buffer = checkerboard_u8(width, height, 8);

    let strict = detect_edges(&buffer, width, height, CannyParams::new(80.0, 220.0));
    let default = detect_edges(&buffer, width, height, CannyParams::default());
    let permissive = detect_edges(&buffer, width, height, CannyParams::new(20.0, 60.0));

    let n_strict = edge_count(&strict);
    let n_default = edge_count(&default);
    let n_permissive = edge_count(&permissive);

    assert!(
        n_permissive >= n_default,
        "lowering thresholds lost edges: {n_permissive} < {n_default}"
    );
    assert!(
        n_default >= n_strict,
        "raising thresholds gained edges: {n_strict} > {n_default}"
    );
}

#[test]
fn black_frame_has_no_edges() {
    let width = 17usize;
    let height = 23usize;
    let buffer = vec![0u8; width * height];

    let edges = detect_edges(&buffer, width, height, CannyParams::default());

    assert!(edges.iter().all(|&b| b == 0), "flat frame must stay empty");
}

#[test]
fn four_by_four_zero_frame_stays_zero() {
    let buffer = vec![0u8; 16];
    let edges = detect_edges(&buffer, 4, 4, CannyParams::new(50.0, 150.0));
    assert_eq!(edges, vec![0u8; 16]);
}

#[test]
fn two_by_two_frame_is_binary() {
    let buffer = vec![0u8, 255, 0, 255];
    let edges = detect_edges(&buffer, 2, 2, CannyParams::default());
    assert_eq!(edges.len(), 4);
    assert!(edges.iter().all(|&b| b == 0 || b == 255));
}

#[test]
fn grayscale_conversion_is_identity() {
    let buffer: Vec<u8> = (0..128).map(|i| (i * 7) as u8).collect();
    let out = convert_to_grayscale(&buffer, 16, 8);
    assert_eq!(out, buffer);
}

#[test]
fn inconsistent_dimensions_degrade_to_passthrough() {
    let buffer: Vec<u8> = (0..100).map(|i| i as u8).collect();
    // 100 bytes claimed to be 12x12.
    let edges = detect_edges(&buffer, 12, 12, CannyParams::default());
    assert_eq!(edges, buffer, "failure path must return the input unchanged");
}

#[test]
fn process_frame_matches_default_thresholds() {
    let width = 48usize;
    let height = 36usize;
    let buffer = checkerboard_u8(width, height, 6);

    let via_wrapper = process_frame(&buffer, width, height);
    let via_params = detect_edges(&buffer, width, height, CannyParams::default());

    assert_eq!(via_wrapper, via_params);
}
