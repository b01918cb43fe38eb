//! C-ABI transport shim for managed callers.
//!
//! One call crosses the boundary exactly once: the input pointer is viewed
//! without copying, the pipeline runs, and the output buffer is handed to
//! the caller as a raw pointer whose ownership transfers with it. The caller
//! releases it with [`edge_bridge_frame_free`]. A null input pointer or a
//! zero dimension aborts before processing and returns null (the absent
//! result); panics are caught at the boundary and also surface as null —
//! nothing ever unwinds across the ABI.
//!
//! No state is retained between calls; concurrent calls are independent.
use crate::pipeline::{self, CannyParams};
use log::error;
use std::panic::{self, AssertUnwindSafe};
use std::{ptr, slice};

/// View the caller's frame without copying.
///
/// Returns `None` on a null pointer, a zero dimension, or a size overflow.
///
/// # Safety
/// `input`, when non-null, must point to at least `width * height` readable
/// bytes that stay valid and unmodified for the duration of the call.
unsafe fn acquire_frame<'a>(input: *const u8, width: u32, height: u32) -> Option<&'a [u8]> {
    if input.is_null() || width == 0 || height == 0 {
        return None;
    }
    let len = (width as usize).checked_mul(height as usize)?;
    Some(slice::from_raw_parts(input, len))
}

/// Transfer ownership of an output buffer to the caller.
fn hand_off(buffer: Vec<u8>) -> *mut u8 {
    Box::into_raw(buffer.into_boxed_slice()) as *mut u8
}

fn run_guarded(label: &str, run: impl FnOnce() -> Vec<u8>) -> *mut u8 {
    match panic::catch_unwind(AssertUnwindSafe(run)) {
        Ok(buffer) => hand_off(buffer),
        Err(_) => {
            error!("{label}: panic caught at the bridge boundary");
            ptr::null_mut()
        }
    }
}

/// Process one grayscale frame with the default thresholds.
///
/// Returns a newly allocated `width * height` edge map, or null on a null
/// input pointer, zero dimensions, or an internal panic. The caller owns the
/// returned buffer and must release it with [`edge_bridge_frame_free`].
///
/// # Safety
/// See [`acquire_frame`]; `input` must satisfy the same contract.
#[no_mangle]
pub unsafe extern "C" fn edge_bridge_process_frame(
    input: *const u8,
    width: u32,
    height: u32,
) -> *mut u8 {
    let Some(frame) = acquire_frame(input, width, height) else {
        error!("process_frame: failed to acquire input frame ({width}x{height})");
        return ptr::null_mut();
    };
    run_guarded("process_frame", || {
        pipeline::process_frame(frame, width as usize, height as usize)
    })
}

/// Parameterized variant of [`edge_bridge_process_frame`].
///
/// Thresholds arrive as `double` to match the original boundary contract and
/// are narrowed to `f32` for the pipeline.
///
/// # Safety
/// See [`acquire_frame`]; `input` must satisfy the same contract.
#[no_mangle]
pub unsafe extern "C" fn edge_bridge_detect_edges(
    input: *const u8,
    width: u32,
    height: u32,
    low_threshold: f64,
    high_threshold: f64,
) -> *mut u8 {
    let Some(frame) = acquire_frame(input, width, height) else {
        error!("detect_edges: failed to acquire input frame ({width}x{height})");
        return ptr::null_mut();
    };
    let params = CannyParams::new(low_threshold as f32, high_threshold as f32);
    run_guarded("detect_edges", || {
        pipeline::detect_edges(frame, width as usize, height as usize, params)
    })
}

/// Grayscale conversion across the boundary; identity copy by contract.
///
/// # Safety
/// See [`acquire_frame`]; `input` must satisfy the same contract.
#[no_mangle]
pub unsafe extern "C" fn edge_bridge_convert_to_grayscale(
    input: *const u8,
    width: u32,
    height: u32,
) -> *mut u8 {
    let Some(frame) = acquire_frame(input, width, height) else {
        error!("convert_to_grayscale: failed to acquire input frame ({width}x{height})");
        return ptr::null_mut();
    };
    run_guarded("convert_to_grayscale", || {
        pipeline::convert_to_grayscale(frame, width as usize, height as usize)
    })
}

/// Release a buffer returned by any of the processing functions above.
///
/// # Safety
/// - `ptr` must be a pointer previously returned by this module with the
///   same `width`/`height`, or null (in which case this is a no-op).
/// - After this call the buffer is invalid and must not be used again.
#[no_mangle]
pub unsafe extern "C" fn edge_bridge_frame_free(ptr: *mut u8, width: u32, height: u32) {
    if ptr.is_null() {
        return;
    }
    let Some(len) = (width as usize).checked_mul(height as usize) else {
        return;
    };
    drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(ptr, len)));
}
