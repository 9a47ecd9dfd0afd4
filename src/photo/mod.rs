// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Synthetic photo processing workload
//!
//! The uploaded image is never inspected. Instead each request multiplies two
//! random dense matrices to put a predictable amount of load on the CPU.

use std::time::{Duration, Instant};

use ndarray::Array2;
use rand::Rng;

use crate::error::{AppError, Result};

/// Edge length of the square matrices multiplied per request
pub const MATRIX_SIZE: usize = 500;

/// Multiply two freshly generated `size`×`size` matrices
pub fn multiply_random_matrices(size: usize) -> Array2<f64> {
    let mut rng = rand::thread_rng();
    let a = Array2::from_shape_fn((size, size), |_| rng.gen_range(0.0..1.0));
    let b = Array2::from_shape_fn((size, size), |_| rng.gen_range(0.0..1.0));
    a.dot(&b)
}

/// Run the workload on the blocking pool and return how long it took
///
/// The multiplication is CPU bound, so it must not run on an async worker.
pub async fn run_workload(size: usize) -> Result<Duration> {
    timed_blocking(move || {
        let product = multiply_random_matrices(size);
        std::hint::black_box(&product);
    })
    .await
}

/// Time `job` on the blocking pool; a panic inside it becomes [`AppError::Processing`]
pub async fn timed_blocking<F>(job: F) -> Result<Duration>
where
    F: FnOnce() + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let start = Instant::now();
        job();
        start.elapsed()
    })
    .await
    .map_err(|e| AppError::Processing(format!("photo processing failed: {}", e)))
}

/// Response message for a processed upload
pub fn format_message(filename: &str, elapsed: Duration) -> String {
    format!(
        "Processed photo {} in {:.2} seconds",
        filename,
        elapsed.as_secs_f64()
    )
}
