//! Walkthrough of both kernels on a small, fixed input.
//!
//! Purpose
//! - Show the call surface end to end: coordinates of a few probe points,
//!   containment, and the three rules side by side on a smooth integrand.
//! - The fmt subscriber runs at DEBUG so the rejected degenerate triangle
//!   shows up as a log event next to the printed error.
//!
//! Run: `cargo run -p baryquad --example triangle_walkthrough`

use baryquad::prelude::*;
use nalgebra::vector;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<(), Error> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let tri = Triangle::new(vector![0.0, 0.0], vector![4.0, 0.0], vector![1.0, 3.0]);
    println!("triangle={:?} area={:.3}", tri.v, tri.signed_area());
    for p in [tri.centroid(), vector![2.0, 0.0], vector![3.0, 2.5]] {
        let l = cartesian_to_barycentric(&tri, p)?;
        println!(
            "point=({:.3},{:.3}) bary=({:.4},{:.4},{:.4}) inside={} strict={}",
            p.x,
            p.y,
            l[0],
            l[1],
            l[2],
            is_inside_triangle(&tri, p)?,
            is_strictly_inside_triangle(&tri, p)?
        );
    }

    let flat = Triangle::new(vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]);
    match cartesian_to_barycentric(&flat, vector![0.5, 0.0]) {
        Ok(l) => println!("unexpected coordinates {l:?}"),
        Err(err) => println!("rejected: {err}"),
    }

    let exact = 2.0;
    for n in [3usize, 11, 101] {
        let grid = linspace(0.0, std::f64::consts::PI, n)?;
        for rule in Rule::ALL {
            let approx = rule.integrate(&grid, f64::sin)?;
            println!(
                "n={n:<4} rule={rule:<9} integral={approx:.10} abs_err={:.3e}",
                (approx - exact).abs()
            );
        }
    }
    Ok(())
}
