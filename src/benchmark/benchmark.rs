use std::time::Instant;

use crate::simulation::fields::potential_at;
use crate::simulation::params::Parameters;
use crate::simulation::sampler::{DropSampler, SphericalScanSampler};
use crate::simulation::states::{ChargeSystem, NVec3};
use crate::simulation::tracer::trace_field_line;
use crate::visualization::sink::NullSink;

/// Build a deterministic store of `n` charges spread by trig, no rand needed
fn scatter_system(n: usize) -> ChargeSystem {
    let mut sys = ChargeSystem::new();
    for i in 0..n {
        let i_f = i as f64;
        let position = NVec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        );
        // Alternate polarity so traces have somewhere to terminate
        let density = if i % 2 == 0 { 0.05 } else { -0.05 };
        sys.add_charge(position, 0.01, density)
            .expect("positive radius");
    }
    sys
}

pub fn bench_potential() {
    // Different store sizes to test
    let ns = [8, 16, 32, 64, 128, 256];
    let evals = 10_000;

    for n in ns {
        let sys = scatter_system(n);
        let p = NVec3::new(3.0, 6.0, -2.0);

        // Warm up
        let mut acc = potential_at(&sys, p);

        let t0 = Instant::now();
        for _ in 0..evals {
            acc += potential_at(&sys, p);
        }
        let dt = t0.elapsed().as_secs_f64();

        println!(
            "charges = {n:4}, {evals} potentials = {dt:8.6} s (sum {acc:.3})"
        );
    }
}

pub fn bench_steepest_drop() {
    let ns = [8, 16, 32, 64, 128];

    for n in ns {
        let sys = scatter_system(n);
        let sampler = SphericalScanSampler::default();
        let p = NVec3::new(3.0, 6.0, -2.0);

        // Warm up
        sampler.steepest_drop(&sys, p);

        let t0 = Instant::now();
        let out = sampler.steepest_drop(&sys, p);
        let dt = t0.elapsed().as_secs_f64();

        // 512 potential evaluations per call at the default grid
        println!(
            "charges = {n:4}, steepest_drop = {dt:8.6} s -> ({:.5}, {:.5}, {:.5})",
            out.x, out.y, out.z
        );
    }
}

pub fn bench_trace() {
    let ns = [8, 16, 32, 64];

    for n in ns {
        let sys = scatter_system(n);
        let sampler = SphericalScanSampler::default();
        let params = Parameters::default();
        let mut sink = NullSink;
        let seed = NVec3::new(5.1, 0.0, 0.0);

        let t0 = Instant::now();
        let line = trace_field_line(&sys, &sampler, seed, &params, &mut sink);
        let dt = t0.elapsed().as_secs_f64();

        println!(
            "charges = {n:4}, trace = {dt:8.6} s, {} points, {:?}",
            line.points.len(),
            line.termination
        );
    }
}
