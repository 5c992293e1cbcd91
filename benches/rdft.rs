use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scadnum::dft::{RealDftConfig, RealDftKernel};
use scadnum::kernel::KernelLifecycle;
use scadnum::signal::cosine;
use scadnum::traits::RealDft1D;
use scadnum::vecmath::linspace;

fn rdft_direct(c: &mut Criterion) {
    // Sequence lengths spanning what parametric models actually feed in.
    for n in [8usize, 32, 128] {
        let t = linspace(0.0f64, 1.0, n).expect("time axis");
        let x = cosine(&t, 3.0, 1.0, 15.0, 0.2).expect("signal");

        let kernel = RealDftKernel::try_new(RealDftConfig { n }).expect("valid rdft kernel config");
        let mut re = vec![0.0f64; kernel.bins()];
        let mut im = vec![0.0f64; kernel.bins()];

        c.bench_function(&format!("rdft_direct_{n}"), |b| {
            b.iter(|| {
                kernel
                    .run_into(black_box(&x), &mut re, &mut im)
                    .expect("transform");
                black_box(re[0]);
            })
        });
    }
}

criterion_group!(benches, rdft_direct);
criterion_main!(benches);
