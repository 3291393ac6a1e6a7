use criterion::{criterion_group, criterion_main, Criterion};
use rustcavity::functions::random_field;
use rustcavity::layout::StaggeredLayout;
use rustcavity::momentum::{assemble_all, assemble_par, WallValues, XMomentum, YMomentum};
use rustcavity::params::DiscretizationParams;
use std::sync::Arc;

const SIZES: [usize; 2] = [80, 160];

pub fn bench_momentum(c: &mut Criterion) {
    let mut group = c.benchmark_group("Momentum");
    group.significance_level(0.1).sample_size(10);
    for n in SIZES.iter() {
        let layout = StaggeredLayout::new(*n, *n);
        let params = Arc::new(DiscretizationParams::lid_driven_cavity(*n, *n, 400.).unwrap());
        let u = random_field(layout.u_len(), 1.);
        let v = random_field(layout.v_len(), 1.);
        let p = layout.zeros_p();
        let walls = WallValues::lid(1.);
        let x = XMomentum::new(params.clone());
        let y = YMomentum::new(params);
        let cells_u = layout.cells_u();
        let cells_v = layout.cells_v();

        let name = format!("Size: {} x (serial)", *n);
        group.bench_function(&name, |b| {
            b.iter(|| assemble_all(&x, &cells_u, &walls, &u.view(), &v.view(), &p.view()))
        });
        let name = format!("Size: {} x (parallel)", *n);
        group.bench_function(&name, |b| {
            b.iter(|| assemble_par(&x, &cells_u, &walls, &u.view(), &v.view(), &p.view()))
        });
        let name = format!("Size: {} y (parallel)", *n);
        group.bench_function(&name, |b| {
            b.iter(|| assemble_par(&y, &cells_v, &walls, &u.view(), &v.view(), &p.view()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_momentum);
criterion_main!(benches);
