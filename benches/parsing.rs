use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nanolab::parsers::{elemental_composition, EdxTable, ImpurityTable};
use std::io::Cursor;

const ELEMENTS: &[&str] = &["Fe", "Ni", "Ca", "Na", "O", "Ag", "Zn", "Sn"];
const UNITS: &[&str] = &["ppm", "wt%", "ppb"];

/// Impurity table with `rows` lines
fn impurity_text(rows: usize) -> String {
    (0..rows)
        .map(|i| {
            format!(
                "{} {}{} {}\n",
                ELEMENTS[i % ELEMENTS.len()],
                if i % 4 == 0 { "<" } else { "" },
                (i % 97) as f64 * 0.5,
                UNITS[i % UNITS.len()]
            )
        })
        .collect()
}

/// EDX export with `spectra` rows on a square grid
fn edx_text(spectra: usize) -> String {
    let mut text = String::from(
        "Spectrum Label,X (mm),Y (mm),Substrate Si Atomic %,Layer 1 Density (g/cm³),\
         Layer 1 Thickness (nm),Layer 1 P Atomic %,Layer 1 S Atomic %,Layer 1 Cu Atomic %\n",
    );
    for i in 0..spectra {
        let x = (i % 20) as f64 - 10.0;
        let y = (i / 20) as f64 - 10.0;
        text.push_str(&format!(
            "Spectrum {},{},{},12.0,4.5,{},{},{},{}\n",
            i + 1,
            x,
            y,
            200 + i % 30,
            10.0 + (i % 5) as f64,
            40.0 + (i % 7) as f64,
            45.0 - (i % 3) as f64
        ));
    }
    text
}

fn bench_formula(c: &mut Criterion) {
    let mut group = c.benchmark_group("formula");
    for formula in ["CuS", "Cu2S", "BaZrS3", "Ba3Zr2S7", "Cu2ZnSnS4"] {
        group.bench_with_input(BenchmarkId::from_parameter(formula), formula, |b, f| {
            b.iter(|| elemental_composition(black_box(f)).unwrap())
        });
    }
    group.finish();
}

fn bench_impurity_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("impurity_table");
    for rows in [10, 100, 1000] {
        let text = impurity_text(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &text, |b, text| {
            b.iter(|| ImpurityTable::from_reader(Cursor::new(black_box(text.as_bytes()))).unwrap())
        });
    }
    group.finish();
}

fn bench_edx_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("edx_table");
    for spectra in [25, 400, 4000] {
        let text = edx_text(spectra);
        group.throughput(Throughput::Elements(spectra as u64));
        group.bench_with_input(BenchmarkId::from_parameter(spectra), &text, |b, text| {
            b.iter(|| {
                EdxTable::from_reader(Cursor::new(black_box(text.as_bytes())))
                    .unwrap()
                    .averages()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_formula, bench_impurity_table, bench_edx_table);
criterion_main!(benches);
