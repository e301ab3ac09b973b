//! Benchmarks for the ordered-priority tokenizer.
//!
//! Measures lexing throughput on a representative entity-listing document
//! (prefix header plus repeated subject blocks).

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use graphnav_syntax::tokenize;

fn entity_listing(subjects: usize) -> String {
    let mut doc = String::new();
    doc.push_str("@prefix hydra: <http://www.w3.org/ns/hydra/core#> .\n");
    doc.push_str("@prefix sdo: <https://schema.org/> .\n\n");
    for i in 0..subjects {
        doc.push_str(&format!(
            "<http://localhost:8080/api/entities/{i}> a sdo:Person ;\n"
        ));
        doc.push_str(&format!("    sdo:name \"Entity {i}\"@en .\n\n"));
    }
    doc
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    for subjects in [16, 256] {
        let doc = entity_listing(subjects);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_function(format!("entity_listing_{subjects}"), |b| {
            b.iter(|| tokenize(black_box(&doc)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
