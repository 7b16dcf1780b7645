//! Scanner throughput benchmark.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use eslex::{Options, tokenize};

const SIMPLE_SOURCE: &str = r#"
let total = 0;
for (let i = 0; i < 1_000; i++) {
    total += i * 2;
}
console.log(`total: ${total}`);
"#;

const MIXED_SOURCE: &str = r#"
const RE = /^[a-z_$][a-z0-9_$]*$/i;

function classify(name) {
    if (!RE.test(name)) return null;
    return { name, hash: 0x9E3779B9 ^ name.length };
}

class Registry {
    #entries = new Map();

    add(name, value = 0b1010) {
        const entry = classify(name) ?? { name: "<invalid>", hash: 0o777 };
        this.#entries.set(entry.hash, { ...entry, value });
        return this;
    }

    summary() {
        return [...this.#entries.values()]
            .map((e) => `${e.name}=${e.value.toString(16)}`)
            .join(", ");
    }
}

const registry = new Registry();
["alpha", "beta", "gamma"].forEach((n, i) => registry.add(n, i * 1.5e2));
"#;

fn bench_tokenize(c: &mut Criterion) {
    let options = Options::default();
    let mut group = c.benchmark_group("tokenize");

    for (name, source) in [("simple", SIMPLE_SOURCE), ("mixed", MIXED_SOURCE)] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| tokenize("bench.js", black_box(source), &options));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
