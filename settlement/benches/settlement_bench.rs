use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tollgate_registry::ContentBinding;
use tollgate_settlement::{calc_fee, SettlementEngine};
use tollgate_types::{AccountId, ContentId, Timestamp, Value, VaultId};
use tollgate_vault::Vault;

fn fixture(rate: u128) -> (ContentBinding, Vault) {
    let vault_id = VaultId::new(1);
    let binding = ContentBinding {
        id: ContentId::new(1),
        creator: AccountId::new("toll_creator"),
        rate,
        vault: vault_id,
    };
    (binding, Vault::new(vault_id, AccountId::new("toll_creator")))
}

fn bench_calc_fee(c: &mut Criterion) {
    let mut group = c.benchmark_group("calc_fee");
    for elapsed in [1_000u64, 60_000, 3_600_000, 86_400_000] {
        group.bench_with_input(BenchmarkId::new("elapsed_ms", elapsed), &elapsed, |b, &e| {
            b.iter(|| black_box(calc_fee(black_box(e), black_box(1_000))));
        });
    }
    group.finish();
}

fn bench_checkpoint(c: &mut Criterion) {
    let reader = AccountId::new("toll_reader");
    let (binding, _) = fixture(1_000);

    c.bench_function("engine_checkpoint", |b| {
        b.iter_batched(
            || {
                let mut engine = SettlementEngine::new();
                let (_, vault) = fixture(1_000);
                let mut purse = Value::new(1_000_000);
                let id = engine
                    .start(
                        &reader,
                        &binding,
                        &vault,
                        &mut purse,
                        1_000_000,
                        Timestamp::new(0),
                    )
                    .unwrap();
                (engine, vault, id)
            },
            |(mut engine, mut vault, id)| {
                let _ = black_box(engine.checkpoint(
                    &reader,
                    id,
                    &mut vault,
                    Timestamp::new(12_000),
                ));
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_start(c: &mut Criterion) {
    let reader = AccountId::new("toll_reader");
    let (binding, vault) = fixture(1_000);

    c.bench_function("engine_start", |b| {
        b.iter_batched(
            || (SettlementEngine::new(), Value::new(10_000)),
            |(mut engine, mut purse)| {
                let _ = black_box(engine.start(
                    &reader,
                    &binding,
                    &vault,
                    &mut purse,
                    2_500,
                    Timestamp::new(0),
                ));
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_calc_fee, bench_checkpoint, bench_start);
criterion_main!(benches);
