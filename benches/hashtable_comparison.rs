use core::hash::Hash;
use core::hint::black_box;
use std::collections::HashMap as StdHashMap;

use chain_hash::ChainedHashTable;
use criterion::AxisScale;
use criterion::BatchSize;
use criterion::Criterion;
use criterion::PlotConfiguration;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use hashbrown::HashMap as HashbrownHashMap;
use rand::Rng;
use rand::SeedableRng;
use rand::TryRngCore;
use rand::rngs::OsRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand_distr::Zipf;

trait KeyValuePair {
    type Key: Hash + Eq + Clone;
    type Value: Clone;

    fn new(key: u64) -> (Self::Key, Self::Value);
}

struct SmallTestItem;

impl KeyValuePair for SmallTestItem {
    type Key = u64;
    type Value = u64;

    fn new(key: u64) -> (u64, u64) {
        black_box((key, key))
    }
}

struct TestItem;

impl KeyValuePair for TestItem {
    type Key = String;
    type Value = u64;

    fn new(key: u64) -> (String, u64) {
        black_box((format!("key_{:016X}", key), key))
    }
}

struct LargeTestItem;

impl KeyValuePair for LargeTestItem {
    type Key = String;
    type Value = [u8; 256];

    fn new(key: u64) -> (String, [u8; 256]) {
        let mut value = [0u8; 256];
        for (i, byte) in value.iter_mut().enumerate() {
            *byte = ((key >> ((i % 8) * 8)) & 0xFF) as u8;
        }
        black_box((format!("key_{:064b}", key), value))
    }
}

const SIZES: &[usize] = &[
    (1 << 10),
    (1 << 11),
    (1 << 12),
    (1 << 13),
    (1 << 14),
    (1 << 15),
    (1 << 16),
];

#[derive(Clone, Copy)]
enum Operation {
    Insert,
    Remove,
    Find,
}

fn bench_insert_random<Item: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "insert_random_{}",
        core::any::type_name::<Item>()
    ));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    let mut rng = OsRng;

    for &size in SIZES[..=MAX_SIZE].iter() {
        let pairs = (0..size)
            .map(|_| Item::new(rng.try_next_u64().unwrap()))
            .collect::<Vec<_>>();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut pairs = pairs.clone();
                    pairs.shuffle(&mut SmallRng::from_os_rng());
                    pairs
                },
                |pairs| {
                    let mut table = ChainedHashTable::new();
                    for (key, value) in pairs {
                        black_box(table.upsert(key, value));
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut pairs = pairs.clone();
                    pairs.shuffle(&mut SmallRng::from_os_rng());
                    pairs
                },
                |pairs| {
                    let mut table = HashbrownHashMap::new();
                    for (key, value) in pairs {
                        black_box(table.insert(key, value));
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("std/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut pairs = pairs.clone();
                    pairs.shuffle(&mut SmallRng::from_os_rng());
                    pairs
                },
                |pairs| {
                    let mut table = StdHashMap::new();
                    for (key, value) in pairs {
                        black_box(table.insert(key, value));
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_find_hit_miss<Item: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "find_hit_miss_{}",
        core::any::type_name::<Item>()
    ));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        // Even keys are stored, odd keys miss.
        let stored = (0..size as u64 * 2)
            .step_by(2)
            .map(Item::new)
            .collect::<Vec<_>>();
        let mut probes = (0..size as u64 * 2)
            .map(|k| Item::new(k).0)
            .collect::<Vec<_>>();
        probes.shuffle(&mut SmallRng::from_os_rng());

        let chain_table: ChainedHashTable<Item::Key, Item::Value> =
            stored.iter().cloned().collect();
        let hashbrown_table: HashbrownHashMap<Item::Key, Item::Value> =
            stored.iter().cloned().collect();
        let std_table: StdHashMap<Item::Key, Item::Value> = stored.iter().cloned().collect();

        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter(|| {
                for key in probes.iter() {
                    black_box(chain_table.try_get(key));
                }
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                for key in probes.iter() {
                    black_box(hashbrown_table.get(key));
                }
            })
        });

        group.bench_function(format!("std/{size}"), |b| {
            b.iter(|| {
                for key in probes.iter() {
                    black_box(std_table.get(key));
                }
            })
        });
    }

    group.finish();
}

fn bench_remove<Item: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("remove_{}", core::any::type_name::<Item>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let pairs = (0..size as u64).map(Item::new).collect::<Vec<_>>();
        let chain_table: ChainedHashTable<Item::Key, Item::Value> =
            pairs.iter().cloned().collect();
        let hashbrown_table: HashbrownHashMap<Item::Key, Item::Value> =
            pairs.iter().cloned().collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut keys = pairs.iter().map(|(k, _)| k.clone()).collect::<Vec<_>>();
                    keys.shuffle(&mut SmallRng::from_os_rng());
                    (chain_table.clone(), keys)
                },
                |(mut table, keys)| {
                    for key in keys.iter() {
                        black_box(table.remove(key));
                    }
                    black_box(table)
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut keys = pairs.iter().map(|(k, _)| k.clone()).collect::<Vec<_>>();
                    keys.shuffle(&mut SmallRng::from_os_rng());
                    (hashbrown_table.clone(), keys)
                },
                |(mut table, keys)| {
                    for key in keys.iter() {
                        black_box(table.remove(key));
                    }
                    black_box(table)
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_iteration<Item: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("iteration_{}", core::any::type_name::<Item>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let pairs = (0..size as u64).map(Item::new).collect::<Vec<_>>();
        let chain_table: ChainedHashTable<Item::Key, Item::Value> =
            pairs.iter().cloned().collect();
        let hashbrown_table: HashbrownHashMap<Item::Key, Item::Value> =
            pairs.iter().cloned().collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter(|| {
                let mut count = 0;
                for entry in chain_table.iter() {
                    black_box(entry);
                    count += 1;
                }
                black_box(count)
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                let mut count = 0;
                for entry in hashbrown_table.iter() {
                    black_box(entry);
                    count += 1;
                }
                black_box(count)
            })
        });
    }

    group.finish();
}

fn bench_mixed_probabilistic_zipf<Item: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    for exponent in [1.0, 1.3] {
        let mut group = c.benchmark_group(format!(
            "mixed_probabilistic_zipf_{:.01}_{}",
            exponent,
            core::any::type_name::<Item>()
        ));
        group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

        const KEY_SPACE_MULTIPLIER: u64 = 2;

        for &size in SIZES[..=MAX_SIZE].iter() {
            let mut rng = SmallRng::from_os_rng();
            let op_distr = Zipf::new(3.0, exponent).unwrap();
            let insert_distr = Zipf::new(size as f64 - 1.0, 1.0).unwrap();
            let lookup_distr =
                Zipf::new(size as f64 * KEY_SPACE_MULTIPLIER as f64 - 1.0, 1.0).unwrap();

            let operations = (0..size * 3)
                .map(|_| {
                    let op_choice: f64 = rng.sample(op_distr);
                    let operation = if op_choice <= 1.0 {
                        Operation::Find
                    } else if op_choice <= 2.0 {
                        Operation::Insert
                    } else {
                        Operation::Remove
                    };
                    let key = match operation {
                        Operation::Insert => rng.sample(insert_distr) as u64,
                        Operation::Find | Operation::Remove => rng.sample(lookup_distr) as u64,
                    };
                    (operation, Item::new(key))
                })
                .collect::<Vec<_>>();

            group.throughput(Throughput::Elements(operations.len() as u64));
            group.bench_function(format!("chain_hash/{size}"), |b| {
                b.iter_batched(
                    || operations.clone(),
                    |operations| {
                        let mut table = ChainedHashTable::new();
                        for (operation, (key, value)) in operations {
                            match operation {
                                Operation::Insert => {
                                    black_box(table.upsert(key, value));
                                }
                                Operation::Remove => {
                                    black_box(table.remove(&key));
                                }
                                Operation::Find => {
                                    black_box(table.try_get(&key));
                                }
                            }
                        }
                        black_box(table)
                    },
                    BatchSize::SmallInput,
                )
            });

            group.bench_function(format!("hashbrown/{size}"), |b| {
                b.iter_batched(
                    || operations.clone(),
                    |operations| {
                        let mut table = HashbrownHashMap::new();
                        for (operation, (key, value)) in operations {
                            match operation {
                                Operation::Insert => {
                                    black_box(table.insert(key, value));
                                }
                                Operation::Remove => {
                                    black_box(table.remove(&key));
                                }
                                Operation::Find => {
                                    black_box(table.get(&key));
                                }
                            }
                        }
                        black_box(table)
                    },
                    BatchSize::SmallInput,
                )
            });
        }

        group.finish();
    }
}

criterion_group!(
    benches,
    bench_insert_random::<SmallTestItem, 6>,
    bench_insert_random::<TestItem, 6>,
    bench_insert_random::<LargeTestItem, 4>,
    bench_find_hit_miss::<SmallTestItem, 6>,
    bench_find_hit_miss::<TestItem, 6>,
    bench_find_hit_miss::<LargeTestItem, 4>,
    bench_remove::<SmallTestItem, 6>,
    bench_remove::<TestItem, 6>,
    bench_remove::<LargeTestItem, 4>,
    bench_iteration::<SmallTestItem, 6>,
    bench_iteration::<TestItem, 6>,
    bench_iteration::<LargeTestItem, 4>,
    bench_mixed_probabilistic_zipf::<SmallTestItem, 6>,
    bench_mixed_probabilistic_zipf::<TestItem, 6>,
    bench_mixed_probabilistic_zipf::<LargeTestItem, 4>,
);

criterion_main!(benches);
