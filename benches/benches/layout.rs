// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lineage_connect::{ConnectionStyle, compute_connections};
use lineage_layout::{
    GenerationLayoutConfig, LayoutCache, LayoutConfig, LayoutMode, TierLayoutConfig,
    compute_positions, layout_by_tier,
};
use lineage_model::{FamilyMember, MemberId, Parents, check_relations};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn gen_range_usize(&mut self, upper_exclusive: usize) -> usize {
        if upper_exclusive == 0 {
            return 0;
        }
        (self.next_u32() as usize) % upper_exclusive
    }
}

/// A family of `n` members, `per_generation` to a generation.
///
/// Neighbors in a generation are married; everyone past the first generation
/// gets a random couple from the generation above as parents.
fn build_family(n: usize, per_generation: usize, seed: u64) -> Vec<FamilyMember> {
    let mut rng = Lcg::new(seed);
    let id = |i: usize| MemberId::from(format!("m{i}"));
    let mut members: Vec<FamilyMember> = (0..n)
        .map(|i| {
            let generation = (i / per_generation) as i32;
            let mut member =
                FamilyMember::new(id(i), format!("Member {}", rng.next_u32() % 997))
                    .with_generation(generation);
            let partner = i ^ 1;
            if partner < n && partner / per_generation == i / per_generation {
                member = member.with_spouse(id(partner));
            }
            member
        })
        .collect();

    for i in per_generation..n {
        let row_start = (i / per_generation - 1) * per_generation;
        let father = row_start + (rng.gen_range_usize(per_generation) & !1);
        let mother = (father + 1).min(row_start + per_generation - 1);
        members[i].parent_ids = Parents::try_from_iter([id(father), id(mother)])
            .unwrap_or_default();
        let child = id(i);
        members[father].children_ids.push(child.clone());
        if mother != father {
            members[mother].children_ids.push(child);
        }
    }
    members
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("lineage_layout");
    group.sample_size(50);

    for &(n, per_generation) in &[(64_usize, 8_usize), (1_024, 32), (8_192, 128)] {
        let members = build_family(n, per_generation, 0x11AE_A6E0_0000_0001);

        group.bench_function(format!("generation(n={n},w={per_generation})"), |b| {
            let config = GenerationLayoutConfig::default();
            b.iter(|| black_box(compute_positions(black_box(&members), &config)));
        });

        group.bench_function(format!("tier(n={n},w={per_generation})"), |b| {
            let config = TierLayoutConfig::default();
            b.iter(|| black_box(layout_by_tier(black_box(&members), &config)));
        });

        group.bench_function(format!("cache_hit(n={n},w={per_generation})"), |b| {
            let config = LayoutConfig::default();
            let mut cache = LayoutCache::new();
            let _ = cache.layout(&members, LayoutMode::Tier, &config);
            b.iter(|| {
                let layout = cache.layout(black_box(&members), LayoutMode::Tier, &config);
                black_box(layout.positions.len());
            });
        });

        group.bench_function(format!("connections(n={n},w={per_generation})"), |b| {
            let positions = compute_positions(&members, &GenerationLayoutConfig::default()).positions;
            let style = ConnectionStyle::default();
            b.iter(|| black_box(compute_connections(black_box(&members), &positions, &style)));
        });

        group.bench_function(format!("check_relations(n={n},w={per_generation})"), |b| {
            b.iter(|| black_box(check_relations(black_box(&members))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
