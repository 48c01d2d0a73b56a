//! Random pet generation for load testing

use std::time::Instant;

use rand::seq::SliceRandom;
use rand::Rng;

use super::repos::PetRepo;
use crate::models::NewPet;

pub const DEFAULT_SEED_COUNT: usize = 1000;

const TYPES: &[&str] = &["dog", "cat", "bird", "hamster", "fish"];

const NAMES: &[&str] = &[
    "Buddy", "Mittens", "Max", "Charlie", "Bella", "Daisy", "Luna", "Jack", "Lucy", "Rocky",
];

const OWNERS: &[&str] = &[
    "John Doe",
    "Jane Smith",
    "Alice Brown",
    "Michael Johnson",
    "Emily Davis",
];

/// Outcome of a seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub failed: usize,
}

/// Generate `count` random pets with ages in `1..=20`.
pub fn generate_pets<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<NewPet> {
    (0..count)
        .map(|_| NewPet {
            name: pick(NAMES, rng),
            pet_type: pick(TYPES, rng),
            age: rng.gen_range(1..=20),
            owner_name: pick(OWNERS, rng),
        })
        .collect()
}

fn pick<R: Rng + ?Sized>(options: &[&str], rng: &mut R) -> String {
    options.choose(rng).copied().unwrap_or_default().to_string()
}

/// Insert `count` random pets one at a time.
///
/// Individual insert failures are logged and counted; they do not stop the run.
pub async fn seed_pets(repo: &PetRepo, count: usize) -> SeedReport {
    let pets = generate_pets(count, &mut rand::thread_rng());
    let start = Instant::now();
    let mut report = SeedReport::default();

    for pet in pets {
        match repo.create_pet(pet).await {
            Ok(_) => report.inserted += 1,
            Err(e) => {
                tracing::warn!("Failed to seed pet: {}", e);
                report.failed += 1;
            }
        }
    }

    tracing::info!(
        inserted = report.inserted,
        failed = report.failed,
        "Seeding completed in {:.2} seconds",
        start.elapsed().as_secs_f64()
    );
    report
}
