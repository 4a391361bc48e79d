//! dataset-gen: synthetic transaction fixtures for exercising the engine.
//!
//! Emits one scripted instance of each detectable pattern (a 3-cycle, a
//! fan-in, a fan-out, a 4-account layering chain, and a velocity burst),
//! plus optional seeded background traffic for volume testing.
//!
//! Usage:
//!   dataset-gen --out demo.csv
//!   dataset-gen --out big.csv --seed 7 --accounts 500 --background 2000

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use std::env;

struct Row {
    sender: String,
    receiver: String,
    amount: f64,
    at: NaiveDateTime,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let out = args
        .windows(2)
        .find(|w| w[0] == "--out")
        .map(|w| w[1].clone())
        .context("usage: dataset-gen --out <file.csv> [--seed N] [--accounts N] [--background N]")?;
    let seed = parse_arg(&args, "--seed", 42u64);
    let accounts = parse_arg(&args, "--accounts", 50usize);
    let background = parse_arg(&args, "--background", 0usize);

    let now = Utc::now().naive_utc();
    let mut rows = Vec::new();

    // 1. Cycle: CYCLE_A → CYCLE_B → CYCLE_C → CYCLE_A
    for (s, r, amount) in [
        ("CYCLE_A", "CYCLE_B", 500.0),
        ("CYCLE_B", "CYCLE_C", 600.0),
        ("CYCLE_C", "CYCLE_A", 700.0),
    ] {
        rows.push(Row {
            sender: s.into(),
            receiver: r.into(),
            amount,
            at: now,
        });
    }

    // 2. Fan-in: 10 senders → AGGREGATOR
    for i in 0..10 {
        rows.push(Row {
            sender: format!("SENDER_{i}"),
            receiver: "AGGREGATOR".into(),
            amount: 100.0 + i as f64,
            at: now - Duration::hours(i),
        });
    }

    // 3. Fan-out: DISPERSER → 10 receivers
    for i in 0..10 {
        rows.push(Row {
            sender: "DISPERSER".into(),
            receiver: format!("RECEIVER_{i}"),
            amount: 200.0 + i as f64,
            at: now - Duration::hours(i),
        });
    }

    // 4. Layering chain: LAYER1 → LAYER2 → LAYER3 → LAYER4
    for (s, r) in [("LAYER1", "LAYER2"), ("LAYER2", "LAYER3"), ("LAYER3", "LAYER4")] {
        rows.push(Row {
            sender: s.into(),
            receiver: r.into(),
            amount: 1000.0,
            at: now,
        });
    }

    // 5. Velocity burst: 5 fast transfers within 72 hours
    for i in 0..5 {
        rows.push(Row {
            sender: "FAST_NODE".into(),
            receiver: format!("FAST_TARGET_{i}"),
            amount: 300.0,
            at: now - Duration::hours(i),
        });
    }

    // 6. Seeded background traffic among ordinary accounts
    let accounts = accounts.max(2);
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    for _ in 0..background {
        let s = rng.gen_range(0..accounts);
        let mut r = rng.gen_range(0..accounts);
        if r == s {
            r = (r + 1) % accounts;
        }
        rows.push(Row {
            sender: format!("ACCT_{s:04}"),
            receiver: format!("ACCT_{r:04}"),
            amount: (rng.gen_range(10.0..5000.0f64) * 100.0).round() / 100.0,
            at: now - Duration::hours(rng.gen_range(0..24 * 30)),
        });
    }

    let mut writer = csv::Writer::from_path(&out)?;
    writer.write_record(["transaction_id", "sender_id", "receiver_id", "amount", "timestamp"])?;
    for (id, row) in rows.iter().enumerate() {
        writer.write_record([
            id.to_string(),
            row.sender.clone(),
            row.receiver.clone(),
            format!("{:.2}", row.amount),
            row.at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        ])?;
    }
    writer.flush()?;

    log::info!("{} rows written to {out} (seed {seed})", rows.len());
    println!("Dataset created: {out} ({} rows)", rows.len());
    Ok(())
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
