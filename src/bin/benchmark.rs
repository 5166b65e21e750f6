use colored::*;
use governor::{Quota, RateLimiter};
use hdrhistogram::Histogram;
use reqwest::Client;
use serde_json::{json, Value};
use std::env;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use uuid::Uuid;

const DEFAULT_DURATION_SECS: u64 = 20;
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

struct Target {
    name: &'static str,
    url: String,
}

#[tokio::main]
async fn main() {
    let base_url = env::var("BENCH_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let duration_secs = env::var("BENCH_DURATION_SECS")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_DURATION_SECS);

    println!("{}", "🚀 Starting Benchmark Suite".bold().green());
    println!("Target URL: {}", base_url);

    let client = match Client::builder()
        .pool_max_idle_per_host(1000)
        .timeout(Duration::from_secs(10))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} {}", "❌ Failed to build HTTP client:".red().bold(), e);
            return;
        }
    };

    if client.get(format!("{}/health", base_url)).send().await.is_err() {
        eprintln!("{}", format!("❌ Server is NOT reachable at {}. Please start it first.", base_url).red().bold());
        return;
    }

    println!("\n{}", "⚙️  Setting up benchmark data...".yellow());
    let event_id = match setup_event(&client, &base_url).await {
        Ok(id) => id,
        Err(msg) => {
            eprintln!("{} {}", "❌ Setup failed:".red().bold(), msg);
            return;
        }
    };

    println!("{}", "✅ Data created successfully.".green());
    println!("   Event ID: {}", event_id);

    let targets = vec![
        Target {
            name: "Health Check",
            url: format!("{}/health", base_url),
        },
        Target {
            name: "List Events",
            url: format!("{}/events", base_url),
        },
        Target {
            name: "Get Event by Id",
            url: format!("{}/events/{}", base_url, event_id),
        },
    ];

    let rps_stages = [10u32, 50, 200, 1000];

    for target in targets {
        println!("\n{}", "=".repeat(60));
        println!("Benchmarking Endpoint: {}", target.name.cyan().bold());
        println!("URL: {}", target.url);
        println!("{}", "=".repeat(60));

        println!("{:<10} | {:<15} | {:<15} | {:<15}", "RPS", "Mean (ms)", "P99 (ms)", "Success Rate");
        println!("{:-<10}-+-{:-<15}-+-{:-<15}-+-{:-<15}", "", "", "", "");

        for &rps in &rps_stages {
            run_stage(&client, &target, rps, Duration::from_secs(duration_secs)).await;
        }
    }
}

/// Creates one event and returns its id. The create endpoint answers with the
/// whole collection, so the new event is the one with the highest id.
async fn setup_event(client: &Client, base_url: &str) -> Result<i64, String> {
    let payload = json!({
        "name": format!("bench-{}", Uuid::new_v4()),
        "date": "2024-05-01",
        "type": "Tournament",
        "game": "Chess",
        "description": "Load testing"
    });

    let res = client.post(format!("{}/events", base_url))
        .json(&payload)
        .send()
        .await
        .map_err(|e| format!("failed to send create request: {}", e))?;

    if !res.status().is_success() {
        let status = res.status();
        let txt = res.text().await.unwrap_or_default();
        return Err(format!("create returned {}: {}", status, txt));
    }

    let events: Value = res.json().await.map_err(|e| format!("invalid create response: {}", e))?;
    events
        .as_array()
        .and_then(|list| list.iter().filter_map(|e| e["id"].as_i64()).max())
        .ok_or_else(|| "create response contained no events".to_string())
}

async fn run_stage(client: &Client, target: &Target, rps: u32, duration: Duration) {
    let Some(rate) = NonZeroU32::new(rps) else {
        return;
    };
    let limiter = Arc::new(RateLimiter::direct(Quota::per_second(rate)));

    let (tx, mut rx) = mpsc::channel(50000);
    let start_time = Instant::now();

    loop {
        if start_time.elapsed() > duration {
            break;
        }

        if limiter.check().is_ok() {
            let client = client.clone();
            let url = target.url.clone();
            let tx = tx.clone();

            tokio::spawn(async move {
                let req_start = Instant::now();
                let res = client.get(&url).send().await;
                let latency = req_start.elapsed();

                let success = match res {
                    Ok(r) => r.status().is_success(),
                    Err(_) => false,
                };

                let _ = tx.send((latency, success)).await;
            });
        } else {
            tokio::task::yield_now().await;
        }
    }

    drop(tx);

    let mut histogram = match Histogram::<u64>::new(3) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("failed to create histogram: {}", e);
            return;
        }
    };
    let mut successes = 0u64;
    let mut total = 0u64;

    while let Some((latency, success)) = rx.recv().await {
        total += 1;
        if success { successes += 1; }
        let _ = histogram.record(latency.as_micros() as u64);
    }

    let mean_ms = histogram.mean() / 1000.0;
    let p99_ms = histogram.value_at_quantile(0.99) as f64 / 1000.0;
    let success_rate = if total > 0 { (successes as f64 / total as f64) * 100.0 } else { 0.0 };

    println!(
        "{:<10} | {:<15.2} | {:<15.2} | {:<14.1}%",
        rps,
        mean_ms,
        p99_ms,
        success_rate
    );

    tokio::time::sleep(Duration::from_millis(500)).await;
}
