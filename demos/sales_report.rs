use sales_analytics::{
    process_csv, read_csv, render_report, AnalyticsConfig, SalesAnalyticsProcessor,
};
use std::fs::File;
use std::time::Instant;

const BUNDLED_SALES: &str = include_str!("../tests/fixtures/sales.csv");

fn main() {
    let started = Instant::now();
    let config = AnalyticsConfig::default();

    // An optional path argument replaces the bundled dataset
    let report = match std::env::args().nth(1) {
        Some(path) => {
            let file = File::open(&path).expect("sales file should be readable");
            let records = read_csv(file).expect("sales file should be valid CSV");
            SalesAnalyticsProcessor::process(&records, &config).expect("pipeline should run")
        }
        None => process_csv(BUNDLED_SALES, &config).expect("bundled dataset should process"),
    };

    println!("{}", render_report(&report, &config));
    println!("Execution Time: {:.3}ms", started.elapsed().as_secs_f64() * 1000.0);
}
