use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;

use sortbench::{generate_uniform, quick_select, run_benchmarks, BenchConfig};

fn main() {
    env_logger::builder().filter_level(LevelFilter::Warn).init();

    let mut rng = StdRng::from_entropy();

    // small demo round: show the input and answer an order-statistic query
    let preview = generate_uniform(&mut rng, 8);
    println!("{:?}", preview);
    let rank = 1;
    let value = quick_select(&mut preview.clone(), rank, &mut rng);
    println!("{}. smallest element: {}", rank + 1, value);

    let config = BenchConfig::default();
    let mut current_size = None;
    for record in run_benchmarks(&config, &mut rng) {
        if current_size != Some(record.size) {
            current_size = Some(record.size);
            println!("Size: {}", record.size);
        }
        println!("{}: {} uS", record.algorithm, record.micros());
    }
}
