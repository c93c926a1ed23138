use fanflow::primes::{is_prime, random_below};
use fanflow::{filter_pipeline, PipelineConfig};
use futures_util::stream::StreamExt;
use tokio::runtime::Runtime;

const RANDOM_BOUND: u64 = 500_000_000;

fn main() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let start = std::time::Instant::now();

        // One worker per core competes for the random stream; the pipeline
        // shuts itself down once ten primes have been taken.
        let config = PipelineConfig::default();
        let (mut primes, _guard) =
            filter_pipeline(&config, random_below(RANDOM_BOUND), |&n| is_prime(n));

        while let Some(prime) = primes.next().await {
            println!("{}", prime);
        }

        println!("{:?}", start.elapsed());
    });
}
