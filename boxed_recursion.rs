use recursion_playground::factorial_async;

const VALUE: u64 = 11;

#[tokio::main]
async fn main() {
    env_logger::init();
    println!("Async:  {}", factorial_async(VALUE).await);
}
