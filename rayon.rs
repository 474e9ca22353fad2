use anyhow::Context;
use recursion_playground::factorial_pool;
use std::sync::mpsc::sync_channel;

const VALUE: u64 = 11;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::debug!("running on {} pool threads", rayon::current_num_threads());
    let (sender, receiver) = sync_channel(1);
    factorial_pool(VALUE, 1, sender);
    let result = receiver
        .recv()
        .context("the pool chain closed its channel without a result")?;
    println!("Pool:  {result}");
    Ok(())
}
