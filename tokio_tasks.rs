use anyhow::Context;
use recursion_playground::factorial_task;
use tokio::sync::mpsc::channel;

const VALUE: u64 = 11;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let (sender, mut receiver) = channel(1);
    factorial_task(VALUE, 1, sender);
    let result = receiver
        .recv()
        .await
        .context("the task chain closed its channel without a result")?;
    println!("Tasks:  {result}");
    Ok(())
}
