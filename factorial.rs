use anyhow::Context;
use recursion_playground::{factorial, factorial_channel, factorial_defer, factorial_tail};
use std::sync::mpsc::sync_channel;

const VALUE: u64 = 11;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Normal:  {}", factorial(VALUE));
    println!("Tail:  {}", factorial_tail(VALUE, 1));

    // A rendezvous channel. The last thread in the chain waits in send() until we read.
    let (sender, receiver) = sync_channel(0);
    factorial_channel(VALUE, 1, sender);
    let result = receiver
        .recv()
        .context("the thread chain closed its channel without a result")?;
    println!("Channel:  {result}");

    // The deferred chain runs on this thread and finishes before we read, so the channel needs
    // room to hold the result.
    let (sender, receiver) = sync_channel(1);
    factorial_defer(VALUE, 1, sender);
    let result = receiver
        .recv()
        .context("the deferred chain closed its channel without a result")?;
    println!("Defer:  {result}");

    Ok(())
}
