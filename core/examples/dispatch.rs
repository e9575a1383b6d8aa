use futures_executor::block_on;
use log::info;
use verdict_core::{Outcome, Success};
use verdict_macros::Failure;

#[derive(Debug, Failure)]
struct Timeout {
    message: String,
    after_ms: u64,
}

#[derive(Debug, Failure)]
struct Rejected {
    message: String,
}

async fn call(attempt: u32) -> Outcome<u32> {
    match attempt {
        0 => Timeout {
            message: "upstream timed out".into(),
            after_ms: 500,
        }
        .into(),
        1 => Rejected {
            message: "upstream rejected the request".into(),
        }
        .into(),
        n => Outcome::success(n * 100),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    for attempt in 0..3 {
        let outcome = block_on(call(attempt));

        let summary = block_on(
            outcome
                .switch_async()
                .case::<Success<u32>, _>(|Success(value)| async move { format!("got {}", value) })
                .case::<Timeout, _>(|t| async move { format!("retry after {}ms", t.after_ms) })
                .default(|subject| async move {
                    subject
                        .failure()
                        .map(|f| format!("giving up: {}", f.message()))
                        .unwrap_or_default()
                }),
        );

        info!("attempt {}: {}", attempt, summary);
    }

    Ok(())
}
