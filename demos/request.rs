//! Simulates a couple of requests flowing through handlers that never
//! pass their log fields explicitly.
//!
//! Run with `cargo run --example request`, or with `CTXLOG_JSON=1` for JSON.

use ctxlog::prelude::*;
use serde::Serialize;

#[derive(Serialize)]
struct Caller {
    user: String,
    plan: &'static str,
}

async fn handle(ctx: Context, user: &str) {
    let ctx = ctxlog::with_serialized(
        &ctx,
        &Caller {
            user: user.to_string(),
            plan: "pro",
        },
    )
    .unwrap_or_else(|err| {
        ctxlog::with(&ctx).error(format!("could not attach caller: {}", err));
        ctx.clone()
    });

    ctxlog::with(&ctx).info("request received");
    ctx.scope(charge(1999)).await;
}

async fn charge(cents: u64) {
    // No context argument: the scoped one is picked up.
    let entry = ctxlog::current().with_field("cents", cents);
    entry.debug("charging card");
    tokio::task::yield_now().await;
    entry.info("charged");
}

#[tokio::main]
async fn main() {
    let builder = tracing_subscriber::fmt().with_max_level(Level::DEBUG);
    if std::env::var_os("CTXLOG_JSON").is_some() {
        builder.json().init();
    } else {
        builder.init();
    }

    let root = ctxlog::with_field(&Context::background(), "service", "billing");
    let requests = ["alice", "bob"].map(|user| {
        let ctx = ctxlog::with_request_id(&root);
        tokio::spawn(async move { handle(ctx, user).await })
    });
    for request in requests {
        if let Err(err) = request.await {
            ctxlog::with(&root).error(format!("request task failed: {}", err));
        }
    }

    ctxlog::with(&root).info("done");
}
