//! End-to-end walkthrough of the tollgate settlement flow.
//!
//! Registers content, streams against it with checkpoints, exhausts and
//! refills the deposit, then ends the session and withdraws earnings.
//! Run with `RUST_LOG=info` to see the emitted events.

use anyhow::Result;
use tollgate_platform::Tollgate;
use tollgate_types::{AccountId, PlatformParams, Timestamp, Value};
use tollgate_utils::format_duration_ms;

fn main() -> Result<()> {
    tollgate_utils::init_tracing();

    let admin = AccountId::new("toll_admin");
    let creator = AccountId::new("toll_creator");
    let reader = AccountId::new("toll_reader");

    let mut platform = Tollgate::new(admin.clone(), PlatformParams::tollgate_defaults());

    // Creator lists an article at 1000 units per 10s, paying the 500-unit
    // listing fee with an 800-unit payment; 300 come back as change.
    let mut creator_purse = Value::new(800);
    let reg = platform.register_content(&creator, 1000, &mut creator_purse)?;
    tracing::info!(
        content = %reg.content,
        change = creator_purse.value(),
        "content registered"
    );

    // Reader starts streaming with a 2500-unit deposit.
    let mut reader_purse = Value::new(5000);
    let t0 = Timestamp::now();
    let session = platform.start_session(&reader, reg.content, &mut reader_purse, 2500, t0)?;

    // 12 seconds of streaming.
    let settled = platform.checkpoint(&reader, session, t0.plus(12_000))?;
    tracing::info!(
        streamed = %format_duration_ms(settled.elapsed_ms),
        paid = settled.paid,
        remaining = settled.remaining,
        "checkpoint"
    );

    // 13 more seconds drains the deposit and pauses the session.
    let settled = platform.checkpoint(&reader, session, t0.plus(25_000))?;
    tracing::info!(paid = settled.paid, paused = settled.paused, "checkpoint");

    // Refill and stream one more quantum.
    platform.top_up(&reader, session, &mut reader_purse, 1000, t0.plus(25_000))?;
    platform.checkpoint(&reader, session, t0.plus(35_000))?;

    let closure = platform.end_session(&reader, session, t0.plus(35_000))?;
    reader_purse.join(closure.refund);
    tracing::info!(
        total_spent = closure.total_spent,
        streamed = %format_duration_ms(closure.total_streamed_ms),
        purse = reader_purse.value(),
        "session ended"
    );

    // Creator and admin collect what they're owed.
    let earnings = platform.withdraw_vault(&creator, reg.vault, 0)?;
    creator_purse.join(earnings);
    let fees = platform.withdraw_platform(&admin, 0)?;
    tracing::info!(
        creator_purse = creator_purse.value(),
        platform_fees = fees.value(),
        "withdrawals complete"
    );

    Ok(())
}
