#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use slack_moderator::fuzz_api::{compute_slack_signature, verify_slack_signature};

#[derive(Arbitrary, Debug)]
struct Input {
    secret: String,
    timestamp: String,
    signature: String,
    body: Vec<u8>,
    now: i64,
}

fuzz_target!(|input: Input| {
    let _ = verify_slack_signature(
        &input.secret,
        &input.timestamp,
        &input.signature,
        &input.body,
        input.now,
    );

    // A signature we computed ourselves must verify at its own timestamp.
    if let Ok(ts) = input.timestamp.parse::<i64>()
        && let Some(sig) = compute_slack_signature(&input.secret, &input.timestamp, &input.body)
    {
        assert!(verify_slack_signature(
            &input.secret,
            &input.timestamp,
            &sig,
            &input.body,
            ts
        ));
    }
});
