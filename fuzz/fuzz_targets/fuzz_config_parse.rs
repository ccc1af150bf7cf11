#![no_main]

use libfuzzer_sys::fuzz_target;
use slack_moderator::fuzz_api::parse_config;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data)
        && let Ok(config) = parse_config(s)
    {
        let _ = config.validate();
        let _ = format!("{:?}", config);
    }
});
