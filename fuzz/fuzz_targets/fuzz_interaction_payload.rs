#![no_main]

use libfuzzer_sys::fuzz_target;
use slack_moderator::fuzz_api::{MAX_METADATA_CHARS, ReportContext, parse_form_body};

fuzz_target!(|data: &[u8]| {
    let _ = parse_form_body(data);

    if let Ok(s) = std::str::from_utf8(data)
        && let Ok(context) = ReportContext::decode(s)
        && let Ok(encoded) = context.encode()
    {
        assert!(encoded.chars().count() <= MAX_METADATA_CHARS);
        let decoded = ReportContext::decode(&encoded).unwrap();
        assert!(context.content.starts_with(&decoded.content));
        assert_eq!(decoded.sender, context.sender);
        assert_eq!(decoded.channel_name, context.channel_name);
    }
});
