// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
#![no_main]

use arbitrary::Arbitrary;
use gridgraph::radix;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    value: String,
    number: i128,
    from: u8,
    to: u8,
}

fuzz_target!(|input: Input| {
    let (from, to) = (u32::from(input.from), u32::from(input.to));
    if let Ok(converted) = radix::convert(&input.value, from, to) {
        // Converting back must land on the same number
        let there = radix::parse(&input.value, from).unwrap();
        let back = radix::parse(&converted, to).unwrap();
        assert_eq!(there, back);
    }
    if let Ok(text) = radix::format(input.number, to) {
        assert_eq!(radix::parse(&text, to).unwrap(), input.number);
    }
});
