//! Benchmark inputs shared by the inet6 benches.

/// Address texts covering each parser path.
pub const TEXT_INPUTS: &[(&str, &str)] = &[
    ("v4", "192.168.100.200"),
    ("v6_full", "1234:5678:9abc:def0:4321:8765:cba9:0fed"),
    ("v6_gap", "fe80::1ff:fe23:4567:890a"),
    ("v6_mapped", "::ffff:192.168.1.2"),
    ("reject", "1020::3040::5060"),
];

/// Binary addresses covering each formatter path.
pub const BYTE_INPUTS: &[(&str, &[u8])] = &[
    ("v4", &[192, 168, 100, 200]),
    (
        "v6_full",
        &[
            0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0, 0x43, 0x21, 0x87, 0x65, 0xcb, 0xa9,
            0x0f, 0xed,
        ],
    ),
    (
        "v6_gap",
        &[
            0xfe, 0x80, 0, 0, 0, 0, 0, 0, 0x01, 0xff, 0xfe, 0x23, 0x45, 0x67, 0x89, 0x0a,
        ],
    ),
    (
        "v6_mapped",
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 192, 168, 1, 2],
    ),
];
