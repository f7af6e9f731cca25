/// Application-wide constants.
///
/// The embedded benchmark data, the table layout and the chart defaults all
/// live here so the rest of the crate never carries literal values.
/// Embedded measurements from the Cortex-M4 size/cycle benchmark
pub mod measurements {
    /// Tag marking a row that belongs to no library (the baseline)
    pub const UNTAGGED: &str = "-";

    /// `(name, library tag, size in bytes, min cycles, max cycles)`, baseline first
    pub const TFMT_VS_FMT: [(&str, &str, u64, u64, u64); 11] = [
        ("base", UNTAGGED, 8128, 1, 1),
        ("u32", "tfmt", 8536, 35, 278),
        ("u32", "fmt", 8712, 167, 429),
        ("u32 padded", "tfmt", 8624, 285, 407),
        ("u32 padded", "fmt", 9068, 771, 1020),
        ("u32-hex", "tfmt", 8256, 126, 238),
        ("u32-hex", "fmt", 9076, 423, 564),
        ("u8 u16 u32", "tfmt", 8836, 119, 513),
        ("u8 u16 u32", "fmt", 9068, 771, 1020),
        ("f32", "tfmt", 8848, 190, 197),
        ("f32", "fmt", 31548, 1050, 4800),
    ];
}

/// Text table layout
pub mod table {
    /// Width of the left-aligned name column
    pub const NAME_WIDTH: usize = 20;
    /// Width of the right-aligned crate column
    pub const CRATE_WIDTH: usize = 5;
    /// Width of each right-aligned numeric column
    pub const VALUE_WIDTH: usize = 12;

    pub const NAME_HEADER: &str = "Name";
    pub const CRATE_HEADER: &str = "Crate";
    pub const SIZE_HEADER: &str = "Size";
    pub const CYCLES_MIN_HEADER: &str = "Cycles_min";
    pub const CYCLES_MAX_HEADER: &str = "Cycles_max";
}

/// Chart defaults
pub mod chart {
    /// Default output image, relative to the working directory
    pub const OUTPUT_FILE: &str = "performance.png";
    pub const WIDTH: u32 = 1280;
    pub const HEIGHT: u32 = 420;
    /// Upper bound of the flash size axis in bytes
    pub const SIZE_AXIS_MAX: u32 = 25_000;
    /// Upper bound of the cycle axis
    pub const CYCLES_AXIS_MAX: u32 = 6_000;
    pub const SIZE_TITLE: &str = "Flash Size for 'tfmt' and 'core::fmt'";
    pub const CYCLES_TITLE: &str = "Cortex M4 Cycles for 'tfmt' and 'core::fmt'";
    pub const SIZE_AXIS_DESC: &str = "Size (bytes)";
    pub const CYCLES_AXIS_DESC: &str = "Cycles";

    /// Width of all bars of one category together, in category units
    pub const GROUP_WIDTH: f64 = 0.68;
    /// Opacity of the min..max band stacked on the cycle bars
    pub const SPREAD_OPACITY: f64 = 0.5;

    pub const FONT_FAMILY: &str = "sans-serif";
    pub const TITLE_FONT_SIZE: u32 = 20;
    pub const AXIS_LABEL_FONT_SIZE: u32 = 14;
    pub const TICK_LABEL_FONT_SIZE: u32 = 12;
    pub const DATA_LABEL_FONT_SIZE: u32 = 11;

    /// Series colors in order of first appearance (tab:green, tab:orange, ...)
    pub const PALETTE: [(u8, u8, u8); 6] = [
        (44, 160, 44),
        (255, 127, 14),
        (31, 119, 180),
        (214, 39, 40),
        (148, 103, 189),
        (140, 86, 75),
    ];
}
