// src/render/palette.rs
//
// Walk colors. Walk `i` is drawn in `palette[i % palette.len()]`.

/// 8-bit sRGB triple, as written in config.toml.
pub type Rgb8 = [u8; 3];

pub const BACKGROUND: Rgb8 = [0, 0, 0];

pub const DEFAULT_PALETTE: [Rgb8; 10] = [
    [230, 41, 55],   // red
    [0, 228, 48],    // green
    [0, 121, 241],   // blue
    [255, 161, 0],   // orange
    [253, 249, 0],   // yellow
    [190, 33, 55],   // maroon
    [112, 31, 126],  // dark purple
    [211, 176, 131], // beige
    [245, 245, 245], // ray white
    [0, 82, 172],    // dark blue
];

/// Color for the walk at `index`, cycling through `palette`.
pub fn color_for(palette: &[Rgb8], index: usize) -> Option<Rgb8> {
    if palette.is_empty() {
        None
    } else {
        Some(palette[index % palette.len()])
    }
}
