//! Color parsing and formatting.
//!
//! Colors are parsed once at the CLI boundary into an [`Rgb`] triple, so the
//! report encoder only ever sees well-formed values.

/// Per-channel intensity triple, 0-255 each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED: Rgb = Rgb { r: 0xFF, g: 0x00, b: 0x00 };
    pub const GREEN: Rgb = Rgb { r: 0x00, g: 0xFF, b: 0x00 };
    pub const BLUE: Rgb = Rgb { r: 0x00, g: 0x00, b: 0xFF };
    pub const OFF: Rgb = Rgb { r: 0x00, g: 0x00, b: 0x00 };
}

/// Parse a color string into an [`Rgb`] triple.
///
/// Accepts:
/// - Hex: `"#FF0000"`, `"FF0000"`, `"#ff0000"`
/// - Named: `"red"`, `"green"`, `"blue"`, `"white"`, `"orange"`, `"yellow"`,
///   `"purple"`, `"cyan"`, `"off"`/`"black"`
pub fn parse_color(s: &str) -> crate::error::Result<Rgb> {
    let s = s.trim();

    // Named colors
    match s.to_lowercase().as_str() {
        "red" => return Ok(Rgb::RED),
        "green" => return Ok(Rgb::GREEN),
        "blue" => return Ok(Rgb::BLUE),
        "white" => return Ok(Rgb { r: 0xFF, g: 0xFF, b: 0xFF }),
        "orange" => return Ok(Rgb { r: 0xFF, g: 0x80, b: 0x00 }),
        "yellow" => return Ok(Rgb { r: 0xFF, g: 0xFF, b: 0x00 }),
        "purple" => return Ok(Rgb { r: 0x80, g: 0x00, b: 0xFF }),
        "cyan" => return Ok(Rgb { r: 0x00, g: 0xFF, b: 0xFF }),
        "off" | "black" => return Ok(Rgb::OFF),
        _ => {}
    }

    // Hex color
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 {
        return Err(crate::BlyncctlError::Color(format!(
            "Invalid color: {s} (use #RRGGBB or a color name)"
        )));
    }
    let val = u32::from_str_radix(hex, 16)
        .map_err(|_| crate::BlyncctlError::Color(format!("Invalid hex color: {s}")))?;
    Ok(Rgb {
        r: (val >> 16) as u8,
        g: (val >> 8) as u8,
        b: val as u8,
    })
}

/// Format an [`Rgb`] triple as `#RRGGBB`.
pub fn format_color(c: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b)
}
