use palette::Srgb;

pub type Color = Srgb;

pub trait ColorExt {
    fn from_named(color: Srgb<u8>) -> Self;
    fn to_rgba_components_tuple(self) -> (f32, f32, f32, f32);
}

impl ColorExt for Color {
    fn from_named(named: Srgb<u8>) -> Color {
        Srgb::<f32>::from_format(named)
    }

    fn to_rgba_components_tuple(self) -> (f32, f32, f32, f32) {
        (self.red, self.green, self.blue, 1.0)
    }
}

/// Accepts CSS colour names (`red`, `cornflowerblue`) or hex (`#ff8000`, `ff8000`).
pub fn parse_color(input: &str) -> Result<Color, String> {
    let trimmed = input.trim();

    if let Some(named) = palette::named::from_str(&trimmed.to_ascii_lowercase()) {
        return Ok(Color::from_named(named));
    }

    trimmed
        .parse::<Srgb<u8>>()
        .map(Color::from_named)
        .map_err(|_| format!("'{input}' is not a colour name or hex code"))
}
