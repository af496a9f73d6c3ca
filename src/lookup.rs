//! Static lookup tables. Built at compile time, read-only for the process lifetime.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub name: &'static str,
    pub hex: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    pub iso_code: &'static str,
}

const fn color(name: &'static str, hex: &'static str) -> Color {
    Color { name, hex }
}

const fn country(name: &'static str, iso_code: &'static str) -> Country {
    Country { name, iso_code }
}

pub static COLORS: &[Color] = &[
    color("black", "#000000"),
    color("white", "#FFFFFF"),
    color("red", "#FF0000"),
    color("green", "#00FF00"),
    color("blue", "#0000FF"),
    color("yellow", "#FFFF00"),
    color("cyan", "#00FFFF"),
    color("magenta", "#FF00FF"),
    color("orange", "#FFA500"),
    color("purple", "#800080"),
    color("gray", "#808080"),
    color("brown", "#A52A2A"),
    color("pink", "#FFC0CB"),
];

pub static EUROPEAN_COUNTRIES: &[Country] = &[
    country("Albania", "AL"),
    country("Andorra", "AD"),
    country("Austria", "AT"),
    country("Belarus", "BY"),
    country("Belgium", "BE"),
    country("Bosnia and Herzegovina", "BA"),
    country("Bulgaria", "BG"),
    country("Croatia", "HR"),
    country("Cyprus", "CY"),
    country("Czech Republic", "CZ"),
    country("Denmark", "DK"),
    country("Estonia", "EE"),
    country("Finland", "FI"),
    country("France", "FR"),
    country("Germany", "DE"),
    country("Greece", "GR"),
    country("Hungary", "HU"),
    country("Iceland", "IS"),
    country("Ireland", "IE"),
    country("Italy", "IT"),
    country("Latvia", "LV"),
    country("Liechtenstein", "LI"),
    country("Lithuania", "LT"),
    country("Luxembourg", "LU"),
    country("Malta", "MT"),
    country("Moldova", "MD"),
    country("Monaco", "MC"),
    country("Montenegro", "ME"),
    country("Netherlands", "NL"),
    country("North Macedonia", "MK"),
    country("Norway", "NO"),
    country("Poland", "PL"),
    country("Portugal", "PT"),
    country("Romania", "RO"),
    country("Russia", "RU"),
    country("San Marino", "SM"),
    country("Serbia", "RS"),
    country("Slovakia", "SK"),
    country("Slovenia", "SI"),
    country("Spain", "ES"),
    country("Sweden", "SE"),
    country("Switzerland", "CH"),
    country("Ukraine", "UA"),
    country("United Kingdom", "GB"),
    country("Vatican City", "VA"),
];

/// Exact, case-sensitive name lookup by linear scan.
pub fn color_hex(name: &str) -> Option<&'static str> {
    COLORS.iter().find(|c| c.name == name).map(|c| c.hex)
}
