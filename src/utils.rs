use rgb::RGB8;

// Colour keywords recognised in line names, e.g. "Red Line" or "Kırmızı Hat".
const LINE_PALETTE: [(&[&str], RGB8); 9] = [
    (&["red", "kırmızı"], RGB8 { r: 255, g: 0, b: 0 }),
    (&["blue", "mavi"], RGB8 { r: 0, g: 0, b: 255 }),
    (&["green", "yeşil"], RGB8 { r: 0, g: 128, b: 0 }),
    (&["orange", "turuncu"], RGB8 { r: 255, g: 165, b: 0 }),
    (&["purple", "mor"], RGB8 { r: 128, g: 0, b: 128 }),
    (&["yellow", "sarı"], RGB8 { r: 255, g: 255, b: 0 }),
    (&["pink", "pembe"], RGB8 { r: 255, g: 192, b: 203 }),
    (&["grey", "gray", "gri"], RGB8 { r: 128, g: 128, b: 128 }),
    (&["turquoise", "turkuaz"], RGB8 { r: 64, g: 224, b: 208 }),
];

pub const DEFAULT_LINE_COLOUR: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Picks the display colour for a line from the first colour word in its name, or black.
pub fn line_colour(line_name: &str) -> RGB8 {
    let line_name = line_name.to_lowercase();
    line_name
        .split_whitespace()
        .find_map(|word| {
            LINE_PALETTE
                .iter()
                .find(|(keywords, _)| keywords.contains(&word))
                .map(|&(_, colour)| colour)
        })
        .unwrap_or(DEFAULT_LINE_COLOUR)
}

pub fn get_minutes_str(minutes: u32) -> String {
    match minutes {
        1 => String::from("1 minute"),
        _ => format!("{minutes} minutes"),
    }
}
