//! Token helpers

use crate::theme::Theme;
use crate::tokens::{parse_hex_rgb, BreakpointToken};

/// Root font size used for rem conversion
pub const ROOT_FONT_SIZE_PX: f32 = 16.0;

/// Convert a pixel value to a `rem` length
pub fn px_to_rem(px: f32) -> String {
    format!("{}rem", px / ROOT_FONT_SIZE_PX)
}

/// Mobile-first media query for a breakpoint: `@media (min-width: 768px)`
pub fn media_query(breakpoint: BreakpointToken, theme: &Theme) -> String {
    format!("@media (min-width: {})", theme.breakpoints.get(breakpoint))
}

/// Pick a readable text color for content drawn on `background`
///
/// Light backgrounds get the theme's primary text color, dark ones white.
/// Hex colors are judged by relative luminance; anything else is treated as
/// light only when it names white.
pub fn contrast_text_color<'a>(background: &str, theme: &'a Theme) -> &'a str {
    if is_light(background) {
        &theme.colors.text.primary
    } else {
        "#ffffff"
    }
}

/// CSS named colors plus the `transparent` and `currentcolor` keywords
const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
    "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen",
    "magenta", "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue",
    "tan", "teal", "thistle", "tomato", "turquoise", "violet", "wheat", "white", "whitesmoke",
    "yellow", "yellowgreen", "transparent", "currentcolor",
];

/// Whether `color` is a color value a stylesheet would accept
///
/// Covers hex notation (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), the
/// `rgb()`/`rgba()`/`hsl()`/`hsla()` functions and named colors.
pub fn is_valid_color(color: &str) -> bool {
    let color = color.trim();
    if let Some(hex) = color.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }

    let lower = color.to_ascii_lowercase();
    if let Some((name, rest)) = lower.split_once('(') {
        let Some(args) = rest.strip_suffix(')') else {
            return false;
        };
        return match name.trim_end() {
            "rgb" | "rgba" => valid_color_args(args, false),
            "hsl" | "hsla" => valid_color_args(args, true),
            _ => false,
        };
    }

    NAMED_COLORS.contains(&lower.as_str())
}

/// Three components plus an optional alpha, comma or space separated
fn valid_color_args(args: &str, hue_first: bool) -> bool {
    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    if !matches!(parts.len(), 3 | 4) {
        return false;
    }

    parts.into_iter().enumerate().all(|(index, part)| {
        let number = if hue_first && index == 0 {
            part.strip_suffix("deg").unwrap_or(part)
        } else {
            part.strip_suffix('%').unwrap_or(part)
        };
        number.parse::<f32>().is_ok_and(f32::is_finite)
    })
}

fn is_light(color: &str) -> bool {
    match parse_hex_rgb(color) {
        Some((r, g, b)) => {
            let luminance = 0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b);
            luminance > 0.5
        }
        None => color.trim().eq_ignore_ascii_case("white"),
    }
}

fn linear(channel: u8) -> f32 {
    let c = f32::from(channel) / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
