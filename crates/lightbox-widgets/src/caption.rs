//! Caption text styling.
//!
//! `CaptionStyle` carries CSS-like strings. They are resolved once per render
//! into libcosmic text properties; anything that does not parse is left to the
//! theme default.

use cosmic::{
    Element,
    iced::{
        Color, Font, Length,
        font::{Family, Style, Weight},
    },
    theme,
    widget::{container, text},
};
use lightbox_types::CaptionStyle;

/// Root font size used to resolve `em`/`rem` sizes.
const ROOT_FONT_SIZE: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedCaption {
    pub color: Option<Color>,
    pub size: Option<f32>,
    pub family: Option<Family>,
    pub weight: Option<Weight>,
    pub style: Option<Style>,
}

impl ResolvedCaption {
    pub fn resolve(style: &CaptionStyle) -> Self {
        Self {
            color: style.color.as_deref().and_then(parse_color),
            size: style.font_size.as_deref().and_then(parse_font_size),
            family: style.font_family.as_deref().and_then(parse_font_family),
            weight: style.font_weight.as_deref().and_then(parse_font_weight),
            style: style.font_style.as_deref().and_then(parse_font_style),
        }
    }

    pub fn font(&self) -> Font {
        Font {
            family: self.family.unwrap_or(Font::DEFAULT.family),
            weight: self.weight.unwrap_or(Font::DEFAULT.weight),
            style: self.style.unwrap_or(Font::DEFAULT.style),
            ..Font::DEFAULT
        }
    }
}

/// `#rgb`, `#rrggbb` or a CSS color keyword.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();

    let rgb: palette::Srgb<u8> = if value.starts_with('#') {
        value.parse().ok()?
    } else {
        palette::named::from_str(&value.to_ascii_lowercase())?
    };

    Some(Color::from_rgb8(rgb.red, rgb.green, rgb.blue))
}

/// Pixel size from `18px`, `18`, `1.5em` or `1.5rem`.
pub fn parse_font_size(value: &str) -> Option<f32> {
    let value = value.trim();

    let (number, scale) = if let Some(rem) = value.strip_suffix("rem") {
        (rem, ROOT_FONT_SIZE)
    } else if let Some(em) = value.strip_suffix("em") {
        (em, ROOT_FONT_SIZE)
    } else if let Some(px) = value.strip_suffix("px") {
        (px, 1.0)
    } else {
        (value, 1.0)
    };

    let size = number.trim().parse::<f32>().ok()? * scale;
    (size.is_finite() && size > 0.0).then_some(size)
}

pub fn parse_font_weight(value: &str) -> Option<Weight> {
    let value = value.trim().to_ascii_lowercase();

    match value.as_str() {
        "normal" => return Some(Weight::Normal),
        "bold" => return Some(Weight::Bold),
        "bolder" => return Some(Weight::ExtraBold),
        "lighter" => return Some(Weight::Light),
        _ => {}
    }

    let numeric: u16 = value.parse().ok()?;
    if !(1..=1000).contains(&numeric) {
        return None;
    }

    // Round to the nearest hundred, then clamp to 100..=900
    Some(match ((numeric + 50) / 100).clamp(1, 9) {
        1 => Weight::Thin,
        2 => Weight::ExtraLight,
        3 => Weight::Light,
        4 => Weight::Normal,
        5 => Weight::Medium,
        6 => Weight::Semibold,
        7 => Weight::Bold,
        8 => Weight::ExtraBold,
        _ => Weight::Black,
    })
}

pub fn parse_font_style(value: &str) -> Option<Style> {
    match value.trim().to_ascii_lowercase().as_str() {
        "normal" => Some(Style::Normal),
        "italic" => Some(Style::Italic),
        "oblique" => Some(Style::Oblique),
        _ => None,
    }
}

/// First generic family in a CSS family list. Named families are not loaded.
pub fn parse_font_family(value: &str) -> Option<Family> {
    value
        .split(',')
        .map(|name| name.trim().trim_matches(['"', '\'']).to_ascii_lowercase())
        .find_map(|name| match name.as_str() {
            "serif" => Some(Family::Serif),
            "sans-serif" => Some(Family::SansSerif),
            "monospace" => Some(Family::Monospace),
            "cursive" => Some(Family::Cursive),
            "fantasy" => Some(Family::Fantasy),
            _ => None,
        })
}

pub fn caption<'a, M: 'a>(content: &'a str, style: &CaptionStyle) -> Element<'a, M> {
    let resolved = ResolvedCaption::resolve(style);
    let spacing = theme::active().cosmic().spacing;

    let mut label = text(content).font(resolved.font());
    if let Some(size) = resolved.size {
        label = label.size(size);
    }
    if let Some(color) = resolved.color {
        label = label.class(theme::Text::Color(color));
    }

    container(label)
        .padding(spacing.space_xs)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_colors() {
        assert_eq!(parse_color("#ff0000"), Some(Color::from_rgb8(255, 0, 0)));
        assert_eq!(parse_color(" #0F0 "), Some(Color::from_rgb8(0, 255, 0)));
        assert_eq!(parse_color("#zzzzzz"), None);
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(parse_color("White"), Some(Color::from_rgb8(255, 255, 255)));
        assert_eq!(parse_color("not-a-color"), None);
    }

    #[test]
    fn test_font_sizes() {
        assert_eq!(parse_font_size("18px"), Some(18.0));
        assert_eq!(parse_font_size("14"), Some(14.0));
        assert_eq!(parse_font_size("1.5em"), Some(24.0));
        assert_eq!(parse_font_size("2rem"), Some(32.0));
        assert_eq!(parse_font_size("-3px"), None);
        assert_eq!(parse_font_size("large"), None);
    }

    #[test]
    fn test_font_weights() {
        assert_eq!(parse_font_weight("bold"), Some(Weight::Bold));
        assert_eq!(parse_font_weight("700"), Some(Weight::Bold));
        assert_eq!(parse_font_weight("650"), Some(Weight::Bold));
        assert_eq!(parse_font_weight("100"), Some(Weight::Thin));
        assert_eq!(parse_font_weight("heavy"), None);
        assert_eq!(parse_font_weight("0"), None);
    }

    #[test]
    fn test_font_styles_and_families() {
        assert_eq!(parse_font_style("italic"), Some(Style::Italic));
        assert_eq!(parse_font_style("slanted"), None);
        assert_eq!(
            parse_font_family("\"Georgia\", serif"),
            Some(Family::Serif)
        );
        assert_eq!(parse_font_family("Comic Sans"), None);
    }

    #[test]
    fn test_resolve_falls_back_per_field() {
        let style = CaptionStyle {
            color: Some("#00f".into()),
            font_family: Some("Fancy".into()),
            font_size: Some("huge".into()),
            font_weight: Some("bold".into()),
            font_style: None,
        };
        let resolved = ResolvedCaption::resolve(&style);
        assert_eq!(resolved.color, Some(Color::from_rgb8(0, 0, 255)));
        assert_eq!(resolved.size, None);
        assert_eq!(resolved.family, None);

        let font = resolved.font();
        assert_eq!(font.weight, Weight::Bold);
        assert_eq!(font.family, Font::DEFAULT.family);
    }
}
