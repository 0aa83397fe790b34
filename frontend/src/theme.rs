use stylist::yew::Global;
use stylist::css;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub font: &'static str,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Class placed on the app root, all themed rules hang off it.
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: "#0B1120",
                text: "#E2E8F0",
                accent: "#A3E635",
                font: "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
            },
            Theme::Light => Palette {
                background: "#F5F5DC",
                text: "#1C1917",
                accent: "#B45309",
                font: "'Playfair Display', Georgia, serif",
            },
        }
    }

    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeStyleProps {
    pub theme: Theme,
}

/// Body-level colors for the active theme.
#[function_component(ThemeStyle)]
pub fn theme_style(props: &ThemeStyleProps) -> Html {
    let palette = props.theme.palette();
    html! {
        <Global css={css!(
            r#"
                body {
                    margin: 0;
                    background-color: ${bg};
                    color: ${text};
                    font-family: ${font};
                    transition: background-color 0.5s ease, color 0.5s ease;
                }
                a {
                    color: ${accent};
                }
            "#,
            bg = palette.background,
            text = palette.text,
            font = palette.font,
            accent = palette.accent,
        )} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_toggle_twice_restores_theme() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_class_names_differ() {
        assert_ne!(Theme::Dark.class_name(), Theme::Light.class_name());
    }
}
