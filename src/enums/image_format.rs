use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        format: ImageFormat,
    }

    #[test]
    fn format_names_are_lowercase_in_toml() {
        let holder: Holder = toml::from_str("format = \"svg\"").unwrap();
        assert_eq!(holder.format, ImageFormat::Svg);
        assert!(toml::from_str::<Holder>("format = \"SVG\"").is_err());
    }

    #[test]
    fn extension_follows_format() {
        assert_eq!(ImageFormat::Png.extension(), "png");
        assert_eq!(ImageFormat::Svg.extension(), "svg");
    }
}
