//! Hero image blocks.
//!
//! A hero is authored as three separately cropped source images plus some
//! credit metadata. The front-end wants four ready-to-use URLs.

use serde::{Deserialize, Serialize};

use crate::asset::Asset;
use crate::builder::ImageUrlBuilder;
use crate::spec::TransformSpec;

const SMALL_WIDTH: u32 = 644;
const MEDIUM_WIDTH: u32 = 1280;
const LARGE_WIDTH: u32 = 1373;

/// Hero image source as stored in the CMS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroImage {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub credit: Option<String>,
    #[serde(default)]
    pub grant_id: Option<String>,
    #[serde(default)]
    pub image_small: Option<Asset>,
    #[serde(default)]
    pub image_medium: Option<Asset>,
    #[serde(default)]
    pub image_large: Option<Asset>,
}

/// Rendered hero block. `default` mirrors `medium`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroImageUrls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_id: Option<String>,
}

/// Build the small/medium/large/default variants of a hero image.
///
/// A variant whose source asset is missing is left out; the block itself is
/// always produced so title and caption still reach the page.
pub fn build_hero_image(builder: &ImageUrlBuilder, hero: &HeroImage) -> HeroImageUrls {
    let variant = |asset: Option<&Asset>, width: u32| {
        builder.build_asset(asset, &TransformSpec::new().width(width).fit("fill"))
    };

    let medium = variant(hero.image_medium.as_ref(), MEDIUM_WIDTH);

    HeroImageUrls {
        title: hero.title.clone(),
        caption: hero.caption.clone(),
        default: medium.clone(),
        small: variant(hero.image_small.as_ref(), SMALL_WIDTH),
        medium,
        large: variant(hero.image_large.as_ref(), LARGE_WIDTH),
        credit: hero.credit.clone(),
        grant_id: hero.grant_id.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ImgixConfig;

    fn hero() -> HeroImage {
        HeroImage {
            title: Some("Volunteers".into()),
            caption: Some("Community garden".into()),
            credit: Some("Photo: A. Person".into()),
            grant_id: None,
            image_small: Some(Asset::new("https://origin.example.org/hero-s.jpg")),
            image_medium: Some(Asset::new("https://origin.example.org/hero-m.jpg")),
            image_large: Some(Asset::new("https://origin.example.org/hero-l.jpg")),
        }
    }

    #[test]
    fn variants_use_fixed_widths_and_fill() {
        let builder = ImageUrlBuilder::new(Some(ImgixConfig::new("media.example.org", "k")));
        let urls = build_hero_image(&builder, &hero());

        let small = urls.small.unwrap();
        assert!(small.starts_with("https://media.example.org/hero-s.jpg?"));
        assert!(small.contains("w=644"));
        assert!(small.contains("fit=fill"));
        assert!(urls.medium.as_deref().unwrap().contains("w=1280"));
        assert!(urls.large.as_deref().unwrap().contains("w=1373"));
        assert_eq!(urls.default, urls.medium);
        assert_eq!(urls.credit.as_deref(), Some("Photo: A. Person"));
    }

    #[test]
    fn missing_variant_is_omitted() {
        let mut source = hero();
        source.image_large = None;
        let urls = build_hero_image(&ImageUrlBuilder::passthrough(), &source);

        assert_eq!(urls.large, None);
        assert_eq!(
            urls.small.as_deref(),
            Some("https://origin.example.org/hero-s.jpg")
        );

        let json = serde_json::to_value(&urls).unwrap();
        assert!(json.get("large").is_none());
        assert!(json.get("grantId").is_none());
        assert_eq!(json["title"], "Volunteers");
    }
}
