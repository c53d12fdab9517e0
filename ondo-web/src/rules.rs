//! Outfit rule table
//!
//! Static ordered list mapping temperature ranges to clothing items. Adjacent
//! ranges meet at their shared boundary so every temperature between the table
//! extremes matches some rule; the scan is hottest-first and the first match
//! wins, so a shared boundary belongs to the hotter rule.

use serde::Serialize;

/// One recommended clothing item, with its UI image reference
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfitItem {
    pub name: &'static str,
    pub img: &'static str,
}

/// One temperature range with its recommended items
#[derive(Debug, Clone)]
pub struct OutfitRule {
    pub min: f64,
    pub max: f64,
    pub items: &'static [OutfitItem],
}

macro_rules! items {
    ($(($name:literal, $img:literal)),+ $(,)?) => {
        &[$(OutfitItem { name: $name, img: $img }),+]
    };
}

/// Ordered hottest-first; first match wins
const OUTFIT_RULES: &[OutfitRule] = &[
    OutfitRule {
        min: 28.0,
        max: 100.0,
        items: items![
            ("민소매", "/images/sleeveless.png"),
            ("반팔", "/images/tshirt.png"),
            ("반바지", "/images/shorts.png"),
        ],
    },
    OutfitRule {
        min: 23.0,
        max: 28.0,
        items: items![
            ("반팔", "/images/tshirt.png"),
            ("얇은 셔츠", "/images/thin_shirt.png"),
            ("면바지", "/images/cotton_pants.png"),
        ],
    },
    OutfitRule {
        min: 20.0,
        max: 23.0,
        items: items![
            ("블라우스", "/images/blouse.png"),
            ("긴팔 티", "/images/long_sleeve.png"),
            ("슬랙스", "/images/slacks.png"),
        ],
    },
    OutfitRule {
        min: 17.0,
        max: 20.0,
        items: items![
            ("얇은 가디건", "/images/light_cardigan.png"),
            ("맨투맨", "/images/sweatshirt.png"),
            ("후드", "/images/hoodie.png"),
        ],
    },
    OutfitRule {
        min: 12.0,
        max: 17.0,
        items: items![
            ("자켓", "/images/jacket.png"),
            ("가디건", "/images/cardigan.png"),
            ("청자켓", "/images/denim_jacket.png"),
            ("니트", "/images/knit.png"),
        ],
    },
    OutfitRule {
        min: 9.0,
        max: 12.0,
        items: items![
            ("트렌치 코트", "/images/trench_coat.png"),
            ("야상", "/images/field_jacket.png"),
            ("점퍼", "/images/jumper.png"),
        ],
    },
    OutfitRule {
        min: 5.0,
        max: 9.0,
        items: items![
            ("울 코트", "/images/wool_coat.png"),
            ("히트텍", "/images/heattech.png"),
            ("가죽 옷", "/images/leather.png"),
        ],
    },
    OutfitRule {
        min: -100.0,
        max: 5.0,
        items: items![
            ("패딩", "/images/padding.png"),
            ("두꺼운 코트", "/images/heavy_coat.png"),
            ("목도리", "/images/scarf.png"),
        ],
    },
];

/// Placeholder returned when the temperature falls outside every range
const OUT_OF_RANGE: &[OutfitItem] = items![("온도 범위를 벗어났습니다.", "")];

/// Look up the recommended items for a temperature.
///
/// Total and deterministic: any real input returns a non-empty item list,
/// falling back to the out-of-range placeholder.
pub fn lookup(temperature: f64) -> &'static [OutfitItem] {
    OUTFIT_RULES
        .iter()
        .find(|rule| temperature >= rule.min && temperature <= rule.max)
        .map(|rule| rule.items)
        .unwrap_or(OUT_OF_RANGE)
}
