use std::collections::HashMap;

pub static UNSPECIFIED_BODY_AREA: &str =
    "clothing item (analyze the garment and apply it to the appropriate body area)";

lazy_static! {
    static ref BODY_AREAS: HashMap<&'static str, &'static str> = HashMap::from([
        ("shirt", "upper body clothing (shirt/top area)"),
        ("blouse", "upper body clothing (shirt/top area)"),
        ("t-shirt", "upper body clothing (shirt/top area)"),
        ("top", "upper body clothing (shirt/top area)"),
        (
            "jacket",
            "upper body clothing (jacket/outer layer - wear over existing clothing)",
        ),
        (
            "coat",
            "upper body clothing (coat/outerwear - wear over all existing layers)",
        ),
        (
            "sweater",
            "upper body clothing (sweater/outer layer - wear over existing top)",
        ),
        (
            "hoodie",
            "upper body clothing (hoodie/outer layer - wear over existing clothing)",
        ),
        ("dress", "full body clothing (dress/full outfit)"),
        ("pants", "lower body clothing (pants/trousers area)"),
        ("jeans", "lower body clothing (jeans/pants area)"),
        ("shorts", "lower body clothing (shorts/lower body area)"),
        (
            "bag",
            "accessory (handbag/purse - position OVER existing clothing, maintain strap and bag shape)",
        ),
        (
            "purse",
            "accessory (purse/handbag - position OVER existing clothing, keep original proportions)",
        ),
        (
            "handbag",
            "accessory (handbag - wear OVER existing outfit, maintain handle/strap positioning)",
        ),
        (
            "shoes",
            "footwear (shoes - position on feet, maintain existing pant/dress length)",
        ),
        (
            "sneakers",
            "footwear (sneakers - position on feet, keep existing lower clothing visible)",
        ),
    ]);
}

/// Where on the person the product belongs, as an instruction phrase.
///
/// Lookup is case-insensitive on the trimmed type. A blank or absent type
/// gets the generic phrase; an unknown type gets a phrase quoting it.
pub fn body_area(product_type: Option<&str>) -> String {
    let Some(product_type) = product_type.map(str::trim).filter(|t| !t.is_empty()) else {
        return UNSPECIFIED_BODY_AREA.to_string();
    };

    match BODY_AREAS.get(product_type.to_lowercase().as_str()) {
        Some(area) => area.to_string(),
        None => format!("clothing item labeled as \"{}\"", product_type),
    }
}
