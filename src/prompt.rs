//! Prompt assembly for the image-generation provider.
//!
//! The downstream model is sensitive to prompt phrasing, so the field order
//! and labels here are fixed. Missing fields substitute generic default text;
//! no field ever renders empty.

use crate::models::OutfitSpec;

fn field(value: &Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.clone(),
        _ => default.to_string(),
    }
}

fn list_field(values: &[String], default: &str) -> String {
    if values.is_empty() {
        default.to_string()
    } else {
        values.join(", ")
    }
}

/// Builds the full natural-language prompt for one image-generation call.
pub fn assemble(spec: &OutfitSpec) -> String {
    format!(
        "Fashion design: {prompt}\n\
         Style: {style}, Fabric: {fabric}, Color Theme: {color_theme}, Main Color: {main_color},\n\
         Model Size: {model_size}, Length: {length}, Mood: {mood}, Season: {season},\n\
         Target Audience: {target_audience}, Occasion: {occasion},\n\
         Graphic Print: {graphic_print}, Pattern: {pattern},\n\
         Accessories: {accessories},\n\
         Upper Wear: {upper_wear}, Lower Wear: {lower_wear},\n\
         Shoes: {shoes}, Head Accessories: {head_accessories},\n\
         Hairstyle: {hairstyle}.\n\
         Create a high-fashion, professional fashion illustration showing a model wearing this outfit.\n\
         The image should be clean, well-lit, and suitable for a fashion magazine or runway presentation.\n\
         Focus on the clothing design details, fabric texture, and overall aesthetic.",
        prompt = spec.prompt,
        style = field(&spec.style, "versatile"),
        fabric = field(&spec.fabric, "comfortable"),
        color_theme = field(&spec.color_theme, "harmonious"),
        main_color = field(&spec.main_color, "designer's choice"),
        model_size = field(&spec.model_size, "M"),
        length = field(&spec.length, "appropriate"),
        mood = field(&spec.mood, "stylish"),
        season = field(&spec.season, "all-season"),
        target_audience = field(&spec.target_audience, "general"),
        occasion = field(&spec.occasion, "versatile"),
        graphic_print = field(&spec.graphic_print, "none"),
        pattern = field(&spec.pattern, "solid"),
        accessories = list_field(&spec.accessories, "minimal"),
        upper_wear = list_field(&spec.upper_wear, "stylish top"),
        lower_wear = list_field(&spec.lower_wear, "matching bottom"),
        shoes = list_field(&spec.shoes, "appropriate footwear"),
        head_accessories = list_field(&spec.head_accessories, "none"),
        hairstyle = field(&spec.hairstyle, "complementary style"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_spec_substitutes_every_default() {
        let spec = OutfitSpec {
            prompt: "a breezy sundress".to_string(),
            ..OutfitSpec::default()
        };
        let prompt = assemble(&spec);

        assert!(prompt.starts_with("Fashion design: a breezy sundress"));
        for expected in [
            "Style: versatile",
            "Fabric: comfortable",
            "Color Theme: harmonious",
            "Main Color: designer's choice",
            "Model Size: M",
            "Length: appropriate",
            "Mood: stylish",
            "Season: all-season",
            "Target Audience: general",
            "Occasion: versatile",
            "Graphic Print: none",
            "Pattern: solid",
            "Accessories: minimal",
            "Upper Wear: stylish top",
            "Lower Wear: matching bottom",
            "Shoes: appropriate footwear",
            "Head Accessories: none",
            "Hairstyle: complementary style",
        ] {
            assert!(prompt.contains(expected), "missing `{expected}` in:\n{prompt}");
        }
    }

    #[test]
    fn no_label_is_ever_followed_by_an_empty_value() {
        let spec = OutfitSpec {
            prompt: "x".to_string(),
            style: Some("   ".to_string()),
            ..OutfitSpec::default()
        };
        let prompt = assemble(&spec);
        // Whitespace-only input counts as missing.
        assert!(prompt.contains("Style: versatile"));
        assert!(!prompt.contains(": ,"));
        assert!(!prompt.contains(": .\n"));
    }

    #[test]
    fn supplied_fields_and_lists_pass_through() {
        let spec = OutfitSpec {
            prompt: "gala look".to_string(),
            style: Some("Formal".to_string()),
            fabric: Some("Silk".to_string()),
            accessories: vec!["pearl necklace".to_string(), "clutch".to_string()],
            shoes: vec!["stiletto heels".to_string()],
            ..OutfitSpec::default()
        };
        let prompt = assemble(&spec);
        assert!(prompt.contains("Style: Formal, Fabric: Silk"));
        assert!(prompt.contains("Accessories: pearl necklace, clutch"));
        assert!(prompt.contains("Shoes: stiletto heels"));
    }

    #[test]
    fn field_order_is_stable() {
        let prompt = assemble(&OutfitSpec {
            prompt: "x".to_string(),
            ..OutfitSpec::default()
        });
        let style_at = prompt.find("Style:").unwrap();
        let mood_at = prompt.find("Mood:").unwrap();
        let hairstyle_at = prompt.find("Hairstyle:").unwrap();
        assert!(style_at < mood_at && mood_at < hairstyle_at);
        assert_eq!(prompt.matches("Fashion design:").count(), 1);
    }
}
