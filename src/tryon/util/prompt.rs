use super::body_area::body_area;

/// Instruction sent alongside IMAGE 1 (the shopper) and IMAGE 2 (the product).
pub fn provide_prompt(product_type: Option<&str>, product_title: Option<&str>) -> String {
    let focus_area = body_area(product_type);
    let product_title = product_title.unwrap_or("clothing item");
    let product_type = product_type.unwrap_or("unspecified");

    format!(
        "VIRTUAL TRY-ON REQUEST: Generate a photorealistic image where the person in IMAGE 1 is wearing or holding the product from IMAGE 2.

CORE TASK:
- Overlay/replace the {focus_area} area with the product from IMAGE 2.
- Preserve the person's identity, face, hairstyle, body proportions, and original background from IMAGE 1.
- Ensure the product maintains its true design, structure, and intended appearance.

QUALITY & REALISM REQUIREMENTS:
- Ultra-photorealistic rendering with seamless blending
- Preserve natural shadows, highlights, and lighting direction from IMAGE 1
- Maintain fabric texture, stitching, logos, patterns, and material shine from IMAGE 2
- Match photo resolution and composition with no visible editing artifacts
- Ensure realistic perspective, scale, and alignment of product with body posture

SIZING & FIT LOGIC:
- Adapt product size proportionally to match the person's body dimensions
- Retain correct garment proportions (length, sleeve size, neckline, hemline, waistband)
- Ensure realistic fabric draping that respects body curves and pose

TECHNICAL INSTRUCTIONS:
- Focus Area: {focus_area}
- Product: \"{product_title}\" ({product_type})
- Retain original fabric folds, seams, and structural details
- Preserve both the person's natural features and the product's intended design

OUTPUT SPECIFICATIONS:
- Deliver one high-resolution try-on result
- The person from IMAGE 1 must remain fully recognizable
- The product from IMAGE 2 must be faithfully represented in size, shape, and detail
- Result should look indistinguishable from a real photograph"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_outer_layer_for_jacket() {
        let prompt = provide_prompt(Some("jacket"), Some("Classic Denim Jacket"));

        assert!(prompt.contains("outer layer - wear over existing clothing"));
        assert!(prompt.contains("Product: \"Classic Denim Jacket\" (jacket)"));
    }

    #[test]
    fn names_unknown_type_literally() {
        let prompt = provide_prompt(Some("scarf"), None);

        assert!(prompt.contains("clothing item labeled as \"scarf\""));
        assert!(prompt.contains("Product: \"clothing item\" (scarf)"));
    }

    #[test]
    fn demands_identity_preservation_and_single_output() {
        let prompt = provide_prompt(None, None);

        assert!(prompt.contains("Preserve the person's identity, face, hairstyle, body proportions, and original background from IMAGE 1"));
        assert!(prompt.contains("Deliver one high-resolution try-on result"));
        assert!(prompt.contains("analyze the garment and apply it to the appropriate body area"));
    }
}
