//! Display formatting helpers.

/// Format a numeric id as a dex number: `25` → `#025`.
pub fn format_dex_number(id: u32) -> String {
    format!("#{:03}", id)
}

/// Capitalize the first character of an (ASCII lowercase) API name.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Height in meters from the API's decimeters.
pub fn format_height(decimeters: u32) -> String {
    format!("{:.1} m", decimeters as f64 / 10.0)
}

/// Weight in kilograms from the API's hectograms.
pub fn format_weight(hectograms: u32) -> String {
    format!("{:.1} kg", hectograms as f64 / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dex_number_padding() {
        assert_eq!(format_dex_number(1), "#001");
        assert_eq!(format_dex_number(25), "#025");
        assert_eq!(format_dex_number(1302), "#1302");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("pikachu"), "Pikachu");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("mr-mime"), "Mr-mime");
    }

    #[test]
    fn test_units() {
        assert_eq!(format_height(4), "0.4 m");
        assert_eq!(format_weight(60), "6.0 kg");
        assert_eq!(format_weight(9999), "999.9 kg");
    }
}
