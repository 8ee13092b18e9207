//! Name conversions between DOM property spelling and CSS spelling.

/// Convert a camelCase style property (`backgroundColor`) to its CSS
/// kebab-case name (`background-color`).
///
/// Names that already contain a dash, including custom properties
/// (`--accent`), pass through unchanged. A leading vendor capital
/// (`WebkitTransform`) becomes `-webkit-transform`.
#[must_use]
pub fn css_property_name(name: &str) -> String {
    if name.contains('-') {
        return name.to_owned();
    }
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_becomes_kebab() {
        assert_eq!(css_property_name("backgroundColor"), "background-color");
        assert_eq!(
            css_property_name("borderTopLeftRadius"),
            "border-top-left-radius"
        );
    }

    #[test]
    fn plain_and_kebab_names_pass_through() {
        assert_eq!(css_property_name("color"), "color");
        assert_eq!(css_property_name("font-size"), "font-size");
        assert_eq!(css_property_name("--accent"), "--accent");
    }

    #[test]
    fn vendor_prefix_gets_leading_dash() {
        assert_eq!(css_property_name("WebkitTransform"), "-webkit-transform");
    }
}
