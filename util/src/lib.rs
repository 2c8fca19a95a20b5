#![warn(missing_docs)]

//! Provides identifier and numeral utilities shared by the advancement pack parser crates.

mod roman;
mod uln;

pub use roman::arabic_to_roman;
pub use uln::{cut_namespace, UnlocalizedName};

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn uln_parsing() {
        let stone = UnlocalizedName::from_str("minecraft:stone").unwrap();
        assert_eq!(stone, UnlocalizedName::minecraft("stone"));

        let bare = UnlocalizedName::from_str("adventure/root").unwrap();
        assert_eq!(bare.namespace, "minecraft");
        assert_eq!(bare.identifier, "adventure/root");

        let custom = UnlocalizedName::from_str("blazeandcave:mining/stone_age").unwrap();
        assert_eq!(custom.namespace, "blazeandcave");
        assert_eq!(custom.identifier, "mining/stone_age");

        assert!(UnlocalizedName::from_str(":oops").is_err());
        assert!(UnlocalizedName::from_str("oops:").is_err());
    }

    #[test]
    fn uln_display_round_trip() {
        let name = UnlocalizedName::from_str("bc_rewards:mining/stone_age/exp").unwrap();
        assert_eq!(name.to_string(), "bc_rewards:mining/stone_age/exp");
        assert_eq!(format!("{:?}", name), "bc_rewards:mining/stone_age/exp");
    }

    #[test]
    fn namespace_cutting() {
        assert_eq!(cut_namespace("minecraft:impossible"), "impossible");
        assert_eq!(cut_namespace("impossible"), "impossible");
        assert_eq!(cut_namespace("a:b:c"), "b:c");
        assert_eq!(cut_namespace(""), "");
    }

    #[test]
    fn roman_numerals() {
        assert_eq!(arabic_to_roman(1), "I");
        assert_eq!(arabic_to_roman(4), "IV");
        assert_eq!(arabic_to_roman(9), "IX");
        assert_eq!(arabic_to_roman(14), "XIV");
        assert_eq!(arabic_to_roman(40), "XL");
        assert_eq!(arabic_to_roman(90), "XC");
        assert_eq!(arabic_to_roman(400), "CD");
        assert_eq!(arabic_to_roman(1994), "MCMXCIV");
        assert_eq!(arabic_to_roman(3999), "MMMCMXCIX");
    }

    #[test]
    #[should_panic]
    fn roman_zero_panics() {
        arabic_to_roman(0);
    }
}
