/// Converts a positive number into its roman numeral representation.
///
/// # Panics
///
/// Panics if `value` is zero, since zero has no roman numeral form.
///
/// # Examples
///
/// ```
/// # use bacap_util::arabic_to_roman;
/// assert_eq!(arabic_to_roman(7), "VII");
/// assert_eq!(arabic_to_roman(2024), "MMXXIV");
/// ```
pub fn arabic_to_roman(mut value: u32) -> String {
    assert!(value > 0, "value must be positive");

    const PAIRS: [(u32, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut output = String::new();
    for (arabic, roman) in PAIRS {
        while value >= arabic {
            output.push_str(roman);
            value -= arabic;
        }
    }

    output
}
