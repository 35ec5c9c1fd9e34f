use drill_core::model::Digit;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeypadButtonVm {
    pub digit: Digit,
    pub label: String,
    pub id: String,
    pub style: String,
}

/// One colored button per digit, hues spread evenly around the wheel.
#[must_use]
pub fn map_keypad_buttons() -> Vec<KeypadButtonVm> {
    Digit::ALL
        .iter()
        .map(|&digit| {
            let value = u32::from(digit.value());
            let hue = value * 36;
            let text_color = if value > 5 { "white" } else { "black" };
            KeypadButtonVm {
                digit,
                label: digit.to_string(),
                id: format!("keypad-{value}"),
                style: format!("background-color: hsl({hue}, 70%, 50%); color: {text_color};"),
            }
        })
        .collect()
}

/// Maps the text of a pressed key to a digit. Only a lone `0`-`9` counts.
#[must_use]
pub fn digit_for_key(key: &str) -> Option<Digit> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Digit::from_char(ch),
        _ => None,
    }
}
