/// Converts a key name string to a Windows virtual key code.
///
/// Supports letters (A–Z), digits (0–9), function keys (F1–F24),
/// numpad keys (Num0–Num9) and common named keys (Enter, Space, Tab, etc.).
/// Matching is case-insensitive.
pub fn vk_from_name(name: &str) -> Option<u32> {
    let upper = name.to_ascii_uppercase();

    // Single letter A–Z or digit 0–9: the VK code is the ASCII value.
    if upper.len() == 1 {
        let ch = upper.as_bytes()[0];
        if ch.is_ascii_uppercase() || ch.is_ascii_digit() {
            return Some(u32::from(ch));
        }
    }

    // Function keys F1–F24
    if let Some(rest) = upper.strip_prefix('F')
        && let Ok(n) = rest.parse::<u32>()
        && (1..=24).contains(&n)
    {
        return Some(0x70 + n - 1); // VK_F1 = 0x70
    }

    // Numpad digits
    if let Some(rest) = upper
        .strip_prefix("NUMPAD")
        .or_else(|| upper.strip_prefix("NUM"))
        && let Ok(n) = rest.parse::<u32>()
        && n <= 9
    {
        return Some(0x60 + n); // VK_NUMPAD0 = 0x60
    }

    match upper.as_str() {
        // Editing / navigation
        "ENTER" | "RETURN" => Some(0x0D),
        "TAB" => Some(0x09),
        "ESCAPE" | "ESC" => Some(0x1B),
        "SPACE" => Some(0x20),
        "BACKSPACE" | "BACK" => Some(0x08),
        "DELETE" | "DEL" => Some(0x2E),
        "INSERT" | "INS" => Some(0x2D),
        "HOME" => Some(0x24),
        "END" => Some(0x23),
        "PAGEUP" | "PGUP" | "PRIOR" => Some(0x21),
        "PAGEDOWN" | "PGDN" | "NEXT" => Some(0x22),

        // Arrow keys
        "LEFT" => Some(0x25),
        "UP" => Some(0x26),
        "RIGHT" => Some(0x27),
        "DOWN" => Some(0x28),

        // System keys
        "PAUSE" => Some(0x13),
        "CAPSLOCK" => Some(0x14),
        "PRINTSCREEN" | "PRTSC" | "SNAPSHOT" => Some(0x2C),
        "SCROLLLOCK" | "SCROLL" => Some(0x91),
        "NUMLOCK" => Some(0x90),
        "APPS" | "MENU" => Some(0x5D),

        // Numpad operators
        "MULTIPLY" => Some(0x6A),
        "ADD" => Some(0x6B),
        "SUBTRACT" => Some(0x6D),
        "DECIMAL" => Some(0x6E),
        "DIVIDE" => Some(0x6F),

        // Punctuation / OEM keys
        "MINUS" => Some(0xBD),
        "PLUS" | "EQUALS" => Some(0xBB),
        "COMMA" => Some(0xBC),
        "PERIOD" | "DOT" => Some(0xBE),
        "SLASH" => Some(0xBF),
        "SEMICOLON" => Some(0xBA),
        "BACKSLASH" => Some(0xDC),
        "LBRACKET" => Some(0xDB),
        "RBRACKET" => Some(0xDD),
        "QUOTE" => Some(0xDE),
        "BACKTICK" | "GRAVE" => Some(0xC0),

        _ => None,
    }
}

/// Returns the canonical display name for a virtual key code.
///
/// This is the inverse of [`vk_from_name`] for the names it prints
/// back (`0x78` → `"F9"`). Codes without a known name are rendered
/// as hex so they still round-trip through logs.
pub fn name_from_vk(vk: u32) -> String {
    match vk {
        0x30..=0x39 | 0x41..=0x5A => char::from_u32(vk).map(String::from).unwrap_or_default(),
        0x70..=0x87 => format!("F{}", vk - 0x70 + 1),
        0x60..=0x69 => format!("Num{}", vk - 0x60),
        _ => match named_key(vk) {
            Some(name) => name.to_string(),
            None => format!("0x{vk:02X}"),
        },
    }
}

fn named_key(vk: u32) -> Option<&'static str> {
    let name = match vk {
        0x0D => "Enter",
        0x09 => "Tab",
        0x1B => "Esc",
        0x20 => "Space",
        0x08 => "Backspace",
        0x2E => "Delete",
        0x2D => "Insert",
        0x24 => "Home",
        0x23 => "End",
        0x21 => "PageUp",
        0x22 => "PageDown",
        0x25 => "Left",
        0x26 => "Up",
        0x27 => "Right",
        0x28 => "Down",
        0x13 => "Pause",
        0x14 => "CapsLock",
        0x2C => "PrintScreen",
        0x91 => "ScrollLock",
        0x90 => "NumLock",
        0x5D => "Apps",
        0x6A => "Multiply",
        0x6B => "Add",
        0x6D => "Subtract",
        0x6E => "Decimal",
        0x6F => "Divide",
        0xBD => "Minus",
        0xBB => "Plus",
        0xBC => "Comma",
        0xBE => "Period",
        0xBF => "Slash",
        0xBA => "Semicolon",
        0xDC => "Backslash",
        0xDB => "LBracket",
        0xDD => "RBracket",
        0xDE => "Quote",
        0xC0 => "Backtick",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_case_insensitive() {
        // Assert
        assert_eq!(vk_from_name("j"), Some(0x4A));
        assert_eq!(vk_from_name("J"), Some(0x4A));
        assert_eq!(vk_from_name("Z"), Some(0x5A));
    }

    #[test]
    fn function_keys_cover_extended_range() {
        // Assert
        assert_eq!(vk_from_name("F1"), Some(0x70));
        assert_eq!(vk_from_name("f9"), Some(0x78));
        assert_eq!(vk_from_name("F24"), Some(0x87));
        assert_eq!(vk_from_name("F25"), None);
        assert_eq!(vk_from_name("F0"), None);
    }

    #[test]
    fn numpad_digits() {
        // Assert
        assert_eq!(vk_from_name("Num0"), Some(0x60));
        assert_eq!(vk_from_name("numpad7"), Some(0x67));
        assert_eq!(vk_from_name("Num10"), None);
    }

    #[test]
    fn named_keys() {
        // Assert
        assert_eq!(vk_from_name("Enter"), Some(0x0D));
        assert_eq!(vk_from_name("pause"), Some(0x13));
        assert_eq!(vk_from_name("esc"), Some(0x1B));
    }

    #[test]
    fn unknown_returns_none() {
        // Assert
        assert_eq!(vk_from_name("INVALID"), None);
        assert_eq!(vk_from_name(""), None);
    }

    #[test]
    fn names_print_back_to_parseable_form() {
        // Arrange
        let names = ["A", "7", "F9", "F24", "Num3", "PageUp", "Backtick"];

        for name in names {
            // Act
            let vk = vk_from_name(name).unwrap();

            // Assert
            assert_eq!(name_from_vk(vk), name);
        }
    }

    #[test]
    fn unnamed_code_prints_as_hex() {
        // Assert
        assert_eq!(name_from_vk(0xFF), "0xFF");
    }
}
