use serde::{Deserialize, Serialize};

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Rgb = Rgb([0, 0, 0]);
    pub const WHITE: Rgb = Rgb([255, 255, 255]);
    pub const RED: Rgb = Rgb([255, 0, 0]);
    pub const GREEN: Rgb = Rgb([0, 128, 0]);
    pub const DARK_BLUE: Rgb = Rgb([0, 0, 139]);

    /// CSS hex notation, e.g. `#00008b`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(Rgb::BLACK.to_hex(), "#000000");
        assert_eq!(Rgb::DARK_BLUE.to_hex(), "#00008b");
        assert_eq!(Rgb([1, 2, 255]).to_hex(), "#0102ff");
    }
}
