//! Color helpers for widget code.

use glam::Vec4;

/// Packs RGBA8 channels into a `Vec4` of channel values (0-255), the shape
/// the GUI library's color widgets take.
pub fn pack_color(rgba: [u8; 4]) -> Vec4 {
    let [r, g, b, a] = rgba;
    Vec4::new(f32::from(r), f32::from(g), f32::from(b), f32::from(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_color_keeps_channel_values() {
        assert_eq!(
            pack_color([255, 128, 0, 64]),
            Vec4::new(255.0, 128.0, 0.0, 64.0)
        );
    }
}
