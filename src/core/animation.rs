//! Looping frame sequence for animated images.

use image::RgbaImage;

/// A non-empty list of decoded frames with a cursor that wraps around.
#[derive(Debug, Clone)]
pub struct FrameCycle {
    frames: Vec<RgbaImage>,
    index: usize,
}

impl FrameCycle {
    /// Returns `None` when `frames` is empty.
    pub fn new(frames: Vec<RgbaImage>) -> Option<Self> {
        if frames.is_empty() {
            return None;
        }
        Some(Self { frames, index: 0 })
    }

    /// Frame currently on display.
    pub fn current(&self) -> &RgbaImage {
        &self.frames[self.index]
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Step to the next frame, wrapping to the first after the last.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.frames.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(shade: u8) -> RgbaImage {
        RgbaImage::from_pixel(2, 2, Rgba([shade, shade, shade, 255]))
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert!(FrameCycle::new(Vec::new()).is_none());
    }

    #[test]
    fn wraps_to_first_frame_after_len_advances() {
        let mut cycle = FrameCycle::new(vec![solid(0), solid(100), solid(200)]).unwrap();
        assert_eq!(cycle.current().get_pixel(0, 0)[0], 0);

        for _ in 0..cycle.len() {
            cycle.advance();
        }
        assert_eq!(cycle.index(), 0);
        assert_eq!(cycle.current().get_pixel(0, 0)[0], 0);
    }

    #[test]
    fn single_frame_stays_put() {
        let mut cycle = FrameCycle::new(vec![solid(7)]).unwrap();
        cycle.advance();
        cycle.advance();
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn advances_in_order() {
        let mut cycle = FrameCycle::new(vec![solid(0), solid(100), solid(200)]).unwrap();
        cycle.advance();
        assert_eq!(cycle.current().get_pixel(0, 0)[0], 100);
        cycle.advance();
        assert_eq!(cycle.current().get_pixel(0, 0)[0], 200);
    }
}
