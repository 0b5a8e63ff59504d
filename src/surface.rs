//! Pixel surfaces the engine draws onto

use crate::color::{BLACK, Rgb};

/// Addressable array of pixels
///
/// Implement this trait to draw onto a real or virtual strip.
/// Writes are only issued for indices below [`StripSurface::len`]
/// when they come through a [`StripContext`](crate::StripContext).
pub trait StripSurface {
    /// Number of addressable pixels
    fn len(&self) -> usize;

    /// Set a single pixel
    fn set_pixel(&mut self, index: usize, color: Rgb);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory surface with fixed capacity
///
/// Only the first `len` pixels are addressable; `len` never exceeds `N`.
#[derive(Debug, Clone)]
pub struct FrameBuffer<const N: usize> {
    pixels: [Rgb; N],
    len: usize,
}

impl<const N: usize> FrameBuffer<N> {
    /// Create a buffer exposing `len` pixels, capped at `N`
    pub const fn new(len: usize) -> Self {
        Self {
            pixels: [BLACK; N],
            len: if len < N { len } else { N },
        }
    }

    /// Addressable pixels
    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels[..self.len]
    }

    /// Pixel at `index`, if addressable
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.as_slice().get(index).copied()
    }
}

impl<const N: usize> Default for FrameBuffer<N> {
    fn default() -> Self {
        Self::new(N)
    }
}

impl<const N: usize> StripSurface for FrameBuffer<N> {
    fn len(&self) -> usize {
        self.len
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels[..self.len].get_mut(index) {
            *pixel = color;
        }
    }
}

impl StripSurface for [Rgb] {
    fn len(&self) -> usize {
        <[Rgb]>::len(self)
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.get_mut(index) {
            *pixel = color;
        }
    }
}
