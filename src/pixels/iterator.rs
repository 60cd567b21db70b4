use super::{PixelRead, PixelRef};

/// Row-major iterator over every pixel of a buffer
pub struct PixelBufferIter<'a, P: 'a> where P: PixelRead {
    pub(in crate::pixels) buffer: &'a P,
    pub(in crate::pixels) position: usize,
    pub(in crate::pixels) max_len: usize,
}

impl<'a, P: 'a> Iterator for PixelBufferIter<'a, P> where P: PixelRead {
    type Item = PixelRef<'a, P>;

    fn next(&mut self) -> Option<PixelRef<'a, P>> {
        if self.position >= self.max_len { None } else {
            let res = PixelRef(self.position, self.buffer);
            self.position += 1;
            Some(res)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.max_len - self.position;
        (remaining, Some(remaining))
    }
}

impl<'a, P: 'a> ExactSizeIterator for PixelBufferIter<'a, P> where P: PixelRead {}
