/// One contiguous run of samples inside a track.
///
/// A live segment always holds at least one sample; operations that would
/// leave a segment empty remove it instead.
#[derive(Debug, Clone)]
pub struct Segment {
    pub samples: Vec<i16>,
}

impl Segment {
    pub fn new(samples: Vec<i16>) -> Self {
        debug_assert!(!samples.is_empty(), "segment must hold at least one sample");
        Segment { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }
}
