use rand::Rng;

/// The URLs a run spreads its requests across, each equally likely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSet {
    urls: Vec<String>,
}

impl TargetSet {
    /// Returns `None` when `urls` is empty.
    pub fn new(urls: Vec<String>) -> Option<Self> {
        if urls.is_empty() {
            return None;
        }
        Some(Self { urls })
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Draw a random target using `rng`.
    pub fn pick(&self, rng: &mut impl Rng) -> &str {
        if self.urls.len() == 1 {
            return &self.urls[0];
        }
        let roll = rng.gen_range(0..self.urls.len());
        self.url_for_roll(roll)
    }

    /// Map a roll to a target; rolls past the end wrap around.
    /// Exposed for deterministic testing.
    pub fn url_for_roll(&self, roll: usize) -> &str {
        &self.urls[roll % self.urls.len()]
    }
}
