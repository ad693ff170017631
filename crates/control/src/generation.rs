/// Monotonic generation clock for pick requests and user clears.
#[derive(Debug, Default, Clone)]
pub(crate) struct GenerationClock {
	last: u64,
}

impl GenerationClock {
	/// Returns the next generation ID, starting at 1.
	pub fn next(&mut self) -> u64 {
		self.last = self.last.wrapping_add(1);
		self.last
	}
}
