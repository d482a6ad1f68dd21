use std::sync::atomic;

/// Run state shared between the refresh loop and the interrupt handler.
pub struct Task {
	running: atomic::AtomicBool,
	stopped: atomic::AtomicBool,
}

impl Task {
	pub fn new() -> Self {
		Self {
			running: atomic::AtomicBool::new(false),
			stopped: atomic::AtomicBool::new(false),
		}
	}

	/// Whether the refresh loop has started and will notice `stop` on its own.
	pub fn is_running(&self) -> bool {
		self.running.load(atomic::Ordering::Acquire)
	}

	pub fn set_running(&self) {
		self.running.store(true, atomic::Ordering::Release);
	}

	pub fn is_stopped(&self) -> bool {
		self.stopped.load(atomic::Ordering::Relaxed)
	}

	pub fn stop(&self) {
		self.stopped.store(true, atomic::Ordering::SeqCst);
	}
}
