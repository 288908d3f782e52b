//! Thread pinning for timed runs.
//!
//! Linux pins through `sched_setaffinity` and restores the saved mask on
//! drop. Other platforms have no real affinity API worth using here, so the
//! guard is a no-op that reports itself as unpinned.

use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(target_os = "linux")]
mod platform {
    /// Saved affinity mask of the calling thread.
    pub struct Saved(libc::cpu_set_t);

    pub fn current_cpu() -> Option<usize> {
        // SAFETY: sched_getcpu has no preconditions
        let cpu = unsafe { libc::sched_getcpu() };
        usize::try_from(cpu).ok()
    }

    pub fn save() -> Option<Saved> {
        // SAFETY: cpu_set_t is plain data; the kernel fills it in
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            (libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) == 0)
                .then_some(Saved(set))
        }
    }

    pub fn pin(core: usize) -> bool {
        // SAFETY: the set is initialised by CPU_ZERO before use
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore(saved: &Saved) -> bool {
        // SAFETY: the mask came from sched_getaffinity on this thread
        unsafe {
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &saved.0) == 0
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub struct Saved;

    pub fn current_cpu() -> Option<usize> {
        None
    }
    pub fn save() -> Option<Saved> {
        None
    }
    pub fn pin(_core: usize) -> bool {
        false
    }
    pub fn restore(_saved: &Saved) -> bool {
        true
    }
}

/// RAII guard: pins the thread to the core it is running on, restores the
/// previous affinity on drop.
///
/// ```ignore
/// {
///     let _pin = CpuPinGuard::new(); // thread pinned
///     // ... timed invocations ...
/// } // original affinity restored here
/// ```
pub struct CpuPinGuard {
    pinned: Option<(usize, platform::Saved)>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        let pinned = platform::current_cpu().and_then(|core| {
            let saved = platform::save()?;
            platform::pin(core).then_some((core, saved))
        });
        if pinned.is_none() {
            note_unpinned();
        }
        Self { pinned }
    }

    /// Core this thread is pinned to, if any.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned.as_ref().map(|(core, _)| *core)
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned.is_some()
    }
}

static UNPINNED_WARNED: AtomicBool = AtomicBool::new(false);

/// Warn the first time pinning fails in this process, debug afterwards.
/// Returns true when the warning was emitted.
fn note_unpinned() -> bool {
    if UNPINNED_WARNED.swap(true, Ordering::Relaxed) {
        log::debug!("cpu pinning unavailable");
        false
    } else {
        log::warn!("cpu pinning unavailable, timings may include core migrations");
        true
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if let Some((core, saved)) = self.pinned.take() {
            if !platform::restore(&saved) {
                log::warn!("failed to restore cpu affinity after pinning to core {core}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_guard() {
        let guard = CpuPinGuard::new();
        // Pinning may be refused in containers; only check consistency
        assert_eq!(guard.is_pinned(), guard.core_id().is_some());
        drop(guard);
    }

    #[test]
    fn test_unpinned_warning_is_emitted_once() {
        note_unpinned();
        assert!(UNPINNED_WARNED.load(Ordering::Relaxed));
        assert!(!note_unpinned());
    }

    #[test]
    fn test_nested_guards_restore() {
        let outer = CpuPinGuard::new();
        {
            let inner = CpuPinGuard::new();
            assert_eq!(inner.is_pinned(), inner.core_id().is_some());
        }
        drop(outer);
    }
}
