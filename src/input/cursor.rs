//! Cursor Lock Bookkeeping
//!
//! The camera rig wants the cursor locked while it is driving the view (the
//! prototype locks it on startup), but only the host can actually grab the
//! window cursor. [`CursorGrab`] tracks the desired state plus a dirty flag;
//! the host checks the flag each frame and applies the state through its
//! windowing layer.

/// Desired cursor lock state, applied by the host.
#[derive(Debug, Clone)]
pub struct CursorGrab {
    /// Whether the cursor should be locked (hidden and confined)
    locked: bool,
    /// Whether the state changed and still needs applying to the window
    dirty: bool,
}

impl Default for CursorGrab {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorGrab {
    /// Create with the cursor locked, matching the prototype's startup state.
    pub fn new() -> Self {
        Self {
            locked: true,
            dirty: true,
        }
    }

    /// Create with the cursor released (menus, editors).
    pub fn new_released() -> Self {
        Self {
            locked: false,
            dirty: true,
        }
    }

    /// Whether the cursor should currently be locked.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Request the cursor be locked.
    pub fn lock(&mut self) {
        if !self.locked {
            self.locked = true;
            self.dirty = true;
        }
    }

    /// Request the cursor be released.
    pub fn release(&mut self) {
        if self.locked {
            self.locked = false;
            self.dirty = true;
        }
    }

    /// Toggle the lock state.
    pub fn toggle(&mut self) {
        self.locked = !self.locked;
        self.dirty = true;
    }

    /// Whether the host still needs to apply the current state.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the current state as applied.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}
