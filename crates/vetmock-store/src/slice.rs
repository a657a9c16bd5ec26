//! The load lifecycle of one resource, as an explicit state machine.
//!
//! Phases move `idle -> loading -> succeeded | failed`. A failure keeps any
//! previously loaded items so the view can keep rendering stale data next to
//! the error. Every load carries a token from `begin`; a resolution whose
//! token is not the latest issued is discarded, which is what keeps an
//! out-of-order response from overwriting newer state.

/// Lifecycle phase of a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Proof that a load was started; pairs a resolution with its request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

impl LoadToken {
    pub(crate) fn new(seq: u64) -> Self {
        Self(seq)
    }

    pub(crate) fn seq(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct ResourceSlice<T> {
    items: Vec<T>,
    phase: LoadPhase,
    error: Option<String>,
    seq: u64,
    in_flight: Option<u64>,
}

impl<T> Default for ResourceSlice<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            phase: LoadPhase::Idle,
            error: None,
            seq: 0,
            in_flight: None,
        }
    }
}

impl<T> ResourceSlice<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True only in `idle`: a failed slice is not retried automatically and
    /// a loaded one is served from cache until `reset`.
    pub fn should_load(&self) -> bool {
        matches!(self.phase, LoadPhase::Idle)
    }

    pub fn begin(&mut self) -> LoadToken {
        self.seq += 1;
        self.in_flight = Some(self.seq);
        self.phase = LoadPhase::Loading;
        self.error = None;
        LoadToken::new(self.seq)
    }

    /// Apply a successful payload. Returns false (and changes nothing) when
    /// the token is stale.
    pub fn resolve(&mut self, token: LoadToken, items: Vec<T>) -> bool {
        if self.in_flight != Some(token.seq()) {
            return false;
        }
        self.in_flight = None;
        self.phase = LoadPhase::Succeeded;
        self.items = items;
        self.error = None;
        true
    }

    /// Record a failure. Items from an earlier success are kept. Returns
    /// false when the token is stale.
    pub fn reject(&mut self, token: LoadToken, message: impl Into<String>) -> bool {
        if self.in_flight != Some(token.seq()) {
            return false;
        }
        self.in_flight = None;
        self.phase = LoadPhase::Failed;
        self.error = Some(message.into());
        true
    }

    /// Back to `idle` with nothing cached.
    pub fn reset(&mut self) {
        self.items.clear();
        self.phase = LoadPhase::Idle;
        self.error = None;
        self.in_flight = None;
    }
}
