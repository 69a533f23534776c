//! Outward notifications of the widget.
//!
//! Embedders subscribe through [`EventController`] and receive every
//! [`ParCoordsEvent`] whose [`EventKind`] bits intersect their
//! [`EventFilter`]. Events are emitted from the UI thread after the internal
//! state has been updated, so the payload always reflects the new state.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex, PoisonError};

// ─────────────────────────────────────────────────────────────────────────────
// EventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Categories an event belongs to. One event may carry several bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u64);

impl EventKind {
    // ── Rows ────────────────────────────────────────────────────────────
    /// The pointer entered or left a row (chart line or table row).
    pub const HOVER: Self = Self(1 << 0);
    /// A row was locked by a click.
    pub const SELECTION_LOCKED: Self = Self(1 << 1);
    /// The locked row was released.
    pub const SELECTION_CLEARED: Self = Self(1 << 2);

    // ── Filtering ───────────────────────────────────────────────────────
    /// A brush was set or cleared on an axis.
    pub const BRUSH_CHANGED: Self = Self(1 << 3);
    /// The set of displayed chart lines changed.
    pub const VISIBILITY_CHANGED: Self = Self(1 << 4);
    /// The table finished a redraw.
    pub const TABLE_REDRAWN: Self = Self(1 << 5);

    // ── Layout / data ───────────────────────────────────────────────────
    /// The graph dimensions (axes) changed.
    pub const DIMENSIONS_CHANGED: Self = Self(1 << 6);
    /// The dataset was replaced.
    pub const DATA_RELOADED: Self = Self(1 << 7);
    /// A cluster was chosen in the cluster panel.
    pub const CLUSTER_CHOSEN: Self = Self(1 << 8);

    /// Matches every kind.
    pub const ALL: Self = Self(u64::MAX);

    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for EventKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl std::ops::BitAnd for EventKind {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if *self == EventKind::ALL {
            return write!(f, "ALL");
        }

        let pairs: &[(EventKind, &str)] = &[
            (EventKind::HOVER, "HOVER"),
            (EventKind::SELECTION_LOCKED, "SELECTION_LOCKED"),
            (EventKind::SELECTION_CLEARED, "SELECTION_CLEARED"),
            (EventKind::BRUSH_CHANGED, "BRUSH_CHANGED"),
            (EventKind::VISIBILITY_CHANGED, "VISIBILITY_CHANGED"),
            (EventKind::TABLE_REDRAWN, "TABLE_REDRAWN"),
            (EventKind::DIMENSIONS_CHANGED, "DIMENSIONS_CHANGED"),
            (EventKind::DATA_RELOADED, "DATA_RELOADED"),
            (EventKind::CLUSTER_CHOSEN, "CLUSTER_CHOSEN"),
        ];

        let mut names: Vec<String> = Vec::new();
        let mut rest = self.0;
        for (kind, name) in pairs {
            if self.contains(*kind) {
                names.push(name.to_string());
                rest &= !kind.0;
            }
        }
        if rest != 0 {
            names.push(format!("0x{rest:x}"));
        }
        f.write_str(&names.join("|"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Event payload
// ─────────────────────────────────────────────────────────────────────────────

/// One notification.
#[derive(Debug, Clone, PartialEq)]
pub struct ParCoordsEvent {
    pub kinds: EventKind,
    /// Seconds since the controller was created, set on emit.
    pub timestamp: f64,
    /// Row concerned by hover and selection events.
    pub row: Option<usize>,
    /// Axis concerned by brush events.
    pub dimension: Option<String>,
    /// Raw-value bounds of a numeric brush, `None` when cleared.
    pub range: Option<(f64, f64)>,
    /// Number of displayed chart lines after visibility changes and redraws.
    pub visible_count: Option<usize>,
    /// Cluster key for `CLUSTER_CHOSEN`.
    pub cluster: Option<String>,
}

impl ParCoordsEvent {
    pub fn new(kinds: EventKind) -> Self {
        Self {
            kinds,
            timestamp: 0.0,
            row: None,
            dimension: None,
            range: None,
            visible_count: None,
            cluster: None,
        }
    }

    pub fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    pub fn with_dimension(mut self, dimension: impl Into<String>) -> Self {
        self.dimension = Some(dimension.into());
        self
    }

    pub fn with_range(mut self, range: Option<(f64, f64)>) -> Self {
        self.range = range;
        self
    }

    pub fn with_visible_count(mut self, count: usize) -> Self {
        self.visible_count = Some(count);
        self
    }

    pub fn with_cluster(mut self, key: impl Into<String>) -> Self {
        self.cluster = Some(key.into());
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Filter and controller
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventFilter {
    pub mask: EventKind,
}

impl EventFilter {
    pub const fn all() -> Self {
        Self {
            mask: EventKind::ALL,
        }
    }

    pub const fn only(mask: EventKind) -> Self {
        Self { mask }
    }

    pub fn matches(&self, event: &ParCoordsEvent) -> bool {
        self.mask.intersects(event.kinds)
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::all()
    }
}

struct Subscriber {
    filter: EventFilter,
    sender: Sender<ParCoordsEvent>,
}

struct EventCtrlInner {
    subscribers: Vec<Subscriber>,
    start_instant: std::time::Instant,
}

/// Cloneable handle; clones share subscribers.
#[derive(Clone)]
pub struct EventController {
    inner: Arc<Mutex<EventCtrlInner>>,
}

impl EventController {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(EventCtrlInner {
                subscribers: Vec::new(),
                start_instant: std::time::Instant::now(),
            })),
        }
    }

    /// Receive every event whose kinds intersect `filter`.
    pub fn subscribe(&self, filter: EventFilter) -> Receiver<ParCoordsEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.subscribers.push(Subscriber { filter, sender: tx });
        rx
    }

    pub fn subscribe_all(&self) -> Receiver<ParCoordsEvent> {
        self.subscribe(EventFilter::all())
    }

    /// Deliver `event` to matching subscribers. Subscribers whose receiver
    /// was dropped are removed when an event for them is sent.
    pub fn emit(&self, mut event: ParCoordsEvent) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        event.timestamp = inner.start_instant.elapsed().as_secs_f64();
        log::trace!("event {}", event.kinds);
        inner.subscribers.retain(|sub| {
            if sub.filter.matches(&event) {
                sub.sender.send(event.clone()).is_ok()
            } else {
                true
            }
        });
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .subscribers
            .len()
    }
}

impl Default for EventController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventController")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────────────────────────
