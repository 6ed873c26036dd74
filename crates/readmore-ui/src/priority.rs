//! Prioritized height rules shared between a widget and its host.
//!
//! A widget can be given two competing [`SizeConstraint`]s. Whichever has
//! the higher [`LayoutPriority`] decides the height at measure time, so a
//! widget changes size by re-prioritizing rules rather than by editing their
//! targets. The host keeps its own `Rc` to each rule and may read or adjust
//! it between frames.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Weight used to pick between competing size constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayoutPriority(pub u16);

impl LayoutPriority {
    /// Soft: yields to any stronger rule.
    pub const LOW: Self = Self(250);
    /// Strong: wins over `LOW`.
    pub const HIGH: Self = Self(750);
    pub const REQUIRED: Self = Self(1000);
}

impl fmt::Display for LayoutPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What height a [`SizeConstraint`] asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeTarget {
    /// A fixed height in logical pixels.
    Fixed(f32),
    /// The natural height of the widget's content.
    Content,
}

impl SizeTarget {
    /// Resolve against the widget's natural content height.
    #[inline]
    pub fn resolve(self, content_height: f32) -> f32 {
        match self {
            SizeTarget::Fixed(h) => h,
            SizeTarget::Content => content_height,
        }
    }
}

/// A height rule with a mutable priority.
///
/// The target is fixed at construction; only the priority changes.
#[derive(Debug)]
pub struct SizeConstraint {
    target: SizeTarget,
    priority: Cell<LayoutPriority>,
}

impl SizeConstraint {
    pub fn new(target: SizeTarget, priority: LayoutPriority) -> Rc<Self> {
        Rc::new(Self { target, priority: Cell::new(priority) })
    }

    pub fn fixed(height: f32, priority: LayoutPriority) -> Rc<Self> {
        Self::new(SizeTarget::Fixed(height), priority)
    }

    pub fn content(priority: LayoutPriority) -> Rc<Self> {
        Self::new(SizeTarget::Content, priority)
    }

    #[inline]
    pub fn target(&self) -> SizeTarget {
        self.target
    }

    #[inline]
    pub fn priority(&self) -> LayoutPriority {
        self.priority.get()
    }

    #[inline]
    pub fn set_priority(&self, priority: LayoutPriority) {
        self.priority.set(priority);
    }
}

/// Pick the winning height among the present rules.
///
/// The rule with the strictly highest priority wins; on a tie the earlier
/// rule in `rules` wins. Returns `None` when no rule is present.
pub fn resolve_height(rules: &[Option<&SizeConstraint>], content_height: f32) -> Option<f32> {
    let mut best: Option<&SizeConstraint> = None;
    for rule in rules.iter().flatten() {
        if best.is_none_or(|b| rule.priority() > b.priority()) {
            best = Some(rule);
        }
    }
    best.map(|r| r.target().resolve(content_height))
}
