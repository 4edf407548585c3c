//! Interaction tracking shared between a host and the components it drives.
//!
//! The host emits interactions (such as focus gained) into an
//! [`InteractionSource`]; components read the current set each frame and may
//! register listeners to learn when they need a new frame.

use smallvec::SmallVec;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A user interaction that is currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interaction {
    Focused,
}

/// Identifier returned by [`InteractionSource::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

type Listener = Rc<dyn Fn(Interaction, bool)>;

#[derive(Default)]
struct InteractionState {
    active: SmallVec<[Interaction; 1]>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: usize,
}

/// Shared, observable set of active interactions.
///
/// Cloning yields another handle to the same state. Not thread-safe; use it
/// from the UI thread only.
#[derive(Clone, Default)]
pub struct InteractionSource {
    inner: Rc<RefCell<InteractionState>>,
}

impl fmt::Debug for InteractionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionSource")
            .field("active", &self.inner.borrow().active)
            .finish()
    }
}

impl InteractionSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `interaction` as started. Returns false if it was already active.
    pub fn emit(&self, interaction: Interaction) -> bool {
        {
            let mut state = self.inner.borrow_mut();
            if state.active.contains(&interaction) {
                return false;
            }
            state.active.push(interaction);
        }
        log::trace!("interaction started: {interaction:?}");
        self.notify(interaction, true);
        true
    }

    /// Marks `interaction` as finished. Returns false if it was not active.
    pub fn end(&self, interaction: Interaction) -> bool {
        {
            let mut state = self.inner.borrow_mut();
            let Some(index) = state.active.iter().position(|i| *i == interaction) else {
                return false;
            };
            state.active.remove(index);
        }
        log::trace!("interaction ended: {interaction:?}");
        self.notify(interaction, false);
        true
    }

    pub fn contains(&self, interaction: Interaction) -> bool {
        self.inner.borrow().active.contains(&interaction)
    }

    pub fn is_focused(&self) -> bool {
        self.contains(Interaction::Focused)
    }

    /// Convenience for hosts that track focus as a boolean.
    pub fn set_focused(&self, focused: bool) {
        if focused {
            self.emit(Interaction::Focused);
        } else {
            self.end(Interaction::Focused);
        }
    }

    /// Registers a listener called with `(interaction, started)` on every change.
    pub fn add_listener(&self, listener: impl Fn(Interaction, bool) + 'static) -> ListenerId {
        let mut state = self.inner.borrow_mut();
        let id = ListenerId(state.next_listener);
        state.next_listener += 1;
        state.listeners.push((id, Rc::new(listener)));
        id
    }

    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut state = self.inner.borrow_mut();
        let before = state.listeners.len();
        state.listeners.retain(|(existing, _)| *existing != id);
        state.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn notify(&self, interaction: Interaction, started: bool) {
        // Listeners may touch the source, so call them outside the borrow.
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(interaction, started);
        }
    }
}
