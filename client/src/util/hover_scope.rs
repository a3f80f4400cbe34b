//! Resource scope for hover sessions on a card.
//!
//! A card's hover spawns timers and particle elements. Everything spawned is
//! adopted by the scope. Leaving the card disposes pending work at once and
//! moves live particles to a retiring list so they can play their exit
//! animation; [`HoverScope::finish_retire`] removes them afterwards. A new
//! hover or dropping the scope (card unmount) disposes everything, retiring
//! included.
//!
//! Callbacks that fire late carry the generation they were armed under;
//! [`HoverScope::adopt`] refuses work from an older generation and disposes
//! it on the spot, so a stale timer never adds particles to a card that is
//! no longer hovered.

#[cfg(test)]
#[path = "hover_scope_test.rs"]
mod hover_scope_test;

/// Something a hover session owns and must release.
pub trait Disposable {
    fn dispose(self);
}

/// Owner of everything spawned by hover sessions on one card.
#[derive(Debug)]
pub struct HoverScope<H: Disposable> {
    generation: u64,
    active: bool,
    live: Vec<H>,
    retiring: Vec<H>,
}

impl<H: Disposable> Default for HoverScope<H> {
    fn default() -> Self {
        Self { generation: 0, active: false, live: Vec::new(), retiring: Vec::new() }
    }
}

impl<H: Disposable> HoverScope<H> {
    /// Begin a hover session, disposing anything left from earlier ones.
    /// Returns the token for callbacks armed in this session.
    pub fn enter(&mut self) -> u64 {
        dispose_all(&mut self.live);
        dispose_all(&mut self.retiring);
        self.generation = self.generation.wrapping_add(1);
        self.active = true;
        self.generation
    }

    /// End the session. Handles matching `retire` move to the retiring list;
    /// the rest are disposed now. Returns the token to pass to
    /// [`HoverScope::finish_retire`].
    pub fn leave(&mut self, mut retire: impl FnMut(&H) -> bool) -> u64 {
        for handle in std::mem::take(&mut self.live) {
            if retire(&handle) {
                self.retiring.push(handle);
            } else {
                handle.dispose();
            }
        }
        self.generation = self.generation.wrapping_add(1);
        self.active = false;
        self.generation
    }

    /// Dispose the retiring handles, unless another hover has started since
    /// `token` was issued (which already disposed them).
    pub fn finish_retire(&mut self, token: u64) {
        if !self.active && self.generation == token {
            dispose_all(&mut self.retiring);
        }
    }

    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.active && self.generation == generation
    }

    /// Take ownership of `handle` for session `generation`. Returns `false`
    /// (and disposes the handle) when that session is over.
    pub fn adopt(&mut self, generation: u64, handle: H) -> bool {
        if self.is_current(generation) {
            self.live.push(handle);
            true
        } else {
            handle.dispose();
            false
        }
    }

    pub fn live(&self) -> &[H] {
        &self.live
    }

    pub fn retiring(&self) -> &[H] {
        &self.retiring
    }
}

impl<H: Disposable> Drop for HoverScope<H> {
    fn drop(&mut self) {
        dispose_all(&mut self.live);
        dispose_all(&mut self.retiring);
    }
}

fn dispose_all<H: Disposable>(handles: &mut Vec<H>) {
    for handle in handles.drain(..) {
        handle.dispose();
    }
}

/// Browser resources a card hover can own.
#[cfg(feature = "hydrate")]
pub enum HoverHandle {
    /// Pending spawn timer; dropping cancels it.
    Timer(gloo_timers::callback::Timeout),
    /// A live particle element.
    Particle(web_sys::Element),
}

#[cfg(feature = "hydrate")]
impl HoverHandle {
    #[must_use]
    pub fn is_particle(&self) -> bool {
        matches!(self, Self::Particle(_))
    }
}

#[cfg(feature = "hydrate")]
impl Disposable for HoverHandle {
    fn dispose(self) {
        match self {
            Self::Timer(timer) => drop(timer),
            Self::Particle(el) => el.remove(),
        }
    }
}

/// Card-owned effects that outlive a hover session, such as click ripples.
/// Each one is released by key when it finishes; the rest are disposed
/// with the set.
#[derive(Debug)]
pub struct EffectSlots<H: Disposable> {
    next: u64,
    items: Vec<(u64, H)>,
}

impl<H: Disposable> Default for EffectSlots<H> {
    fn default() -> Self {
        Self { next: 0, items: Vec::new() }
    }
}

impl<H: Disposable> EffectSlots<H> {
    /// Key for the next effect, so its completion callback can be armed
    /// before the effect is stored.
    pub fn reserve(&mut self) -> u64 {
        self.next = self.next.wrapping_add(1);
        self.next
    }

    pub fn insert(&mut self, key: u64, handle: H) {
        self.items.push((key, handle));
    }

    /// Dispose the effect stored under `key`. Returns `false` when it is
    /// already gone.
    pub fn release(&mut self, key: u64) -> bool {
        let Some(index) = self.items.iter().position(|(k, _)| *k == key) else {
            return false;
        };
        let (_, handle) = self.items.swap_remove(index);
        handle.dispose();
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<H: Disposable> Drop for EffectSlots<H> {
    fn drop(&mut self) {
        for (_, handle) in self.items.drain(..) {
            handle.dispose();
        }
    }
}

/// A click ripple and the `animationend` listener that releases it.
#[cfg(feature = "hydrate")]
pub struct RippleEffect {
    pub el: web_sys::Element,
    pub on_end: wasm_bindgen::closure::Closure<dyn FnMut()>,
}

#[cfg(feature = "hydrate")]
impl Disposable for RippleEffect {
    fn dispose(self) {
        use wasm_bindgen::JsCast;

        let _ = self
            .el
            .remove_event_listener_with_callback("animationend", self.on_end.as_ref().unchecked_ref());
        self.el.remove();
    }
}
