//! Click-outside-to-dismiss.
//!
//! The detector never touches a global registry. It asks a [`HostEvents`]
//! service for pointer-down and touch-start subscriptions while it is alive
//! and hands them back when dropped, so listeners cannot outlive a gallery.

use lightbox_types::{Bounds, Point};
use shared::chrome::has_chrome_class;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEventKind {
    PointerDown,
    TouchStart,
}

impl HostEventKind {
    pub const ALL: [Self; 2] = [Self::PointerDown, Self::TouchStart];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

/// The element an event landed on: where it is and which classes it carries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventTarget {
    pub position: Point,
    pub classes: Vec<String>,
}

impl EventTarget {
    pub fn at(position: Point) -> Self {
        Self {
            position,
            classes: Vec::new(),
        }
    }

    pub fn with_class<S: Into<String>>(mut self, class: S) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub kind: HostEventKind,
    pub button: PointerButton,
    pub target: EventTarget,
}

impl PointerEvent {
    pub fn pointer_down(target: EventTarget, button: PointerButton) -> Self {
        Self {
            kind: HostEventKind::PointerDown,
            button,
            target,
        }
    }

    /// Touches have no button; they report as primary.
    pub fn touch_start(target: EventTarget) -> Self {
        Self {
            kind: HostEventKind::TouchStart,
            button: PointerButton::Primary,
            target,
        }
    }
}

pub type Listener = Rc<dyn Fn(&PointerEvent)>;
pub type CloseCallback = Rc<dyn Fn()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Host-event subscription capability.
pub trait HostEvents {
    fn subscribe(&self, kind: HostEventKind, listener: Listener) -> ListenerId;
    fn unsubscribe(&self, kind: HostEventKind, id: ListenerId);
}

/// Document-level listener registry fed by the host's event loop.
#[derive(Default)]
pub struct EventHub {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(HostEventKind, ListenerId, Listener)>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver an event to every listener of its kind. Returns how many ran.
    pub fn dispatch(&self, event: &PointerEvent) -> usize {
        // Listeners may unsubscribe while running, so call them on a snapshot
        let matching: Vec<(ListenerId, Listener)> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(kind, _, _)| *kind == event.kind)
            .map(|(_, id, listener)| (*id, Rc::clone(listener)))
            .collect();

        let mut ran = 0;
        for (id, listener) in &matching {
            // Skip entries removed by an earlier listener of this dispatch
            if !self.is_registered(event.kind, *id) {
                continue;
            }
            listener(event);
            ran += 1;
        }

        ran
    }

    fn is_registered(&self, kind: HostEventKind, id: ListenerId) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|(k, i, _)| *k == kind && *i == id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl HostEvents for EventHub {
    fn subscribe(&self, kind: HostEventKind, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((kind, id, listener));
        id
    }

    fn unsubscribe(&self, kind: HostEventKind, id: ListenerId) {
        self.listeners
            .borrow_mut()
            .retain(|(k, i, _)| !(*k == kind && *i == id));
    }
}

impl fmt::Debug for EventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Shared handle to the region that counts as "inside". Empty until the
/// region has been laid out.
#[derive(Debug, Clone, Default)]
pub struct ContainerRef(Rc<Cell<Option<Bounds>>>);

impl ContainerRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&self, bounds: Bounds) {
        self.0.set(Some(bounds));
    }

    pub fn unmount(&self) {
        self.0.set(None);
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.0.get()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Whether an event should dismiss the gallery, given the container bounds.
pub fn should_close(event: &PointerEvent, container: Option<Bounds>) -> bool {
    let Some(container) = container else {
        return false;
    };

    if container.contains(event.target.position) {
        return false;
    }

    if has_chrome_class(&event.target.classes) {
        return false;
    }

    // The synthesized pointer-down that follows a touch does the work
    if event.kind == HostEventKind::TouchStart {
        return false;
    }

    event.button == PointerButton::Primary
}

/// An active outside-click registration. Dropping it removes its listeners.
pub struct OutsideClick {
    host: Rc<dyn HostEvents>,
    container: ContainerRef,
    close: CloseCallback,
    registrations: Vec<(HostEventKind, ListenerId)>,
}

impl OutsideClick {
    pub fn activate(host: Rc<dyn HostEvents>, container: ContainerRef, close: CloseCallback) -> Self {
        let registrations = register(host.as_ref(), &container, &close);

        Self {
            host,
            container,
            close,
            registrations,
        }
    }

    /// Re-register when the container or the callback changed. Returns
    /// whether it did.
    pub fn update(&mut self, container: ContainerRef, close: CloseCallback) -> bool {
        let same_close = std::ptr::addr_eq(Rc::as_ptr(&self.close), Rc::as_ptr(&close));
        if self.container.ptr_eq(&container) && same_close {
            return false;
        }

        self.release();
        self.registrations = register(self.host.as_ref(), &container, &close);
        self.container = container;
        self.close = close;

        true
    }

    pub fn container(&self) -> &ContainerRef {
        &self.container
    }

    pub fn is_active(&self) -> bool {
        !self.registrations.is_empty()
    }

    fn release(&mut self) {
        for (kind, id) in self.registrations.drain(..) {
            self.host.unsubscribe(kind, id);
        }
        tracing::trace!("outside-click listeners removed");
    }
}

impl Drop for OutsideClick {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for OutsideClick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutsideClick")
            .field("container", &self.container)
            .field("registrations", &self.registrations)
            .finish()
    }
}

fn register(
    host: &dyn HostEvents,
    container: &ContainerRef,
    close: &CloseCallback,
) -> Vec<(HostEventKind, ListenerId)> {
    let listener: Listener = {
        let container = container.clone();
        let close = Rc::clone(close);
        Rc::new(move |event: &PointerEvent| {
            if should_close(event, container.bounds()) {
                tracing::debug!(
                    x = event.target.position.x,
                    y = event.target.position.y,
                    "click outside the slide"
                );
                close();
            }
        })
    };

    let registrations = HostEventKind::ALL
        .iter()
        .map(|kind| (*kind, host.subscribe(*kind, Rc::clone(&listener))))
        .collect();
    tracing::trace!("outside-click listeners registered");

    registrations
}
