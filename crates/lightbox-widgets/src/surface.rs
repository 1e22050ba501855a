//! Gesture surface and hit-region markers.
//!
//! `Surface` wraps the whole slide view. It owns the swipe recognizer, the
//! wheel navigator and the outside-click registration in its widget-tree
//! state, so they live exactly as long as the view is mounted. `Marker`
//! wrappers report where the slide container, the gesture stage and the
//! chrome elements ended up, and the surface hit-tests pointer events
//! against those regions.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Instant;

use cosmic::{
    Element, Renderer,
    iced::{
        Length, Rectangle, Size, Vector,
        advanced::{
            Clipboard, Layout, Shell, Widget,
            layout::{Limits, Node},
            overlay,
            renderer as iced_renderer,
            widget::{Operation, Tree, tree},
        },
        event::{Event, Status},
        mouse::{self, Cursor, ScrollDelta},
        touch,
    },
};
use lightbox_config::{SwipeConfig, WheelConfig};
use lightbox_nav::{
    CloseCallback, ContainerRef, EventHub, EventTarget, OutsideClick, PointerButton, PointerEvent,
    Step, SwipeRecognizer, WheelNavigator,
};
use lightbox_types::{Bounds, Point};
use shared::ChromeClass;

/// What a marked region is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// The media element. Clicks inside never dismiss.
    Container,
    /// Area that accepts swipes and wheel navigation.
    Stage,
    Chrome(ChromeClass),
}

/// Regions recorded by the markers of one view. One region per mark.
#[derive(Debug, Clone, Default)]
pub struct HitRegions(Rc<RefCell<Vec<(Mark, Bounds)>>>);

impl HitRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, mark: Mark, bounds: Bounds) {
        let mut regions = self.0.borrow_mut();
        match regions.iter_mut().find(|(m, _)| *m == mark) {
            Some(entry) => entry.1 = bounds,
            None => regions.push((mark, bounds)),
        }
    }

    pub fn bounds_of(&self, mark: Mark) -> Option<Bounds> {
        self.0
            .borrow()
            .iter()
            .find(|(m, _)| *m == mark)
            .map(|(_, bounds)| *bounds)
    }

    /// Chrome classes of every region under `point`.
    pub fn classes_at(&self, point: Point) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .filter_map(|(mark, bounds)| match mark {
                Mark::Chrome(class) if bounds.contains(point) => Some(class.as_str().to_string()),
                _ => None,
            })
            .collect()
    }

    pub fn target_at(&self, point: Point) -> EventTarget {
        EventTarget {
            position: point,
            classes: self.classes_at(point),
        }
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

pub fn to_point(point: cosmic::iced::Point) -> Point {
    Point::new(point.x, point.y)
}

pub fn to_bounds(rect: Rectangle) -> Bounds {
    Bounds::new(rect.x, rect.y, rect.width, rect.height)
}

pub fn pointer_button(button: mouse::Button) -> PointerButton {
    match button {
        mouse::Button::Left => PointerButton::Primary,
        mouse::Button::Right => PointerButton::Secondary,
        mouse::Button::Middle => PointerButton::Middle,
        // DOM button numbering
        mouse::Button::Back => PointerButton::Other(3),
        mouse::Button::Forward => PointerButton::Other(4),
        mouse::Button::Other(n) => PointerButton::Other(n),
    }
}

/// Records the bounds of its content under a [`Mark`].
pub struct Marker<'a, M> {
    content: Element<'a, M>,
    mark: Mark,
    regions: HitRegions,
}

impl<'a, M> Marker<'a, M> {
    pub fn new(content: impl Into<Element<'a, M>>, mark: Mark, regions: &HitRegions) -> Self {
        Self {
            content: content.into(),
            mark,
            regions: regions.clone(),
        }
    }
}

pub fn marker<'a, M>(
    content: impl Into<Element<'a, M>>,
    mark: Mark,
    regions: &HitRegions,
) -> Marker<'a, M> {
    Marker::new(content, mark, regions)
}

impl<'a, M: Clone + 'a> Widget<M, cosmic::Theme, Renderer> for Marker<'a, M> {
    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&mut self, tree: &mut Tree) {
        tree.diff_children(std::slice::from_mut(&mut self.content));
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(&self, tree: &mut Tree, renderer: &Renderer, limits: &Limits) -> Node {
        self.content
            .as_widget()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &cosmic::Theme,
        style: &iced_renderer::Style,
        layout: Layout<'_>,
        cursor: Cursor,
        viewport: &Rectangle,
    ) {
        self.regions.record(self.mark, to_bounds(layout.bounds()));
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, M>,
        viewport: &Rectangle,
    ) -> Status {
        self.regions.record(self.mark, to_bounds(layout.bounds()));
        self.content.as_widget_mut().on_event(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        )
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        self.content
            .as_widget()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        translation: Vector,
    ) -> Option<overlay::Element<'b, M, cosmic::Theme, Renderer>> {
        self.content
            .as_widget_mut()
            .overlay(&mut tree.children[0], layout, renderer, translation)
    }
}

impl<'a, M: Clone + 'a> From<Marker<'a, M>> for Element<'a, M> {
    fn from(marker: Marker<'a, M>) -> Self {
        Element::new(marker)
    }
}

/// The events the surface reacts to, stripped of framework types.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SurfaceInput {
    PointerDown {
        position: Option<Point>,
        button: PointerButton,
    },
    Wheel {
        position: Option<Point>,
        delta_y: f32,
    },
    FingerPressed(Point),
    FingerLifted(Point),
    FingerLost,
}

impl SurfaceInput {
    fn from_event(event: &Event, cursor: Cursor) -> Option<Self> {
        let position = cursor.position().map(to_point);

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(button)) => Some(Self::PointerDown {
                position,
                button: pointer_button(*button),
            }),
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let delta_y = match delta {
                    ScrollDelta::Lines { y, .. } | ScrollDelta::Pixels { y, .. } => *y,
                };
                Some(Self::Wheel { position, delta_y })
            }
            Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                Some(Self::FingerPressed(to_point(*position)))
            }
            Event::Touch(touch::Event::FingerLifted { position, .. }) => {
                Some(Self::FingerLifted(to_point(*position)))
            }
            Event::Touch(touch::Event::FingerLost { .. }) => Some(Self::FingerLost),
            _ => None,
        }
    }
}

/// What an input asks the owner of the surface to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Close,
    Step(Step),
}

/// Per-instance gesture state, kept in the widget tree.
struct SurfaceState {
    swipe: SwipeRecognizer,
    wheel: WheelNavigator,
    hub: Rc<EventHub>,
    container: ContainerRef,
    close_requested: Rc<Cell<bool>>,
    outside_click: Option<OutsideClick>,
}

impl SurfaceState {
    fn new(swipe: SwipeConfig, wheel: WheelConfig) -> Self {
        Self {
            swipe: SwipeRecognizer::new(swipe),
            wheel: WheelNavigator::new(wheel),
            hub: Rc::new(EventHub::new()),
            container: ContainerRef::new(),
            close_requested: Rc::new(Cell::new(false)),
            outside_click: None,
        }
    }

    /// Hold an outside-click registration only while a close message exists.
    fn arm_outside_click(&mut self, armed: bool) {
        if !armed {
            self.outside_click = None;
            return;
        }

        if self.outside_click.is_none() {
            let flag = Rc::clone(&self.close_requested);
            let close: CloseCallback = Rc::new(move || flag.set(true));
            self.outside_click = Some(OutsideClick::activate(
                self.hub.clone(),
                self.container.clone(),
                close,
            ));
        }
    }

    fn sync_container(&self, bounds: Option<Bounds>) {
        match bounds {
            Some(bounds) => self.container.mount(bounds),
            None => self.container.unmount(),
        }
    }

    /// Feed one input through the gesture machinery. `layout_bounds` stands
    /// in for the stage until a stage marker has been laid out. `captured`
    /// tells whether a child already consumed the event. A pending close
    /// wins over navigation.
    fn handle(
        &mut self,
        input: SurfaceInput,
        regions: &HitRegions,
        layout_bounds: Bounds,
        captured: bool,
        now: Instant,
    ) -> Option<Outcome> {
        self.sync_container(regions.bounds_of(Mark::Container));
        let stage = regions.bounds_of(Mark::Stage).unwrap_or(layout_bounds);

        let step = match input {
            SurfaceInput::PointerDown { position, button } => {
                if let Some(position) = position {
                    self.hub
                        .dispatch(&PointerEvent::pointer_down(regions.target_at(position), button));
                }
                None
            }
            SurfaceInput::Wheel { position, delta_y } => {
                let over_stage = position.is_some_and(|position| stage.contains(position));

                // A scrollable child (the thumbnail strip) keeps its own wheel
                if captured || !over_stage {
                    None
                } else {
                    self.wheel.on_wheel(delta_y, now)
                }
            }
            SurfaceInput::FingerPressed(point) => {
                self.hub
                    .dispatch(&PointerEvent::touch_start(regions.target_at(point)));
                if stage.contains(point) {
                    self.swipe.touch_start(point, now);
                }
                None
            }
            SurfaceInput::FingerLifted(point) => self.swipe.touch_end(point, now),
            SurfaceInput::FingerLost => {
                self.swipe.touch_cancel();
                None
            }
        };

        if self.close_requested.replace(false) {
            return Some(Outcome::Close);
        }

        step.map(Outcome::Step)
    }
}

pub struct Surface<'a, M> {
    content: Element<'a, M>,
    regions: HitRegions,
    current_id: String,
    swipe: SwipeConfig,
    wheel: WheelConfig,
    on_next: Option<Box<dyn Fn(String) -> M + 'a>>,
    on_previous: Option<Box<dyn Fn(String) -> M + 'a>>,
    on_close: Option<M>,
}

impl<'a, M: Clone + 'a> Surface<'a, M> {
    pub fn new(
        content: impl Into<Element<'a, M>>,
        regions: &HitRegions,
        current_id: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            regions: regions.clone(),
            current_id: current_id.into(),
            swipe: SwipeConfig::default(),
            wheel: WheelConfig::default(),
            on_next: None,
            on_previous: None,
            on_close: None,
        }
    }

    pub fn swipe(mut self, swipe: SwipeConfig) -> Self {
        self.swipe = swipe;
        self
    }

    pub fn wheel(mut self, wheel: WheelConfig) -> Self {
        self.wheel = wheel;
        self
    }

    pub fn on_next<F>(mut self, f: F) -> Self
    where
        F: Fn(String) -> M + 'a,
    {
        self.on_next = Some(Box::new(f));
        self
    }

    pub fn on_previous<F>(mut self, f: F) -> Self
    where
        F: Fn(String) -> M + 'a,
    {
        self.on_previous = Some(Box::new(f));
        self
    }

    /// Arms click-outside dismissal.
    pub fn on_close(mut self, message: M) -> Self {
        self.on_close = Some(message);
        self
    }

    fn step_message(&self, step: Step) -> Option<M> {
        let factory = match step {
            Step::Next => self.on_next.as_ref(),
            Step::Previous => self.on_previous.as_ref(),
        }?;
        Some(factory(self.current_id.clone()))
    }
}

impl<'a, M: Clone + 'a> Widget<M, cosmic::Theme, Renderer> for Surface<'a, M> {
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<SurfaceState>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(SurfaceState::new(self.swipe, self.wheel))
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&mut self, tree: &mut Tree) {
        tree.diff_children(std::slice::from_mut(&mut self.content));
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(&self, tree: &mut Tree, renderer: &Renderer, limits: &Limits) -> Node {
        self.content
            .as_widget()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &cosmic::Theme,
        style: &iced_renderer::Style,
        layout: Layout<'_>,
        cursor: Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, M>,
        viewport: &Rectangle,
    ) -> Status {
        // Children first so the markers have recorded this frame's regions
        let status = self.content.as_widget_mut().on_event(
            &mut tree.children[0],
            event.clone(),
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );

        let state = tree.state.downcast_mut::<SurfaceState>();
        state.swipe.set_config(self.swipe);
        state.wheel.set_config(self.wheel);
        state.arm_outside_click(self.on_close.is_some());

        let Some(input) = SurfaceInput::from_event(&event, cursor) else {
            return status;
        };

        let outcome = state.handle(
            input,
            &self.regions,
            to_bounds(layout.bounds()),
            status == Status::Captured,
            Instant::now(),
        );

        match outcome {
            Some(Outcome::Close) => {
                if let Some(on_close) = &self.on_close {
                    shell.publish(on_close.clone());
                    return Status::Captured;
                }
            }
            Some(Outcome::Step(step)) => {
                if let Some(message) = self.step_message(step) {
                    tracing::debug!(?step, id = %self.current_id, "gesture navigation");
                    shell.publish(message);
                    return Status::Captured;
                }
            }
            None => {}
        }

        status
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        self.content
            .as_widget()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        translation: Vector,
    ) -> Option<overlay::Element<'b, M, cosmic::Theme, Renderer>> {
        self.content
            .as_widget_mut()
            .overlay(&mut tree.children[0], layout, renderer, translation)
    }
}

impl<'a, M: Clone + 'a> From<Surface<'a, M>> for Element<'a, M> {
    fn from(surface: Surface<'a, M>) -> Self {
        Element::new(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_replaces_by_mark() {
        let regions = HitRegions::new();
        regions.record(Mark::Container, Bounds::new(0.0, 0.0, 10.0, 10.0));
        regions.record(Mark::Container, Bounds::new(5.0, 5.0, 10.0, 10.0));
        regions.record(Mark::Stage, Bounds::new(0.0, 0.0, 100.0, 100.0));

        assert_eq!(regions.len(), 2);
        assert_eq!(
            regions.bounds_of(Mark::Container),
            Some(Bounds::new(5.0, 5.0, 10.0, 10.0))
        );
        assert_eq!(regions.bounds_of(Mark::Chrome(ChromeClass::Caption)), None);
    }

    #[test]
    fn test_classes_at_collects_chrome_only() {
        let regions = HitRegions::new();
        regions.record(Mark::Stage, Bounds::new(0.0, 0.0, 800.0, 600.0));
        regions.record(
            Mark::Chrome(ChromeClass::ThumbnailStrip),
            Bounds::new(0.0, 500.0, 800.0, 100.0),
        );
        regions.record(
            Mark::Chrome(ChromeClass::NextButton),
            Bounds::new(740.0, 250.0, 40.0, 40.0),
        );

        assert_eq!(
            regions.classes_at(Point::new(10.0, 550.0)),
            vec!["thumbnail-strip".to_string()]
        );
        assert_eq!(
            regions.target_at(Point::new(750.0, 260.0)).classes,
            vec!["next-button".to_string()]
        );
        assert!(regions.classes_at(Point::new(10.0, 10.0)).is_empty());
    }

    #[test]
    fn test_clones_share_regions() {
        let regions = HitRegions::new();
        let marker_side = regions.clone();
        marker_side.record(Mark::Container, Bounds::new(0.0, 0.0, 1.0, 1.0));
        assert!(!regions.is_empty());
    }

    #[test]
    fn test_button_mapping() {
        assert_eq!(pointer_button(mouse::Button::Left), PointerButton::Primary);
        assert_eq!(pointer_button(mouse::Button::Right), PointerButton::Secondary);
        assert_eq!(pointer_button(mouse::Button::Other(7)), PointerButton::Other(7));
    }

    #[test]
    fn test_outside_click_armed_with_close_message() {
        let mut state = SurfaceState::new(SwipeConfig::default(), WheelConfig::default());
        state.arm_outside_click(true);
        assert_eq!(state.hub.listener_count(), 2);

        // Re-arming keeps the single registration
        state.arm_outside_click(true);
        assert_eq!(state.hub.listener_count(), 2);

        state.sync_container(Some(Bounds::new(100.0, 100.0, 200.0, 200.0)));
        state.hub.dispatch(&PointerEvent::pointer_down(
            EventTarget::at(Point::new(5.0, 5.0)),
            PointerButton::Primary,
        ));
        assert!(state.close_requested.get());

        state.arm_outside_click(false);
        assert_eq!(state.hub.listener_count(), 0);
    }

    const SCREEN: Bounds = Bounds {
        x: 0.0,
        y: 0.0,
        width: 1000.0,
        height: 800.0,
    };

    /// Stage across the top, media in its middle, strip along the bottom.
    fn laid_out() -> HitRegions {
        let regions = HitRegions::new();
        regions.record(Mark::Stage, Bounds::new(0.0, 0.0, 1000.0, 600.0));
        regions.record(Mark::Container, Bounds::new(300.0, 100.0, 400.0, 300.0));
        regions.record(
            Mark::Chrome(ChromeClass::ThumbnailStrip),
            Bounds::new(0.0, 650.0, 1000.0, 100.0),
        );
        regions
    }

    fn armed() -> SurfaceState {
        let mut state = SurfaceState::new(SwipeConfig::default(), WheelConfig::default());
        state.arm_outside_click(true);
        state
    }

    fn click(x: f32, y: f32) -> SurfaceInput {
        SurfaceInput::PointerDown {
            position: Some(Point::new(x, y)),
            button: PointerButton::Primary,
        }
    }

    fn wheel_up(x: f32, y: f32) -> SurfaceInput {
        SurfaceInput::Wheel {
            position: Some(Point::new(x, y)),
            delta_y: 1.0,
        }
    }

    #[test]
    fn test_backdrop_click_closes() {
        let regions = laid_out();
        let mut state = armed();
        let now = Instant::now();

        assert_eq!(
            state.handle(click(100.0, 300.0), &regions, SCREEN, false, now),
            Some(Outcome::Close)
        );
        assert_eq!(
            state.handle(click(500.0, 200.0), &regions, SCREEN, false, now),
            None
        );
    }

    #[test]
    fn test_chrome_click_outside_container_does_not_close() {
        let regions = laid_out();
        let mut state = armed();

        let outcome = state.handle(click(50.0, 700.0), &regions, SCREEN, false, Instant::now());
        assert_eq!(outcome, None);
        assert!(!state.close_requested.get());
    }

    #[test]
    fn test_unarmed_surface_never_closes() {
        let regions = laid_out();
        let mut state = SurfaceState::new(SwipeConfig::default(), WheelConfig::default());

        let outcome = state.handle(click(100.0, 300.0), &regions, SCREEN, false, Instant::now());
        assert_eq!(outcome, None);
    }

    #[test]
    fn test_wheel_over_stage_navigates() {
        let regions = laid_out();
        let mut state = armed();

        let outcome = state.handle(wheel_up(500.0, 300.0), &regions, SCREEN, false, Instant::now());
        assert_eq!(outcome, Some(Outcome::Step(Step::Next)));
    }

    #[test]
    fn test_wheel_captured_by_child_does_not_navigate() {
        let regions = laid_out();
        let mut state = armed();
        let now = Instant::now();

        assert_eq!(
            state.handle(wheel_up(500.0, 300.0), &regions, SCREEN, true, now),
            None
        );
        // Off the stage (over the strip) stays put too
        assert_eq!(
            state.handle(wheel_up(500.0, 700.0), &regions, SCREEN, false, now),
            None
        );
        // Neither started a cooldown
        assert_eq!(
            state.handle(wheel_up(500.0, 300.0), &regions, SCREEN, false, now),
            Some(Outcome::Step(Step::Next))
        );
    }

    #[test]
    fn test_finger_outside_stage_does_not_start_swipe() {
        let regions = laid_out();
        let mut state = armed();
        let now = Instant::now();

        let press = SurfaceInput::FingerPressed(Point::new(900.0, 700.0));
        assert_eq!(state.handle(press, &regions, SCREEN, false, now), None);
        assert!(!state.swipe.is_tracking());

        let lift = SurfaceInput::FingerLifted(Point::new(500.0, 700.0));
        let later = now + std::time::Duration::from_millis(100);
        assert_eq!(state.handle(lift, &regions, SCREEN, false, later), None);
    }

    #[test]
    fn test_swipe_on_stage_navigates() {
        let regions = laid_out();
        let mut state = armed();
        let now = Instant::now();

        let press = SurfaceInput::FingerPressed(Point::new(800.0, 300.0));
        assert_eq!(state.handle(press, &regions, SCREEN, false, now), None);

        let lift = SurfaceInput::FingerLifted(Point::new(500.0, 300.0));
        let later = now + std::time::Duration::from_millis(100);
        assert_eq!(
            state.handle(lift, &regions, SCREEN, false, later),
            Some(Outcome::Step(Step::Next))
        );
    }

    #[test]
    fn test_lost_finger_cancels_swipe() {
        let regions = laid_out();
        let mut state = armed();
        let now = Instant::now();

        state.handle(
            SurfaceInput::FingerPressed(Point::new(800.0, 300.0)),
            &regions,
            SCREEN,
            false,
            now,
        );
        assert!(state.swipe.is_tracking());

        state.handle(SurfaceInput::FingerLost, &regions, SCREEN, false, now);
        assert!(!state.swipe.is_tracking());

        let lift = SurfaceInput::FingerLifted(Point::new(500.0, 300.0));
        let later = now + std::time::Duration::from_millis(100);
        assert_eq!(state.handle(lift, &regions, SCREEN, false, later), None);
    }

    #[test]
    fn test_pending_close_wins_over_step() {
        let regions = laid_out();
        let mut state = armed();
        state.close_requested.set(true);

        let outcome = state.handle(wheel_up(500.0, 300.0), &regions, SCREEN, false, Instant::now());
        assert_eq!(outcome, Some(Outcome::Close));
        assert!(!state.close_requested.get());
    }

    #[test]
    fn test_stage_falls_back_to_layout_bounds() {
        let regions = HitRegions::new();
        let mut state = armed();

        let outcome = state.handle(wheel_up(10.0, 10.0), &regions, SCREEN, false, Instant::now());
        assert_eq!(outcome, Some(Outcome::Step(Step::Next)));
    }

    #[test]
    fn test_input_from_iced_events() {
        let cursor = Cursor::Available(cosmic::iced::Point::new(4.0, 5.0));

        assert_eq!(
            SurfaceInput::from_event(
                &Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right)),
                cursor
            ),
            Some(SurfaceInput::PointerDown {
                position: Some(Point::new(4.0, 5.0)),
                button: PointerButton::Secondary,
            })
        );
        assert_eq!(
            SurfaceInput::from_event(
                &Event::Mouse(mouse::Event::WheelScrolled {
                    delta: ScrollDelta::Pixels { x: 0.0, y: -3.0 },
                }),
                Cursor::Unavailable
            ),
            Some(SurfaceInput::Wheel {
                position: None,
                delta_y: -3.0,
            })
        );
        assert_eq!(
            SurfaceInput::from_event(&Event::Mouse(mouse::Event::CursorLeft), cursor),
            None
        );
    }

    #[test]
    fn test_dropping_state_releases_listeners() {
        let mut state = SurfaceState::new(SwipeConfig::default(), WheelConfig::default());
        state.arm_outside_click(true);
        let hub = Rc::clone(&state.hub);

        drop(state);
        assert_eq!(hub.listener_count(), 0);
    }
}
