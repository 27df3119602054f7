//! Engine: data ownership and public API driving the carousel per tick.
//!
//! `update(dt, inputs)` applies pointer events, then commands, then advances
//! the walk and autoplay timer lines, and finally rebuilds the per-item
//! placements. All mutation happens on the calling thread in that order, so
//! every operation observes the fully-settled index from the previous one.
//! Direct navigation calls between ticks accumulate their events; the next
//! `update()` drains them.

use crate::autoplay::Autoplay;
use crate::config::{CarouselConfig, Direction};
use crate::gesture::{GestureSession, SwipeIntent};
use crate::inputs::{Command, Inputs, PointerEvent};
use crate::layout;
use crate::nav::NavState;
use crate::outputs::{CarouselEvent, Outputs};
use crate::ring::{self, NeighborLayout};
use crate::walk::{self, Walk};

/// Carousel engine: owns navigation state, the input drivers, and the
/// in-flight walk. One instance per carousel.
#[derive(Debug)]
pub struct Engine {
    cfg: CarouselConfig,
    nav: NavState,
    walk: Option<Walk>,
    gesture: GestureSession,
    autoplay: Autoplay,
    /// Latest viewport width measurement supplied by the adapter.
    viewport: f32,
    layout: NeighborLayout,
    /// Events produced since the last tick, drained into outputs.
    pending_events: Vec<CarouselEvent>,
    outputs: Outputs,
}

impl Engine {
    /// Create an engine for `total` items. Out-of-range configuration values
    /// are normalized (and logged), never rejected; a zero-item carousel
    /// renders nothing and ignores navigation.
    pub fn new(total: usize, cfg: CarouselConfig) -> Self {
        let cfg = normalize(cfg, total);
        let nav = NavState::new(total, cfg.start_index);
        let autoplay = Autoplay::new(
            cfg.autoplay,
            cfg.autoplay_direction,
            cfg.autoplay_interval_ms,
            cfg.autoplay_hover_pause,
        );
        let layout = ring::compute_layout(
            nav.current_index,
            total,
            cfg.visible_count,
            cfg.bias,
            cfg.reverse,
        );
        Self {
            cfg,
            nav,
            walk: None,
            gesture: GestureSession::default(),
            autoplay,
            viewport: 0.0,
            layout,
            pending_events: Vec::new(),
            outputs: Outputs::default(),
        }
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.nav.current_index
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.nav.total
    }

    #[inline]
    pub fn config(&self) -> &CarouselConfig {
        &self.cfg
    }

    /// Neighbor layout for the current index.
    #[inline]
    pub fn neighbor_layout(&self) -> &NeighborLayout {
        &self.layout
    }

    #[inline]
    pub fn can_go_next(&self) -> bool {
        self.nav.can_go_next(self.cfg.looping, self.cfg.reverse)
    }

    #[inline]
    pub fn can_go_prev(&self) -> bool {
        self.nav.can_go_prev(self.cfg.looping, self.cfg.reverse)
    }

    /// True while a multi-step walk is in flight.
    #[inline]
    pub fn is_walking(&self) -> bool {
        self.walk.is_some()
    }

    /// Advance one slide in the configured direction. No-op at the terminal
    /// slide unless looping.
    pub fn next(&mut self) {
        if !self.can_go_next() {
            return;
        }
        let target = self.nav.next_target(self.cfg.reverse);
        self.step_to(target);
    }

    /// Step back one slide. No-op at the first slide unless looping.
    pub fn prev(&mut self) {
        if !self.can_go_prev() {
            return;
        }
        let target = self.nav.prev_target(self.cfg.reverse);
        self.step_to(target);
    }

    /// Walk to `index` through its intermediate neighbors. The target is
    /// clamped into range; a walk already in flight is replaced.
    pub fn go_to(&mut self, index: usize) {
        if self.nav.total == 0 {
            return;
        }
        let target = self.nav.clamp(index);
        if target == self.nav.current_index {
            return;
        }
        let steps = walk::plan_steps(
            self.nav.current_index,
            target,
            self.nav.total,
            self.cfg.looping,
            self.cfg.reverse,
            &self.layout,
        );
        self.walk = Walk::new(steps, self.cfg.animation_duration_ms);
        log::debug!(
            "walk planned: {} -> {} in {} steps",
            self.nav.current_index,
            target,
            steps.unsigned_abs()
        );
    }

    /// Jump to `index` immediately, without animation or events. Cancels any
    /// in-flight walk. Intended for programmatic initialization.
    pub fn jump_to(&mut self, index: usize) {
        if self.nav.total == 0 {
            return;
        }
        self.walk = None;
        self.nav.current_index = self.nav.clamp(index);
        self.refresh_layout();
    }

    /// Replace the whole configuration; the only way `total` changes.
    /// Cancels the in-flight walk, the pending autoplay countdown, and any
    /// open gesture session before applying, then re-clamps the index.
    pub fn set_config(&mut self, total: usize, cfg: CarouselConfig) {
        self.walk = None;
        self.gesture = GestureSession::default();
        self.cfg = normalize(cfg, total);
        self.autoplay = Autoplay::new(
            self.cfg.autoplay,
            self.cfg.autoplay_direction,
            self.cfg.autoplay_interval_ms,
            self.cfg.autoplay_hover_pause,
        );
        self.nav = NavState::new(total, self.nav.current_index);
        self.refresh_layout();
    }

    /// Step the carousel by `dt` seconds with the given inputs.
    pub fn update(&mut self, dt: f32, inputs: Inputs) -> &Outputs {
        self.outputs.clear();

        self.apply_pointer_events(inputs.pointer_events);
        self.apply_commands(inputs.commands);
        self.tick_walk(dt);
        self.tick_autoplay(dt);

        self.refresh_layout();
        self.outputs.placements = layout::compute_placements(
            self.nav.current_index,
            self.nav.total,
            &self.layout,
            &self.cfg,
        );
        self.outputs.slide_size = layout::slide_size(self.viewport, &self.cfg);
        self.outputs.events.append(&mut self.pending_events);
        &self.outputs
    }

    /// One single-slide transition with its full event sequence.
    fn step_to(&mut self, target: usize) {
        let previous = self.nav.current_index;
        if self.nav.is_last_slide(self.cfg.reverse) {
            self.pending_events
                .push(CarouselEvent::LastSlideReached { index: previous });
        }
        let target = self.nav.clamp(target);
        self.pending_events
            .push(CarouselEvent::BeforeSlideChange { index: target });
        self.nav.current_index = target;
        if target != previous {
            log::debug!("slide changed: {previous} -> {target}");
            self.pending_events
                .push(CarouselEvent::SlideChanged { index: target });
        }
        self.refresh_layout();
    }

    fn apply_pointer_events(&mut self, events: Vec<PointerEvent>) {
        for event in events {
            match event {
                PointerEvent::Down { x, y } => self.gesture.begin(x, y),
                PointerEvent::Move { x, y } => {
                    match self.gesture.update(x, y, self.cfg.swipe_threshold) {
                        Some(SwipeIntent::Next) => self.next(),
                        Some(SwipeIntent::Prev) => self.prev(),
                        None => {}
                    }
                }
                PointerEvent::Up => self.gesture.end(),
                PointerEvent::Enter => self.autoplay.pointer_enter(),
                PointerEvent::Leave => self.autoplay.pointer_leave(),
            }
        }
    }

    fn apply_commands(&mut self, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::Next => self.next(),
                Command::Prev => self.prev(),
                Command::GoTo { index } => self.go_to(index),
                Command::JumpTo { index } => self.jump_to(index),
                Command::SetViewport { width } => self.viewport = width.max(0.0),
            }
        }
    }

    /// Advance the in-flight walk, taking every step that came due.
    fn tick_walk(&mut self, dt: f32) {
        let Some(mut walk) = self.walk.take() else {
            return;
        };
        let forward = walk.forward();
        let fired = walk.advance(dt);
        for _ in 0..fired {
            if forward {
                self.next();
            } else {
                self.prev();
            }
        }
        if walk.in_flight() {
            self.walk = Some(walk);
        }
    }

    /// Advance the autoplay countdown; losing the ability to advance stops it
    /// for good (re-entry is configuration-driven).
    fn tick_autoplay(&mut self, dt: f32) {
        let can_advance = match self.autoplay.direction() {
            Direction::Ltr => self.can_go_next(),
            Direction::Rtl => self.can_go_prev(),
        };
        if !can_advance {
            self.autoplay.stop();
            return;
        }
        if self.autoplay.tick(dt) {
            match self.autoplay.direction() {
                Direction::Ltr => self.next(),
                Direction::Rtl => self.prev(),
            }
        }
    }

    fn refresh_layout(&mut self) {
        self.layout = ring::compute_layout(
            self.nav.current_index,
            self.nav.total,
            self.cfg.visible_count,
            self.cfg.bias,
            self.cfg.reverse,
        );
    }
}

/// Clamp out-of-range configuration values into the workable range.
/// The strict alternative is `CarouselConfig::validate_for`.
fn normalize(mut cfg: CarouselConfig, total: usize) -> CarouselConfig {
    if total > 0 && cfg.start_index >= total {
        log::warn!(
            "start_index {} out of range for {} items, clamping",
            cfg.start_index,
            total
        );
        cfg.start_index = total - 1;
    }
    if cfg.visible_count > total {
        cfg.visible_count = total;
    }
    if !cfg.swipe_threshold.is_finite() || cfg.swipe_threshold < 0.0 {
        log::warn!(
            "swipe_threshold {} unusable, falling back to 0",
            cfg.swipe_threshold
        );
        cfg.swipe_threshold = 0.0;
    }
    cfg
}
