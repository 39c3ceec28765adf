// SPDX-License-Identifier: MPL-2.0
//! Zoomable view component encapsulating transform state and update logic.

use super::surface::PinchSurface;
use crate::config::{BackgroundTheme, GestureConfig};
use crate::error::Error;
use crate::gesture::{GestureInterpreter, PinchEvent, TransformSignal};
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::state::{ResetAnimation, ViewTransformState};
use crate::ui::theming::OverlayColors;
use iced::widget::{canvas, column, container, text, Stack};
use iced::{Border, Element, Length, Theme};
use std::time::{Duration, Instant};

/// Messages handled by the zoomable view.
#[derive(Debug, Clone)]
pub enum Message {
    /// Raw pinch event published by the surface.
    Pinch(PinchEvent),
    /// Animation frame while the view settles back to rest.
    AnimationFrame(Instant),
    ImageLoaded(Result<ImageData, Error>),
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Show an error notification with the given i18n key.
    ShowError { key: &'static str },
}

/// Where the view is in the gesture lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// A gesture is live and the anchor is locked.
    Active,
    /// The reset animation is running.
    Settling,
}

/// Environment information required to render the view.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub background_theme: BackgroundTheme,
    /// Effective dark mode, resolved once at startup.
    pub dark_mode: bool,
}

/// Complete zoomable view state.
#[derive(Debug)]
pub struct State {
    transform: ViewTransformState,
    interpreter: GestureInterpreter,
    reset: Option<ResetAnimation>,
    reset_duration: Duration,
    drag_sensitivity: f32,
    image: Option<ImageData>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(&GestureConfig::default())
    }
}

impl State {
    pub fn new(gesture: &GestureConfig) -> Self {
        Self {
            transform: ViewTransformState::default(),
            interpreter: GestureInterpreter::new(),
            reset: None,
            reset_duration: gesture.reset_duration(),
            drag_sensitivity: gesture.drag_sensitivity(),
            image: None,
        }
    }

    pub fn transform(&self) -> &ViewTransformState {
        &self.transform
    }

    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    pub fn set_image(&mut self, image: ImageData) {
        self.image = Some(image);
    }

    pub fn reset_duration(&self) -> Duration {
        self.reset_duration
    }

    pub fn phase(&self) -> Phase {
        if self.reset.is_some() {
            Phase::Settling
        } else if self.transform.is_anchor_locked {
            Phase::Active
        } else {
            Phase::Idle
        }
    }

    /// Whether animation frames are needed.
    pub fn is_animating(&self) -> bool {
        self.reset.is_some()
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::Pinch(event) => {
                if let Some(signal) = self.interpreter.on_pinch(&event) {
                    self.handle_signal(signal, event.state.is_live());
                }
                Effect::None
            }
            Message::AnimationFrame(now) => {
                self.tick(now);
                Effect::None
            }
            Message::ImageLoaded(Ok(image)) => {
                self.set_image(image);
                Effect::None
            }
            Message::ImageLoaded(Err(err)) => {
                log::error!("failed to load image: {err}");
                Effect::ShowError {
                    key: err.i18n_key(),
                }
            }
        }
    }

    /// Applies an interpreter signal at the current instant.
    pub fn handle_signal(&mut self, signal: TransformSignal, is_gesture_active: bool) {
        self.handle_signal_at(signal, is_gesture_active, Instant::now());
    }

    /// Applies an interpreter signal.
    ///
    /// A live signal is tracked 1:1 and preempts any running reset. A
    /// non-live signal starts the eased return to rest from wherever the
    /// transform currently is, unless a reset is already running.
    pub fn handle_signal_at(
        &mut self,
        signal: TransformSignal,
        is_gesture_active: bool,
        now: Instant,
    ) {
        if is_gesture_active {
            if self.reset.take().is_some() {
                log::debug!("reset animation preempted by new gesture");
            }
            self.transform.apply_live(signal);
            return;
        }

        if self.reset.is_some() {
            return;
        }

        if self.transform.is_at_rest() {
            self.reset = None;
            return;
        }

        log::debug!(
            "gesture ended at scale {:.3}, settling over {:?}",
            self.transform.scale,
            self.reset_duration
        );
        self.transform.is_anchor_locked = false;
        let animation = ResetAnimation::new(
            self.transform.scale,
            self.transform.anchor_point,
            now,
            self.reset_duration,
        );
        self.reset = Some(animation);
        self.tick(now);
    }

    /// Advances the reset animation to `now`.
    pub fn tick(&mut self, now: Instant) {
        let Some(animation) = self.reset else {
            return;
        };
        if animation.is_finished(now) {
            self.transform.settle();
            self.reset = None;
            log::debug!("view settled");
        } else {
            let (scale, anchor) = animation.sample(now);
            self.transform.apply_frame(scale, anchor);
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let surface = canvas(PinchSurface {
            image: self.image.as_ref(),
            transform: self.transform,
            background: env.background_theme,
            drag_sensitivity: self.drag_sensitivity,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let surface = container(surface)
            .width(Length::Fill)
            .height(Length::Fill)
            .clip(true);

        Stack::new()
            .push(surface)
            .push(self.info_overlay(&env))
            .into()
    }

    fn info_overlay<'a>(&self, env: &ViewEnv<'a>) -> Element<'a, Message> {
        let colors = OverlayColors::new(env.dark_mode);
        let percent = format!("{:.0}", self.transform.effective_scale() * 100.0);
        let readout = env
            .i18n
            .tr_with_args("zoom-readout", &[("percent", percent.as_str())]);
        let mut lines = column![text(readout).size(typography::BODY)].spacing(spacing::XXS);

        if let Some(anchor) = self.interpreter.locked_anchor() {
            let x = format!("{:.2}", anchor.x());
            let y = format!("{:.2}", anchor.y());
            lines = lines.push(
                text(env.i18n.tr_with_args("zoom-anchor", &[("x", x.as_str()), ("y", y.as_str())]))
                    .size(typography::CAPTION),
            );
        } else {
            lines = lines
                .push(text(env.i18n.tr("zoom-hint")).size(typography::CAPTION))
                .push(text(env.i18n.tr("zoom-hint-mouse")).size(typography::CAPTION));
        }

        let panel = container(lines)
            .padding(spacing::XS)
            .style(move |_theme: &Theme| container::Style {
                background: Some(colors.background.into()),
                text_color: Some(colors.text),
                border: Border {
                    radius: radius::SM.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            });

        container(panel)
            .padding(spacing::MD)
            .width(Length::Fill)
            .align_bottom(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::{GestureState, NormalizedPoint, SurfaceSize};
    use crate::test_utils::assert_abs_diff_eq;
    use iced::Point;

    const SURFACE: SurfaceSize = SurfaceSize {
        width: 100.0,
        height: 200.0,
    };

    fn pinch(state: GestureState, factor: f32, x: f32, y: f32) -> Message {
        Message::Pinch(PinchEvent::new(state, factor, Point::new(x, y), SURFACE))
    }

    fn live(scale_delta: f32, x: f32, y: f32) -> TransformSignal {
        TransformSignal {
            scale_delta,
            anchor: Some(NormalizedPoint::new(x, y)),
        }
    }

    #[test]
    fn new_view_is_idle_at_rest() {
        let state = State::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.transform().is_at_rest());
        assert!(!state.is_animating());
    }

    #[test]
    fn live_signal_is_applied_immediately() {
        let mut state = State::default();
        state.handle_signal(live(0.5, 0.2, 0.3), true);

        assert_eq!(state.phase(), Phase::Active);
        assert_abs_diff_eq!(state.transform().scale, 0.5);
        assert_eq!(state.transform().anchor_point, NormalizedPoint::new(0.2, 0.3));
        assert!(!state.is_animating());
    }

    #[test]
    fn ended_signal_settles_to_exact_rest_after_duration() {
        let mut state = State::default();
        let start = Instant::now();
        state.handle_signal_at(live(0.6, 1.0, 1.0), true, start);
        state.handle_signal_at(TransformSignal::RESET, false, start);

        assert_eq!(state.phase(), Phase::Settling);
        assert!(!state.transform().is_anchor_locked);
        assert_abs_diff_eq!(state.transform().scale, 0.6);

        let midway = start + state.reset_duration() / 2;
        state.update(Message::AnimationFrame(midway));
        let scale = state.transform().scale;
        assert!(scale > 0.0 && scale < 0.6, "mid-animation scale {scale}");

        state.update(Message::AnimationFrame(start + state.reset_duration()));
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.transform().scale, 0.0);
        assert_eq!(state.transform().anchor_point, NormalizedPoint::NEUTRAL);
        assert!(state.transform().is_at_rest());
    }

    #[test]
    fn reset_scale_decreases_monotonically() {
        let mut state = State::default();
        let start = Instant::now();
        state.handle_signal_at(live(0.8, 0.0, 0.0), true, start);
        state.handle_signal_at(TransformSignal::RESET, false, start);

        let mut previous = state.transform().scale;
        for step in 1..=10 {
            state.tick(start + state.reset_duration() * step / 10);
            let scale = state.transform().scale;
            assert!(scale <= previous, "scale rose at step {step}");
            previous = scale;
        }
        assert_eq!(previous, 0.0);
    }

    #[test]
    fn began_mid_reset_preempts_animation() {
        let mut state = State::default();
        let start = Instant::now();
        state.handle_signal_at(live(0.6, 1.0, 1.0), true, start);
        state.handle_signal_at(TransformSignal::RESET, false, start);
        state.tick(start + Duration::from_millis(100));
        assert!(state.is_animating());

        state.handle_signal_at(live(0.2, 0.1, 0.1), true, start + Duration::from_millis(120));
        assert!(!state.is_animating());
        assert_eq!(state.phase(), Phase::Active);
        assert_abs_diff_eq!(state.transform().scale, 0.2);
        assert_eq!(state.transform().anchor_point, NormalizedPoint::new(0.1, 0.1));

        // Stale frames after the preemption change nothing.
        state.tick(start + Duration::from_secs(5));
        assert_abs_diff_eq!(state.transform().scale, 0.2);
    }

    #[test]
    fn zero_duration_snaps_back_immediately() {
        let mut state = State::new(&GestureConfig {
            reset_duration_ms: Some(0),
            drag_sensitivity_px: None,
        });
        state.handle_signal(live(0.4, 0.5, 0.5), true);
        state.handle_signal(TransformSignal::RESET, false);

        assert!(!state.is_animating());
        assert!(state.transform().is_at_rest());
    }

    #[test]
    fn ending_at_rest_does_not_animate() {
        let mut state = State::default();
        state.handle_signal(TransformSignal::RESET, false);
        assert!(!state.is_animating());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn pinch_messages_drive_the_full_lifecycle() {
        let mut state = State::default();
        assert_eq!(state.update(pinch(GestureState::Began, 1.0, 0.0, 0.0)), Effect::None);
        state.update(pinch(GestureState::Changed, 1.5, 50.0, 100.0));

        assert_abs_diff_eq!(state.transform().scale, 0.5);
        assert_eq!(state.transform().anchor_point, NormalizedPoint::new(0.0, 0.0));

        let cancelled_at = Instant::now();
        state.update(pinch(GestureState::Cancelled, 1.5, 50.0, 100.0));
        assert_eq!(state.phase(), Phase::Settling);

        state.update(Message::AnimationFrame(
            cancelled_at + state.reset_duration() + Duration::from_millis(50),
        ));
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.transform().is_at_rest());
        assert_eq!(state.transform().anchor_point, NormalizedPoint::NEUTRAL);
    }

    #[test]
    fn repeated_end_does_not_restart_reset() {
        let mut state = State::default();
        let start = Instant::now();
        state.handle_signal_at(live(0.6, 1.0, 1.0), true, start);
        state.handle_signal_at(TransformSignal::RESET, false, start);
        state.tick(start + Duration::from_millis(200));
        let settling_scale = state.transform().scale;

        state.handle_signal_at(TransformSignal::RESET, false, start + Duration::from_millis(200));
        assert_abs_diff_eq!(state.transform().scale, settling_scale);

        // The reset still finishes on the original schedule.
        state.tick(start + state.reset_duration());
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.transform().is_at_rest());
    }

    #[test]
    fn degenerate_surface_leaves_state_untouched() {
        let mut state = State::default();
        state.update(pinch(GestureState::Began, 1.0, 10.0, 10.0));
        state.update(pinch(GestureState::Changed, 1.2, 10.0, 10.0));
        let before = *state.transform();

        let degenerate = PinchEvent::new(
            GestureState::Changed,
            2.0,
            Point::new(0.0, 0.0),
            SurfaceSize::new(0.0, 200.0),
        );
        state.update(Message::Pinch(degenerate));
        let ended_on_nothing = PinchEvent::new(
            GestureState::Ended,
            2.0,
            Point::new(0.0, 0.0),
            SurfaceSize::new(100.0, 0.0),
        );
        state.update(Message::Pinch(ended_on_nothing));

        assert_eq!(*state.transform(), before);
        assert_eq!(state.phase(), Phase::Active);
    }

    #[test]
    fn failed_image_load_reports_error_key() {
        let mut state = State::default();
        let effect = state.update(Message::ImageLoaded(Err(Error::Svg("bad".into()))));
        assert_eq!(
            effect,
            Effect::ShowError {
                key: "error-load-image-svg"
            }
        );
        assert!(state.image().is_none());
    }

    #[test]
    fn loaded_image_is_kept() {
        let mut state = State::default();
        let image = ImageData::from_rgba(2, 1, vec![0; 8]);
        state.update(Message::ImageLoaded(Ok(image)));
        assert_eq!(state.image().map(|image| image.width), Some(2));
    }
}
