//! Achievement popup: a queued toast that slides in from the top of the
//! viewport and celebrates with a particle burst around its icon.

use std::collections::VecDeque;

use glamour_effects::{EffectsConfig, ParticleField, Timestep};
use glamour_ui::{DrawSurface, InputState, Key, MouseButton, Rect, Theme, Transition, Vec2};

use crate::config::{GlamourConfig, PopupConfig};

const PADDING: f32 = 18.0;
const ACCENT_WIDTH: f32 = 4.0;
const TIMER_HEIGHT: f32 = 2.0;
const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 13.0;

/// An unlocked achievement waiting to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    /// Headline.
    pub title: String,
    /// One-line description.
    pub description: String,
    /// Host icon id, resolved by the host's icon provider.
    pub icon_id: Option<u32>,
}

impl Achievement {
    /// Creates an achievement without an icon.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon_id: None,
        }
    }

    /// Attaches a host icon id.
    #[must_use]
    pub fn with_icon(mut self, icon_id: u32) -> Self {
        self.icon_id = Some(icon_id);
        self
    }
}

/// Why the popup went away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Display time ran out.
    Timeout,
    /// Left click inside the popup.
    Clicked,
    /// Escape pressed.
    Escape,
}

#[derive(Debug)]
struct Showing {
    achievement: Achievement,
    elapsed: f32,
}

/// Queue of achievements shown one at a time.
#[derive(Debug)]
pub struct AchievementPopup {
    config: PopupConfig,
    timestep: Timestep,
    burst_count: usize,
    theme: Theme,
    queue: VecDeque<Achievement>,
    showing: Option<Showing>,
    slide: Transition,
    particles: ParticleField,
    last_close: Option<CloseReason>,
}

impl AchievementPopup {
    /// Creates a popup seeded from `config.effects.seed`.
    #[must_use]
    pub fn new(config: &GlamourConfig) -> Self {
        let particles = ParticleField::from_config(config.effects.burst_kind(), &config.effects);
        Self::with_field(config, particles)
    }

    /// Creates a popup whose burst sequence is fixed by `seed`.
    #[must_use]
    pub fn with_seed(config: &GlamourConfig, seed: u64) -> Self {
        let particles = ParticleField::seeded(config.effects.burst_kind(), &config.effects, seed);
        Self::with_field(config, particles)
    }

    fn with_field(config: &GlamourConfig, particles: ParticleField) -> Self {
        let EffectsConfig { timestep, burst, .. } = &config.effects;
        Self {
            config: config.popup.clone(),
            timestep: *timestep,
            burst_count: burst.count,
            theme: Theme::default(),
            queue: VecDeque::new(),
            showing: None,
            slide: Transition::resting(0.0, config.popup.slide_seconds),
            particles,
            last_close: None,
        }
    }

    /// Queues an achievement behind any already waiting.
    pub fn enqueue(&mut self, achievement: Achievement) {
        tracing::debug!(title = %achievement.title, queued = self.queue.len() + 1, "achievement queued");
        self.queue.push_back(achievement);
    }

    /// Achievements waiting behind the current one.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// True while an achievement is on screen.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.showing.is_some()
    }

    /// The achievement currently shown.
    #[must_use]
    pub fn current(&self) -> Option<&Achievement> {
        self.showing.as_ref().map(|showing| &showing.achievement)
    }

    /// Seconds the current achievement has been shown.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.showing.as_ref().map_or(0.0, |showing| showing.elapsed)
    }

    /// Why the previous achievement closed.
    #[must_use]
    pub fn last_close(&self) -> Option<CloseReason> {
        self.last_close
    }

    /// The burst field.
    #[must_use]
    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    /// Popup bounds inside `viewport` at the current slide position.
    #[must_use]
    pub fn bounds(&self, viewport: Rect) -> Rect {
        let rest = self.rest_bounds(viewport);
        let hidden_offset = rest.bottom() - viewport.y;
        rest.translate(Vec2::new(0.0, -(1.0 - self.slide.value()) * hidden_offset))
    }

    fn rest_bounds(&self, viewport: Rect) -> Rect {
        let width = self.config.width.min(viewport.width);
        Rect::new(
            viewport.center().x - width * 0.5,
            viewport.y + self.config.top_margin,
            width,
            self.config.height,
        )
    }

    fn icon_bounds(&self, bounds: Rect) -> Rect {
        let size = self.config.icon_size.min(bounds.height);
        Rect::new(
            bounds.x + PADDING,
            bounds.y + (bounds.height - size) * 0.5,
            size,
            size,
        )
    }

    /// Advances, draws and handles dismissal for one frame.
    ///
    /// Opens the next queued achievement if nothing is shown. Returns whether
    /// the popup is open after this frame.
    pub fn draw<S: DrawSurface + ?Sized>(
        &mut self,
        viewport: Rect,
        input: &InputState,
        frame_dt: f32,
        surface: &mut S,
    ) -> bool {
        if self.showing.is_none() && !self.open_next(viewport) {
            return false;
        }

        let dt = self.timestep.resolve(frame_dt);
        self.slide.update(dt);
        let bounds = self.bounds(viewport);

        if let Some(reason) = self.dismissal(input, bounds, dt) {
            self.close(reason);
            return false;
        }

        self.draw_chrome(bounds, surface);
        self.particles.advance(dt);
        self.particles.render(surface);
        true
    }

    fn open_next(&mut self, viewport: Rect) -> bool {
        let Some(achievement) = self.queue.pop_front() else {
            return false;
        };

        self.particles.clear();
        self.slide.restart(0.0, 1.0);

        // Particles live in screen space and outlast the slide, so aim at
        // where the icon comes to rest rather than where it starts.
        let origin = self.icon_bounds(self.rest_bounds(viewport)).center();
        self.particles
            .spawn_burst(origin, self.burst_count, &self.theme.celebration);

        tracing::info!(
            title = %achievement.title,
            icon_id = ?achievement.icon_id,
            pending = self.queue.len(),
            "achievement popup opened"
        );
        self.showing = Some(Showing {
            achievement,
            elapsed: 0.0,
        });
        true
    }

    fn dismissal(&mut self, input: &InputState, bounds: Rect, dt: f32) -> Option<CloseReason> {
        if input.key_pressed(Key::Escape) {
            return Some(CloseReason::Escape);
        }
        if input.clicked_inside(MouseButton::Left, bounds) {
            return Some(CloseReason::Clicked);
        }

        let showing = self.showing.as_mut()?;
        showing.elapsed += dt;
        (showing.elapsed >= self.config.display_seconds).then_some(CloseReason::Timeout)
    }

    fn close(&mut self, reason: CloseReason) {
        if let Some(showing) = self.showing.take() {
            tracing::info!(title = %showing.achievement.title, ?reason, "achievement popup closed");
        }
        self.last_close = Some(reason);
    }

    fn draw_chrome<S: DrawSurface + ?Sized>(&self, bounds: Rect, surface: &mut S) {
        let Some(showing) = &self.showing else {
            return;
        };
        let fade = self.slide.value();
        let theme = &self.theme;

        surface.fill_rect(bounds, theme.background.scale_alpha(fade));
        surface.fill_rect(
            Rect::new(bounds.x, bounds.y, ACCENT_WIDTH, bounds.height),
            theme.accent.scale_alpha(fade),
        );

        let icon = self.icon_bounds(bounds);
        surface.fill_rect(icon, theme.border.scale_alpha(fade));
        surface.fill_rect(icon.shrink(2.0), theme.background.scale_alpha(fade));

        let text_x = icon.right() + PADDING * 0.75;
        surface.text(
            Vec2::new(text_x, bounds.y + PADDING),
            theme.accent.scale_alpha(fade),
            TITLE_SIZE,
            &showing.achievement.title,
        );
        surface.text(
            Vec2::new(text_x, bounds.y + PADDING + TITLE_SIZE + 6.0),
            theme.text_muted.scale_alpha(fade),
            BODY_SIZE,
            &showing.achievement.description,
        );

        let remaining = (1.0 - showing.elapsed / self.config.display_seconds).clamp(0.0, 1.0);
        surface.fill_rect(
            Rect::new(
                bounds.x,
                bounds.bottom() - TIMER_HEIGHT,
                bounds.width * remaining,
                TIMER_HEIGHT,
            ),
            theme.accent.scale_alpha(fade * 0.6),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glamour_ui::UIRenderer;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1280.0, 720.0)
    }

    #[test]
    fn test_hidden_with_empty_queue() {
        let mut popup = AchievementPopup::with_seed(&GlamourConfig::default(), 1);
        let mut surface = UIRenderer::new();

        assert!(!popup.draw(viewport(), &InputState::new(), 0.016, &mut surface));
        assert_eq!(surface.command_count(), 0);
    }

    #[test]
    fn test_slides_down_to_rest() {
        let mut popup = AchievementPopup::with_seed(&GlamourConfig::default(), 1);
        popup.enqueue(Achievement::new("First", "Opened the plugin"));
        let mut surface = UIRenderer::new();
        let input = InputState::new();

        popup.draw(viewport(), &input, 0.016, &mut surface);
        let early = popup.bounds(viewport());
        for _ in 0..120 {
            popup.draw(viewport(), &input, 0.016, &mut surface);
        }
        let settled = popup.bounds(viewport());

        assert!(early.y < settled.y);
        assert!((settled.y - 48.0).abs() < 0.5);
        assert!((settled.center().x - 640.0).abs() < 0.01);
    }

    #[test]
    fn test_width_clamped_to_viewport() {
        let popup = AchievementPopup::with_seed(&GlamourConfig::default(), 1);
        let narrow = Rect::new(0.0, 0.0, 200.0, 400.0);

        assert!((popup.rest_bounds(narrow).width - 200.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_burst_centred_on_settled_icon() {
        let config = GlamourConfig::default();
        let mut popup = AchievementPopup::with_seed(&config, 3);
        popup.enqueue(Achievement::new("Icon", "Burst origin").with_icon(61_001));
        let input = InputState::new();
        let mut surface = UIRenderer::new();

        assert!(popup.draw(viewport(), &input, Timestep::SOURCE_DT, &mut surface));
        let settled_icon = popup.icon_bounds(popup.rest_bounds(viewport())).center();
        let sliding_icon = popup.icon_bounds(popup.bounds(viewport())).center();
        assert!(sliding_icon.y < settled_icon.y - 1.0, "still sliding after one frame");

        // One frame of motion (at most 160 px/s) on top of the spawn jitter
        let reach = config.effects.burst.jitter + 160.0 * Timestep::SOURCE_DT;
        for particle in popup.particles().particles() {
            assert!((particle.position.x - settled_icon.x).abs() <= reach);
            assert!((particle.position.y - settled_icon.y).abs() <= reach);
        }

        for _ in 0..60 {
            popup.draw(viewport(), &input, Timestep::SOURCE_DT, &mut surface);
        }
        let icon_now = popup.icon_bounds(popup.bounds(viewport())).center();
        assert!((icon_now.y - settled_icon.y).abs() < f32::EPSILON);
    }
}
