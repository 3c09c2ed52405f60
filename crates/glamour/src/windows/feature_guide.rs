//! Searchable list of plugin features under a features banner.

use glamour_ui::{DrawSurface, InputState, Key, Rect, Theme, Vec2};
use serde::{Deserialize, Serialize};

use super::FeaturesBanner;
use crate::config::GlamourConfig;

const PADDING: f32 = 12.0;
const HEADING_SIZE: f32 = 15.0;
const BODY_SIZE: f32 = 13.0;

/// One feature shown in the guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureEntry {
    /// Grouping label.
    pub category: String,
    /// Feature name.
    pub title: String,
    /// Short explanation.
    pub description: String,
}

impl FeatureEntry {
    /// Creates an entry.
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        [&self.title, &self.description, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Feature guide window.
#[derive(Debug)]
pub struct FeatureGuide {
    entries: Vec<FeatureEntry>,
    line_height: f32,
    query: String,
    open: bool,
    theme: Theme,
    banner: FeaturesBanner,
}

impl FeatureGuide {
    /// Creates a closed guide with entries from `config.guide`.
    #[must_use]
    pub fn new(config: &GlamourConfig) -> Self {
        Self::with_banner(config, FeaturesBanner::new(config))
    }

    /// Creates a closed guide around an existing banner.
    #[must_use]
    pub fn with_banner(config: &GlamourConfig, banner: FeaturesBanner) -> Self {
        Self {
            entries: config.guide.entries.clone(),
            line_height: config.guide.line_height,
            query: String::new(),
            open: false,
            theme: Theme::default(),
            banner,
        }
    }

    /// Opens the guide and restarts the banner.
    pub fn open(&mut self) {
        if !self.open {
            self.open = true;
            self.banner.show();
            tracing::debug!(entries = self.entries.len(), "feature guide opened");
        }
    }

    /// Closes the guide.
    pub fn close(&mut self) {
        self.open = false;
        self.banner.hide();
    }

    /// Whether the guide is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The banner at the top of the guide.
    #[must_use]
    pub fn banner(&self) -> &FeaturesBanner {
        &self.banner
    }

    /// Current search text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the search text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Entries matching the query, in configured order.
    #[must_use]
    pub fn matches(&self) -> Vec<&FeatureEntry> {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return self.entries.iter().collect();
        }
        self.entries.iter().filter(|entry| entry.matches(&needle)).collect()
    }

    /// Applies this frame's typing to the search box.
    pub fn handle_input(&mut self, input: &InputState) {
        if input.key_pressed(Key::Escape) {
            self.query.clear();
            return;
        }
        if input.key_pressed(Key::Backspace) {
            self.query.pop();
        }
        self.query
            .extend(input.text_input.chars().filter(|c| !c.is_control()));
    }

    /// Handles input and draws one frame into `area`. Returns whether the
    /// guide is open.
    pub fn draw<S: DrawSurface + ?Sized>(
        &mut self,
        area: Rect,
        input: &InputState,
        frame_dt: f32,
        surface: &mut S,
    ) -> bool {
        if !self.open {
            return false;
        }
        self.handle_input(input);

        surface.fill_rect(area, self.theme.background);
        let banner_height = self.banner.draw(area, frame_dt, surface);

        let left = area.x + PADDING;
        let mut y = area.y + banner_height + PADDING;
        surface.text(
            Vec2::new(left, y),
            self.theme.text,
            BODY_SIZE,
            &format!("Search: {}", self.query),
        );
        y += self.line_height + PADDING * 0.5;

        let matches = self.matches();
        if matches.is_empty() {
            surface.text(
                Vec2::new(left, y),
                self.theme.text_muted,
                BODY_SIZE,
                &format!("No features match \"{}\"", self.query.trim()),
            );
            return true;
        }

        let entry_height = self.line_height * 2.0 + PADDING * 0.5;
        for entry in matches {
            if y + entry_height > area.bottom() {
                break;
            }
            surface.text(
                Vec2::new(left, y),
                self.theme.accent,
                HEADING_SIZE,
                &format!("{} · {}", entry.category, entry.title),
            );
            surface.text(
                Vec2::new(left, y + self.line_height),
                self.theme.text_muted,
                BODY_SIZE,
                &entry.description,
            );
            y += entry_height;
        }

        true
    }
}
