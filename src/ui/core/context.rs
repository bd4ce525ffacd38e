use crate::board::stats::local_now;
use crate::config::{Config, DisplayConfig};
use crate::icons::IconService;
use crate::theme::{Palette, Theme};
use chrono::{NaiveDate, NaiveDateTime};

/// Everything a view needs to draw besides its own data
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub theme: Theme,
    pub palette: Palette,
    pub icons: IconService,
    pub display: DisplayConfig,
    pub max_card_tags: usize,
    pub now: NaiveDateTime,
}

impl ViewContext {
    #[must_use]
    pub fn new(config: &Config, theme: Theme) -> Self {
        Self {
            theme,
            palette: theme.palette(),
            icons: IconService::new(config.ui.icon_theme),
            display: config.display.clone(),
            max_card_tags: config.ui.max_card_tags,
            now: local_now(),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.palette = theme.palette();
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }
}

impl Default for ViewContext {
    fn default() -> Self {
        Self::new(&Config::default(), Theme::default())
    }
}
