//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::{
    dispatcher::InputDispatcher,
    location::Location,
    section::{SectionError, SectionList, SITE_SECTION_IDS},
    starfield::Starfield,
    transition::Navigator,
};
use crate::ui::{
    content::{self, SectionContent},
    layout::AppLayout,
    surface::TerminalSurface,
};

/// One star per this many cells of the landing section.
const CELLS_PER_STAR: usize = 40;

/// Top-level application state.
pub struct AppState {
    /// Current location hash.  Setting it is how navigation happens.
    pub location: Location,
    /// Transition state machine and frame driver.
    pub navigator: Navigator,
    /// Throttled gesture → direction mapping.
    pub dispatcher: InputDispatcher,
    /// Visual state the navigator mutates and the renderer reads.
    pub surface: TerminalSurface,
    /// Content for each section, in section order.
    pub contents: Vec<&'static SectionContent>,
    /// Landing-page background particles (`None` when disabled).
    pub starfield: Option<Starfield>,
    pub config: AppConfig,
    /// Highlighted entry while the mobile menu is open.
    pub menu_selected: usize,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Full terminal area, updated on resize.
    pub terminal_area: Rect,
}

impl AppState {
    /// Build the state for the site's sections.
    pub fn new(config: AppConfig, terminal_area: Rect) -> Result<Self, SectionError> {
        Self::with_sections(config, terminal_area, SITE_SECTION_IDS)
    }

    /// Build the state for `ids`, in order.
    ///
    /// Section ids without content are dropped (with a warning) rather than
    /// failing, so a misconfigured list just yields a shorter site.
    pub fn with_sections(
        config: AppConfig,
        terminal_area: Rect,
        ids: &[&str],
    ) -> Result<Self, SectionError> {
        let contents = content::resolve(ids);
        let sections = SectionList::new(contents.iter().map(|c| c.id))?;

        let layout = AppLayout::from_area(terminal_area, config.mobile_breakpoint_cols);
        let stage = layout.stage_area;
        let surface = TerminalSurface::new(sections.len(), stage.width, stage.height);
        let starfield = config.stars.then(|| {
            let count = usize::from(stage.width) * usize::from(stage.height) / CELLS_PER_STAR;
            Starfield::new(stage.width, stage.height, count)
        });

        Ok(Self {
            location: Location::default(),
            navigator: Navigator::new(sections, config.duration())
                .with_breakpoint(config.breakpoint_fraction),
            dispatcher: InputDispatcher::new(config.throttle()),
            surface,
            contents,
            starfield,
            config,
            menu_selected: 0,
            should_quit: false,
            status_message: None,
            terminal_area,
        })
    }

    pub fn layout(&self) -> AppLayout {
        AppLayout::from_area(self.terminal_area, self.config.mobile_breakpoint_cols)
    }

    pub fn sections(&self) -> &SectionList {
        self.navigator.sections()
    }

    /// Nav / menu labels, in section order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.contents.iter().map(|c| c.label).collect()
    }

    /// Set the location hash.  If it changed, run the transition.
    pub fn navigate(&mut self, fragment: &str) -> bool {
        if !self.location.set_hash(fragment) {
            return false;
        }
        self.run_transition();
        true
    }

    /// Force the location to `fragment` and run its transition even if the
    /// hash did not change.  Used once at startup.
    pub fn start_at(&mut self, fragment: &str) {
        self.location = Location::parse(fragment);
        self.run_transition();
    }

    fn run_transition(&mut self) {
        let hash = self.location.hash().to_string();
        self.navigator.handle_hash_change(&hash, &mut self.surface);
        self.status_message = None;
        if let Some(index) = self.surface.active_index() {
            self.menu_selected = index;
        }
        tracing::info!("navigated to {}", self.location.display());
    }

    /// Terminal resized: recompute the stage and reseed the starfield.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal_area = Rect::new(0, 0, width, height);
        let layout = self.layout();
        let stage = layout.stage_area;
        self.surface.resize(stage.width, stage.height);
        if !layout.mobile {
            self.surface.set_menu_open(false);
        }
        if let Some(field) = self.starfield.as_mut() {
            field.resize(stage.width, stage.height);
        }
    }
}
