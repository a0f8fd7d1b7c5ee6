//! raylib front end: window, input polling, lazy texture loading and drawing.
//!
//! All decisions about what input means live in [`crate::input`]; this module
//! only samples the window once per frame and feeds the results through.

mod slide;
mod texture_loader;

use std::time::Duration;

use anyhow::{Context, Result};
use raylib::prelude::*;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::constants::*;
use crate::debounce::Debouncer;
use crate::deck::{Activate, SlideDeck};
use crate::gesture::{Hover, HoverTracker};
use crate::input::{Action, Dispatcher, Event, Key};
use crate::lazy::LazyLoader;
use crate::library::SlideSource;
use crate::prefs::{Preferences, PrefsStore};
use crate::scroll::{follow_offset, ScrollAnimation, ScrollWatcher};
use crate::search::{suggest, SearchKey, SearchOutcome, SuggestionList};
use crate::share::{self, Clipboard};
use crate::theme::{Rgb, Theme};
use crate::ticker::Ticker;

use slide::{Dot, Slide};
use texture_loader::load_texture_with_exif_rotation;

const STRIP_MARGIN: f32 = 40.0;
const STRIP_HEIGHT: f32 = 60.0;
const FONT_SIZE: i32 = 20;
const TICKER_TOP: f32 = 40.0;
const TICKER_HEIGHT: f32 = 26.0;
const TICKER_GAP: f32 = 80.0;

pub(crate) fn color(rgb: Rgb) -> Color {
    Color::new(rgb.0, rgb.1, rgb.2, 255)
}

// raylib's default font is roughly this wide per glyph.
fn text_width(text: &str, size: i32) -> f32 {
    text.chars().count() as f32 * size as f32 * 0.55
}

fn ticker_band(screen_width: f32) -> Rectangle {
    Rectangle::new(0.0, TICKER_TOP, screen_width, TICKER_HEIGHT)
}

fn contains(rect: Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

struct WindowClipboard<'a>(&'a mut RaylibHandle);

impl Clipboard for WindowClipboard<'_> {
    fn write_text(&mut self, text: &str) -> Result<(), String> {
        self.0.set_clipboard_text(text).map_err(|e| e.to_string())
    }
}

#[derive(Default)]
struct SearchBox {
    open: bool,
    query: String,
    debounce: Option<Debouncer<String>>,
    list: SuggestionList,
}

impl SearchBox {
    fn open(&mut self) {
        self.open = true;
        self.query.clear();
        self.list.hide();
    }

    fn close(&mut self) {
        self.open = false;
        self.list.hide();
        if let Some(debounce) = self.debounce.as_mut() {
            debounce.cancel();
        }
    }

    fn query_changed(&mut self) {
        self.debounce
            .get_or_insert_with(|| Debouncer::new(SEARCH_DEBOUNCE))
            .call(self.query.clone());
    }
}

/// Indicator strip geometry. Scrolls when the dots outgrow the window.
#[derive(Default)]
struct Strip {
    offset: f32,
    scroll: Option<ScrollAnimation>,
    watcher: ScrollWatcher,
}

impl Strip {
    fn content_width(count: usize) -> f32 {
        count as f32 * DOT_SPACING
    }

    fn viewport(screen_width: f32) -> f32 {
        (screen_width - 2.0 * STRIP_MARGIN).max(DOT_SPACING)
    }

    fn dot_center(&self, index: usize, count: usize, screen: Vector2) -> Vector2 {
        let content = Self::content_width(count);
        let viewport = Self::viewport(screen.x);
        let start = if content <= viewport {
            (screen.x - content) / 2.0
        } else {
            STRIP_MARGIN - self.offset
        };
        Vector2::new(
            start + index as f32 * DOT_SPACING + DOT_SPACING / 2.0,
            screen.y - DOT_MARGIN_BOTTOM,
        )
    }

    fn is_in_view(x: f32, screen_width: f32) -> bool {
        x >= STRIP_MARGIN - DOT_RADIUS && x <= screen_width - STRIP_MARGIN + DOT_RADIUS
    }

    fn scroll_to_start(&mut self) {
        self.scroll = Some(ScrollAnimation::to_start(self.offset));
    }

    fn update(&mut self, frame: Duration, active: usize, count: usize, screen_width: f32) {
        let content = Self::content_width(count);
        let viewport = Self::viewport(screen_width);
        if content <= viewport {
            self.offset = 0.0;
            self.scroll = None;
            return;
        }

        if let Some(scroll) = self.scroll.as_mut() {
            self.offset = scroll.advance(frame);
            if scroll.is_finished() {
                self.scroll = None;
            }
            return;
        }

        let start = active as f32 * DOT_SPACING;
        let target = follow_offset(self.offset, start, start + DOT_SPACING, viewport)
            .clamp(0.0, content - viewport);
        if (target - self.offset).abs() > 0.5 {
            self.scroll = Some(ScrollAnimation::new(self.offset, target, SCROLL_DURATION / 2));
        }
    }
}

struct Viewer {
    deck: SlideDeck<Slide, Dot>,
    dispatcher: Dispatcher,
    loader: LazyLoader,
    lazy_margin: usize,
    hover: HoverTracker,
    pointer_down: bool,
    search: SearchBox,
    strip: Strip,
    ticker: Ticker,
    ticker_text: String,
    ticker_hover: HoverTracker,
    ticker_pressed: bool,
    theme: Theme,
    prefs: Preferences,
    store: PrefsStore,
    quit: bool,
}

impl Viewer {
    fn new(config: &Config, sources: Vec<SlideSource>) -> Result<Self> {
        let dots: Vec<Dot> = sources.iter().map(|_| Dot::default()).collect();
        let ticker_text = sources
            .iter()
            .map(|s| s.caption.as_str())
            .collect::<Vec<_>>()
            .join("  |  ");
        let slides: Vec<Slide> = sources.into_iter().map(Slide::new).collect();
        let loader = LazyLoader::new(slides.len(), config.lazy_margin);
        let deck = SlideDeck::with_interval(slides, dots, config.interval)
            .context("failed to build slide deck")?;

        let store = config.prefs.clone();
        let prefs = store.load_or_default();
        let theme = config.theme.unwrap_or(prefs.theme);
        info!(theme = %theme, prefs = %store.path().display(), "theme selected");

        Ok(Self {
            deck,
            dispatcher: Dispatcher::new(config.swipe_threshold),
            loader,
            lazy_margin: config.lazy_margin,
            hover: HoverTracker::default(),
            pointer_down: false,
            search: SearchBox::default(),
            strip: Strip::default(),
            ticker: Ticker::default(),
            ticker_text,
            ticker_hover: HoverTracker::default(),
            ticker_pressed: false,
            theme,
            prefs,
            store,
            quit: false,
        })
    }

    fn dispatch(&mut self, event: Event) {
        if self.dispatcher.handle(&mut self.deck, event) == Action::ScrolledToStart {
            self.strip.scroll_to_start();
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.prefs.theme = self.theme;
        if let Err(e) = self.store.save(&self.prefs) {
            warn!(error = %e, "theme preference not saved");
        }
        info!(theme = %self.theme, "theme toggled");
    }

    fn share_active(&self, rl: &mut RaylibHandle) {
        let Some(slide) = self.deck.active_slide() else {
            return;
        };
        let mut clipboard = WindowClipboard(rl);
        share::share(Some(&mut clipboard), &slide.source.caption, &slide.source.path);
    }

    fn hovered_dot(&self, mouse: Vector2, screen: Vector2) -> Option<usize> {
        let count = self.deck.len();
        (0..count).find(|&i| {
            let center = self.strip.dot_center(i, count, screen);
            Strip::is_in_view(center.x, screen.x)
                && center.distance_to(mouse) <= DOT_RADIUS + 4.0
        })
    }

    fn handle_input(&mut self, rl: &mut RaylibHandle) {
        if let Some(edge) = self.hover.update(rl.is_cursor_on_screen()) {
            self.dispatch(match edge {
                Hover::Enter => Event::PointerEnter,
                Hover::Leave => Event::PointerLeave,
            });
        }

        if self.search.open {
            self.handle_search_input(rl);
        } else {
            self.handle_key_input(rl);
        }

        let screen = Vector2::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        let mouse = rl.get_mouse_position();
        let over_ticker = rl.is_cursor_on_screen() && contains(ticker_band(screen.x), mouse);
        if let Some(edge) = self.ticker_hover.update(over_ticker) {
            self.ticker.set_hovered(edge == Hover::Enter);
        }

        if self.ticker_pressed && rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            self.ticker_pressed = false;
            self.ticker.release();
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) && over_ticker {
            self.ticker_pressed = true;
            self.ticker.press();
        } else if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            match self.hovered_dot(mouse, screen) {
                Some(index) => self.dispatch(Event::IndicatorClicked(index)),
                None => {
                    self.pointer_down = true;
                    self.dispatch(Event::PointerDown { x: mouse.x });
                }
            }
        }
        if self.pointer_down && rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            self.pointer_down = false;
            self.dispatch(Event::PointerUp { x: mouse.x });
        }
    }

    fn handle_key_input(&mut self, rl: &mut RaylibHandle) {
        const KEYS: [(KeyboardKey, Key); 5] = [
            (KeyboardKey::KEY_RIGHT, Key::Right),
            (KeyboardKey::KEY_LEFT, Key::Left),
            (KeyboardKey::KEY_ESCAPE, Key::Escape),
            (KeyboardKey::KEY_SPACE, Key::Space),
            (KeyboardKey::KEY_HOME, Key::Home),
        ];
        for (raw, key) in KEYS {
            if rl.is_key_pressed(raw) {
                self.dispatch(Event::Key(key));
            }
        }

        if rl.is_key_pressed(KeyboardKey::KEY_T) {
            self.toggle_theme();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_S) {
            self.share_active(rl);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_Q) {
            self.quit = true;
        }
        if rl.is_key_pressed(KeyboardKey::KEY_SLASH) {
            self.search.open();
            // The slash itself is queued as a typed character.
            while rl.get_char_pressed().is_some() {}
        }
    }

    fn handle_search_input(&mut self, rl: &mut RaylibHandle) {
        let mut changed = false;
        while let Some(c) = rl.get_char_pressed() {
            if !c.is_control() {
                self.search.query.push(c);
                changed = true;
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_BACKSPACE) && self.search.query.pop().is_some() {
            changed = true;
        }
        if changed {
            self.search.query_changed();
        }

        const KEYS: [(KeyboardKey, SearchKey); 4] = [
            (KeyboardKey::KEY_DOWN, SearchKey::Down),
            (KeyboardKey::KEY_UP, SearchKey::Up),
            (KeyboardKey::KEY_ENTER, SearchKey::Enter),
            (KeyboardKey::KEY_ESCAPE, SearchKey::Escape),
        ];
        for (raw, key) in KEYS {
            if !rl.is_key_pressed(raw) {
                continue;
            }
            if !self.search.list.is_visible() && matches!(key, SearchKey::Escape | SearchKey::Enter) {
                self.search.close();
                continue;
            }
            match self.search.list.handle_key(key) {
                SearchOutcome::Selected(index) => {
                    if let Err(e) = self.deck.go_to(index) {
                        warn!(error = %e, "search result no longer in deck");
                    }
                    self.search.close();
                }
                SearchOutcome::Hidden | SearchOutcome::None => {}
            }
        }
    }

    fn load_due(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        for index in self.loader.due(self.deck.index()) {
            let slide = &mut self.deck.slides_mut()[index];
            match load_texture_with_exif_rotation(rl, thread, &slide.source.path) {
                Ok(texture) => {
                    slide.set_texture(texture);
                    self.loader.mark_loaded(index);
                }
                Err(e) => {
                    warn!(error = %e, "skipping slide");
                    slide.set_failed();
                    self.loader.mark_failed(index);
                }
            }
        }

        // One extra slide of slack so stepping back and forth does not reload.
        let keep = self.lazy_margin + 1;
        for index in self.loader.evict(self.deck.index(), keep) {
            let slide = &mut self.deck.slides_mut()[index];
            if slide.is_visible() {
                // Still fading out after a jump; try again next frame.
                self.loader.mark_loaded(index);
            } else {
                slide.release_texture();
                debug!(index, "texture released");
            }
        }
    }

    fn update(&mut self, dt: f32, screen_width: f32) {
        let frame = Duration::from_secs_f32(dt.max(0.0));

        if self.deck.tick(frame) {
            debug!(index = self.deck.index(), "auto-advanced");
        }
        for slide in self.deck.slides_mut() {
            slide.update(dt);
        }

        if let Some(query) = self.search.debounce.as_mut().and_then(|d| d.advance(frame)) {
            let captions: Vec<&str> = self
                .deck
                .slides()
                .iter()
                .map(|s| s.source.caption.as_str())
                .collect();
            self.search.list.show(suggest(&query, captions.as_slice()));
        }

        self.strip
            .update(frame, self.deck.index(), self.deck.len(), screen_width);
        self.strip.watcher.observe(self.strip.offset, frame);

        let cycle = text_width(&self.ticker_text, FONT_SIZE - 4) + TICKER_GAP;
        self.ticker.advance(frame, cycle);
    }

    fn draw(&self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let screen = Vector2::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        let mouse = rl.get_mouse_position();
        let palette = self.theme.palette();
        let hovered = self.hovered_dot(mouse, screen);

        let mut d = rl.begin_drawing(thread);
        d.clear_background(color(palette.background));

        let area = Rectangle::new(0.0, 0.0, screen.x, screen.y - STRIP_HEIGHT);
        for slide in self.deck.slides() {
            slide.draw(&mut d, area, &palette);
        }

        self.draw_ticker(&mut d, screen);
        self.draw_strip(&mut d, screen, hovered);
        self.draw_status(&mut d, screen);
        if self.search.open {
            self.draw_search(&mut d, screen);
        }
    }

    fn draw_strip(&self, d: &mut RaylibDrawHandle, screen: Vector2, hovered: Option<usize>) {
        let palette = self.theme.palette();
        let count = self.deck.len();

        for (i, dot) in self.deck.indicators().iter().enumerate() {
            let center = self.strip.dot_center(i, count, screen);
            if !Strip::is_in_view(center.x, screen.x) {
                continue;
            }
            let fill = if dot.is_active() { palette.accent } else { palette.muted };
            d.draw_circle_v(center, DOT_RADIUS, color(fill));
        }

        if let Some(i) = hovered {
            let caption = &self.deck.slides()[i].source.caption;
            let center = self.strip.dot_center(i, count, screen);
            let width = text_width(caption, FONT_SIZE - 4) + 16.0;
            let x = (center.x - width / 2.0).clamp(4.0, (screen.x - width - 4.0).max(4.0));
            let y = center.y - DOT_RADIUS - 36.0;
            d.draw_rectangle_rec(Rectangle::new(x, y, width, 26.0), color(palette.foreground));
            d.draw_text(caption, (x + 8.0) as i32, (y + 5.0) as i32, FONT_SIZE - 4, color(palette.background));
        }

        if self.strip.watcher.show_back() {
            d.draw_text("< Home", 6, (screen.y - DOT_MARGIN_BOTTOM - 8.0) as i32, FONT_SIZE - 4, color(palette.foreground));
        }
    }

    fn draw_ticker(&self, d: &mut RaylibDrawHandle, screen: Vector2) {
        if self.ticker_text.is_empty() {
            return;
        }
        let palette = self.theme.palette();
        d.draw_rectangle_rec(ticker_band(screen.x), color(palette.muted));

        let cycle = text_width(&self.ticker_text, FONT_SIZE - 4) + TICKER_GAP;
        let mut x = -self.ticker.offset();
        while x < screen.x {
            d.draw_text(&self.ticker_text, x as i32, (TICKER_TOP + 5.0) as i32, FONT_SIZE - 4, color(palette.foreground));
            x += cycle;
        }
    }

    fn draw_status(&self, d: &mut RaylibDrawHandle, screen: Vector2) {
        let palette = self.theme.palette();
        let fg = color(palette.foreground);

        let mut status = format!("{} / {}", self.deck.index() + 1, self.deck.len());
        if self.deck.is_paused() {
            status.push_str("  (paused)");
        }
        d.draw_text(&status, 12, 10, FONT_SIZE, fg);

        let toggle = format!("[T] {}", self.theme.icon());
        let x = screen.x - text_width(&toggle, FONT_SIZE) - 12.0;
        d.draw_text(&toggle, x as i32, 10, FONT_SIZE, fg);
    }

    fn draw_search(&self, d: &mut RaylibDrawHandle, screen: Vector2) {
        let palette = self.theme.palette();
        let width = (screen.x * 0.5).max(240.0);
        let x = (screen.x - width) / 2.0;
        let mut y = TICKER_TOP + TICKER_HEIGHT + 8.0;

        d.draw_rectangle_rec(Rectangle::new(x, y, width, 32.0), color(palette.foreground));
        d.draw_text(&format!("/{}", self.search.query), (x + 8.0) as i32, (y + 6.0) as i32, FONT_SIZE, color(palette.background));
        y += 32.0;

        if !self.search.list.is_visible() {
            return;
        }
        for (row, &slide) in self.search.list.items().iter().enumerate() {
            let fill = if self.search.list.highlighted() == Some(row) { palette.accent } else { palette.muted };
            d.draw_rectangle_rec(Rectangle::new(x, y, width, 28.0), color(fill));
            d.draw_text(
                &self.deck.slides()[slide].source.caption,
                (x + 8.0) as i32,
                (y + 5.0) as i32,
                FONT_SIZE - 2,
                color(palette.foreground),
            );
            y += 28.0;
        }
    }
}

/// Open the window and run until it is closed.
pub fn run(config: Config, sources: Vec<SlideSource>) -> Result<()> {
    let (width, height) = config.window;
    let (mut rl, thread) = raylib::init()
        .size(width, height)
        .title("Slidedeck")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape pauses the deck; Q quits.
    rl.set_exit_key(None);

    // Declared after the window so textures are released before it closes.
    let mut viewer = Viewer::new(&config, sources)?;

    info!(slides = viewer.deck.len(), "slideshow started");
    while !rl.window_should_close() && !viewer.quit {
        let dt = rl.get_frame_time();
        let screen_width = rl.get_screen_width() as f32;

        viewer.handle_input(&mut rl);
        viewer.load_due(&mut rl, &thread);
        viewer.update(dt, screen_width);
        viewer.draw(&mut rl, &thread);
    }
    info!("slideshow closed");
    Ok(())
}
