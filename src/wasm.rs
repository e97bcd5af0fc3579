//! WebAssembly bindings for the page scripts.
//!
//! Each class owns one controller. Scripts forward DOM events (with
//! `performance.now()` where timing matters) and paint what comes back.
//!
//! ```js
//! const search = new SiteSearch();
//! fetch('/search.json')
//!     .then(r => r.text().then(body => search.loadResponse(r.status, body)))
//!     .catch(e => search.loadFailed(String(e)));
//! input.addEventListener('input', () => { results.innerHTML = search.input(input.value); });
//! ```
//!
//! The filter panel talks back through a plain object of callbacks. Missing
//! callbacks are skipped, so a page without, say, a clear button still works.

use js_sys::{Function, Reflect};
use serde::de::DeserializeOwned;
use serde_wasm_bindgen::{from_value, to_value};
use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::animate::{skill_width, CounterAnimation};
use crate::config::{PanelConfig, SearchConfig, SiteConfig};
use crate::panel::{FilterItem, FilterPanel, PanelView};
use crate::progress::{ArticleGeometry, ProgressTracker};
use crate::render::highlight;
use crate::search::SearchBox;
use crate::theme::{PreferenceStore, ThemeSwitch};
use crate::timer::Timestamp;

use std::time::Duration;

/// Read an optional config object, falling back to defaults.
fn config_from<T: DeserializeOwned + Default>(value: Option<JsValue>) -> Result<T, JsValue> {
    match value {
        Some(v) if !v.is_undefined() && !v.is_null() => {
            from_value(v).map_err(|e| JsValue::from_str(&e.to_string()))
        }
        _ => Ok(T::default()),
    }
}

/// Call `target[method](...args)` if it is a function. Failures are logged.
fn call_method(target: &JsValue, method: &str, args: &[JsValue]) -> Option<JsValue> {
    let value = Reflect::get(target, &JsValue::from_str(method)).ok()?;
    let func = value.dyn_ref::<Function>()?;
    let result = match args {
        [] => func.call0(target),
        [a] => func.call1(target, a),
        [a, b, ..] => func.call2(target, a, b),
    };
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(method, error = ?e, "page callback failed");
            None
        }
    }
}

fn optional_str(value: Option<&str>) -> JsValue {
    value.map(JsValue::from_str).unwrap_or(JsValue::NULL)
}

// ============================================================================
// Site search
// ============================================================================

#[wasm_bindgen]
pub struct SiteSearch {
    inner: SearchBox,
}

#[wasm_bindgen]
impl SiteSearch {
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<JsValue>) -> Result<SiteSearch, JsValue> {
        Ok(SiteSearch {
            inner: SearchBox::new(config_from::<SearchConfig>(config)?),
        })
    }

    /// Where to fetch the corpus from.
    #[wasm_bindgen(js_name = corpusPath)]
    pub fn corpus_path(&self) -> String {
        self.inner.config().corpus_path.clone()
    }

    /// Corpus response arrived. Returns HTML to paint, or `undefined` to
    /// leave the results region alone.
    #[wasm_bindgen(js_name = loadResponse)]
    pub fn load_response(&mut self, status: u16, body: &str) -> Option<String> {
        self.inner.load_response(status, body).map(|view| view.to_html())
    }

    /// The corpus fetch failed before a response arrived.
    #[wasm_bindgen(js_name = loadFailed)]
    pub fn load_failed(&mut self, reason: &str) -> Option<String> {
        self.inner.load_failed(reason).map(|view| view.to_html())
    }

    #[wasm_bindgen(js_name = isReady)]
    pub fn is_ready(&self) -> bool {
        self.inner.index().is_some()
    }

    /// The input changed. Returns the results region HTML.
    pub fn input(&mut self, value: &str) -> String {
        self.inner.input(value).to_html()
    }

    /// Same as `input`, but returns the view as a tagged object.
    #[wasm_bindgen(js_name = inputView)]
    pub fn input_view(&mut self, value: &str) -> Result<JsValue, JsValue> {
        let view = self.inner.input(value);
        to_value(&view).map_err(|e| e.to_string().into())
    }

    pub fn escape(&mut self) -> String {
        self.inner.escape().to_html()
    }

    /// Whether the results container should carry `has-results`.
    #[wasm_bindgen(js_name = hasResults)]
    pub fn has_results(&self) -> bool {
        self.inner.has_results()
    }
}

// ============================================================================
// Post filter panel
// ============================================================================

/// Forwards panel effects to a JS object of callbacks.
struct JsPanelView {
    target: JsValue,
}

impl JsPanelView {
    fn call(&self, method: &str, args: &[JsValue]) {
        call_method(&self.target, method, args);
    }
}

impl PanelView for JsPanelView {
    fn set_item_visible(&mut self, index: usize, visible: bool) {
        self.call(
            "setItemVisible",
            &[JsValue::from_f64(index as f64), JsValue::from_bool(visible)],
        );
    }

    fn mark_active_filter(&mut self, filter: &str) {
        self.call("markActiveFilter", &[JsValue::from_str(filter)]);
    }

    fn show_active_filter(&mut self, filter: Option<&str>) {
        self.call("showActiveFilter", &[optional_str(filter)]);
    }

    fn set_searching(&mut self, searching: bool) {
        self.call("setSearching", &[JsValue::from_bool(searching)]);
    }

    fn show_results_count(&mut self, html: Option<&str>) {
        self.call("showResultsCount", &[optional_str(html)]);
    }

    fn show_no_results(&mut self, html: Option<&str>) {
        self.call("showNoResults", &[optional_str(html)]);
    }

    fn set_more_filters_open(&mut self, open: bool) {
        self.call("setMoreFiltersOpen", &[JsValue::from_bool(open)]);
    }

    fn clear_search_input(&mut self) {
        self.call("clearSearchInput", &[]);
    }

    fn scroll_to_list(&mut self, offset: u32) {
        self.call("scrollToList", &[JsValue::from_f64(f64::from(offset))]);
    }

    fn focus_search(&mut self) {
        self.call("focusSearch", &[]);
    }
}

#[wasm_bindgen]
pub struct PostFilter {
    panel: FilterPanel<JsPanelView>,
}

#[wasm_bindgen]
impl PostFilter {
    /// `items` is an array of `{tags, title, excerpt}` read from the page.
    #[wasm_bindgen(constructor)]
    pub fn new(items: JsValue, view: JsValue, config: Option<JsValue>) -> Result<PostFilter, JsValue> {
        let items: Vec<FilterItem> = from_value(items).map_err(|e| e.to_string())?;
        let config = config_from::<PanelConfig>(config)?;
        Ok(PostFilter {
            panel: FilterPanel::new(items, JsPanelView { target: view }, config),
        })
    }

    #[wasm_bindgen(js_name = filterClick)]
    pub fn filter_click(&mut self, filter: &str) {
        self.panel.filter_click(filter);
    }

    #[wasm_bindgen(js_name = applyFilter)]
    pub fn apply_filter(&mut self, filter: &str) -> bool {
        self.panel.apply_filter(filter)
    }

    #[wasm_bindgen(js_name = clearFilter)]
    pub fn clear_filter(&mut self) {
        self.panel.clear_filter();
    }

    /// Returns the time the pending search will be due, for `setTimeout`.
    #[wasm_bindgen(js_name = searchInput)]
    pub fn search_input(&mut self, value: &str, now: f64) -> f64 {
        self.panel.search_input(value, Timestamp::from_js(now)).as_millis() as f64
    }

    pub fn tick(&mut self, now: f64) -> bool {
        self.panel.tick(Timestamp::from_js(now))
    }

    #[wasm_bindgen(js_name = clearSearch)]
    pub fn clear_search(&mut self) {
        self.panel.clear_search();
    }

    pub fn escape(&mut self) {
        self.panel.escape();
    }

    #[wasm_bindgen(js_name = toggleMoreFilters)]
    pub fn toggle_more_filters(&mut self) {
        self.panel.toggle_more_filters();
    }

    #[wasm_bindgen(js_name = outsideClick)]
    pub fn outside_click(&mut self) {
        self.panel.outside_click();
    }

    #[wasm_bindgen(js_name = focusShortcut)]
    pub fn focus_shortcut(&mut self) {
        self.panel.focus_shortcut();
    }

    #[wasm_bindgen(js_name = isSearching)]
    pub fn is_searching(&self) -> bool {
        self.panel.is_searching()
    }

    #[wasm_bindgen(js_name = currentFilter)]
    pub fn current_filter(&self) -> String {
        self.panel.current_filter().to_string()
    }

    #[wasm_bindgen(js_name = visibleCount)]
    pub fn visible_count(&self) -> usize {
        self.panel.visible_count()
    }
}

// ============================================================================
// Theme
// ============================================================================

/// `localStorage`-shaped object: `getItem`, `setItem`, `removeItem`.
struct JsStorage {
    target: JsValue,
}

impl PreferenceStore for JsStorage {
    fn get(&self, key: &str) -> Option<String> {
        call_method(&self.target, "getItem", &[JsValue::from_str(key)])?.as_string()
    }

    fn set(&mut self, key: &str, value: &str) {
        call_method(
            &self.target,
            "setItem",
            &[JsValue::from_str(key), JsValue::from_str(value)],
        );
    }

    fn remove(&mut self, key: &str) {
        call_method(&self.target, "removeItem", &[JsValue::from_str(key)]);
    }
}

#[wasm_bindgen]
pub struct ThemeToggle {
    switch: ThemeSwitch<JsStorage>,
}

#[wasm_bindgen]
impl ThemeToggle {
    #[wasm_bindgen(constructor)]
    pub fn new(storage: JsValue, os_prefers_dark: bool) -> ThemeToggle {
        ThemeToggle {
            switch: ThemeSwitch::new(JsStorage { target: storage }, os_prefers_dark),
        }
    }

    /// The `data-theme` value to apply.
    pub fn theme(&self) -> String {
        self.switch.applied().as_str().to_string()
    }

    #[wasm_bindgen(js_name = ariaLabel)]
    pub fn aria_label(&self) -> String {
        self.switch.applied().aria_label().to_string()
    }

    pub fn toggle(&mut self) -> String {
        self.switch.toggle().as_str().to_string()
    }

    #[wasm_bindgen(js_name = osPreferenceChanged)]
    pub fn os_preference_changed(&mut self, prefers_dark: bool) -> String {
        self.switch.os_preference_changed(prefers_dark).as_str().to_string()
    }

    #[wasm_bindgen(js_name = clearPreference)]
    pub fn clear_preference(&mut self) -> String {
        self.switch.clear_preference().as_str().to_string()
    }
}

// ============================================================================
// Reading progress and animations
// ============================================================================

#[wasm_bindgen]
pub struct ReadingProgress {
    tracker: ProgressTracker,
}

#[wasm_bindgen]
impl ReadingProgress {
    #[wasm_bindgen(constructor)]
    pub fn new(interval_ms: Option<u32>) -> ReadingProgress {
        let interval = match interval_ms {
            Some(ms) => Duration::from_millis(u64::from(ms)),
            None => SiteConfig::default().progress_interval(),
        };
        ReadingProgress {
            tracker: ProgressTracker::new(interval),
        }
    }

    /// Returns the bar width in percent, or `undefined` when throttled.
    #[wasm_bindgen(js_name = onScroll)]
    pub fn on_scroll(
        &mut self,
        now: f64,
        scroll_top: f64,
        article_top: f64,
        article_height: f64,
        viewport_height: f64,
    ) -> Option<f64> {
        let geometry = ArticleGeometry {
            scroll_top,
            article_top,
            article_height,
            viewport_height,
        };
        self.tracker
            .on_scroll(Timestamp::from_js(now), &geometry)
            .map(|progress| progress * 100.0)
    }

    #[wasm_bindgen(js_name = onResize)]
    pub fn on_resize(
        &mut self,
        scroll_top: f64,
        article_top: f64,
        article_height: f64,
        viewport_height: f64,
    ) -> f64 {
        let geometry = ArticleGeometry {
            scroll_top,
            article_top,
            article_height,
            viewport_height,
        };
        self.tracker.on_resize(&geometry) * 100.0
    }
}

/// Every frame of a stat counter, one per 16 ms.
#[wasm_bindgen(js_name = counterFrames)]
pub fn counter_frames(target: u32, duration_ms: Option<u32>) -> Vec<u32> {
    let duration = match duration_ms {
        Some(ms) => Duration::from_millis(u64::from(ms)),
        None => SiteConfig::default().counter_duration(),
    };
    CounterAnimation::new(u64::from(target), duration)
        .map(|value| value as u32)
        .collect()
}

#[wasm_bindgen(js_name = skillWidth)]
pub fn skill_width_js(data_width: &str) -> Option<f64> {
    skill_width(data_width)
}

#[wasm_bindgen(js_name = highlight)]
pub fn highlight_js(text: &str, query: &str) -> String {
    highlight(text, query)
}
