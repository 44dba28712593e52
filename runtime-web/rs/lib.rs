#![cfg(target_arch = "wasm32")]

mod logging;
mod utils;

use topicsort_sort::{DomContainer, ListContainer, ListSorter, SortOrder, SorterConfig};
use tracing::Level;
use wasm_bindgen::prelude::*;
use web_sys::Element;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Installs the panic hook and console logging. `log_level` is one of
/// `error`, `warn`, `info`, `debug` or `trace` and defaults to `info`.
#[wasm_bindgen]
pub fn init(log_level: Option<String>) -> Result<(), JsError> {
    utils::set_panic_hook();
    let level = match log_level {
        Some(level) => level.parse::<Level>()?,
        None => Level::INFO,
    };
    logging::init(level);
    Ok(())
}

fn run<C: ListContainer>(
    config: &SorterConfig,
    container: &mut C,
    order: SortOrder,
) -> Result<(), JsError> {
    ListSorter::new(config.count_policy).sort(container, order)?;
    Ok(())
}

fn run_in_document(config: &SorterConfig, order: SortOrder) -> Result<(), JsError> {
    let mut container = DomContainer::from_document(config)?;
    run(config, &mut container, order)
}

/// Sorts `.topic-list` items by their text.
#[wasm_bindgen(js_name = sortAlpha)]
pub fn sort_alpha() -> Result<(), JsError> {
    run_in_document(&SorterConfig::default(), SortOrder::Alphabetical)
}

/// Sorts `.topic-list` items by their `.til-tag-count`, highest first.
#[wasm_bindgen(js_name = sortCount)]
pub fn sort_count() -> Result<(), JsError> {
    run_in_document(&SorterConfig::default(), SortOrder::CountDescending)
}

#[wasm_bindgen]
pub fn sort(order: &str) -> Result<(), JsError> {
    run_in_document(&SorterConfig::default(), order.parse()?)
}

/// A sorter with its own selectors and count policy.
#[wasm_bindgen]
pub struct TopicSorter {
    config: SorterConfig,
}

#[wasm_bindgen]
impl TopicSorter {
    /// `config` is a JSON object; omitted fields keep their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<TopicSorter, JsError> {
        let config = match config {
            Some(json) => SorterConfig::from_json(&json)?,
            None => SorterConfig::default(),
        };
        Ok(Self { config })
    }

    #[wasm_bindgen(getter)]
    pub fn config(&self) -> Result<String, JsError> {
        Ok(self.config.to_json()?)
    }

    #[wasm_bindgen(js_name = sortAlpha)]
    pub fn sort_alpha(&self) -> Result<(), JsError> {
        run_in_document(&self.config, SortOrder::Alphabetical)
    }

    #[wasm_bindgen(js_name = sortCount)]
    pub fn sort_count(&self) -> Result<(), JsError> {
        run_in_document(&self.config, SortOrder::CountDescending)
    }

    pub fn sort(&self, order: &str) -> Result<(), JsError> {
        run_in_document(&self.config, order.parse()?)
    }

    /// Sorts the items of `element` directly, skipping the container lookup.
    #[wasm_bindgen(js_name = sortElement)]
    pub fn sort_element(&self, element: Element, order: &str) -> Result<(), JsError> {
        let mut container = DomContainer::from_element(element, &self.config);
        run(&self.config, &mut container, order.parse()?)
    }
}
