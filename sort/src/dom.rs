use crate::{Error, Item, ListContainer, Result, SorterConfig};
use std::rc::Rc;
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Document, Element};

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

fn invalid_selector(selector: &str, value: JsValue) -> Error {
    Error::InvalidSelector {
        selector: selector.into(),
        message: js_message(&value),
    }
}

pub fn document() -> Result<Document> {
    window()
        .and_then(|window| window.document())
        .ok_or(Error::NoDocument)
}

/// A list element in the live document.
#[derive(Debug, Clone)]
pub struct DomContainer {
    element: Element,
    item_selector: String,
    count_selector: Rc<str>,
}

impl DomContainer {
    /// Finds the first element matching `config.container_selector`.
    pub fn query(document: &Document, config: &SorterConfig) -> Result<Self> {
        let selector = &config.container_selector;
        let element = document
            .query_selector(selector)
            .map_err(|e| invalid_selector(selector, e))?
            .ok_or_else(|| Error::ContainerNotFound {
                selector: selector.clone(),
            })?;
        debug!(%selector, "found container");
        Ok(Self::from_element(element, config))
    }

    /// Same as [`DomContainer::query`] against the global document.
    pub fn from_document(config: &SorterConfig) -> Result<Self> {
        Self::query(&document()?, config)
    }

    pub fn from_element(element: Element, config: &SorterConfig) -> Self {
        Self {
            element,
            item_selector: config.item_selector.clone(),
            count_selector: config.count_selector.as_str().into(),
        }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl ListContainer for DomContainer {
    type Item = DomItem;

    fn items(&self) -> Result<Vec<DomItem>> {
        let nodes = self
            .element
            .query_selector_all(&self.item_selector)
            .map_err(|e| invalid_selector(&self.item_selector, e))?;
        Ok((0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| DomItem {
                element,
                count_selector: self.count_selector.clone(),
            })
            .collect())
    }

    fn set_items(&mut self, items: Vec<DomItem>) -> Result<()> {
        for item in items {
            self.element
                .append_child(&item.element)
                .map_err(|e| Error::Dom(js_message(&e)))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct DomItem {
    element: Element,
    count_selector: Rc<str>,
}

impl DomItem {
    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl Item for DomItem {
    fn text(&self) -> Option<String> {
        self.element.text_content()
    }

    fn count_label(&self) -> Result<Option<String>> {
        let label = self
            .element
            .query_selector(&self.count_selector)
            .map_err(|e| invalid_selector(&self.count_selector, e))?;
        Ok(label.and_then(|label| label.text_content()))
    }
}
