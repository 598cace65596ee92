//! Class tokens on the document root element.

use std::collections::BTreeSet;

use crate::error::{js_message, ThemeError};

pub trait RootClasses {
    fn add(&mut self, class: &str) -> Result<(), ThemeError>;
    fn remove(&mut self, class: &str) -> Result<(), ThemeError>;
}

/// `document.documentElement` (the `<html>` element).
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl DocumentRoot {
    fn class_list(&self) -> Result<web_sys::DomTokenList, ThemeError> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
            .map(|html| html.class_list())
            .ok_or(ThemeError::DocumentUnavailable)
    }
}

impl RootClasses for DocumentRoot {
    fn add(&mut self, class: &str) -> Result<(), ThemeError> {
        self.class_list()?
            .add_1(class)
            .map_err(|e| ThemeError::ClassList(js_message(e)))
    }

    fn remove(&mut self, class: &str) -> Result<(), ThemeError> {
        self.class_list()?
            .remove_1(class)
            .map_err(|e| ThemeError::ClassList(js_message(e)))
    }
}

/// An in-memory class list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet {
    classes: BTreeSet<String>,
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            classes: classes.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl RootClasses for ClassSet {
    fn add(&mut self, class: &str) -> Result<(), ThemeError> {
        self.classes.insert(class.to_string());
        Ok(())
    }

    fn remove(&mut self, class: &str) -> Result<(), ThemeError> {
        self.classes.remove(class);
        Ok(())
    }
}
