use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// What "all" means for a multi-select. Chosen by the caller, not inferred.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SelectAllBehavior {
    /// Empty selection stands for every option; "select all" clears.
    #[default]
    Clear,
    /// Every option has to be picked; "select all" toggles all/none.
    Select,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionDisplay<'a> {
    All(&'a str),
    Items(Vec<&'a str>),
    Placeholder(&'a str),
}

#[derive(Debug, Clone)]
pub struct MultiSelect {
    options: Vec<SelectOption>,
    selected: Vec<String>,
    behavior: SelectAllBehavior,
    all_label: String,
    placeholder: String,
}

impl MultiSelect {
    pub fn new(options: Vec<SelectOption>, behavior: SelectAllBehavior) -> Self {
        Self {
            options,
            selected: Vec::new(),
            behavior,
            all_label: "All".to_string(),
            placeholder: "Select...".to_string(),
        }
    }

    pub fn with_all_label(mut self, label: impl Into<String>) -> Self {
        self.all_label = label.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_selected(mut self, selected: Vec<String>) -> Self {
        self.selected = selected;
        self
    }

    pub fn behavior(&self) -> SelectAllBehavior {
        self.behavior
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|v| v == value)
    }

    pub fn is_all_selected(&self) -> bool {
        match self.behavior {
            SelectAllBehavior::Clear => self.selected.is_empty(),
            SelectAllBehavior::Select => self.selected.len() == self.options.len(),
        }
    }

    /// Adds `value` if absent, otherwise removes it. New picks go to the end.
    pub fn toggle(&mut self, value: &str) {
        if self.is_selected(value) {
            self.remove(value);
        } else {
            self.selected.push(value.to_string());
        }
    }

    pub fn remove(&mut self, value: &str) {
        self.selected.retain(|v| v != value);
    }

    pub fn select_all(&mut self) {
        match self.behavior {
            SelectAllBehavior::Clear => self.selected.clear(),
            SelectAllBehavior::Select if self.is_all_selected() => self.selected.clear(),
            SelectAllBehavior::Select => {
                self.selected = self.options.iter().map(|o| o.value.clone()).collect();
            }
        }
    }

    /// Selected labels follow option order, not pick order.
    pub fn display(&self) -> SelectionDisplay<'_> {
        if self.is_all_selected() {
            return SelectionDisplay::All(&self.all_label);
        }

        let labels: Vec<&str> = self
            .options
            .iter()
            .filter(|o| self.is_selected(&o.value))
            .map(|o| o.label.as_str())
            .collect();

        if labels.is_empty() {
            SelectionDisplay::Placeholder(&self.placeholder)
        } else {
            SelectionDisplay::Items(labels)
        }
    }

    pub fn into_selected(self) -> Vec<String> {
        self.selected
    }
}
