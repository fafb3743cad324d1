//! Language switcher.
//!
//! Language pills post the chosen code to the site's set-language endpoint
//! through a small form with a hidden input. Choosing a pill fills the input,
//! moves the active marker to that pill, and submits.

/// Languages offered by the site, `(code, name)`.
pub const LANGUAGES: &[(&str, &str)] = &[("en", "English"), ("uk", "Ukrainian")];

/// Form action for language changes.
pub const SET_LANGUAGE_URL: &str = "/i18n/setlang/";

/// Name of the hidden form field carrying the code.
pub const LANGUAGE_FIELD: &str = "language";

/// A `.lang-pill` button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangPill {
    /// `data-lang`, absent on malformed pills.
    pub lang: Option<String>,
    pub active: bool,
    pub aria_checked: Option<bool>,
}

impl LangPill {
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: Some(lang.into()),
            active: false,
            aria_checked: None,
        }
    }

    pub fn without_lang() -> Self {
        Self {
            lang: None,
            active: false,
            aria_checked: None,
        }
    }
}

/// The form the pills submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangForm {
    pub action: String,
    /// Value of the hidden input; `None` when the input is missing.
    pub input: Option<String>,
}

impl Default for LangForm {
    fn default() -> Self {
        Self {
            action: SET_LANGUAGE_URL.to_string(),
            input: Some(String::new()),
        }
    }
}

/// A form submission produced by choosing a language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangSubmission {
    pub action: String,
    pub language: String,
}

impl LangSubmission {
    /// Form fields in submission order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![(LANGUAGE_FIELD, self.language.as_str())]
    }
}

/// Pills plus the form they drive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LangSwitcher {
    pub pills: Vec<LangPill>,
    pub form: Option<LangForm>,
}

impl LangSwitcher {
    /// One pill per entry in `languages`, with `current` marked active.
    pub fn for_languages(languages: &[(&str, &str)], current: &str) -> Self {
        let pills = languages
            .iter()
            .map(|(code, _)| {
                let is_current = *code == current;
                LangPill {
                    lang: Some(code.to_string()),
                    active: is_current,
                    aria_checked: Some(is_current),
                }
            })
            .collect();
        Self {
            pills,
            form: Some(LangForm {
                action: SET_LANGUAGE_URL.to_string(),
                input: Some(current.to_string()),
            }),
        }
    }

    /// Whether clicks do anything: pills, form and input must all exist.
    pub fn is_ready(&self) -> bool {
        !self.pills.is_empty() && self.form.as_ref().is_some_and(|form| form.input.is_some())
    }

    /// Clicks the pill at `index`.
    ///
    /// Returns the submission, or `None` when the switcher is not ready, the
    /// index is out of range, or the pill has no language code.
    pub fn click(&mut self, index: usize) -> Option<LangSubmission> {
        if !self.is_ready() {
            return None;
        }
        let lang = self
            .pills
            .get(index)?
            .lang
            .clone()
            .filter(|lang| !lang.is_empty())?;

        let form = self.form.as_mut()?;
        form.input = Some(lang.clone());
        let action = form.action.clone();

        for (i, pill) in self.pills.iter_mut().enumerate() {
            let is_active = i == index;
            pill.active = is_active;
            pill.aria_checked = Some(is_active);
        }

        tracing::debug!(language = %lang, "submitting language change");
        Some(LangSubmission {
            action,
            language: lang,
        })
    }

    /// Codes of pills currently marked active.
    pub fn active(&self) -> Vec<&str> {
        self.pills
            .iter()
            .filter(|pill| pill.active)
            .filter_map(|pill| pill.lang.as_deref())
            .collect()
    }
}
