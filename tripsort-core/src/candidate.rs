//! Candidate options surfaced by search collaborators.
//!
//! A [`Candidate`] carries the raw attributes a scraping or API collaborator
//! extracted for one result, plus the derived sub-scores a scoring engine
//! records on it. Raw attributes are set by the caller; derived fields are
//! only ever written through the engine-facing methods.

use std::collections::BTreeMap;

use thiserror::Error;

/// One candidate result in any search domain.
///
/// Numeric attributes (`price`, `rating`, `duration_hours`, ...) feed
/// normalisation; categorical attributes (`airline`, `brand`, `cuisine`,
/// ...) feed reputation lookup. Both maps are free-form: upstream
/// collaborators frequently return incomplete data, so absence is never an
/// error here.
///
/// # Examples
/// ```
/// use tripsort_core::Candidate;
///
/// let candidate = Candidate::new("Old Mill Inn")
///     .with_numeric("price", 90.0)
///     .with_category("brand", "Hyatt");
///
/// assert_eq!(candidate.numeric("price"), Some(90.0));
/// assert_eq!(candidate.category("brand"), Some("Hyatt"));
/// assert!(candidate.overall().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    numeric: BTreeMap<String, f32>,
    #[cfg_attr(feature = "serde", serde(default))]
    categorical: BTreeMap<String, String>,
    #[cfg_attr(feature = "serde", serde(default))]
    subscores: BTreeMap<String, f32>,
    #[cfg_attr(feature = "serde", serde(default))]
    overall: Option<f32>,
}

/// Errors raised when validating a candidate record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CandidateError {
    /// The identity field was empty or whitespace.
    #[error("candidate must have a non-empty name")]
    MissingName,
}

impl Candidate {
    /// Construct a candidate with no attributes.
    ///
    /// # Examples
    /// ```
    /// use tripsort_core::Candidate;
    ///
    /// let candidate = Candidate::new("Aurora Bistro");
    /// assert_eq!(candidate.name(), "Aurora Bistro");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            numeric: BTreeMap::new(),
            categorical: BTreeMap::new(),
            subscores: BTreeMap::new(),
            overall: None,
        }
    }

    /// Return the candidate's identity.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check the candidate carries a usable identity.
    ///
    /// # Errors
    /// Returns [`CandidateError::MissingName`] when the name is empty or
    /// whitespace.
    pub fn validate(&self) -> Result<(), CandidateError> {
        if self.name.trim().is_empty() {
            return Err(CandidateError::MissingName);
        }
        Ok(())
    }

    /// Insert or update a numeric attribute.
    pub fn set_numeric(&mut self, key: impl Into<String>, value: f32) {
        self.numeric.insert(key.into(), value);
    }

    /// Add a numeric attribute while returning `self` for chaining.
    #[must_use]
    pub fn with_numeric(mut self, key: impl Into<String>, value: f32) -> Self {
        self.set_numeric(key, value);
        self
    }

    /// Return a numeric attribute, if present.
    #[must_use]
    pub fn numeric(&self, key: &str) -> Option<f32> {
        self.numeric.get(key).copied()
    }

    /// Insert or update a categorical attribute.
    pub fn set_category(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.categorical.insert(key.into(), value.into());
    }

    /// Add a categorical attribute while returning `self` for chaining.
    #[must_use]
    pub fn with_category(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_category(key, value);
        self
    }

    /// Return a categorical attribute, if present.
    #[must_use]
    pub fn category(&self, key: &str) -> Option<&str> {
        self.categorical.get(key).map(String::as_str)
    }

    /// Record a derived sub-score.
    ///
    /// Engine-facing: callers never set sub-scores directly, they are
    /// computed from the candidate cohort.
    pub fn record_subscore(&mut self, name: impl Into<String>, score: f32) {
        self.subscores.insert(name.into(), score);
    }

    /// Return a derived sub-score, if the engine has recorded it.
    #[must_use]
    pub fn subscore(&self, name: &str) -> Option<f32> {
        self.subscores.get(name).copied()
    }

    /// Borrow all derived sub-scores.
    #[must_use]
    pub fn subscores(&self) -> &BTreeMap<String, f32> {
        &self.subscores
    }

    /// Record the derived overall score.
    ///
    /// Engine-facing, like [`Candidate::record_subscore`].
    pub fn set_overall(&mut self, score: f32) {
        self.overall = Some(score);
    }

    /// Return the overall score, once the candidate has been ranked.
    #[must_use]
    pub fn overall(&self) -> Option<f32> {
        self.overall
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl Candidate {
    /// Build a candidate from a loosely-typed collaborator record.
    ///
    /// The identity is read from `"name"`, falling back to `"label"`. JSON
    /// numbers become numeric attributes and JSON strings categorical
    /// attributes; `null` and structured values are ignored, since absence
    /// of a field is handled by domain defaults at scoring time.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use tripsort_core::Candidate;
    ///
    /// let record = json!({
    ///     "name": "KL1001",
    ///     "price": 240.0,
    ///     "airline": "KLM",
    ///     "stops": null,
    /// });
    /// let candidate = Candidate::from_json(&record).expect("valid record");
    /// assert_eq!(candidate.numeric("price"), Some(240.0));
    /// assert_eq!(candidate.category("airline"), Some("KLM"));
    /// assert!(candidate.numeric("stops").is_none());
    /// ```
    ///
    /// # Errors
    /// Returns [`CandidateError::MissingName`] when the record is not an
    /// object or carries no usable identity.
    pub fn from_json(record: &serde_json::Value) -> Result<Self, CandidateError> {
        let Some(object) = record.as_object() else {
            return Err(CandidateError::MissingName);
        };
        let name = object
            .get("name")
            .or_else(|| object.get("label"))
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default();
        let mut candidate = Self::new(name.trim());
        candidate.validate()?;
        for (key, value) in object {
            if key == "name" || key == "label" {
                continue;
            }
            if let Some(number) = value.as_f64() {
                candidate.set_numeric(key, number as f32);
            } else if let Some(text) = value.as_str() {
                candidate.set_category(key, text);
            }
        }
        Ok(candidate)
    }

    /// Render the candidate as an augmented collaborator record.
    ///
    /// The output carries the original attributes plus every derived
    /// sub-score under its sub-score name and, once ranked, the overall
    /// score under `"overall_score"`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let mut object = serde_json::Map::new();
        object.insert("name".to_owned(), self.name.clone().into());
        for (key, &value) in &self.numeric {
            object.insert(key.clone(), f64::from(value).into());
        }
        for (key, value) in &self.categorical {
            object.insert(key.clone(), value.clone().into());
        }
        for (key, &value) in &self.subscores {
            object.insert(key.clone(), f64::from(value).into());
        }
        if let Some(overall) = self.overall {
            object.insert("overall_score".to_owned(), f64::from(overall).into());
        }
        serde_json::Value::Object(object)
    }
}
