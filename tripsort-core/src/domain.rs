//! Search domains a candidate can belong to.
//!
//! The enum offers compile-time safety for configuration lookups.
//!
//! # Examples
//! ```
//! use tripsort_core::Domain;
//!
//! assert_eq!(Domain::Flight.as_str(), "flight");
//! assert_eq!(Domain::Coworking.to_string(), "coworking");
//! ```

/// The kind of search result being ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Domain {
    /// Flight search results.
    Flight,
    /// Hotel and accommodation results.
    Hotel,
    /// Restaurant results.
    Restaurant,
    /// Tours, attractions, and other activities.
    Activity,
    /// Retail product results.
    Product,
    /// Coworking space results.
    Coworking,
}

impl Domain {
    /// Return the domain as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use tripsort_core::Domain;
    ///
    /// assert_eq!(Domain::Restaurant.as_str(), "restaurant");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flight => "flight",
            Self::Hotel => "hotel",
            Self::Restaurant => "restaurant",
            Self::Activity => "activity",
            Self::Product => "product",
            Self::Coworking => "coworking",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flight" => Ok(Self::Flight),
            "hotel" => Ok(Self::Hotel),
            "restaurant" => Ok(Self::Restaurant),
            "activity" => Ok(Self::Activity),
            "product" => Ok(Self::Product),
            "coworking" => Ok(Self::Coworking),
            _ => Err(format!("unknown domain '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Domain::Hotel.to_string(), Domain::Hotel.as_str());
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(Domain::from_str("Flight"), Ok(Domain::Flight));
        assert_eq!(Domain::from_str("COWORKING"), Ok(Domain::Coworking));
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = Domain::from_str("cruise").unwrap_err();
        assert!(err.contains("unknown domain"));
    }
}
