//! Table rules and session configuration.

/// Table rules that change basic strategy.
///
/// Use the builder pattern to customize rules:
///
/// ```
/// use bjadvisor::Rules;
///
/// let rules = Rules::default()
///     .with_stand_on_soft_17(false)
///     .with_surrender(false);
/// assert!(rules.dealer_hits_soft_17());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rules {
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Whether double down is allowed after split.
    pub double_after_split: bool,
    /// Whether late surrender is allowed.
    pub surrender: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            stand_on_soft_17: true,
            double_after_split: true,
            surrender: true,
        }
    }
}

impl Rules {
    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjadvisor::Rules;
    ///
    /// let rules = Rules::default().with_stand_on_soft_17(false);
    /// assert_eq!(rules.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets whether double down is allowed after split.
    ///
    /// # Example
    ///
    /// ```
    /// use bjadvisor::Rules;
    ///
    /// let rules = Rules::default().with_double_after_split(false);
    /// assert_eq!(rules.double_after_split, false);
    /// ```
    #[must_use]
    pub const fn with_double_after_split(mut self, allowed: bool) -> Self {
        self.double_after_split = allowed;
        self
    }

    /// Sets whether surrender is allowed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjadvisor::Rules;
    ///
    /// let rules = Rules::default().with_surrender(false);
    /// assert_eq!(rules.surrender, false);
    /// ```
    #[must_use]
    pub const fn with_surrender(mut self, allowed: bool) -> Self {
        self.surrender = allowed;
        self
    }

    /// Returns whether the dealer hits soft 17 (H17).
    #[must_use]
    pub const fn dealer_hits_soft_17(&self) -> bool {
        !self.stand_on_soft_17
    }
}

/// Configuration for an [`Advisor`](crate::Advisor) session.
///
/// ```
/// use bjadvisor::{AdvisorOptions, Rules};
///
/// let options = AdvisorOptions::default()
///     .with_decks(8)
///     .with_rules(Rules::default().with_double_after_split(false));
/// assert_eq!(options.decks, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdvisorOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Table rules.
    pub rules: Rules,
}

impl Default for AdvisorOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            rules: Rules::default(),
        }
    }
}

impl AdvisorOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjadvisor::AdvisorOptions;
    ///
    /// let options = AdvisorOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the table rules.
    #[must_use]
    pub const fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }
}
