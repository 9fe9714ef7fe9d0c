//! Graph styling defaults
//!
//! This module contains the baseline rule set a rendering session starts from
//! before the application layers its own rules on top.

mod default_stylesheet;

pub use default_stylesheet::{default_rules, Baseline, DefaultRuleProvider, StandardRules};
