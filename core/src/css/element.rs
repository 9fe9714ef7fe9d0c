//! Element matching facts

use smallvec::SmallVec;
use std::fmt;

/// The three kinds of element a graph is made of.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ElementKind {
    Graph,
    Vertex,
    Edge,
}

impl ElementKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Graph => "graph",
            Self::Vertex => "vertex",
            Self::Edge => "edge",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a selector may look at when deciding whether it matches an
/// element.
///
/// Class names are kept sorted and deduplicated, so two facts built from the
/// same classes in a different order compare (and hash) equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ElementFacts {
    kind: ElementKind,
    classes: SmallVec<[String; 2]>,
    id: Option<String>,
}

impl ElementFacts {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            classes: SmallVec::new(),
            id: None,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if let Err(pos) = self.classes.binary_search(&class) {
            self.classes.insert(pos, class);
        }
        self
    }

    pub fn with_classes<I, S>(self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        classes
            .into_iter()
            .fold(self, |facts, class| facts.with_class(class))
    }

    /// Set the element id, replacing any previous one.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes
            .binary_search_by(|candidate| candidate.as_str().cmp(class))
            .is_ok()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
