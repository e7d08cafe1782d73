/// Navigation dots that track which page section is in view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionNav {
    sections: Vec<String>,
    active: Option<usize>,
}

impl SectionNav {
    /// What: Build the nav over section ids in page order.
    ///
    /// Inputs:
    /// - `sections`: Section ids, one dot each
    ///
    /// Output:
    /// - `None` when there are no sections.
    #[must_use]
    pub fn new<I, S>(sections: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections: Vec<String> = sections.into_iter().map(Into::into).collect();
        if sections.is_empty() {
            return None;
        }
        Some(Self {
            sections,
            active: None,
        })
    }

    /// A section started intersecting the viewport; its dot becomes the only active one.
    pub fn observe(&mut self, id: &str) {
        if let Some(pos) = self.sections.iter().position(|s| s == id) {
            self.active = Some(pos);
        }
    }

    /// Id of the active section.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active
            .and_then(|i| self.sections.get(i))
            .map(String::as_str)
    }

    /// Section ids with their active flag, in order.
    pub fn dots(&self) -> impl Iterator<Item = (&str, bool)> {
        self.sections
            .iter()
            .enumerate()
            .map(move |(i, s)| (s.as_str(), self.active == Some(i)))
    }

    /// A dot was activated: the section to scroll to, if it exists.
    #[must_use]
    pub fn target(&self, id: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.as_str() == id)
            .map(String::as_str)
    }
}
