/// Where the current recipe id lives between flows.
///
/// In a browser this is the location fragment. Rewriting it must not
/// trigger a recipe load by itself.
pub trait Navigation {
    /// Id of the recipe the user is looking at, if any.
    fn current_id(&self) -> Option<String>;

    /// Point at `id` without reloading anything.
    fn replace_id(&mut self, id: &str);
}

/// In-memory `#id` fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentNavigation {
    fragment: String,
}

impl FragmentNavigation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing fragment. The leading `#` is optional.
    pub fn from_fragment(fragment: &str) -> Self {
        let mut navigation = Self::new();
        navigation.replace_id(fragment.trim_start_matches('#'));
        navigation
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

impl Navigation for FragmentNavigation {
    fn current_id(&self) -> Option<String> {
        self.fragment
            .strip_prefix('#')
            .filter(|id| !id.is_empty())
            .map(str::to_string)
    }

    fn replace_id(&mut self, id: &str) {
        self.fragment = format!("#{}", id);
    }
}
