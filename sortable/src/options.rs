use alloc::string::String;

use crate::{NodeId, Selector};

pub const DEFAULT_PLACEHOLDER_CLASS: &str = "sortable-placeholder";
pub const DEFAULT_DRAGGING_CLASS: &str = "sortable-dragging";
pub const DEFAULT_HOVER_CLASS: &str = "sortable-over";

/// Where a container's placeholder element comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaceholderSource {
    /// An element the host already created in the document.
    Element(NodeId),
    /// An HTML fragment; its first element becomes the placeholder.
    Markup(String),
}

/// Hover styling for items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HoverClass {
    #[default]
    Disabled,
    /// Uses [`DEFAULT_HOVER_CLASS`].
    Enabled,
    Named(String),
}

impl HoverClass {
    pub fn class(&self) -> Option<&str> {
        match self {
            Self::Disabled => None,
            Self::Enabled => Some(DEFAULT_HOVER_CLASS),
            Self::Named(name) => Some(name.as_str()),
        }
    }
}

/// Configuration for a sortable container.
///
/// Options are stored on the first initialization. Initializing the same container again
/// rebinds its handlers but keeps the stored options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortableOptions {
    /// Connection group tag. Containers sharing a tag accept each other's items.
    /// An empty tag is treated as no tag.
    pub connect_with: Option<String>,
    /// `None` creates an `li` for `ul`/`ol` containers and a `div` otherwise.
    pub placeholder: Option<PlaceholderSource>,
    /// Deprecated ghost override, attached at offset (0, 0).
    pub drag_image: Option<NodeId>,
    pub placeholder_class: String,
    pub dragging_class: String,
    pub hover_class: HoverClass,
    /// Which children are items. `None` means every child.
    pub items: Option<Selector>,
    /// Which descendants of an item start a drag. `None` means the item itself.
    pub handle: Option<Selector>,
    /// Resize the placeholder to the dragged item's height on every move.
    pub force_placeholder_size: bool,
    /// Suppress placeholder moves near the edges of items taller than the dragged one.
    pub dead_zone: bool,
}

impl Default for SortableOptions {
    fn default() -> Self {
        Self {
            connect_with: None,
            placeholder: None,
            drag_image: None,
            placeholder_class: DEFAULT_PLACEHOLDER_CLASS.into(),
            dragging_class: DEFAULT_DRAGGING_CLASS.into(),
            hover_class: HoverClass::Disabled,
            items: None,
            handle: None,
            force_placeholder_size: false,
            dead_zone: true,
        }
    }
}

impl SortableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The effective connection tag (`None` for a missing or empty tag).
    pub fn connection_tag(&self) -> Option<&str> {
        self.connect_with.as_deref().filter(|t| !t.is_empty())
    }

    pub fn with_connect_with(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.connect_with = (!tag.is_empty()).then_some(tag);
        self
    }

    pub fn with_placeholder(mut self, placeholder: Option<PlaceholderSource>) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn with_placeholder_markup(mut self, markup: impl Into<String>) -> Self {
        self.placeholder = Some(PlaceholderSource::Markup(markup.into()));
        self
    }

    pub fn with_placeholder_element(mut self, element: NodeId) -> Self {
        self.placeholder = Some(PlaceholderSource::Element(element));
        self
    }

    pub fn with_drag_image(mut self, drag_image: Option<NodeId>) -> Self {
        self.drag_image = drag_image;
        self
    }

    pub fn with_placeholder_class(mut self, class: impl Into<String>) -> Self {
        self.placeholder_class = class.into();
        self
    }

    pub fn with_dragging_class(mut self, class: impl Into<String>) -> Self {
        self.dragging_class = class.into();
        self
    }

    pub fn with_hover_class(mut self, hover_class: HoverClass) -> Self {
        self.hover_class = hover_class;
        self
    }

    pub fn with_items(mut self, items: Option<Selector>) -> Self {
        self.items = items;
        self
    }

    pub fn with_handle(mut self, handle: Option<Selector>) -> Self {
        self.handle = handle;
        self
    }

    pub fn with_force_placeholder_size(mut self, force: bool) -> Self {
        self.force_placeholder_size = force;
        self
    }

    pub fn with_dead_zone(mut self, dead_zone: bool) -> Self {
        self.dead_zone = dead_zone;
        self
    }
}
