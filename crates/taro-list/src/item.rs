//! Item traits for list rows.

/// Trait for types that can be stored in a list.
///
/// Every item supplies the text the list filters on. Items that also want to
/// be drawn by [`DefaultDelegate`](crate::DefaultDelegate) expose a title and
/// description through [`as_titled`](Item::as_titled).
///
/// # Example
///
/// ```ignore
/// struct Board {
///     name: String,
///     blurb: String,
/// }
///
/// impl Item for Board {
///     fn filter_value(&self) -> &str {
///         &self.name
///     }
///     fn as_titled(&self) -> Option<&dyn TitledItem> {
///         Some(self)
///     }
/// }
///
/// impl TitledItem for Board {
///     fn title(&self) -> &str {
///         &self.name
///     }
///     fn description(&self) -> &str {
///         &self.blurb
///     }
/// }
/// ```
pub trait Item: Send + Sync + 'static {
    /// Text used for filtering.
    fn filter_value(&self) -> &str;

    /// The title/description view of this item, if it has one.
    ///
    /// Items returning `None` are skipped by the default delegate.
    fn as_titled(&self) -> Option<&dyn TitledItem> {
        None
    }
}

/// An item with a title line and a description line.
pub trait TitledItem {
    fn title(&self) -> &str;
    fn description(&self) -> &str;
}

impl Item for String {
    fn filter_value(&self) -> &str {
        self
    }
}

impl Item for &'static str {
    fn filter_value(&self) -> &str {
        self
    }
}

impl Item for Box<dyn Item> {
    fn filter_value(&self) -> &str {
        (**self).filter_value()
    }

    fn as_titled(&self) -> Option<&dyn TitledItem> {
        (**self).as_titled()
    }
}

/// A plain title + description item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DefaultItem {
    pub title: String,
    pub description: String,
}

impl DefaultItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl Item for DefaultItem {
    fn filter_value(&self) -> &str {
        &self.title
    }

    fn as_titled(&self) -> Option<&dyn TitledItem> {
        Some(self)
    }
}

impl TitledItem for DefaultItem {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_item_filters_on_title() {
        let item = DefaultItem::new("Raspberry Pi's", "It's a tiny computer!");
        assert_eq!(item.filter_value(), "Raspberry Pi's");
        let titled = item.as_titled().unwrap();
        assert_eq!(titled.title(), "Raspberry Pi's");
        assert_eq!(titled.description(), "It's a tiny computer!");
    }

    #[test]
    fn plain_strings_have_no_title() {
        assert!("Raspberry Pi's".as_titled().is_none());
        assert!(String::from("Pi").as_titled().is_none());
    }

    #[test]
    fn boxed_items_forward() {
        let items: Vec<Box<dyn Item>> = vec![
            Box::new(DefaultItem::new("Pi", "tiny")),
            Box::new("plain"),
        ];
        assert_eq!(items[0].filter_value(), "Pi");
        assert!(items[0].as_titled().is_some());
        assert!(items[1].as_titled().is_none());
    }
}
