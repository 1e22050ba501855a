use lightbox_types::{MediaItem, validate_items};

/// Caller-side gallery state: the item list and which item is on stage.
///
/// The slide widgets never hold this; they report intents by id and the owner
/// of a `Gallery` applies them.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    items: Vec<MediaItem>,
    cur_idx: Option<usize>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<MediaItem>) -> Self {
        let mut gallery = Self::new();
        gallery.set_items(items, None);
        gallery
    }

    pub fn current(&self) -> Option<&MediaItem> {
        self.cur_idx.and_then(|idx| self.items.get(idx))
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current().map(|item| item.id.as_str())
    }

    pub fn index(&self) -> Option<usize> {
        self.cur_idx
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Replace the list. The selection follows `select` when it is in the new
    /// list, otherwise lands on the first item.
    pub fn set_items(&mut self, items: Vec<MediaItem>, select: Option<&str>) {
        if let Err(e) = validate_items(&items) {
            tracing::warn!("gallery items: {e}");
        }

        self.items = items;
        self.cur_idx = select
            .and_then(|id| self.index_of(id))
            .or(if self.items.is_empty() { None } else { Some(0) });
    }

    pub fn select(&mut self, id: &str) -> Option<&MediaItem> {
        let idx = self.index_of(id)?;
        self.cur_idx = Some(idx);
        self.current()
    }

    pub fn deselect(&mut self) {
        self.cur_idx = None;
    }

    /// Move to the item after `id`, wrapping at the end. An unknown id counts
    /// from the current item.
    pub fn next_after(&mut self, id: &str) -> Option<&MediaItem> {
        if self.items.is_empty() {
            return None;
        }

        let from = self.index_of(id).or(self.cur_idx).unwrap_or_default();
        self.cur_idx = Some((from + 1) % self.items.len());
        self.current()
    }

    /// Move to the item before `id`, wrapping at the start.
    pub fn previous_before(&mut self, id: &str) -> Option<&MediaItem> {
        if self.items.is_empty() {
            return None;
        }

        let from = self.index_of(id).or(self.cur_idx).unwrap_or_default();
        self.cur_idx = Some(if from == 0 {
            self.items.len() - 1
        } else {
            from - 1
        });
        self.current()
    }

    pub fn go_next(&mut self) -> Option<&MediaItem> {
        let id = self.current_id()?.to_string();
        self.next_after(&id)
    }

    pub fn go_previous(&mut self) -> Option<&MediaItem> {
        let id = self.current_id()?.to_string();
        self.previous_before(&id)
    }

    pub fn first(&mut self) -> Option<&MediaItem> {
        if self.items.is_empty() {
            return None;
        }

        self.cur_idx = Some(0);
        self.current()
    }

    pub fn last(&mut self) -> Option<&MediaItem> {
        if self.items.is_empty() {
            return None;
        }

        self.cur_idx = Some(self.items.len() - 1);
        self.current()
    }
}
