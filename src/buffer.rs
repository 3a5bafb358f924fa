/// Owned text document mutated only through the [`Invoker`](crate::invoker::Invoker).
///
/// Lengths are counted in `char`s so that `erase` and `insert` agree on what
/// "one character" means and a multi-byte character is never split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    content: String,
}

impl Buffer {
    pub fn new() -> Self {
        Self {
            content: String::new(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub(crate) fn insert(&mut self, text: &str) {
        self.content.push_str(text);
    }

    /// Removes the last `n` characters, clamped to the current length.
    /// Returns the removed text.
    pub(crate) fn erase(&mut self, n: usize) -> String {
        let cut = self.split_point(n);
        self.content.split_off(cut)
    }

    /// The text `erase(n)` would remove, without removing it.
    pub fn tail(&self, n: usize) -> &str {
        &self.content[self.split_point(n)..]
    }

    pub(crate) fn overwrite(&mut self, text: &str) {
        self.content.clear();
        self.content.push_str(text);
    }

    /// Byte offset where the last `n` characters start.
    fn split_point(&self, n: usize) -> usize {
        if n == 0 {
            return self.content.len();
        }
        self.content
            .char_indices()
            .rev()
            .nth(n - 1)
            .map_or(0, |(idx, _)| idx)
    }
}
