#[derive(Debug)]
pub struct LogView {
    pub entries: Vec<String>,
    pub scroll_offset: u16,
    max_entries: usize,
}

impl LogView {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            scroll_offset: 0,
            max_entries,
        }
    }

    pub fn add(&mut self, entry: String) {
        self.entries.push(entry);
        if self.entries.len() > self.max_entries {
            self.entries.remove(0);
        }
    }
}
