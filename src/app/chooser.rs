/// The "Choose a Jam!" list: track names and a cursor.
#[derive(Clone, Debug)]
pub struct Chooser {
    pub names: Vec<String>,
    pub selected: usize,
}

impl Chooser {
    pub fn new(names: Vec<String>) -> Self {
        Self { names, selected: 0 }
    }

    /// Move the cursor down, wrapping to the top.
    pub fn next(&mut self) {
        if !self.names.is_empty() {
            self.selected = (self.selected + 1) % self.names.len();
        }
    }

    /// Move the cursor up, wrapping to the bottom.
    pub fn prev(&mut self) {
        if !self.names.is_empty() {
            self.selected = (self.selected + self.names.len() - 1) % self.names.len();
        }
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.names.get(self.selected).map(String::as_str)
    }
}
