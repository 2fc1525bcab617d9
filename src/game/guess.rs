pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Hidden,
    Revealed(char),
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Hidden => PLACEHOLDER,
            Cell::Revealed(c) => c,
        }
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, Cell::Revealed(_))
    }
}

/// Per-word reveal state for one title. Word `i` always holds exactly as many
/// cells as the `i`-th space-separated word of the title has characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessState {
    title: Vec<Vec<char>>,
    cells: Vec<Vec<Cell>>,
}

impl GuessState {
    pub fn new(title: &str) -> Self {
        let title: Vec<Vec<char>> = title.split(' ').map(|w| w.chars().collect()).collect();
        let cells = title.iter().map(|w| vec![Cell::Hidden; w.len()]).collect();

        Self { title, cells }
    }

    /// Reveals every position whose true character matches `guess` ignoring
    /// case. Returns how many cells went from hidden to revealed.
    pub fn guess(&mut self, guess: char) -> usize {
        let mut revealed = 0;

        for (word, cells) in self.title.iter().zip(self.cells.iter_mut()) {
            for (&actual, cell) in word.iter().zip(cells.iter_mut()) {
                if eq_ignore_case(actual, guess) {
                    if !cell.is_revealed() {
                        revealed += 1;
                    }
                    *cell = Cell::Revealed(actual);
                }
            }
        }

        revealed
    }

    pub fn words(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub fn word_count(&self) -> usize {
        self.cells.len()
    }

    pub fn masked(&self) -> String {
        self.cells
            .iter()
            .map(|w| w.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
