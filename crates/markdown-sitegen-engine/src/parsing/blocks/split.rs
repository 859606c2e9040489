use super::kinds::CodeFence;

/// Splits a document into trimmed blocks separated by blank lines.
///
/// Blank lines between an opening fence and its closing fence do not split,
/// so a fenced code block stays whole. A fence with no closing line later in
/// the document protects nothing and the text after it splits normally.
pub fn split_blocks(document: &str) -> Vec<&str> {
    let lines: Vec<&str> = document.split_inclusive('\n').collect();
    let last_close = lines.iter().rposition(|line| CodeFence::closes(line));

    let mut splitter = BlockSplitter::new(document);
    for (i, line) in lines.iter().enumerate() {
        let close_ahead = last_close.is_some_and(|close| close > i);
        splitter.push(line, close_ahead);
    }
    splitter.finish()
}

#[derive(Debug, Clone, Copy)]
enum State {
    /// Between blocks.
    None,
    /// Collecting a block that started at `start`.
    Block { start: usize },
    /// Inside a fence known to close; blank lines do not end the block.
    Fence { start: usize },
}

struct BlockSplitter<'a> {
    document: &'a str,
    offset: usize,
    state: State,
    out: Vec<&'a str>,
}

impl<'a> BlockSplitter<'a> {
    fn new(document: &'a str) -> Self {
        Self {
            document,
            offset: 0,
            state: State::None,
            out: vec![],
        }
    }

    /// Feeds one line. `close_ahead` says whether a later line can close a
    /// fence opened here.
    fn push(&mut self, line: &str, close_ahead: bool) {
        let line_start = self.offset;
        self.offset += line.len();

        match self.state {
            State::Fence { start } => {
                if CodeFence::closes(line) {
                    self.state = State::Block { start };
                }
            }
            State::None | State::Block { .. } if line.trim().is_empty() => {
                self.flush(line_start);
            }
            State::None => {
                self.state = Self::open(line, line_start, close_ahead);
            }
            State::Block { start } => {
                if close_ahead && CodeFence::opens(line) {
                    self.state = State::Fence { start };
                }
            }
        }
    }

    fn open(line: &str, start: usize, close_ahead: bool) -> State {
        if close_ahead && CodeFence::opens(line) {
            State::Fence { start }
        } else {
            State::Block { start }
        }
    }

    fn flush(&mut self, end: usize) {
        let prev = std::mem::replace(&mut self.state, State::None);
        if let State::Block { start } | State::Fence { start } = prev {
            let block = self.document[start..end].trim();
            if !block.is_empty() {
                self.out.push(block);
            }
        }
    }

    fn finish(mut self) -> Vec<&'a str> {
        // EOF flush
        self.flush(self.offset);
        self.out
    }
}
