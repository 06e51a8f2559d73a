#![deny(warnings)]

/// A cursor over any iterator that remembers what it has read so callers
/// can look ahead and backtrack before committing to a lexeme.
pub struct Scanner<I: Iterator>
where
    I::Item: Clone,
{
    src: I,
    buf: Vec<I::Item>,
    pos: isize,
}

impl<I> Iterator for Scanner<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.pos += 1;
        self.prep_buffer();
        let blen = self.buf.len() as isize;
        if self.pos >= blen {
            self.pos = blen;
        }
        self.curr()
    }
}

impl<I> Scanner<I>
where
    I: Iterator,
    I::Item: Clone,
{
    pub fn new(source: I) -> Scanner<I> {
        Scanner { src: source, buf: Vec::new(), pos: -1 }
    }

    pub fn buffer_pos(&self) -> isize {
        self.pos
    }

    pub fn set_buffer_pos(&mut self, pos: isize) -> bool {
        if pos < -1 || pos > (self.buf.len() as isize) {
            return false;
        }
        self.pos = pos;
        true
    }

    fn curr(&self) -> Option<I::Item> {
        let pos = self.pos as usize;
        if self.pos < 0 || pos >= self.buf.len() {
            return None;
        }
        Some(self.buf[pos].clone())
    }

    // try to get enough elements in the buffer for self.pos
    fn prep_buffer(&mut self) {
        while self.pos >= (self.buf.len() as isize) {
            match self.src.next() {
                Some(item) => self.buf.push(item),
                None => break,
            }
        }
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    /// Everything consumed since the last `ignore`/`extract`.
    pub fn view(&self) -> &[I::Item] {
        let n = ((self.pos + 1) as usize).min(self.buf.len());
        &self.buf[..n]
    }

    /// Drop the consumed items, the cursor restarts before the next one.
    pub fn ignore(&mut self) {
        if self.pos >= 0 {
            let n = (self.pos + 1) as usize;
            self.buf.drain(..n.min(self.buf.len()));
        }
        self.pos = -1;
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let items = self.view().to_vec();
        self.ignore();
        items
    }
}

impl<I> Scanner<I>
where
    I: Iterator,
    I::Item: Clone + PartialEq,
{
    pub fn accept(&mut self, what: &I::Item) -> Option<I::Item> {
        let backtrack = self.buffer_pos();
        if let Some(next) = self.next() {
            if &next == what {
                return Some(next);
            }
        }
        self.set_buffer_pos(backtrack);
        None
    }

    // Advance the scanner only if the next item is in the 'any' set
    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        let backtrack = self.buffer_pos();
        if let Some(next) = self.next() {
            if any.contains(&next) {
                return Some(next);
            }
        }
        self.set_buffer_pos(backtrack);
        None
    }

    // Skip over the 'over' set, result is if the scanner was advanced
    pub fn skip_all(&mut self, over: &[I::Item]) -> bool {
        let mut advanced = false;
        while self.accept_any(over).is_some() {
            advanced = true;
        }
        advanced
    }
}

///////////////////////////////////////////////////////////////////////////////
