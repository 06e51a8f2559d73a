#![deny(warnings)]

use crate::scanner::Scanner;

static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
static MATH_OPS: &[char] = &['(', ')', '+', '-', '*', '/', '^'];

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    /// Skip and forget any whitespace ahead of the cursor.
    pub fn ignore_ws(&mut self) -> bool {
        let mut skipped = false;
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.next();
            skipped = true;
        }
        self.ignore();
        skipped
    }

    // scan numbers like [0-9]+\.?[0-9]*
    pub fn scan_number(&mut self) -> Option<String> {
        let backtrack = self.buffer_pos();
        // require integer part, a leading '.' doesn't start a number
        if !self.skip_all(DIGITS) {
            self.set_buffer_pos(backtrack);
            return None;
        }
        // a dangling '.' still belongs to the literal: "2." is 2
        if self.accept(&'.').is_some() {
            self.skip_all(DIGITS);
        }
        Some(self.extract_string())
    }

    pub fn scan_math_op(&mut self) -> Option<String> {
        self.accept_any(MATH_OPS)?;
        Some(self.extract_string())
    }
}

///////////////////////////////////////////////////////////////////////////////
