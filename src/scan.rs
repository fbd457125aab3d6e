//! Two-pointer palindrome scan.
//!
//! The scan walks a `left` cursor forward and a `right` cursor backward over
//! the text, stepping over skippable characters on each side and comparing
//! the normalized characters under the cursors. Cursors are byte offsets on
//! `char` boundaries, so the text is never copied or decoded into a buffer.
//!
//! `left` points at the next character to compare from the front; `right` is
//! one past the next character to compare from the back. The scan continues
//! while `left < right`.

use crate::{
    classify::{is_skippable, normalize},
    config::Config,
};
use tracing::trace;

/// Decide whether `text` is a palindrome under `config`.
///
/// Absent text resolves to `config.null_okay`. Empty text is always a
/// palindrome; `blank_string_okay` only short-circuits the scan.
pub fn check(text: Option<&str>, config: &Config) -> bool {
    let Some(text) = text else {
        trace!(null_okay = config.null_okay, "absent input");
        return config.null_okay;
    };
    if config.blank_string_okay && text.is_empty() {
        trace!("blank input");
        return true;
    }
    Scanner::new(text, config).run()
}

/// Where a side of the scan stopped after skipping.
enum Side {
    /// A comparable character under the cursor.
    Found(char),
    /// The cursors met or crossed while skipping.
    Converged,
}

struct Scanner<'a> {
    text: &'a str,
    config: &'a Config,
    left: usize,
    right: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str, config: &'a Config) -> Self {
        Self {
            text,
            config,
            left: 0,
            right: text.len(),
        }
    }

    fn run(mut self) -> bool {
        while self.left < self.right {
            trace!(left = self.left, right = self.right, "step");

            let a = match self.skip_forward() {
                Side::Found(c) => c,
                Side::Converged => return true,
            };
            let b = match self.skip_backward() {
                Side::Found(c) => c,
                Side::Converged => return true,
            };

            let (na, nb) = (normalize(a, self.config), normalize(b, self.config));
            trace!(a = %a, b = %b, na = %na, nb = %nb, "compare");
            if na != nb {
                trace!(left = self.left, right = self.right, "mismatch");
                return false;
            }

            self.left += a.len_utf8();
            self.right -= b.len_utf8();
        }
        true
    }

    #[inline(always)]
    fn front(&self) -> Option<char> {
        self.text[self.left..self.right].chars().next()
    }

    #[inline(always)]
    fn back(&self) -> Option<char> {
        self.text[self.left..self.right].chars().next_back()
    }

    /// Advance `left` past skippable characters until a full pass skips
    /// nothing.
    fn skip_forward(&mut self) -> Side {
        loop {
            let Some(c) = self.front() else {
                return Side::Converged;
            };
            if !self.skippable(c) {
                return Side::Found(c);
            }
            self.left += c.len_utf8();
            if self.left >= self.right {
                trace!(left = self.left, right = self.right, "converged while skipping");
                return Side::Converged;
            }
        }
    }

    /// Retreat `right` past skippable characters until a full pass skips
    /// nothing.
    fn skip_backward(&mut self) -> Side {
        loop {
            let Some(c) = self.back() else {
                return Side::Converged;
            };
            if !self.skippable(c) {
                return Side::Found(c);
            }
            self.right -= c.len_utf8();
            if self.left >= self.right {
                trace!(left = self.left, right = self.right, "converged while skipping");
                return Side::Converged;
            }
        }
    }

    #[inline(always)]
    fn skippable(&self, c: char) -> bool {
        let skip = self.config.skips_anything() && is_skippable(c, self.config);
        if skip {
            trace!(c = ?c, left = self.left, right = self.right, "skip");
        }
        skip
    }
}
