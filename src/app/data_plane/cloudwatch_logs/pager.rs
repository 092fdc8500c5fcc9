//! Pull-based pagination over the listing operations.
//!
//! [`Pages`] drives a page-fetch closure with the continuation token of the
//! previous page and yields each page's records in provider order. It stops
//! after the terminal page or after the first error.

#![warn(clippy::all, rust_2018_idioms)]

use crate::error::Result;

use super::types::Page;

enum State {
    Start,
    Next(String),
    Done,
}

/// Iterator over the pages of one listing call
pub struct Pages<T, F>
where
    F: FnMut(Option<String>) -> Result<Page<T>>,
{
    fetch: F,
    state: State,
}

impl<T, F> Pages<T, F>
where
    F: FnMut(Option<String>) -> Result<Page<T>>,
{
    pub fn new(fetch: F) -> Self {
        Self {
            fetch,
            state: State::Start,
        }
    }
}

impl<T, F> Iterator for Pages<T, F>
where
    F: FnMut(Option<String>) -> Result<Page<T>>,
{
    type Item = Result<Vec<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = match std::mem::replace(&mut self.state, State::Done) {
            State::Start => None,
            State::Next(token) => Some(token),
            State::Done => return None,
        };

        match (self.fetch)(token) {
            Ok(page) => {
                if !page.is_last() {
                    // is_last() rules out a missing token
                    self.state = State::Next(page.next_token.unwrap_or_default());
                }
                Some(Ok(page.items))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

impl<T, F> std::iter::FusedIterator for Pages<T, F> where
    F: FnMut(Option<String>) -> Result<Page<T>>
{
}
