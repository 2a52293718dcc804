//! Direct-children query over the flat token store.

use crate::lexer::{Token, TokenStore};

/// Iterator over the direct children of one token, in left-to-right
/// document order.
///
/// The store holds no parent or child links, so every `next()` rescans it
/// in full: a candidate is any token exactly one level deeper whose span
/// falls inside the reference token's, and the scan picks the smallest
/// start at or past the token the cursor currently sits on. The repeated
/// linear scan is intentional; the ordering, not the cost, is the contract.
///
/// Two candidates sharing a start cannot come out of the scanner (sibling
/// regions occupy disjoint line ranges), but on a hand-assembled store the
/// one earlier in store order wins the first scan. That tie-break is
/// reproducible, not contractual.
pub struct ChildTokens<'a> {
  store: &'a TokenStore,
  parent: usize,
  cursor: usize,
}

impl<'a> ChildTokens<'a> {
  pub fn new(store: &'a TokenStore, parent: &Token) -> Self {
    ChildTokens {
      store,
      parent: parent.index,
      cursor: parent.index,
    }
  }
}

impl<'a> Iterator for ChildTokens<'a> {
  type Item = &'a Token;

  fn next(&mut self) -> Option<&'a Token> {
    let parent = self.store.get(self.parent)?;
    let from = self.store.get(self.cursor)?.start;
    let mut best: Option<&Token> = None;
    for t in self.store.iter() {
      if t.index == self.parent || t.index == self.cursor {
        continue;
      }
      if t.depth != parent.depth + 1 {
        continue;
      }
      if t.start < parent.start || t.end >= parent.end {
        continue;
      }
      if t.start < from {
        continue;
      }
      if best.map_or(true, |b| t.start < b.start) {
        best = Some(t);
      }
    }
    let found = best?;
    self.cursor = found.index;
    Some(found)
  }
}
