use super::*;

/// An array-based `Stack<T>`. Uses Rust's `Vec<T>`.
pub struct ArrayStack<T> {
  elems: Vec<T>,
  capacity: Option<usize>,
}

impl<T> Stack<T> for ArrayStack<T> {
  fn new() -> Self {
    Self {
      elems: Vec::new(),
      capacity: None,
    }
  }

  fn bounded(max: usize) -> Self {
    Self {
      elems: Vec::new(),
      capacity: Some(max),
    }
  }

  fn push(&mut self, elem: T) -> Result<(), StackError> {
    match self.capacity {
      Some(max) if self.elems.len() >= max => {
        Err(StackError::CapacityExceeded(max))
      },
      _ => {
        self.elems.push(elem);
        Ok(())
      },
    }
  }

  fn pop(&mut self) -> Result<T, StackError> {
    self.elems.pop().ok_or(StackError::EmptyStack)
  }

  fn top(&self) -> Result<&T, StackError> {
    self.elems.last().ok_or(StackError::EmptyStack)
  }

  fn is_empty(&self) -> bool {
    self.elems.len() == 0
  }

  fn is_full(&self) -> bool {
    match self.capacity {
      Some(max) => self.elems.len() >= max,
      None => false,
    }
  }

  fn size(&self) -> usize {
    self.elems.len()
  }

  fn capacity(&self) -> Option<usize> {
    self.capacity
  }
}
