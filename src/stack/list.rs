use super::*;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
  elem: T,
  next: Link<T>,
}

/// A list-based `Stack<T>`.
pub struct ListStack<T> {
  head: Link<T>,
  count: usize,
  capacity: Option<usize>,
}

impl<T> Stack<T> for ListStack<T> {
  fn new() -> Self {
    Self {
      head: None,
      count: 0,
      capacity: None,
    }
  }

  fn bounded(max: usize) -> Self {
    Self {
      head: None,
      count: 0,
      capacity: Some(max),
    }
  }

  fn push(&mut self, elem: T) -> Result<(), StackError> {
    if let Some(max) = self.capacity {
      if self.count >= max {
        return Err(StackError::CapacityExceeded(max));
      }
    }

    let new_node = Box::new(Node {
      elem: elem,
      next: self.head.take(),
    });

    self.head = Some(new_node);
    self.count += 1;
    Ok(())
  }

  fn pop(&mut self) -> Result<T, StackError> {
    self.head.take().map(|node| {
      let node = *node;
      self.head = node.next;
      self.count -= 1;
      node.elem
    }).ok_or(StackError::EmptyStack)
  }

  fn top(&self) -> Result<&T, StackError> {
    self.head.as_ref().map(|node| &node.elem).ok_or(StackError::EmptyStack)
  }

  fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  fn is_full(&self) -> bool {
    match self.capacity {
      Some(max) => self.count >= max,
      None => false,
    }
  }

  fn size(&self) -> usize {
    self.count
  }

  fn capacity(&self) -> Option<usize> {
    self.capacity
  }
}
