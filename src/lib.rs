pub mod stack;


///////////////////////////////////////////////////////////////////////////////
//// Model Tests
///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod model_tests {
  use rand::Rng;
  use super::stack::*;

  // Drives a stack through a random operation sequence and checks every
  // outcome against a Vec<i32> reference model obeying the same capacity
  // rule.
  fn test_stack_against_model<S: Stack<i32>>(mut stack: S, n_ops: usize) {
    let mut rng = rand::thread_rng();
    let mut model: Vec<i32> = Vec::new();

    for _ in 0..n_ops {
      match rng.gen_range(0..3) {
        0 => {
          let elem: i32 = rng.gen();
          let expected = match stack.capacity() {
            Some(max) if model.len() >= max => {
              Err(StackError::CapacityExceeded(max))
            },
            _ => Ok(()),
          };

          if expected.is_ok() {
            model.push(elem);
          }
          assert_eq!(stack.push(elem), expected);
        },
        1 => {
          assert_eq!(stack.pop(), model.pop().ok_or(StackError::EmptyStack));
        },
        _ => {
          assert_eq!(stack.top(), model.last().ok_or(StackError::EmptyStack));
        },
      }

      assert_eq!(stack.size(), model.len());
      assert_eq!(stack.is_empty(), model.is_empty());
      match stack.capacity() {
        Some(max) => assert_eq!(stack.is_full(), model.len() >= max),
        None => assert!(!stack.is_full()),
      }
    }
  }

  #[test]
  fn array_stack_model() {
    test_stack_against_model(ArrayStack::new(), 10_000);
  }

  #[test]
  fn array_stack_model_bounded() {
    test_stack_against_model(ArrayStack::bounded(8), 10_000);
  }

  #[test]
  fn list_stack_model() {
    test_stack_against_model(ListStack::new(), 10_000);
  }

  #[test]
  fn list_stack_model_bounded() {
    test_stack_against_model(ListStack::bounded(8), 10_000);
  }
}
